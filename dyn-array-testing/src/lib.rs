#![cfg(test)]

mod allocation_failure;
mod counted;
mod failing_alloc;
mod lifecycle;
mod logging;
mod panic_safety;
mod positional;
mod properties;
mod serialization;
