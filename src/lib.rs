//! A growable array that manages element lifetimes directly on top of an
//! uninitialized allocation.
//!
//! [`DynArray`] offers amortized constant-time [`push`], indexed access
//! through [`Deref`] to `[T]`, and positional [`insert`] and [`erase`].
//! Growth doubles the capacity and relocates elements by moving them, so
//! it never clones. Cloning into an existing array reuses its storage
//! when the source fits.
//!
//! Operations that allocate come in pairs: a `try_` form that reports
//! [`Error::OutOfMemory`] or [`Error::CapacityOverflow`], and an infallible
//! form that follows the standard collections in panicking on overflow and
//! calling [`handle_alloc_error`] on allocator failure.
//!
//! ```
//! use dyn_array::{DynArray, dyn_array};
//!
//! let mut array = dyn_array![1, 2];
//! array.insert(0, 0).unwrap();
//! array.push(3);
//! assert_eq!(array, [0, 1, 2, 3]);
//!
//! array.erase(1).unwrap();
//! assert_eq!(array, [0, 2, 3]);
//! assert_eq!(array.capacity(), 4);
//! ```
//!
//! # Features
//!
//! - `serde`: implements `Serialize` and `Deserialize` as a sequence.
//! - `logging`: emits `log` records on reallocation.
//!
//! [`push`]: DynArray::push
//! [`insert`]: DynArray::insert
//! [`erase`]: DynArray::erase
//! [`Deref`]: std::ops::Deref
//! [`handle_alloc_error`]: std::alloc::handle_alloc_error

mod logging;

mod array;
pub use array::DynArray;

mod error;
pub use error::{Error, Result};

mod into_iter;
pub use into_iter::IntoIter;

mod borrow_tests;
mod eq_impl;
mod guard;
mod impls;
mod macros;
mod positional;
mod raw_storage;

#[cfg(feature = "serde")]
mod serde;
