//! An element type that records its own lifecycle events.
//!
//! The counters are thread-local so that tests running in parallel do not
//! observe each other. Tests may still share a thread when run with
//! `--test-threads=1`, so every test starts by calling [`reset`].

use std::cell::Cell;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    /// Calls to `Default::default` and `Clone::clone`.
    pub created: usize,
    /// Calls to `Clone::clone_from`.
    pub assigned: usize,
    /// Calls to `Drop::drop`.
    pub dropped: usize,
}

thread_local! {
    static COUNTS: Cell<Counts> = const {
        Cell::new(Counts {
            created: 0,
            assigned: 0,
            dropped: 0,
        })
    };
}

pub fn reset() {
    COUNTS.set(Counts::default());
}

pub fn counts() -> Counts {
    COUNTS.get()
}

fn record(f: impl FnOnce(&mut Counts)) {
    let mut counts = COUNTS.get();
    f(&mut counts);
    COUNTS.set(counts);
}

#[derive(Debug, PartialEq, Eq)]
pub struct Counted(pub u32);

impl Default for Counted {
    fn default() -> Self {
        record(|c| c.created += 1);
        Self(0)
    }
}

impl Clone for Counted {
    fn clone(&self) -> Self {
        record(|c| c.created += 1);
        Self(self.0)
    }

    fn clone_from(&mut self, source: &Self) {
        record(|c| c.assigned += 1);
        self.0 = source.0;
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        record(|c| c.dropped += 1);
    }
}

/// Shorthand for building an expected [`Counts`].
pub const fn counts_of(created: usize, assigned: usize, dropped: usize) -> Counts {
    Counts {
        created,
        assigned,
        dropped,
    }
}
