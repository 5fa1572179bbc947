use std::{mem, ptr};

/// Tracks elements written into a fresh run of slots so that a panic during
/// construction drops exactly the elements that were completed.
///
/// Elements are dropped in reverse order of construction. Call
/// [`PartialInit::finish`] once every element is written to disarm the
/// guard.
pub(crate) struct PartialInit<T> {
    start: *mut T,
    initialized: usize,
}

impl<T> PartialInit<T> {
    /// # Safety
    ///
    /// The caller must ensure that `start` points to uninitialized slots with
    /// room for every element that will be written through this guard.
    pub(crate) unsafe fn new(start: *mut T) -> Self {
        Self {
            start,
            initialized: 0,
        }
    }

    /// Writes the next element.
    ///
    /// # Safety
    ///
    /// The slot after the last written one must be in bounds.
    pub(crate) unsafe fn write(&mut self, element: T) {
        // SAFETY: upheld by the caller.
        unsafe { self.start.add(self.initialized).write(element) };
        self.initialized += 1;
    }

    /// Disarms the guard and returns how many elements were written.
    pub(crate) fn finish(self) -> usize {
        let initialized = self.initialized;
        mem::forget(self);
        initialized
    }
}

impl<T> Drop for PartialInit<T> {
    fn drop(&mut self) {
        while self.initialized > 0 {
            self.initialized -= 1;
            // SAFETY: every slot below `initialized` was written.
            unsafe { ptr::drop_in_place(self.start.add(self.initialized)) };
        }
    }
}
