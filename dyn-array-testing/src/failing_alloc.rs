//! A global allocator that refuses requests at or above a size threshold
//! set by the current thread. Other threads allocate normally.

use std::{
    alloc::{GlobalAlloc, Layout, System},
    cell::Cell,
    ptr,
};

thread_local! {
    static REFUSE_FROM: Cell<usize> = const { Cell::new(usize::MAX) };
}

struct FailingAlloc;

unsafe impl GlobalAlloc for FailingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let threshold = REFUSE_FROM.try_with(Cell::get).unwrap_or(usize::MAX);
        if layout.size() >= threshold {
            ptr::null_mut()
        } else {
            // SAFETY: forwarded unchanged.
            unsafe { System.alloc(layout) }
        }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: every block came from `System`.
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: FailingAlloc = FailingAlloc;

/// Refuses allocations of `size` bytes or more on this thread until the
/// returned guard is dropped.
pub fn refuse_from(size: usize) -> Refusal {
    REFUSE_FROM.set(size);
    Refusal(())
}

pub struct Refusal(());

impl Drop for Refusal {
    fn drop(&mut self) {
        REFUSE_FROM.set(usize::MAX);
    }
}
