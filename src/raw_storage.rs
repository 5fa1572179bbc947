use crate::error::{Error, Result};
use std::{
    alloc::{self, Layout},
    marker::PhantomData,
    mem::{self, size_of},
    ptr::NonNull,
};

/// An owned, uninitialized allocation with room for exactly `capacity`
/// elements of `T`.
///
/// # Safety
///
/// This type tracks memory, not elements. It will **neither** construct
/// **nor** drop anything it holds: dropping it only returns the block to the
/// system allocator. The owner is responsible for having dropped every
/// element it wrote before that happens.
///
/// Zero-sized types never allocate. The requested capacity is still
/// recorded so that callers can account slots uniformly.
pub(crate) struct RawStorage<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

unsafe impl<T> Send for RawStorage<T> where T: Send {}
unsafe impl<T> Sync for RawStorage<T> where T: Sync {}

impl<T> RawStorage<T> {
    /// Creates storage with no slots and without allocating.
    pub(crate) const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates room for exactly `capacity` elements.
    ///
    /// Requesting zero slots returns [`RawStorage::empty`].
    pub(crate) fn allocate(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Ok(Self::empty());
        }

        if size_of::<T>() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        let layout = Self::layout(capacity)?;
        // SAFETY: `layout` has a nonzero size because both `capacity` and the
        // element size are nonzero.
        let ptr = unsafe { alloc::alloc(layout) };
        match NonNull::new(ptr.cast::<T>()) {
            Some(ptr) => Ok(Self {
                ptr,
                capacity,
                _marker: PhantomData,
            }),
            None => {
                debug!("allocation of {} slots failed", capacity);
                Err(Error::OutOfMemory { layout })
            }
        }
    }

    fn layout(capacity: usize) -> Result<Layout> {
        Layout::array::<T>(capacity).map_err(|_| Error::CapacityOverflow)
    }

    /// The number of slots in the block.
    pub(crate) const fn capacity(&self) -> usize {
        self.capacity
    }

    /// A pointer to the first slot. Dangling but aligned when empty.
    pub(crate) const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Returns a pointer to the slot at `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that
    ///
    /// - `index <= capacity`
    /// - the slot is only read after the caller has written it
    pub(crate) unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity);
        // SAFETY: in bounds of the allocation, or one past the end.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Moves the block out, leaving `self` empty.
    pub(crate) fn take(&mut self) -> Self {
        mem::replace(self, Self::empty())
    }

    /// Exchanges blocks with `other`.
    pub(crate) fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if self.capacity == 0 || size_of::<T>() == 0 {
            return;
        }
        if let Ok(layout) = Self::layout(self.capacity) {
            // SAFETY: the block was allocated in `allocate` with this layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn zero_capacity_does_not_allocate() {
        let storage = RawStorage::<u64>::allocate(0).unwrap();
        assert_eq!(storage.capacity(), 0);
        assert_eq!(storage.as_ptr(), NonNull::dangling().as_ptr());
    }

    #[test]
    pub fn allocates_exact_capacity() {
        let storage = RawStorage::<u64>::allocate(7).unwrap();
        assert_eq!(storage.capacity(), 7);
        assert_eq!(storage.as_ptr() as usize % align_of::<u64>(), 0);
    }

    #[test]
    pub fn slots_are_contiguous() {
        let storage = RawStorage::<u32>::allocate(4).unwrap();
        unsafe {
            for i in 0..4 {
                storage.slot(i).write(i as u32 * 10);
            }
            assert_eq!(storage.slot(3).read(), 30);
            assert_eq!(storage.slot(1).offset_from(storage.slot(0)), 1);
        }
    }

    #[test]
    pub fn take_leaves_source_empty() {
        let mut source = RawStorage::<u16>::allocate(3).unwrap();
        let ptr = source.as_ptr();
        let taken = source.take();
        assert_eq!(taken.capacity(), 3);
        assert_eq!(taken.as_ptr(), ptr);
        assert_eq!(source.capacity(), 0);
    }

    #[test]
    pub fn swap_exchanges_blocks() {
        let mut a = RawStorage::<u8>::allocate(2).unwrap();
        let mut b = RawStorage::<u8>::empty();
        let ptr = a.as_ptr();
        a.swap(&mut b);
        assert_eq!(a.capacity(), 0);
        assert_eq!(b.capacity(), 2);
        assert_eq!(b.as_ptr(), ptr);
    }

    #[test]
    pub fn zero_sized_types_record_capacity() {
        let storage = RawStorage::<()>::allocate(usize::MAX).unwrap();
        assert_eq!(storage.capacity(), usize::MAX);
    }

    #[test]
    pub fn capacity_overflow() {
        assert_eq!(
            RawStorage::<u64>::allocate(usize::MAX).err(),
            Some(Error::CapacityOverflow)
        );
    }

    #[test]
    pub fn out_of_memory() {
        let result = RawStorage::<u8>::allocate(isize::MAX as usize);
        assert!(matches!(result, Err(Error::OutOfMemory { .. })));
    }
}
