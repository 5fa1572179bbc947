use crate::{
    error::{self, Error, Result},
    guard::PartialInit,
    raw_storage::RawStorage,
};
use std::{
    mem::{self, ManuallyDrop},
    ops::{Deref, DerefMut},
    ptr, slice,
};

/// A contiguous growable array that manages element lifetimes directly on
/// top of an uninitialized allocation.
///
/// Elements at indices `[0, len)` are live. Slots `[len, capacity)` are
/// uninitialized. Capacity grows on demand and is never reduced by removing
/// elements.
///
/// `DynArray<T>` dereferences to `[T]`, so slice methods such as
/// [`iter`], [`get`] and [`get_unchecked`] are available directly.
///
/// [`iter`]: slice::iter
/// [`get`]: slice::get
/// [`get_unchecked`]: slice::get_unchecked
pub struct DynArray<T> {
    storage: RawStorage<T>,
    len: usize,
}

impl<T> DynArray<T> {
    /// Constructs a new, empty `DynArray<T>`.
    ///
    /// The array will not allocate until elements are pushed onto it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::DynArray;
    /// let array = DynArray::<u32>::new();
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::empty(),
            len: 0,
        }
    }

    /// Constructs an empty array with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows. Allocation failure is reported
    /// through [`handle_alloc_error`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::DynArray;
    /// let mut array = DynArray::with_capacity(4);
    /// assert_eq!(array.capacity(), 4);
    /// for i in 0..4 {
    ///     array.push(i);
    /// }
    /// assert_eq!(array.capacity(), 4);
    /// ```
    ///
    /// [`handle_alloc_error`]: std::alloc::handle_alloc_error
    pub fn with_capacity(capacity: usize) -> Self {
        error::infallible(Self::try_with_capacity(capacity))
    }

    /// Fallible version of [`DynArray::with_capacity`].
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            storage: RawStorage::allocate(capacity)?,
            len: 0,
        })
    }

    /// Constructs an array of `len` default-constructed elements with a
    /// capacity of exactly `len`.
    ///
    /// If a call to [`Default::default`] panics, the elements built so far
    /// are dropped in reverse order before the panic propagates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::DynArray;
    /// let array = DynArray::<String>::with_len(3);
    /// assert_eq!(array, ["", "", ""]);
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        error::infallible(Self::try_with_len(len))
    }

    /// Fallible version of [`DynArray::with_len`].
    pub fn try_with_len(len: usize) -> Result<Self>
    where
        T: Default,
    {
        let storage = RawStorage::allocate(len)?;
        // SAFETY: the fresh block has room for `len` elements.
        let mut init = unsafe { PartialInit::new(storage.as_ptr()) };
        for _ in 0..len {
            // SAFETY: fewer than `len` elements written so far.
            unsafe { init.write(T::default()) };
        }
        let len = init.finish();
        Ok(Self { storage, len })
    }

    /// Constructs an array holding `n` clones of `element`, with a capacity
    /// of exactly `n`. Used by the [`dyn_array!`] macro.
    ///
    /// [`dyn_array!`]: crate::dyn_array
    pub fn from_elem(element: T, n: usize) -> Self
    where
        T: Clone,
    {
        error::infallible(Self::try_from_elem(element, n))
    }

    /// Fallible version of [`DynArray::from_elem`].
    pub fn try_from_elem(element: T, n: usize) -> Result<Self>
    where
        T: Clone,
    {
        let mut out = Self::try_with_capacity(n)?;
        if n > 0 {
            for _ in 1..n {
                out.try_push(element.clone())?;
            }
            out.try_push(element)?;
        }
        Ok(out)
    }

    /// Fallible version of [`Clone::clone`].
    ///
    /// The clone is tight-fitted: its capacity equals `self.len()`.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        let storage = RawStorage::allocate(self.len)?;
        // SAFETY: the fresh block has room for `self.len` elements.
        let mut init = unsafe { PartialInit::new(storage.as_ptr()) };
        for element in self.iter() {
            // SAFETY: one write per source element.
            unsafe { init.write(element.clone()) };
        }
        let len = init.finish();
        trace!("cloned {} elements", len);
        Ok(Self { storage, len })
    }

    /// Fallible version of [`Clone::clone_from`].
    ///
    /// When `source` does not fit in the existing capacity, a full clone is
    /// built first and swapped in, so an allocation failure or a panic
    /// leaves `self` untouched. Otherwise the storage is reused without
    /// reallocating: the overlapping prefix is assigned with
    /// [`Clone::clone_from`] and the remainder is either cloned into free
    /// slots or dropped. A panic on that path leaves `self` valid, with the
    /// elements handled so far updated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::{DynArray, dyn_array};
    /// let mut target = DynArray::with_capacity(4);
    /// target.push(0);
    /// let source = dyn_array![1, 2, 3];
    /// target.try_clone_from(&source).unwrap();
    /// assert_eq!(target, [1, 2, 3]);
    /// assert_eq!(target.capacity(), 4);
    /// ```
    pub fn try_clone_from(&mut self, source: &Self) -> Result<()>
    where
        T: Clone,
    {
        if source.len > self.capacity() {
            let mut fresh = source.try_clone()?;
            self.move_assign(&mut fresh);
            return Ok(());
        }

        let overlap = self.len.min(source.len);
        for (dst, src) in self[..overlap].iter_mut().zip(&source[..overlap]) {
            dst.clone_from(src);
        }

        if source.len > self.len {
            for element in &source[self.len..] {
                // SAFETY: `self.len < source.len <= capacity`.
                unsafe { self.storage.slot(self.len).write(element.clone()) };
                self.len += 1;
            }
        } else {
            self.truncate(source.len);
        }
        Ok(())
    }

    /// Moves the contents out into a new array, leaving `self` with no
    /// elements and no capacity. No element is cloned or dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::{DynArray, dyn_array};
    /// let mut source = dyn_array![1, 2, 3];
    /// let moved = source.take();
    /// assert_eq!(moved, [1, 2, 3]);
    /// assert_eq!(source.len(), 0);
    /// assert_eq!(source.capacity(), 0);
    /// ```
    pub fn take(&mut self) -> Self {
        Self {
            storage: self.storage.take(),
            len: mem::replace(&mut self.len, 0),
        }
    }

    /// Move-assigns `source` into `self` by exchanging their storage and
    /// lengths. `source` ends up holding what `self` held before.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::{DynArray, dyn_array};
    /// let mut target = dyn_array![1];
    /// let mut source = dyn_array![2, 3];
    /// target.move_assign(&mut source);
    /// assert_eq!(target, [2, 3]);
    /// assert_eq!(source, [1]);
    /// ```
    pub fn move_assign(&mut self, source: &mut Self) {
        self.storage.swap(&mut source.storage);
        mem::swap(&mut self.len, &mut source.len);
    }

    /// Returns the number of live elements.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the array contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots allocated, live or not.
    pub const fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Ensures room for at least `capacity` elements in total.
    ///
    /// This is a no-op when the current capacity suffices. Otherwise a block
    /// of exactly `capacity` slots is allocated, the live elements are moved
    /// into it, and the old block is released. Any outstanding pointer into
    /// the array is invalidated.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::{DynArray, dyn_array};
    /// let mut array = dyn_array![1];
    /// array.reserve(10);
    /// assert_eq!(array.capacity(), 10);
    /// array.reserve(5);
    /// assert_eq!(array.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, capacity: usize) {
        error::infallible(self.try_reserve(capacity))
    }

    /// Fallible version of [`DynArray::reserve`].
    ///
    /// Allocation happens before any element is relocated, so on error the
    /// array is unchanged.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<()> {
        if capacity <= self.capacity() {
            return Ok(());
        }
        let mut fresh = RawStorage::allocate(capacity)?;
        trace!(
            "reallocating {} elements from {} to {} slots",
            self.len,
            self.capacity(),
            capacity
        );
        // SAFETY: both blocks hold at least `len` slots and do not overlap.
        // The originals are moved rather than dropped, so the old block is
        // released as raw memory.
        unsafe { ptr::copy_nonoverlapping(self.storage.as_ptr(), fresh.as_ptr(), self.len) };
        self.storage.swap(&mut fresh);
        Ok(())
    }

    /// Reserves room for at least `additional` more elements than the
    /// current length.
    pub fn reserve_additional(&mut self, additional: usize) {
        error::infallible(self.try_reserve_additional(additional))
    }

    /// Fallible version of [`DynArray::reserve_additional`].
    pub fn try_reserve_additional(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;
        self.try_reserve(required)
    }

    /// Replaces the storage with a block of exactly `len` slots.
    pub fn shrink_to_fit(&mut self) {
        error::infallible(self.try_shrink_to_fit())
    }

    /// Fallible version of [`DynArray::shrink_to_fit`]. On error the array
    /// keeps its current storage.
    pub fn try_shrink_to_fit(&mut self) -> Result<()> {
        if self.len == self.capacity() {
            return Ok(());
        }
        let mut fresh = RawStorage::allocate(self.len)?;
        debug!("shrinking from {} to {} slots", self.capacity(), self.len);
        // SAFETY: as in `try_reserve`.
        unsafe { ptr::copy_nonoverlapping(self.storage.as_ptr(), fresh.as_ptr(), self.len) };
        self.storage.swap(&mut fresh);
        Ok(())
    }

    /// Resizes the array to `len` elements, default-constructing new
    /// elements or dropping excess ones.
    ///
    /// The capacity becomes exactly `len` if it was smaller.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::{DynArray, dyn_array};
    /// let mut array = dyn_array![7, 8];
    /// array.resize(4);
    /// assert_eq!(array, [7, 8, 0, 0]);
    /// array.resize(1);
    /// assert_eq!(array, [7]);
    /// assert_eq!(array.capacity(), 4);
    /// ```
    pub fn resize(&mut self, len: usize)
    where
        T: Default,
    {
        error::infallible(self.try_resize(len))
    }

    /// Fallible version of [`DynArray::resize`].
    ///
    /// If [`Default::default`] panics, the elements constructed before the
    /// panic remain live and are counted by `len`.
    pub fn try_resize(&mut self, len: usize) -> Result<()>
    where
        T: Default,
    {
        self.try_reserve(len)?;
        while self.len < len {
            // SAFETY: `self.len < len <= capacity`.
            unsafe { self.storage.slot(self.len).write(T::default()) };
            self.len += 1;
        }
        self.truncate(len);
        Ok(())
    }

    /// Drops the elements at `len` and beyond. Capacity is unaffected.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        // SAFETY: `[len, self.len)` are live.
        let tail =
            ptr::slice_from_raw_parts_mut(unsafe { self.storage.slot(len) }, self.len - len);
        self.len = len;
        // SAFETY: shortened first so a panicking destructor cannot cause a
        // double drop.
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Drops every element. Capacity is unaffected.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends an element, doubling the capacity first if the array is full.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::DynArray;
    /// let mut array = DynArray::new();
    /// array.push(1);
    /// array.push(2);
    /// array.push(3);
    /// assert_eq!(array, [1, 2, 3]);
    /// assert_eq!(array.capacity(), 4);
    /// ```
    pub fn push(&mut self, element: T) {
        error::infallible(self.try_push(element))
    }

    /// Fallible version of [`DynArray::push`]. On error the element is
    /// dropped and the array is unchanged.
    pub fn try_push(&mut self, element: T) -> Result<()> {
        self.try_grow_for(1)?;
        // SAFETY: `len < capacity` after growing.
        unsafe { self.storage.slot(self.len).write(element) };
        self.len += 1;
        Ok(())
    }

    /// Appends the element returned by `f`, constructing it directly in its
    /// slot, and returns a reference to it.
    ///
    /// Growth happens before `f` runs. The reference lives until the next
    /// mutation of the array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::DynArray;
    /// let mut array = DynArray::new();
    /// let element = array.emplace_back(|| String::from("hello"));
    /// element.push_str(" world");
    /// assert_eq!(array, ["hello world"]);
    /// ```
    pub fn emplace_back<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        error::infallible(self.try_emplace_back(f))
    }

    /// Fallible version of [`DynArray::emplace_back`]. `f` is not called if
    /// growing fails.
    pub fn try_emplace_back<F>(&mut self, f: F) -> Result<&mut T>
    where
        F: FnOnce() -> T,
    {
        self.try_grow_for(1)?;
        // SAFETY: `len < capacity` after growing.
        let slot = unsafe { self.storage.slot(self.len) };
        unsafe { slot.write(f()) };
        self.len += 1;
        // SAFETY: just written, and borrowed from `self` mutably.
        Ok(unsafe { &mut *slot })
    }

    /// Drops the last element in place. Capacity is unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyContainer`] if there are no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::{DynArray, Error, dyn_array};
    /// let mut array = dyn_array![1];
    /// assert_eq!(array.pop_back(), Ok(()));
    /// assert_eq!(array.pop_back(), Err(Error::EmptyContainer));
    /// assert_eq!(array.capacity(), 1);
    /// ```
    pub fn pop_back(&mut self) -> Result<()> {
        if self.len == 0 {
            return Err(Error::EmptyContainer);
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` is live.
        unsafe { ptr::drop_in_place(self.storage.slot(self.len)) };
        Ok(())
    }

    /// Removes the last element and returns it, or [`None`] if the array is
    /// empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: the slot is live and no longer counted by `len`.
            Some(unsafe { self.storage.slot(self.len).read() })
        }
    }

    /// Returns a slice of the live elements.
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// Returns a mutable slice of the live elements.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Gives up ownership of the storage without dropping the live
    /// elements, returning it along with the length.
    pub(crate) fn into_storage(self) -> (RawStorage<T>, usize) {
        let mut me = ManuallyDrop::new(self);
        let len = me.len;
        (me.storage.take(), len)
    }

    /// Makes room for `additional` more elements, growing to at least double
    /// the current capacity when a reallocation is needed.
    pub(crate) fn try_grow_for(&mut self, additional: usize) -> Result<()> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;
        if required <= self.capacity() {
            return Ok(());
        }
        let doubled = self
            .capacity()
            .checked_mul(2)
            .ok_or(Error::CapacityOverflow)?;
        self.try_reserve(doubled.max(required))
    }
}

impl<T> Drop for DynArray<T> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` are live. The storage releases the block after.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.storage.as_ptr(),
                self.len,
            ))
        }
    }
}

impl<T> Clone for DynArray<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        error::infallible(self.try_clone())
    }

    fn clone_from(&mut self, source: &Self) {
        error::infallible(self.try_clone_from(source))
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for DynArray<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: `[0, len)` are live and the pointer is aligned and non-null.
        unsafe { slice::from_raw_parts(self.storage.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for DynArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: as above, with exclusive access through `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.storage.as_ptr(), self.len) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[derive(Clone)]
    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    pub fn new_does_not_allocate() {
        let array = DynArray::<u64>::new();
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 0);
        assert!(array.is_empty());
    }

    #[test]
    pub fn growth_doubles() {
        let mut array = DynArray::new();
        let mut capacities = vec![];
        for i in 0..9 {
            array.push(i);
            capacities.push(array.capacity());
        }
        assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    pub fn push_within_capacity_keeps_pointer() {
        let mut array = DynArray::with_capacity(3);
        array.push(1u8);
        let ptr = array.as_ptr();
        array.push(2);
        array.push(3);
        assert_eq!(array.as_ptr(), ptr);
    }

    #[test]
    pub fn reserve_is_exact() {
        let mut array = DynArray::<u8>::new();
        array.reserve(5);
        assert_eq!(array.capacity(), 5);
        array.reserve(3);
        assert_eq!(array.capacity(), 5);
    }

    #[test]
    pub fn reserve_additional_counts_from_len() {
        let mut array: DynArray<u8> = DynArray::from_elem(0, 3);
        array.reserve_additional(2);
        assert_eq!(array.capacity(), 5);
        assert_eq!(
            array.try_reserve_additional(usize::MAX),
            Err(Error::CapacityOverflow)
        );
    }

    #[test]
    pub fn failed_reserve_leaves_contents() {
        let mut array: DynArray<u8> = DynArray::from_elem(9, 2);
        let result = array.try_reserve(isize::MAX as usize);
        assert!(matches!(result, Err(Error::OutOfMemory { .. })));
        assert_eq!(array.capacity(), 2);
        assert_eq!(&array[..], [9, 9]);
    }

    #[test]
    pub fn truncate_and_clear_drop() {
        let drops = Rc::new(Cell::new(0));
        let mut array = DynArray::from_elem(DropCounter(drops.clone()), 4);
        array.truncate(5);
        assert_eq!(drops.get(), 0);
        array.truncate(1);
        assert_eq!(drops.get(), 3);
        array.clear();
        assert_eq!(drops.get(), 4);
        assert_eq!(array.capacity(), 4);
    }

    #[test]
    pub fn drop_releases_elements() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut array = DynArray::new();
            for _ in 0..5 {
                array.push(DropCounter(drops.clone()));
            }
        }
        assert_eq!(drops.get(), 5);
    }

    #[test]
    pub fn pop_moves_out() {
        let mut array = DynArray::new();
        array.push(String::from("a"));
        array.push(String::from("b"));
        assert_eq!(array.pop().as_deref(), Some("b"));
        assert_eq!(array.pop().as_deref(), Some("a"));
        assert_eq!(array.pop(), None);
        assert_eq!(array.capacity(), 2);
    }

    #[test]
    pub fn shrink_to_fit_replaces_storage() {
        let mut array = DynArray::with_capacity(10);
        array.push(1u32);
        array.push(2);
        array.shrink_to_fit();
        assert_eq!(array.capacity(), 2);
        assert_eq!(&array[..], [1, 2]);
    }

    #[test]
    pub fn clone_is_tight_and_independent() {
        let mut original = DynArray::with_capacity(8);
        original.push(String::from("x"));
        original.push(String::from("y"));
        let mut copy = original.clone();
        assert_eq!(copy.capacity(), 2);
        copy[0].push('!');
        copy.push(String::from("z"));
        assert_eq!(&original[..], ["x", "y"]);
        assert_eq!(&copy[..], ["x!", "y", "z"]);
    }

    #[test]
    pub fn clone_from_reuses_capacity() {
        let mut target: DynArray<u16> = DynArray::from_elem(1, 5);
        let source: DynArray<u16> = DynArray::from_elem(2, 3);
        let ptr = target.as_ptr();
        target.clone_from(&source);
        assert_eq!(&target[..], [2, 2, 2]);
        assert_eq!(target.capacity(), 5);
        assert_eq!(target.as_ptr(), ptr);
    }

    #[test]
    pub fn clone_from_constructs_into_free_slots() {
        let mut target = DynArray::with_capacity(4);
        target.push(0u16);
        let source: DynArray<u16> = DynArray::from_elem(7, 4);
        target.clone_from(&source);
        assert_eq!(&target[..], [7, 7, 7, 7]);
        assert_eq!(target.capacity(), 4);
    }

    #[test]
    pub fn clone_from_reallocates_when_too_small() {
        let mut target: DynArray<u16> = DynArray::from_elem(1, 2);
        let source: DynArray<u16> = DynArray::from_elem(3, 6);
        target.clone_from(&source);
        assert_eq!(&target[..], [3; 6]);
        assert!(target.capacity() >= 6);
    }

    #[test]
    pub fn move_assign_swaps() {
        let mut a: DynArray<u8> = DynArray::from_elem(1, 3);
        let mut b = DynArray::new();
        b.move_assign(&mut a);
        assert_eq!((a.len(), a.capacity()), (0, 0));
        assert_eq!((b.len(), b.capacity()), (3, 3));
    }

    #[test]
    pub fn zero_sized_elements() {
        let mut array = DynArray::new();
        for _ in 0..100 {
            array.push(());
        }
        assert_eq!(array.len(), 100);
        assert_eq!(array.capacity(), 128);
        assert_eq!(array.pop(), Some(()));
        array.resize(3);
        assert_eq!(array.len(), 3);
    }

    #[test]
    pub fn growth_failure_leaves_array_unchanged() {
        let mut array = DynArray::<()>::with_capacity(usize::MAX / 2 + 1);
        array.len = array.capacity();

        assert_eq!(array.try_push(()), Err(Error::CapacityOverflow));
        assert_eq!(array.insert(0, ()), Err(Error::CapacityOverflow));
        assert_eq!(
            array.try_emplace_back(|| unreachable!()).err(),
            Some(Error::CapacityOverflow)
        );
        assert_eq!(
            array.emplace(0, || unreachable!()),
            Err(Error::CapacityOverflow)
        );
        assert_eq!(array.len(), usize::MAX / 2 + 1);
        assert_eq!(array.capacity(), usize::MAX / 2 + 1);
    }

    #[test]
    pub fn grow_for_doubles_or_fits() {
        let mut array: DynArray<u8> = DynArray::from_elem(0, 4);
        array.try_grow_for(1).unwrap();
        assert_eq!(array.capacity(), 8);
        array.try_grow_for(4).unwrap();
        assert_eq!(array.capacity(), 8);
        array.try_grow_for(20).unwrap();
        assert_eq!(array.capacity(), 24);
        assert_eq!(array.try_grow_for(usize::MAX), Err(Error::CapacityOverflow));
        assert_eq!(array.len(), 4);
    }

    #[test]
    pub fn try_from_elem_reports_overflow() {
        assert_eq!(
            DynArray::<u64>::try_from_elem(0, usize::MAX).err(),
            Some(Error::CapacityOverflow)
        );
        let array = DynArray::try_from_elem('a', 3).unwrap();
        assert_eq!(&array[..], ['a'; 3]);
        assert_eq!(array.capacity(), 3);
    }

    #[test]
    pub fn try_clone_from_paths() {
        let mut target: DynArray<u16> = DynArray::with_capacity(4);
        target.push(9);
        let source: DynArray<u16> = DynArray::from_elem(5, 3);
        assert_eq!(target.try_clone_from(&source), Ok(()));
        assert_eq!(&target[..], [5, 5, 5]);
        assert_eq!(target.capacity(), 4);

        let source: DynArray<u16> = DynArray::from_elem(6, 7);
        assert_eq!(target.try_clone_from(&source), Ok(()));
        assert_eq!(&target[..], [6; 7]);
        assert_eq!(target.capacity(), 7);
    }

    #[test]
    pub fn emplace_back_returns_new_element() {
        let mut array = DynArray::new();
        array.push(1);
        *array.emplace_back(|| 5) += 1;
        assert_eq!(&array[..], [1, 6]);
    }
}
