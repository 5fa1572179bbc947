use crate::{DynArray, raw_storage::RawStorage};
use std::{
    fmt::{self, Debug, Formatter},
    iter::FusedIterator,
    ptr, slice,
};

/// An iterator that moves out of a [`DynArray`].
///
/// This struct is created by the [`into_iter`] method, provided by the
/// [`IntoIterator`] trait.
///
/// [`into_iter`]: DynArray::into_iter
pub struct IntoIter<T> {
    storage: RawStorage<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[start, end)` are live.
        unsafe { slice::from_raw_parts(self.storage.slot(self.start), self.end - self.start) }
    }

    /// Returns the remaining elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as above, with exclusive access.
        unsafe { slice::from_raw_parts_mut(self.storage.slot(self.start), self.end - self.start) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            None
        } else {
            // SAFETY: the slot is live and is no longer covered by the range.
            let out = unsafe { self.storage.slot(self.start).read() };
            self.start += 1;
            Some(out)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            None
        } else {
            self.end -= 1;
            // SAFETY: as in `next`.
            Some(unsafe { self.storage.slot(self.end).read() })
        }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining: *mut [T] = self.as_mut_slice();
        self.start = self.end;
        // SAFETY: the unyielded elements are live. The storage releases the
        // block afterward.
        unsafe { ptr::drop_in_place(remaining) };
    }
}

impl<T> Debug for IntoIter<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (storage, end) = self.into_storage();
        IntoIter {
            storage,
            start: 0,
            end,
        }
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use crate::{DynArray, dyn_array};
    use std::{cell::Cell, rc::Rc};

    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    pub fn yields_in_order() {
        let array = dyn_array![String::from("a"), String::from("b"), String::from("c")];
        let collected: Vec<_> = array.into_iter().collect();
        assert_eq!(collected, ["a", "b", "c"]);
    }

    #[test]
    pub fn double_ended() {
        let array: DynArray<u8> = dyn_array![1, 2, 3, 4];
        let mut iter = array.into_iter();
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.as_slice(), [2, 3]);
        assert!(iter.eq([2, 3]));
    }

    #[test]
    pub fn drops_unyielded() {
        let drops = Rc::new(Cell::new(0));
        let mut array = DynArray::new();
        for _ in 0..4 {
            array.push(DropCounter(drops.clone()));
        }
        let mut iter = array.into_iter();
        drop(iter.next());
        assert_eq!(drops.get(), 1);
        drop(iter);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    pub fn borrowed() {
        let mut array: DynArray<u8> = dyn_array![1, 2, 3];
        for element in &mut array {
            *element *= 2;
        }
        let sum: u8 = (&array).into_iter().sum();
        assert_eq!(sum, 12);
    }
}
