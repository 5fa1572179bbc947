use crate::{
    DynArray,
    error::{Error, Result},
};

impl<T> DynArray<T> {
    /// Inserts `element` at `index`, shifting everything from `index` onward
    /// up by one, and returns the index of the inserted element.
    ///
    /// The element is first appended, growing the storage if needed, and then
    /// rotated into place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index > len`, or an allocation
    /// error if growing fails. The array is unchanged in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::{DynArray, dyn_array};
    /// let mut array = dyn_array![1, 2];
    /// assert_eq!(array.insert(0, 0), Ok(0));
    /// assert_eq!(array.insert(3, 3), Ok(3));
    /// assert_eq!(array.insert(2, 10), Ok(2));
    /// assert_eq!(array, [0, 1, 10, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<usize> {
        self.check_insert_position(index)?;
        self.try_push(element)?;
        self[index..].rotate_right(1);
        Ok(index)
    }

    /// Inserts the element returned by `f` at `index` and returns the index of
    /// the new element. `f` runs after any growth, as with
    /// [`DynArray::emplace_back`].
    ///
    /// # Errors
    ///
    /// As [`DynArray::insert`]. `f` is not called on error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::DynArray;
    /// let mut array = DynArray::new();
    /// array.push((3, 3));
    /// let (x, y) = (1, 2);
    /// assert_eq!(array.emplace(0, || (x, y)), Ok(0));
    /// assert_eq!(array, [(1, 2), (3, 3)]);
    /// ```
    pub fn emplace<F>(&mut self, index: usize, f: F) -> Result<usize>
    where
        F: FnOnce() -> T,
    {
        self.check_insert_position(index)?;
        self.try_emplace_back(f)?;
        self[index..].rotate_right(1);
        Ok(index)
    }

    /// Drops the element at `index`, shifting everything after it down by
    /// one. Returns `index`, which now names the element that followed the
    /// erased one, or equals `len` if the erased element was last.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_array::{DynArray, dyn_array};
    /// let mut array = dyn_array![1, 2, 3];
    /// assert_eq!(array.erase(1), Ok(1));
    /// assert_eq!(array, [1, 3]);
    /// assert_eq!(array.erase(1), Ok(array.len()));
    /// ```
    pub fn erase(&mut self, index: usize) -> Result<usize> {
        self.check_element_position(index)?;
        self[index..].rotate_left(1);
        self.pop_back()?;
        Ok(index)
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it down by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_element_position(index)?;
        self[index..].rotate_left(1);
        self.pop().ok_or(Error::EmptyContainer)
    }

    fn check_insert_position(&self, index: usize) -> Result<()> {
        if index > self.len() {
            Err(Error::OutOfRange {
                index,
                len: self.len(),
            })
        } else {
            Ok(())
        }
    }

    fn check_element_position(&self, index: usize) -> Result<()> {
        if index >= self.len() {
            Err(Error::OutOfRange {
                index,
                len: self.len(),
            })
        } else {
            Ok(())
        }
    }
}
