/// ```
/// use dyn_array::DynArray;
/// let mut array = DynArray::new();
/// array.push(1);
/// let first = &array[0];
/// assert_eq!(*first, 1);
/// array.push(2);
/// ```
mod reference_across_push {
    /// ```compile_fail
    /// use dyn_array::DynArray;
    /// let mut array = DynArray::new();
    /// array.push(1);
    /// let first = &array[0];
    /// array.push(2);
    /// assert_eq!(*first, 1); // Added
    /// ```
    mod fail {}
}

/// ```
/// use dyn_array::DynArray;
/// let mut array = DynArray::<u8>::new();
/// let element = array.emplace_back(|| 1);
/// *element += 1;
/// array.reserve(16);
/// ```
mod emplaced_reference_across_reserve {
    /// ```compile_fail
    /// use dyn_array::DynArray;
    /// let mut array = DynArray::<u8>::new();
    /// let element = array.emplace_back(|| 1);
    /// array.reserve(16);
    /// *element += 1; // Moved
    /// ```
    mod fail {}
}

/// ```
/// use dyn_array::{DynArray, dyn_array};
/// let mut array: DynArray<u8> = dyn_array![1, 2, 3];
/// let total: u8 = array.iter().sum();
/// array.insert(0, total).unwrap();
/// ```
mod iterator_across_insert {
    /// ```compile_fail
    /// use dyn_array::{DynArray, dyn_array};
    /// let mut array: DynArray<u8> = dyn_array![1, 2, 3];
    /// for element in array.iter() {
    ///     array.insert(0, *element).unwrap(); // Changed
    /// }
    /// ```
    mod fail {}

    /// ```compile_fail
    /// use dyn_array::{DynArray, dyn_array};
    /// let mut array: DynArray<u8> = dyn_array![1, 2, 3];
    /// let last = array.last().unwrap();
    /// array.erase(0).unwrap();
    /// println!("{last}"); // Added
    /// ```
    mod erase {}
}

/// Cloning an array clones its elements.
///
/// ```compile_fail
/// use dyn_array::DynArray;
/// struct Unique;
/// let array = DynArray::<Unique>::new();
/// let copy: DynArray<Unique> = array.clone();
/// ```
mod clone_requires_clone_elements {}
