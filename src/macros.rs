/// Creates a [`DynArray`] containing the arguments.
///
/// Mirrors the forms of [`vec!`]:
///
/// ```
/// # use dyn_array::{DynArray, dyn_array};
/// let empty: DynArray<u8> = dyn_array![];
/// assert!(empty.is_empty());
///
/// let listed = dyn_array![1, 2, 3];
/// assert_eq!(listed, [1, 2, 3]);
///
/// let repeated = dyn_array![String::from("x"); 2];
/// assert_eq!(repeated, ["x", "x"]);
/// assert_eq!(repeated.capacity(), 2);
/// ```
///
/// [`DynArray`]: crate::DynArray
#[macro_export]
macro_rules! dyn_array {
    () => {
        $crate::DynArray::new()
    };

    ($element:expr; $n:expr) => {
        $crate::DynArray::from_elem($element, $n)
    };

    ($($element:expr),+ $(,)?) => {
        $crate::DynArray::from([$($element),+])
    };
}
