use crate::DynArray;

macro_rules! uni {
    ($t:ty, $u:ty $(, $($b:tt)+)?) => {
        impl<T, U $(, $($b)+)?> PartialEq<$u> for $t
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &$u) -> bool {
                self[..] == other[..]
            }
        }
    };
}

macro_rules! bi {
    ($t:ty, $u:ty $(, $($b:tt)+)?) => {
        uni!($t, $u $(, $($b)+)?);

        impl<T, U $(, $($b)+)?> PartialEq<$t> for $u
        where
            U: PartialEq<T>,
        {
            fn eq(&self, other: &$t) -> bool {
                self[..] == other[..]
            }
        }
    };
}

uni!(DynArray<T>, DynArray<U>);
uni!(DynArray<T>, &[U; N], const N: usize);
bi!(DynArray<T>, Vec<U>);
bi!(DynArray<T>, [U]);
bi!(DynArray<T>, &[U]);
bi!(DynArray<T>, &mut [U]);
bi!(DynArray<T>, [U; N], const N: usize);

impl<T> Eq for DynArray<T> where T: Eq {}

#[cfg(test)]
mod tests {
    use crate::{DynArray, dyn_array};

    #[test]
    pub fn against_other_sequences() {
        let array: DynArray<u8> = dyn_array![1, 2, 3];
        let vec = vec![1u8, 2, 3];
        let slice: &[u8] = &[1, 2, 3];
        assert_eq!(array, vec);
        assert_eq!(vec, array);
        assert_eq!(array, slice);
        assert_eq!(slice, array);
        assert_eq!(array, *slice);
        assert_eq!(array, [1, 2, 3]);
        assert_eq!([1u8, 2, 3], array);
        assert_eq!(array, &[1, 2, 3]);
        assert_ne!(array, [1, 2]);
    }

    #[test]
    pub fn across_element_types() {
        let owned: DynArray<String> = dyn_array![String::from("a")];
        let borrowed: DynArray<&str> = dyn_array!["a"];
        assert!(owned == borrowed);
        assert_eq!(owned, owned.clone());
    }
}
