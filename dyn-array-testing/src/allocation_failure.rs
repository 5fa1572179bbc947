use crate::failing_alloc::refuse_from;
use dyn_array::{DynArray, Error, dyn_array};

fn is_out_of_memory<T>(result: &Result<T, Error>) -> bool {
    matches!(result, Err(Error::OutOfMemory { .. }))
}

#[test]
pub fn clone_from_into_smaller_capacity() {
    let mut target: DynArray<u64> = dyn_array![1, 2];
    let source: DynArray<u64> = (0..64).collect();
    let ptr = target.as_ptr();

    let result = {
        let _refusal = refuse_from(256);
        target.try_clone_from(&source)
    };

    assert!(is_out_of_memory(&result));
    assert_eq!(target, [1, 2]);
    assert_eq!(target.capacity(), 2);
    assert_eq!(target.as_ptr(), ptr);
}

#[test]
pub fn clone_from_within_capacity_does_not_allocate() {
    let mut target: DynArray<u64> = DynArray::with_capacity(64);
    target.push(7);
    let source: DynArray<u64> = (0..64).collect();

    let result = {
        let _refusal = refuse_from(1);
        target.try_clone_from(&source)
    };

    assert_eq!(result, Ok(()));
    assert_eq!(target, source);
    assert_eq!(target.capacity(), 64);
}

#[test]
pub fn try_clone() {
    let source: DynArray<u64> = (0..64).collect();
    let result = {
        let _refusal = refuse_from(512);
        source.try_clone()
    };
    assert!(is_out_of_memory(&result));
    assert_eq!(source.len(), 64);
}

#[test]
pub fn push_at_capacity() {
    let mut array: DynArray<u64> = dyn_array![1, 2, 3, 4];
    let result = {
        let _refusal = refuse_from(64);
        array.try_push(5)
    };
    assert!(is_out_of_memory(&result));
    assert_eq!(array, [1, 2, 3, 4]);
    assert_eq!(array.capacity(), 4);
}

#[test]
pub fn insert_at_capacity() {
    let mut array: DynArray<u64> = dyn_array![1, 2, 3, 4];
    let result = {
        let _refusal = refuse_from(64);
        array.insert(1, 9)
    };
    assert!(is_out_of_memory(&result));
    assert_eq!(array, [1, 2, 3, 4]);
}

#[test]
pub fn emplace_at_capacity_skips_constructor() {
    let mut array: DynArray<u64> = dyn_array![1, 2, 3, 4];
    let mut called = false;
    let (back, positioned) = {
        let _refusal = refuse_from(64);
        let back = array.try_emplace_back(|| {
            called = true;
            5
        });
        let back = back.map(|_| ());
        let positioned = array.emplace(0, || {
            called = true;
            0
        });
        (back, positioned)
    };
    assert!(is_out_of_memory(&back));
    assert!(is_out_of_memory(&positioned));
    assert!(!called);
    assert_eq!(array, [1, 2, 3, 4]);
}

#[test]
pub fn shrink_to_fit() {
    let mut array: DynArray<u64> = DynArray::with_capacity(64);
    array.extend(0..40);
    let result = {
        let _refusal = refuse_from(320);
        array.try_shrink_to_fit()
    };
    assert!(is_out_of_memory(&result));
    assert_eq!(array.capacity(), 64);
    assert!(array.iter().copied().eq(0..40));
}

#[test]
pub fn from_elem() {
    let result = {
        let _refusal = refuse_from(800);
        DynArray::try_from_elem(0u64, 100)
    };
    assert!(is_out_of_memory(&result));
}

#[test]
pub fn with_len_and_resize() {
    let result = {
        let _refusal = refuse_from(80);
        DynArray::<u64>::try_with_len(10)
    };
    assert!(is_out_of_memory(&result));

    let mut array: DynArray<u64> = dyn_array![1];
    let result = {
        let _refusal = refuse_from(80);
        array.try_resize(10)
    };
    assert!(is_out_of_memory(&result));
    assert_eq!(array, [1]);
}
