use crate::counted::{self, Counted, counts, counts_of};
use dyn_array::{DynArray, Error};

#[test]
pub fn sized_construction() {
    counted::reset();
    {
        let array = DynArray::<Counted>::with_len(3);
        assert_eq!(counts(), counts_of(3, 0, 0));
        assert_eq!(array.len(), 3);
        assert_eq!(array.capacity(), 3);
    }
    assert_eq!(counts().dropped, 3);
}

#[test]
pub fn clone_assign_into_smaller_capacity() {
    counted::reset();
    {
        let mut a = DynArray::<Counted>::with_len(2);
        let b = DynArray::<Counted>::with_len(3);
        assert_eq!(counts(), counts_of(5, 0, 0));

        a.clone_from(&b);
        assert_eq!(counts(), counts_of(8, 0, 2));
        assert_eq!(a.len(), 3);
        assert_eq!(b.len(), 3);
        assert!(a.capacity() >= 3);
    }
    assert_eq!(counts().dropped, 8);
}

#[test]
pub fn clone_assign_into_sufficient_capacity() {
    counted::reset();
    {
        let mut a = DynArray::<Counted>::with_len(3);
        let b = DynArray::<Counted>::with_len(2);
        assert_eq!(counts(), counts_of(5, 0, 0));

        a.clone_from(&b);
        assert_eq!(counts(), counts_of(5, 2, 1));
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
        assert_eq!(a.capacity(), 3);
    }
    assert_eq!(counts().dropped, 5);
}

#[test]
pub fn clone_assign_grows_within_capacity() {
    counted::reset();
    let mut a = DynArray::<Counted>::with_capacity(4);
    a.push(Counted(1));
    let b = DynArray::from([Counted(5), Counted(6), Counted(7)]);
    counted::reset();

    a.clone_from(&b);
    assert_eq!(counts(), counts_of(2, 1, 0));
    assert_eq!(a, [Counted(5), Counted(6), Counted(7)]);
    assert_eq!(a.capacity(), 4);
}

#[test]
pub fn push_relocates_by_move() {
    counted::reset();
    {
        let mut array = DynArray::new();
        let element = Counted::default();
        array.push(element.clone());
        assert_eq!(counts(), counts_of(2, 0, 0));

        // Reallocation moves the existing element rather than cloning it.
        array.push(element.clone());
        assert_eq!(counts(), counts_of(3, 0, 0));
        assert_eq!(array.capacity(), 2);
    }
    assert_eq!(counts().dropped, 3);
}

#[test]
pub fn emplace_back() {
    counted::reset();
    {
        let mut array = DynArray::new();
        array.emplace_back(Counted::default);
        assert_eq!(counts(), counts_of(1, 0, 0));

        array.emplace_back(Counted::default);
        assert_eq!(counts(), counts_of(2, 0, 0));
        assert_eq!(array.len(), 2);
    }
    assert_eq!(counts().dropped, 2);
}

#[test]
pub fn reserve_empty() {
    counted::reset();
    {
        let mut array = DynArray::new();
        array.reserve(5);
        assert_eq!(counts().created, 0);

        let element = Counted::default();
        array.push(element.clone());
        let ptr = array.as_ptr();
        array.push(element.clone());
        assert_eq!(array.as_ptr(), ptr);
        assert_eq!(counts().created, 3);
        assert_eq!(array.len(), 2);
        assert_eq!(array.capacity(), 5);
    }
    assert_eq!(counts().dropped, 3);
}

#[test]
pub fn reserve_with_something() {
    counted::reset();
    {
        let mut array = DynArray::new();
        array.emplace_back(Counted::default);

        array.reserve(2);
        assert_eq!(counts().created, 1);
        assert_eq!(array.len(), 1);
        assert_eq!(array.capacity(), 2);

        let ptr = array.as_ptr();
        array.emplace_back(Counted::default);
        assert_eq!(array.as_ptr(), ptr);
        assert_eq!(counts().created, 2);
        assert_eq!(array.len(), 2);
    }
    assert_eq!(counts().dropped, 2);
}

#[test]
pub fn resize_empty() {
    counted::reset();
    {
        let mut array = DynArray::<Counted>::new();
        array.resize(5);
        assert_eq!(counts(), counts_of(5, 0, 0));
        assert_eq!(array.len(), 5);
    }
    assert_eq!(counts().dropped, 5);
}

#[test]
pub fn resize_with_something() {
    counted::reset();
    {
        let mut array = DynArray::new();
        array.emplace_back(Counted::default);
        assert_eq!(counts(), counts_of(1, 0, 0));

        array.resize(5);
        assert_eq!(counts(), counts_of(5, 0, 0));
        assert_eq!(array.len(), 5);
        assert_eq!(array.capacity(), 5);
    }
    assert_eq!(counts().dropped, 5);
}

#[test]
pub fn resize_to_less() {
    counted::reset();
    {
        let mut array = DynArray::<Counted>::with_len(5);
        assert_eq!(counts(), counts_of(5, 0, 0));
        array.resize(3);
        assert_eq!(counts(), counts_of(5, 0, 2));
        assert_eq!(array.capacity(), 5);
    }
    assert_eq!(counts().dropped, 5);
}

#[test]
pub fn pop_back() {
    counted::reset();
    let mut array = DynArray::<Counted>::new();
    array.resize(5);
    assert_eq!(array.len(), 5);
    for i in (1..=5).rev() {
        assert_eq!(array.pop_back(), Ok(()));
        assert_eq!(array.len(), i - 1);
        assert_eq!(counts().dropped, 6 - i);
    }
    assert_eq!(array.pop_back(), Err(Error::EmptyContainer));
    assert_eq!(array.capacity(), 5);
}

#[test]
pub fn constructors() {
    counted::reset();
    let empty = DynArray::<Counted>::new();
    assert_eq!(counts(), counts_of(0, 0, 0));
    assert_eq!(empty.len(), 0);
    assert_eq!(empty.capacity(), 0);

    let mut sized = DynArray::<Counted>::with_len(5);
    assert_eq!(counts(), counts_of(5, 0, 0));
    assert_eq!(sized.len(), 5);
    assert_eq!(sized.capacity(), 5);

    counted::reset();
    let copy = sized.clone();
    assert_eq!(counts(), counts_of(5, 0, 0));
    assert_eq!(copy.len(), 5);
    assert_eq!(copy.capacity(), 5);

    counted::reset();
    let moved = sized.take();
    assert_eq!(counts(), counts_of(0, 0, 0));
    assert_eq!(moved.len(), 5);
    assert_eq!(moved.capacity(), 5);
    assert_eq!(sized.len(), 0);
    assert_eq!(sized.capacity(), 0);

    counted::reset();
    let empty_copy = sized.clone();
    assert_eq!(counts(), counts_of(0, 0, 0));
    assert_eq!(empty_copy.len(), 0);
    assert_eq!(empty_copy.capacity(), 0);
}

#[test]
pub fn move_assign_swaps_without_copies() {
    counted::reset();
    let mut a = DynArray::<Counted>::with_len(2);
    let mut b = DynArray::<Counted>::with_len(4);
    counted::reset();

    a.move_assign(&mut b);
    assert_eq!(counts(), counts_of(0, 0, 0));
    assert_eq!((a.len(), a.capacity()), (4, 4));
    assert_eq!((b.len(), b.capacity()), (2, 2));

    drop(b);
    assert_eq!(counts().dropped, 2);
}

#[test]
pub fn clone_is_deep() {
    let original = DynArray::from([Counted(1), Counted(2)]);
    let mut copy = original.clone();
    copy[0].0 = 10;
    copy.push(Counted(3));
    assert_eq!(original, [Counted(1), Counted(2)]);
    assert_eq!(copy, [Counted(10), Counted(2), Counted(3)]);
}

#[test]
pub fn into_iter_drops_remainder() {
    counted::reset();
    let array = DynArray::<Counted>::with_len(4);
    let mut iter = array.into_iter();
    let first = iter.next();
    assert_eq!(counts().dropped, 0);
    drop(iter);
    assert_eq!(counts().dropped, 3);
    drop(first);
    assert_eq!(counts().dropped, 4);
}
