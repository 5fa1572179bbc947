use dyn_array::{DynArray, Error, dyn_array};

#[derive(Debug, PartialEq)]
struct StrangeConstructor {
    x: i32,
    y: i32,
}

impl StrangeConstructor {
    fn new(r: &mut i32, cr: &i32) -> Self {
        Self { x: *r, y: *cr }
    }
}

#[test]
pub fn insert() {
    let mut array = DynArray::new();
    array.push(1);
    array.push(2);
    let index = array.insert(0, 0).unwrap();
    assert_eq!(array, [0, 1, 2]);
    assert_eq!(index, 0);

    let index = array.insert(array.len(), 3).unwrap();
    assert_eq!(array, [0, 1, 2, 3]);
    assert_eq!(index + 1, array.len());
}

#[test]
pub fn insert_with_reserve() {
    let mut array = DynArray::new();
    array.reserve(5);
    array.push(1);
    array.push(2);
    let ptr = array.as_ptr();

    let index = array.insert(0, 0).unwrap();
    assert_eq!(array, [0, 1, 2]);
    assert_eq!(index, 0);

    let index = array.insert(array.len(), 3).unwrap();
    assert_eq!(array, [0, 1, 2, 3]);
    assert_eq!(index + 1, array.len());

    let index = array.insert(2, 10).unwrap();
    assert_eq!(array, [0, 1, 10, 2, 3]);
    assert_eq!(index + 3, array.len());
    assert_eq!(array.as_ptr(), ptr);
}

#[test]
pub fn emplace() {
    let mut array = DynArray::new();
    let mut x = 1;
    let y = 2;
    let mut z = 3;
    let z_copy = z;
    array.push(StrangeConstructor::new(&mut z, &z_copy));
    let index = array
        .emplace(0, || StrangeConstructor::new(&mut x, &y))
        .unwrap();
    assert_eq!(index, 0);
    assert_eq!(
        array,
        [
            StrangeConstructor { x: 1, y: 2 },
            StrangeConstructor { x: 3, y: 3 }
        ]
    );
}

#[test]
pub fn erase() {
    let mut array = dyn_array![1, 2, 3];
    let index = array.erase(1).unwrap();
    assert_eq!(array, [1, 3]);
    assert_eq!(index, 1);
    assert_eq!(array[index], 3);
}

#[test]
pub fn erase_last_returns_end() {
    let mut array = dyn_array![1, 2, 3];
    let index = array.erase(2).unwrap();
    assert_eq!(index, array.len());
    assert_eq!(array.get(index), None);
}

#[test]
pub fn erase_keeps_capacity() {
    let mut array: DynArray<u8> = (0..8).collect();
    while !array.is_empty() {
        array.erase(0).unwrap();
    }
    assert_eq!(array.capacity(), 8);
    assert_eq!(array.erase(0), Err(Error::OutOfRange { index: 0, len: 0 }));
}

#[test]
pub fn insert_at_full_capacity_grows() {
    let mut array: DynArray<u8> = dyn_array![1, 2];
    assert_eq!(array.capacity(), 2);
    array.insert(1, 9).unwrap();
    assert_eq!(array, [1, 9, 2]);
    assert_eq!(array.capacity(), 4);
}

#[test]
pub fn unchecked_access() {
    let array: DynArray<u8> = dyn_array![4, 5, 6];
    // SAFETY: in bounds.
    assert_eq!(unsafe { *array.get_unchecked(1) }, 5);
    assert_eq!(array.get(3), None);
}

#[test]
#[should_panic]
pub fn checked_index_panics() {
    let array: DynArray<u8> = dyn_array![4, 5, 6];
    let _ = array[3];
}
