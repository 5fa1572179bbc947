use dyn_array::DynArray;
use std::{
    cell::{Cell, RefCell},
    panic::{AssertUnwindSafe, catch_unwind},
};

thread_local! {
    static FUSE: Cell<Option<usize>> = const { Cell::new(None) };
    static NEXT_ID: Cell<u32> = const { Cell::new(0) };
    static DROPPED: RefCell<Vec<u32>> = const { RefCell::new(Vec::new()) };
}

/// Lets `n` more constructions or assignments succeed, then panics once.
fn arm(n: usize) {
    FUSE.set(Some(n));
}

fn reset() {
    FUSE.set(None);
    NEXT_ID.set(0);
    DROPPED.with_borrow_mut(|dropped| dropped.clear());
}

fn dropped() -> Vec<u32> {
    DROPPED.with_borrow(|dropped| dropped.clone())
}

fn tick() {
    match FUSE.get() {
        Some(0) => {
            FUSE.set(None);
            panic!("fuse blown");
        }
        Some(n) => FUSE.set(Some(n - 1)),
        None => {}
    }
}

fn next_id() -> u32 {
    let id = NEXT_ID.get();
    NEXT_ID.set(id + 1);
    id
}

/// An element whose construction can be made to panic on demand.
#[derive(Debug, PartialEq, Eq)]
struct Fragile {
    id: u32,
    value: u32,
}

impl Default for Fragile {
    fn default() -> Self {
        tick();
        let id = next_id();
        Self { id, value: id }
    }
}

impl Clone for Fragile {
    fn clone(&self) -> Self {
        tick();
        Self {
            id: next_id(),
            value: self.value,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        tick();
        self.value = source.value;
    }
}

impl Drop for Fragile {
    fn drop(&mut self) {
        DROPPED.with_borrow_mut(|dropped| dropped.push(self.id));
    }
}

fn ids(array: &DynArray<Fragile>) -> Vec<u32> {
    array.iter().map(|element| element.id).collect()
}

#[test]
pub fn sized_construction_unwinds_in_reverse() {
    reset();
    arm(3);
    let result = catch_unwind(|| DynArray::<Fragile>::with_len(5));
    assert!(result.is_err());
    assert_eq!(dropped(), [2, 1, 0]);
}

#[test]
pub fn failed_clone_leaves_source() {
    reset();
    let source = DynArray::<Fragile>::with_len(4);
    arm(2);
    let result = catch_unwind(AssertUnwindSafe(|| source.clone()));
    assert!(result.is_err());
    assert_eq!(dropped(), [5, 4]);
    assert_eq!(ids(&source), [0, 1, 2, 3]);
}

#[test]
pub fn failed_reallocating_clone_from_is_strong() {
    reset();
    let mut target = DynArray::<Fragile>::with_len(2);
    let source = DynArray::<Fragile>::with_len(5);
    arm(3);
    let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    assert!(result.is_err());
    assert_eq!(ids(&target), [0, 1]);
    assert_eq!(target.capacity(), 2);
    assert_eq!(dropped(), [9, 8, 7]);
}

#[test]
pub fn failed_in_place_clone_from_keeps_len_consistent() {
    reset();
    let mut target = DynArray::with_capacity(6);
    target.push(Fragile::default());
    let source = DynArray::<Fragile>::with_len(4);
    arm(2);
    let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    assert!(result.is_err());

    // One assignment and one clone completed before the panic.
    assert_eq!(target.len(), 2);
    assert_eq!(target[0].value, source[0].value);
    assert_eq!(target[1].value, source[1].value);
    assert_eq!(target.capacity(), 6);

    drop(target);
    assert_eq!(dropped(), [0, 5]);
}

#[test]
pub fn failed_resize_keeps_constructed() {
    reset();
    let mut array = DynArray::<Fragile>::with_len(1);
    arm(2);
    let result = catch_unwind(AssertUnwindSafe(|| array.resize(5)));
    assert!(result.is_err());
    assert_eq!(array.len(), 3);
    assert_eq!(array.capacity(), 5);
    assert!(dropped().is_empty());
}

#[test]
pub fn failed_emplace_leaves_len() {
    reset();
    let mut array = DynArray::<Fragile>::with_len(2);
    arm(0);
    let result = catch_unwind(AssertUnwindSafe(|| {
        array.emplace_back(Fragile::default);
    }));
    assert!(result.is_err());
    assert_eq!(ids(&array), [0, 1]);
}

#[test]
pub fn failed_insert_leaves_order() {
    reset();
    let mut array = DynArray::<Fragile>::with_len(3);
    arm(0);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let _ = array.emplace(1, Fragile::default);
    }));
    assert!(result.is_err());
    assert_eq!(ids(&array), [0, 1, 2]);
}
