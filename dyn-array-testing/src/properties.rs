use dyn_array::{DynArray, Error};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Push(u8),
    PopBack,
    Insert(usize, u8),
    Erase(usize),
    Reserve(usize),
    Resize(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u8>().prop_map(Op::Push),
        2 => Just(Op::PopBack),
        2 => (any::<usize>(), any::<u8>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => (0usize..64).prop_map(Op::Reserve),
        1 => (0usize..64).prop_map(Op::Resize),
    ]
}

fn apply(array: &mut DynArray<u8>, model: &mut Vec<u8>, op: Op) -> Result<(), TestCaseError> {
    match op {
        Op::Push(value) => {
            array.push(value);
            model.push(value);
        }
        Op::PopBack => {
            let expected = if model.pop().is_some() {
                Ok(())
            } else {
                Err(Error::EmptyContainer)
            };
            prop_assert_eq!(array.pop_back(), expected);
        }
        Op::Insert(index, value) => {
            let index = index % (model.len() + 1);
            prop_assert_eq!(array.insert(index, value), Ok(index));
            model.insert(index, value);
            prop_assert_eq!(array[index], value);
        }
        Op::Erase(index) => {
            if model.is_empty() {
                prop_assert!(array.erase(index).is_err());
            } else {
                let index = index % model.len();
                prop_assert_eq!(array.erase(index), Ok(index));
                model.remove(index);
            }
        }
        Op::Reserve(capacity) => {
            let before = array.capacity();
            array.reserve(capacity);
            prop_assert_eq!(array.capacity(), before.max(capacity));
        }
        Op::Resize(len) => {
            array.resize(len);
            model.resize(len, 0);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn behaves_like_vec(ops in prop::collection::vec(op(), 0..200)) {
        let mut array = DynArray::new();
        let mut model = Vec::new();
        for op in ops {
            apply(&mut array, &mut model, op)?;
            prop_assert_eq!(&array[..], &model[..]);
            prop_assert!(array.len() <= array.capacity());
        }
    }

    #[test]
    fn clone_from_within_capacity_keeps_capacity(
        target in prop::collection::vec(any::<u16>(), 0..32),
        source in prop::collection::vec(any::<u16>(), 0..32),
        extra in 0usize..32,
    ) {
        let mut target = DynArray::from(target);
        target.reserve(target.len() + extra);
        let source = DynArray::from(source);
        let capacity = target.capacity();
        target.clone_from(&source);
        prop_assert_eq!(&target, &source);
        if source.len() <= capacity {
            prop_assert_eq!(target.capacity(), capacity);
        } else {
            prop_assert!(target.capacity() >= source.len());
        }
    }

    #[test]
    fn clone_is_independent(
        original in prop::collection::vec(any::<u8>(), 0..32),
        value in any::<u8>(),
    ) {
        let original = DynArray::from(original);
        let mut copy = original.clone();
        prop_assert_eq!(copy.capacity(), original.len());
        copy.push(value);
        if let Some(first) = copy.first_mut() {
            *first = first.wrapping_add(1);
        }
        prop_assert_eq!(copy.len(), original.len() + 1);
        prop_assert_ne!(&copy, &original);
    }

    #[test]
    fn take_leaves_source_empty(values in prop::collection::vec(any::<u8>(), 0..32)) {
        let mut source = DynArray::from(values.clone());
        let capacity = source.capacity();
        let taken = source.take();
        prop_assert_eq!(source.len(), 0);
        prop_assert_eq!(source.capacity(), 0);
        prop_assert_eq!(taken.capacity(), capacity);
        prop_assert_eq!(taken, values);
    }
}
