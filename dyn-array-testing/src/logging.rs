use dyn_array::DynArray;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::{cell::RefCell, sync::Once};

thread_local! {
    static CAPTURED: RefCell<Option<Vec<(Level, String)>>> = const { RefCell::new(None) };
}

struct Capture;

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.target().starts_with("dyn_array")
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let _ = CAPTURED.try_with(|captured| {
            if let Some(records) = captured.borrow_mut().as_mut() {
                records.push((record.level(), record.args().to_string()));
            }
        });
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture;
static INIT: Once = Once::new();

/// Runs `f` and returns the records emitted on this thread while it ran.
fn capture(f: impl FnOnce()) -> Vec<(Level, String)> {
    INIT.call_once(|| {
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURED.set(Some(vec![]));
    f();
    CAPTURED.take().unwrap_or_default()
}

#[test]
pub fn reallocation_is_traced() {
    let records = capture(|| {
        let mut array = DynArray::new();
        array.push(1u8);
        array.push(2);
        array.push(3);
    });
    assert_eq!(
        records,
        [
            (Level::Trace, "reallocating 0 elements from 0 to 1 slots".into()),
            (Level::Trace, "reallocating 1 elements from 1 to 2 slots".into()),
            (Level::Trace, "reallocating 2 elements from 2 to 4 slots".into()),
        ]
    );
}

#[test]
pub fn clone_and_shrink_are_recorded() {
    let records = capture(|| {
        let mut array: DynArray<u8> = DynArray::with_capacity(8);
        array.extend([1, 2, 3]);
        let copy = array.clone();
        array.shrink_to_fit();
        assert_eq!(copy, array);
    });
    assert_eq!(
        records,
        [
            (Level::Trace, "cloned 3 elements".into()),
            (Level::Debug, "shrinking from 8 to 3 slots".into()),
        ]
    );
}

#[test]
pub fn within_capacity_is_silent() {
    let records = capture(|| {
        let mut array = DynArray::with_capacity(4);
        for i in 0..4u32 {
            array.push(i);
        }
    });
    assert!(records.is_empty());
}
