use dyn_array::{DynArray, dyn_array};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
pub fn serializes_as_sequence() {
    let array = dyn_array![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }];
    let json = serde_json::to_string(&array).unwrap();
    assert_eq!(json, r#"[{"x":1,"y":2},{"x":3,"y":4}]"#);
}

#[test]
pub fn deserializes_from_sequence() {
    let json = r#"[{"x":5,"y":6},{"x":7,"y":8},{"x":9,"y":10}]"#;
    let array: DynArray<Point> = serde_json::from_str(json).unwrap();
    assert_eq!(
        array,
        [
            Point { x: 5, y: 6 },
            Point { x: 7, y: 8 },
            Point { x: 9, y: 10 }
        ]
    );
}

#[test]
pub fn owned_strings() {
    let array = dyn_array![String::from("first"), String::from("second")];
    let json = serde_json::to_string(&array).unwrap();
    let back: DynArray<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, array);
}

#[test]
pub fn empty() {
    let array = DynArray::<Point>::new();
    assert_eq!(serde_json::to_string(&array).unwrap(), "[]");
    let back: DynArray<Point> = serde_json::from_str("[]").unwrap();
    assert!(back.is_empty());
    assert_eq!(back.capacity(), 0);
}

#[test]
pub fn rejects_non_sequence() {
    let result = serde_json::from_str::<DynArray<Point>>(r#"{"x":1,"y":2}"#);
    assert!(result.is_err());
}
