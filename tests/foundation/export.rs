//! Integration tests for structural export
//!
//! Tests `to_pairs`, `to_map`, and `to_map_recursive`.

use tabula_foundation::{FieldName, RecordType, TbMap, Value};

fn map(entries: &[(&str, Value)]) -> Value {
    Value::Map(
        entries
            .iter()
            .map(|(k, v)| (Value::from(*k), v.clone()))
            .collect::<TbMap<_, _>>(),
    )
}

#[test]
fn to_pairs_returns_pairs_in_order() {
    let point = RecordType::define(["x", "y"]).unwrap();
    let p = point.construct([1, -1]).unwrap();
    assert_eq!(
        p.to_pairs(),
        vec![
            (FieldName::from("x"), Value::Int(1)),
            (FieldName::from("y"), Value::Int(-1)),
        ]
    );
}

#[test]
fn to_map_returns_fields_and_values() {
    let point = RecordType::define(["x", "y"]).unwrap();
    let m = point.construct([1, -1]).unwrap().to_map();
    assert_eq!(m.len(), 2);
    assert_eq!(m.get("x"), Some(&Value::Int(1)));
    assert_eq!(m.get("y"), Some(&Value::Int(-1)));
}

#[test]
fn to_map_recursive_converts_nested_values() {
    let point = RecordType::define(["x", "y"]).unwrap();
    let rect = RecordType::define(["top_left", "bottom_right"]).unwrap();
    let r = rect
        .construct([
            Value::from(point.construct([0, 1]).unwrap()),
            Value::from(point.construct([1, 0]).unwrap()),
        ])
        .unwrap();

    let m = r.to_map_recursive();
    assert_eq!(
        m.get("top_left"),
        Some(&map(&[("x", Value::Int(0)), ("y", Value::Int(1))]))
    );
    assert_eq!(
        m.get("bottom_right"),
        Some(&map(&[("x", Value::Int(1)), ("y", Value::Int(0))]))
    );
}

#[test]
fn to_map_recursive_converts_values_in_vector_field() {
    let cell = RecordType::define(["alive"]).unwrap();
    let board = RecordType::define(["cells"]).unwrap();
    let b = board
        .construct([Value::from(vec![
            Value::from(cell.construct([false]).unwrap()),
            Value::from(cell.construct([true]).unwrap()),
        ])])
        .unwrap();

    let expected = Value::from(vec![
        map(&[("alive", Value::Bool(false))]),
        map(&[("alive", Value::Bool(true))]),
    ]);
    assert_eq!(b.to_map_recursive().get("cells"), Some(&expected));
}

#[test]
fn to_map_recursive_converts_values_in_map_field() {
    let cell = RecordType::define(["alive"]).unwrap();
    let board = RecordType::define(["cells"]).unwrap();
    let b = board
        .construct([map(&[
            ("mine", Value::from(cell.construct([true]).unwrap())),
            ("yours", Value::from(cell.construct([false]).unwrap())),
        ])])
        .unwrap();

    let expected = map(&[
        ("mine", map(&[("alive", Value::Bool(true))])),
        ("yours", map(&[("alive", Value::Bool(false))])),
    ]);
    assert_eq!(b.to_map_recursive().get("cells"), Some(&expected));
}

#[test]
fn to_map_recursive_leaves_nil_and_false() {
    let pair = RecordType::define(["a", "b"]).unwrap();
    let p = pair.construct([Value::Nil, Value::Bool(false)]).unwrap();
    let m = p.to_map_recursive();
    assert_eq!(m.get("a"), Some(&Value::Nil));
    assert_eq!(m.get("b"), Some(&Value::Bool(false)));
}

#[test]
fn to_map_does_not_convert() {
    let cell = RecordType::define(["alive"]).unwrap();
    let board = RecordType::define(["cells"]).unwrap();
    let c = cell.construct([true]).unwrap();
    let b = board.construct([Value::from(vec![Value::from(c.clone())])]).unwrap();
    assert_eq!(
        b.to_map().get("cells"),
        Some(&Value::from(vec![Value::Record(c)]))
    );
}
