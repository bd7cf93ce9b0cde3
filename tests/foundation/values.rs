//! Integration tests for Value types
//!
//! Tests Value variants, equality, hashing, and display.

use std::collections::HashSet;
use std::sync::Arc;

use tabula_foundation::{RecordType, TbMap, TbSet, TbVec, Value};

// =============================================================================
// Value Equality
// =============================================================================

#[test]
fn value_equality_scalars() {
    assert_eq!(Value::Nil, Value::Nil);
    assert_eq!(Value::Bool(true), Value::Bool(true));
    assert_ne!(Value::Bool(true), Value::Bool(false));
    assert_eq!(Value::Int(42), Value::Int(42));
    assert_ne!(Value::Int(42), Value::Float(42.0));
}

#[test]
fn value_equality_string() {
    assert_eq!(
        Value::String(Arc::from("hello")),
        Value::String(Arc::from("hello"))
    );
    assert_ne!(Value::from("hello"), Value::from("world"));
}

#[test]
fn value_equality_collections() {
    let a: TbVec<Value> = vec![Value::Int(1), Value::Int(2)].into_iter().collect();
    let b: TbVec<Value> = vec![Value::Int(1), Value::Int(2)].into_iter().collect();
    assert_eq!(Value::Vec(a), Value::Vec(b));

    let s1: TbSet<Value> = [1, 2, 3].into_iter().map(Value::Int).collect();
    let s2: TbSet<Value> = [3, 2, 1].into_iter().map(Value::Int).collect();
    assert_eq!(Value::Set(s1), Value::Set(s2));
}

#[test]
fn value_equality_records() {
    let cell = RecordType::define(["alive"]).unwrap();
    assert_eq!(
        Value::from(cell.construct([true]).unwrap()),
        Value::from(cell.construct([true]).unwrap())
    );
    assert_ne!(
        Value::from(cell.construct([true]).unwrap()),
        Value::from(cell.construct([false]).unwrap())
    );
}

// =============================================================================
// Value Hashing (for use in HashSet/HashMap)
// =============================================================================

#[test]
fn value_hash_consistency() {
    let mut set = HashSet::new();
    set.insert(Value::Int(42));
    assert!(set.contains(&Value::Int(42)));
    assert!(!set.contains(&Value::Int(43)));
}

#[test]
fn value_hash_map_ignores_insertion_order() {
    let forward: TbMap<Value, Value> = (0..20).map(|i| (Value::Int(i), Value::Int(i))).collect();
    let backward: TbMap<Value, Value> =
        (0..20).rev().map(|i| (Value::Int(i), Value::Int(i))).collect();

    let mut set = HashSet::new();
    set.insert(Value::Map(forward));
    assert!(set.contains(&Value::Map(backward)));
}

#[test]
fn value_hash_record_field() {
    let point = RecordType::define(["x", "y"]).unwrap();
    let mut set = HashSet::new();
    set.insert(Value::from(point.construct([0, 0]).unwrap()));
    assert!(set.contains(&Value::from(point.construct([0, 0]).unwrap())));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn value_debug_forms() {
    assert_eq!(format!("{:?}", Value::Nil), "nil");
    assert_eq!(format!("{:?}", Value::Int(-1)), "-1");
    assert_eq!(format!("{:?}", Value::from("USD")), "\"USD\"");
    assert_eq!(format!("{:?}", Value::from(vec![1, 2])), "[1, 2]");
}

#[test]
fn value_display_record_uses_inspect() {
    let point = RecordType::builder(["x", "y"]).name("Point").build().unwrap();
    let v = Value::from(point.construct([0, 1]).unwrap());
    assert_eq!(v.to_string(), "#<Point x=0, y=1>");
}
