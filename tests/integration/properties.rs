//! Property tests for record invariants

use std::collections::HashSet;

use proptest::prelude::*;
use tabula::foundation::{ErrorKind, Record, RecordType, Value};

fn field_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{1,6}", 1..6).prop_map(|set| set.into_iter().collect())
}

fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        "[a-zA-Z0-9]{0,8}".prop_map(|s| Value::from(s.as_str())),
    ]
}

/// A schema together with one matching value per field.
fn schema_and_values() -> impl Strategy<Value = (Vec<String>, Vec<Value>)> {
    field_names().prop_flat_map(|names| {
        let n = names.len();
        (Just(names), prop::collection::vec(scalar_value(), n))
    })
}

proptest! {
    #[test]
    fn construct_binds_every_field((names, values) in schema_and_values()) {
        let ty = RecordType::define(&names).unwrap();
        let r = ty.construct(values.clone()).unwrap();
        for (i, name) in names.iter().enumerate() {
            prop_assert_eq!(r.get(name), Some(&values[i]));
            prop_assert_eq!(r.field(i), Some(&values[i]));
        }
    }

    #[test]
    fn construct_wrong_arity_fails(
        (names, mut values) in schema_and_values(),
        extra in 1usize..3,
    ) {
        let ty = RecordType::define(&names).unwrap();
        values.extend(std::iter::repeat_n(Value::Nil, extra));
        let err = ty.construct(values.clone()).unwrap_err();
        let arity_matches = matches!(
            err.kind,
            ErrorKind::Arity { expected, actual } if expected == names.len() && actual == values.len()
        );
        prop_assert!(arity_matches);
    }

    #[test]
    fn equality_is_fieldwise((names, values) in schema_and_values(), other in scalar_value()) {
        let ty = RecordType::define(&names).unwrap();
        let a = ty.construct(values.clone()).unwrap();
        let b = ty.construct(values.clone()).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.hash_code(), b.hash_code());

        let mut changed = values.clone();
        changed[0] = other.clone();
        let c = ty.construct(changed).unwrap();
        prop_assert_eq!(a == c, values[0] == other);
    }

    #[test]
    fn equal_records_have_equal_hashes((names, values) in schema_and_values()) {
        let ty = RecordType::define(&names).unwrap();
        let set: HashSet<Record> = (0..3).map(|_| ty.construct(values.clone()).unwrap()).collect();
        prop_assert_eq!(set.len(), 1);
    }

    #[test]
    fn distinct_types_never_equal((names, values) in schema_and_values()) {
        let t1 = RecordType::define(&names).unwrap();
        let t2 = RecordType::define(&names).unwrap();
        prop_assert_ne!(t1.construct(values.clone()).unwrap(), t2.construct(values).unwrap());
    }

    #[test]
    fn with_empty_is_identity((names, values) in schema_and_values()) {
        let a = RecordType::define(&names).unwrap().construct(values).unwrap();
        let b = a.with(Vec::<(String, Value)>::new()).unwrap();
        prop_assert!(Record::ptr_eq(&a, &b));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn with_overrides_only_named_fields(
        (names, values) in schema_and_values(),
        replacement in scalar_value(),
        pick in any::<prop::sample::Index>(),
    ) {
        let ty = RecordType::define(&names).unwrap();
        let a = ty.construct(values.clone()).unwrap();
        let k = pick.index(names.len());
        let b = a.with([(names[k].as_str(), replacement.clone())]).unwrap();

        for (i, name) in names.iter().enumerate() {
            let expected = if i == k { &replacement } else { &values[i] };
            prop_assert_eq!(b.get(name), Some(expected));
        }

        let mut fresh = values;
        fresh[k] = replacement;
        let fresh = ty.construct(fresh).unwrap();
        prop_assert_eq!(b.hash_code(), fresh.hash_code());
        prop_assert_eq!(b, fresh);
    }

    #[test]
    fn construct_from_map_matches_positional((names, values) in schema_and_values()) {
        let ty = RecordType::define(&names).unwrap();
        let pairs: Vec<(String, Value)> =
            names.iter().cloned().zip(values.iter().cloned()).rev().collect();
        prop_assert_eq!(
            ty.construct_from_map(pairs).unwrap(),
            ty.construct(values).unwrap()
        );
    }

    #[test]
    fn to_pairs_round_trips_through_map((names, values) in schema_and_values()) {
        let ty = RecordType::define(&names).unwrap();
        let r = ty.construct(values).unwrap();
        prop_assert_eq!(ty.construct_from_map(r.to_pairs()).unwrap(), r);
    }
}
