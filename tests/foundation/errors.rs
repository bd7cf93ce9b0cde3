//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use tabula_foundation::{Error, ErrorContext, ErrorKind, FieldName, RecordType, Value};

#[test]
fn error_arity_display() {
    let err = Error::arity(2, 3);
    assert_eq!(format!("{err}"), "wrong number of arguments, 3 for 2");
}

#[test]
fn error_uncoercible_display() {
    let err = Error::uncoercible("int");
    assert!(matches!(err.kind, ErrorKind::UncoercibleInput { .. }));
    assert!(err.to_string().contains("int"));
}

#[test]
fn error_missing_lists_every_field() {
    let ty = RecordType::define(["a", "b", "c"]).unwrap();
    let err = ty.construct_from_map([("b", 1)]).unwrap_err();
    if let ErrorKind::MissingFields { missing, supplied } = &err.kind {
        assert_eq!(
            missing.as_slice(),
            &[FieldName::from("a"), FieldName::from("c")]
        );
        assert_eq!(supplied.as_slice(), &[FieldName::from("b")]);
    } else {
        panic!("expected MissingFields, got {:?}", err.kind);
    }
}

#[test]
fn error_unexpected_reports_missing_too() {
    let ty = RecordType::define(["a", "b"]).unwrap();
    let err = ty
        .construct_from_map([("a", Value::Int(1)), ("q", Value::Int(2)), ("r", Value::Int(3))])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected field names: [:q, :r]; missing field names: [:b]"
    );
}

#[test]
fn error_context_names_type_and_operation() {
    let ty = RecordType::builder(["x"]).name("Solo").build().unwrap();
    let err = ty.construct([1, 2]).unwrap_err();
    let ctx = err.context.expect("construct errors carry context");
    assert_eq!(ctx.type_name.as_deref(), Some("Solo"));
    assert_eq!(ctx.operation, Some("construct"));
}

#[test]
fn error_message_omits_context() {
    let ty = RecordType::builder(["x"]).name("Solo").build().unwrap();
    let err = ty.construct([1]).unwrap().with([("y", 3)]).unwrap_err();
    assert_eq!(err.to_string(), err.kind.to_string());
    assert_eq!(err.context.map(|c| c.to_string()).as_deref(), Some("in Solo::with"));
}

#[test]
fn error_context_builder() {
    let ctx = ErrorContext::new().with_operation("with");
    assert_eq!(ctx.to_string(), "in with");
    assert_eq!(ErrorContext::new().to_string(), "");
}
