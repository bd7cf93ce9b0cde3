//! Error types for record type generation and record construction.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::field::FieldName;

/// The main error type for Tabula operations.
///
/// The message is the kind's message alone. `context` is not rendered by
/// `Display`; it is there for callers that match on the failing type name or
/// operation.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid schema error.
    #[must_use]
    pub fn invalid_schema(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSchema {
            reason: reason.into(),
        })
    }

    /// Creates an arity error.
    #[must_use]
    pub fn arity(expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::Arity { expected, actual })
    }

    /// Creates an unexpected field error.
    ///
    /// `missing` may be empty; when it is not, the message reports both sets.
    #[must_use]
    pub fn unexpected_fields(unexpected: Vec<FieldName>, missing: Vec<FieldName>) -> Self {
        Self::new(ErrorKind::UnexpectedFields {
            unexpected: FieldList(unexpected),
            missing: FieldList(missing),
        })
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_fields(missing: Vec<FieldName>, supplied: Vec<FieldName>) -> Self {
        Self::new(ErrorKind::MissingFields {
            missing: FieldList(missing),
            supplied: FieldList(supplied),
        })
    }

    /// Creates an uncoercible input error.
    #[must_use]
    pub fn uncoercible(found: impl Into<String>) -> Self {
        Self::new(ErrorKind::UncoercibleInput {
            found: found.into(),
        })
    }

    /// Creates an unknown method error.
    #[must_use]
    pub fn unknown_method(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownMethod {
            type_name: type_name.into(),
            method: method.into(),
        })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Type generation was given an unusable field list.
    #[error("invalid schema: {reason}")]
    InvalidSchema {
        /// What was wrong with the field list.
        reason: String,
    },

    /// Positional construction or `copy` got the wrong number of values.
    #[error("wrong number of arguments, {actual} for {expected}")]
    Arity {
        /// Number of fields in the schema.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// Keyed construction or `with` referenced fields outside the schema.
    #[error("unexpected field names: {unexpected}{}", missing_suffix(.missing))]
    UnexpectedFields {
        /// Every key not present in the schema.
        unexpected: FieldList,
        /// Schema fields that were also absent (may be empty).
        missing: FieldList,
    },

    /// Keyed construction omitted schema fields.
    #[error("missing field names: {missing} (got keys {supplied})")]
    MissingFields {
        /// Every schema field absent from the input.
        missing: FieldList,
        /// The keys that were actually supplied.
        supplied: FieldList,
    },

    /// Input could not be converted into a field map.
    #[error("cannot derive a record from {found}: no field map conversion")]
    UncoercibleInput {
        /// Description of the offending input.
        found: String,
    },

    /// An extension method was called that the record type does not define.
    #[error("undefined method `{method}` for {type_name}")]
    UnknownMethod {
        /// Name of the record type.
        type_name: String,
        /// The method that was requested.
        method: String,
    },
}

fn missing_suffix(missing: &FieldList) -> String {
    if missing.0.is_empty() {
        String::new()
    } else {
        format!("; missing field names: {missing}")
    }
}

/// An ordered list of field names carried by an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldList(pub Vec<FieldName>);

impl FieldList {
    /// Returns the names as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldName] {
        &self.0
    }
}

impl fmt::Display for FieldList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, ":{name}")?;
        }
        write!(f, "]")
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the record type involved.
    pub type_name: Option<String>,
    /// The operation that failed (e.g. `construct`, `with`).
    pub operation: Option<&'static str>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the record type name.
    #[must_use]
    pub fn with_type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = Some(name.into());
        self
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        self.operation = Some(operation);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.type_name, self.operation) {
            (Some(name), Some(op)) => write!(f, "in {name}::{op}"),
            (Some(name), None) => write!(f, "in {name}"),
            (None, Some(op)) => write!(f, "in {op}"),
            (None, None) => Ok(()),
        }
    }
}

/// Result type alias using the Tabula error.
pub type Result<T> = std::result::Result<T, Error>;
