//! Immutable record types, values, and persistent collections for Tabula.
//!
//! This crate provides:
//! - [`RecordType`] - The value factory: generates nominal record types from field names
//! - [`Record`] - Immutable instances with structural equality and hashing
//! - [`Value`] - The dynamic value type held in record fields
//! - [`FieldSchema`] - The ordered field list shared by a record type
//! - [`Extension`] - Behavior composed into a record type at generation time
//! - [`Error`] - Rich error types with context
//! - Persistent collections ([`TbVec`], [`TbSet`], [`TbMap`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod coerce;
pub mod collections;
pub mod error;
mod export;
pub mod extension;
pub mod field;
pub mod record;
pub mod record_type;
#[cfg(feature = "serde")]
mod serialize;
pub mod value;

pub use coerce::AsFieldMap;
pub use collections::{TbMap, TbSet, TbVec};
pub use error::{Error, ErrorContext, ErrorKind, FieldList, Result};
pub use extension::{Extension, MethodTable, NativeMethod};
pub use field::{FieldName, FieldSchema};
pub use record::Record;
pub use record_type::{ANONYMOUS_TYPE_NAME, RecordType, RecordTypeBuilder, TypeId};
pub use value::Value;
