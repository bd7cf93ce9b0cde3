//! Tabula - Immutable value types
//!
//! This crate re-exports all layers of the Tabula system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: tabula_cache      — Type cache keyed by field-name set, `from`
//! Layer 0: tabula_foundation — RecordType, Record, Value, Error
//! ```
//!
//! # Example
//!
//! ```
//! use tabula::foundation::{RecordType, Value};
//!
//! let point = RecordType::builder(["x", "y"]).name("Point").build().unwrap();
//! let p = point.construct([0, 1]).unwrap();
//! assert_eq!(p.to_string(), "#<Point x=0, y=1>");
//!
//! let q = p.with([("y", 5)]).unwrap();
//! assert_eq!(q, point.construct([0, 5]).unwrap());
//! assert_eq!(p.get("y"), Some(&Value::Int(1)));
//! ```

pub use tabula_cache as cache;
pub use tabula_foundation as foundation;
