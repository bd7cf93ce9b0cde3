//! Integration tests for Layer 0: Foundation
//!
//! Tests for record types, records, values, export, and errors.

mod errors;
mod export;
mod values;
