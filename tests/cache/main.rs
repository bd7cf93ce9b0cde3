//! Integration tests for Layer 1: Cache
//!
//! Tests type derivation from map-like data and cache sharing.

mod concurrency;
