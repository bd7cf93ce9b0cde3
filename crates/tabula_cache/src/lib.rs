//! Memoized record types for Tabula.
//!
//! This crate provides:
//! - [`TypeCache`] - One record type per field-name set, shared across calls
//! - [`CacheConfig`] - Naming and tracing options for the cache
//! - [`from`] - Derives a record from map-like data via the process-wide cache

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cache;
pub mod config;

pub use cache::{TypeCache, from, global};
pub use config::CacheConfig;
