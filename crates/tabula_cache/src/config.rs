//! Configuration for the type cache.

use std::sync::Arc;

/// Configuration for a [`TypeCache`](crate::TypeCache).
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// Display name given to record types generated by the cache.
    pub type_name: Arc<str>,

    /// Number of entries to preallocate.
    pub initial_capacity: usize,

    /// Emit a trace event on every cache hit (misses are always logged at debug).
    pub trace_hits: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            type_name: Arc::from("Value"),
            initial_capacity: 16,
            trace_hits: false,
        }
    }
}

impl CacheConfig {
    /// Creates a configuration for debugging, tracing every lookup.
    #[must_use]
    pub fn debug() -> Self {
        Self {
            trace_hits: true,
            ..Self::default()
        }
    }

    /// Builder method to set the generated type name.
    #[must_use]
    pub fn with_type_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.type_name = name.into();
        self
    }

    /// Builder method to set the initial capacity.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Builder method to toggle hit tracing.
    #[must_use]
    pub fn with_trace_hits(mut self, trace_hits: bool) -> Self {
        self.trace_hits = trace_hits;
        self
    }
}
