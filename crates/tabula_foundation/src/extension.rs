//! Behavior attached to a record type at generation time.
//!
//! A record type owns no behavior beyond construction, equality and export.
//! Anything else (custom inspect output, derived methods) is composed in
//! through an [`Extension`] handed to the type builder. Extensions only ever
//! see `&Record`, so they cannot reach into field storage.

use std::collections::HashMap;
use std::fmt;

use crate::error::Result;
use crate::record::Record;
use crate::value::Value;

/// Extra behavior attached to a generated record type.
pub trait Extension: Send + Sync {
    /// Overrides the one-line inspect form of a record.
    ///
    /// Returning `None` falls back to `#<Name field=value, ...>`.
    fn inspect(&self, _record: &Record) -> Option<String> {
        None
    }

    /// Invokes `method` on `record`.
    ///
    /// Returns `None` if this extension does not define `method`.
    fn call(&self, _method: &str, _record: &Record, _args: &[Value]) -> Option<Result<Value>> {
        None
    }

    /// Returns true if this extension defines `method`.
    fn responds_to(&self, _method: &str) -> bool {
        false
    }
}

/// Native method callable on a record.
#[derive(Clone, Copy)]
pub struct NativeMethod {
    /// Method name.
    pub name: &'static str,
    /// Function pointer.
    pub func: fn(&Record, &[Value]) -> Result<Value>,
}

impl fmt::Debug for NativeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeMethod({})", self.name)
    }
}

/// An [`Extension`] assembled from named native functions.
#[derive(Clone, Default)]
pub struct MethodTable {
    methods: HashMap<&'static str, NativeMethod>,
    inspect: Option<fn(&Record) -> String>,
}

impl MethodTable {
    /// Creates an empty method table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a method. A later method with the same name replaces the earlier one.
    #[must_use]
    pub fn method(mut self, name: &'static str, func: fn(&Record, &[Value]) -> Result<Value>) -> Self {
        self.methods.insert(name, NativeMethod { name, func });
        self
    }

    /// Sets a custom inspect function.
    #[must_use]
    pub fn inspect_with(mut self, func: fn(&Record) -> String) -> Self {
        self.inspect = Some(func);
        self
    }

    /// Returns the method names, sorted.
    #[must_use]
    pub fn method_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.methods.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Extension for MethodTable {
    fn inspect(&self, record: &Record) -> Option<String> {
        self.inspect.map(|func| func(record))
    }

    fn call(&self, method: &str, record: &Record, args: &[Value]) -> Option<Result<Value>> {
        self.methods
            .get(method)
            .map(|native| (native.func)(record, args))
    }

    fn responds_to(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }
}

impl fmt::Debug for MethodTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodTable")
            .field("methods", &self.method_names())
            .field("inspect", &self.inspect.is_some())
            .finish()
    }
}
