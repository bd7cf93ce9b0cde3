//! Immutable record instances.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::field::{FieldName, FieldSchema};
use crate::record_type::RecordType;
use crate::value::Value;

struct RecordData {
    ty: RecordType,
    values: Box<[Value]>,
    hash: u64,
}

/// An instance of a generated record type.
///
/// A record holds exactly one value per schema field. There are no setters:
/// values are fixed at construction and every "modification" returns a new
/// record. Cloning is O(1) and shares the same instance.
///
/// Equality is structural within a type. Records of different types are
/// never equal, even if their field names and values coincide.
#[derive(Clone)]
pub struct Record(Arc<RecordData>);

impl Record {
    /// Builds a record from already validated parts.
    pub(crate) fn from_parts(ty: RecordType, values: Vec<Value>) -> Self {
        debug_assert_eq!(values.len(), ty.arity());
        let hash = structural_hash(&ty, &values);
        Self(Arc::new(RecordData {
            ty,
            values: values.into_boxed_slice(),
            hash,
        }))
    }

    /// Returns the record's type.
    #[must_use]
    pub fn record_type(&self) -> &RecordType {
        &self.0.ty
    }

    /// Returns the record's field schema.
    #[must_use]
    pub fn schema(&self) -> &FieldSchema {
        self.0.ty.schema()
    }

    /// Returns the field values in schema order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.0.values
    }

    /// Returns the value of the named field.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.schema().index_of(name).map(|i| &self.0.values[i])
    }

    /// Returns the value of the field at `index` in schema order.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&Value> {
        self.0.values.get(index)
    }

    /// Returns `(name, value)` pairs in schema order without copying.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &Value)> {
        self.schema().iter().zip(self.0.values.iter())
    }

    /// Returns the structural hash computed at construction.
    #[must_use]
    pub fn hash_code(&self) -> u64 {
        self.0.hash
    }

    /// Returns true if both handles refer to the same instance.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Returns a record with the named fields replaced.
    ///
    /// With no overrides this returns the same instance. Otherwise the result
    /// equals a fresh keyed construction from the merged field map.
    ///
    /// # Errors
    ///
    /// Returns an unexpected-field error naming every key outside the schema.
    pub fn with<I, K, V>(&self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<FieldName>,
        V: Into<Value>,
    {
        let overrides: Vec<(FieldName, Value)> = overrides
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        if overrides.is_empty() {
            return Ok(self.clone());
        }

        let schema = self.schema();
        let mut unexpected: Vec<FieldName> = Vec::new();
        for (key, _) in &overrides {
            if !schema.contains(key.as_str()) && !unexpected.contains(key) {
                unexpected.push(key.clone());
            }
        }
        if !unexpected.is_empty() {
            return Err(Error::unexpected_fields(unexpected, Vec::new())
                .with_context(self.0.ty.error_context("with")));
        }

        let mut values = self.0.values.to_vec();
        for (key, value) in overrides {
            if let Some(i) = schema.index_of(key.as_str()) {
                values[i] = value;
            }
        }
        Ok(Self::from_parts(self.0.ty.clone(), values))
    }

    /// Returns a record whose leading fields are replaced positionally.
    ///
    /// Fields past the supplied values keep their current values. With no
    /// values this returns the same instance.
    ///
    /// # Errors
    ///
    /// Returns an arity error if more values are given than there are fields.
    pub fn copy<I, V>(&self, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let leading: Vec<Value> = values.into_iter().map(Into::into).collect();
        let arity = self.0.ty.arity();
        if leading.len() > arity {
            return Err(Error::arity(arity, leading.len())
                .with_context(self.0.ty.error_context("copy")));
        }
        if leading.is_empty() {
            return Ok(self.clone());
        }

        let mut values = self.0.values.to_vec();
        for (slot, value) in values.iter_mut().zip(leading) {
            *slot = value;
        }
        Ok(Self::from_parts(self.0.ty.clone(), values))
    }

    /// Calls a method provided by the type's extension.
    ///
    /// # Errors
    ///
    /// Returns an unknown-method error if the type has no such method, or
    /// whatever error the method itself returns.
    pub fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        self.0
            .ty
            .extension()
            .and_then(|ext| ext.call(method, self, args))
            .unwrap_or_else(|| Err(Error::unknown_method(self.0.ty.name(), method)))
    }

    /// Returns true if the type's extension defines `method`.
    #[must_use]
    pub fn responds_to(&self, method: &str) -> bool {
        self.0
            .ty
            .extension()
            .is_some_and(|ext| ext.responds_to(method))
    }

    /// Writes the default one-line form, ignoring any extension override.
    ///
    /// # Errors
    ///
    /// Propagates formatter errors.
    pub fn write_canonical(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "#<{}", self.0.ty.name())?;
        for (i, (name, value)) in self.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{name}={value:?}")?;
        }
        write!(f, ">")
    }
}

/// Seeds with the type id, then folds each value in schema order.
fn structural_hash(ty: &RecordType, values: &[Value]) -> u64 {
    let mut hasher = DefaultHasher::new();
    ty.id().hash(&mut hasher);
    for value in values {
        value.hash(&mut hasher);
    }
    hasher.finish()
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
            || (self.0.ty == other.0.ty
                && self.0.hash == other.0.hash
                && self.0.values == other.0.values)
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.hash);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(custom) = self.0.ty.extension().and_then(|ext| ext.inspect(self)) {
            return f.write_str(&custom);
        }
        self.write_canonical(f)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
