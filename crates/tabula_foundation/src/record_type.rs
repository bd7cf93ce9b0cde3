//! Record type descriptors: the value factory.
//!
//! A [`RecordType`] is minted at runtime from a list of field names. Every
//! call to [`RecordType::define`] or [`RecordTypeBuilder::build`] yields a new
//! nominal type, distinct from all others even when the field names match.
//! Deduplication by field set is the job of the type cache layer.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Error, ErrorContext, Result};
use crate::extension::Extension;
use crate::field::{FieldName, FieldSchema};
use crate::record::Record;
use crate::value::Value;

/// Name shown for record types built without one.
pub const ANONYMOUS_TYPE_NAME: &str = "Record";

static NEXT_TYPE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-wide unique identifier of a generated record type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TypeId(u64);

impl TypeId {
    fn next() -> Self {
        Self(NEXT_TYPE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn index(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

struct TypeDescriptor {
    id: TypeId,
    name: Option<Arc<str>>,
    schema: FieldSchema,
    extension: Option<Arc<dyn Extension>>,
}

/// Handle to a generated record type.
///
/// Cloning shares the descriptor. Two handles are equal only if they refer to
/// the same generated type.
#[derive(Clone)]
pub struct RecordType(Arc<TypeDescriptor>);

impl RecordType {
    /// Generates a new anonymous record type with the given fields.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchema` if `fields` is empty or has duplicates.
    pub fn define<I, N>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<FieldName>,
    {
        Self::builder(fields).build()
    }

    /// Starts building a record type with the given fields.
    #[must_use]
    pub fn builder<I, N>(fields: I) -> RecordTypeBuilder
    where
        I: IntoIterator<Item = N>,
        N: Into<FieldName>,
    {
        RecordTypeBuilder {
            fields: fields.into_iter().map(Into::into).collect(),
            name: None,
            extension: None,
        }
    }

    /// Returns this type's unique id.
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.0.id
    }

    /// Returns the display name of this type.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0.name.as_deref().unwrap_or(ANONYMOUS_TYPE_NAME)
    }

    /// Returns true if the type was given an explicit name.
    #[must_use]
    pub fn is_named(&self) -> bool {
        self.0.name.is_some()
    }

    /// Returns the field schema.
    #[must_use]
    pub fn schema(&self) -> &FieldSchema {
        &self.0.schema
    }

    /// Returns the field names in schema order.
    #[must_use]
    pub fn fields(&self) -> &[FieldName] {
        self.0.schema.fields()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.0.schema.len()
    }

    /// Returns the attached extension, if any.
    #[must_use]
    pub fn extension(&self) -> Option<&Arc<dyn Extension>> {
        self.0.extension.as_ref()
    }

    /// Returns true if both handles refer to the same generated type.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    pub(crate) fn error_context(&self, operation: &'static str) -> ErrorContext {
        ErrorContext::new()
            .with_type_name(self.name())
            .with_operation(operation)
    }

    /// Constructs a record from values in schema order.
    ///
    /// # Errors
    ///
    /// Returns an arity error if the number of values differs from the
    /// number of fields.
    pub fn construct<I, V>(&self, values: I) -> Result<Record>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.len() != self.arity() {
            return Err(Error::arity(self.arity(), values.len())
                .with_context(self.error_context("construct")));
        }
        Ok(Record::from_parts(self.clone(), values))
    }

    /// Constructs a record from `(field, value)` pairs in any order.
    ///
    /// Every schema field must be present; an explicit `Value::Nil` counts as
    /// present. If a key repeats, its last value wins.
    ///
    /// # Errors
    ///
    /// Returns an unexpected-field error naming every key outside the schema
    /// (and any missing fields alongside), or a missing-field error naming
    /// every absent field and echoing the supplied keys.
    pub fn construct_from_map<I, K, V>(&self, pairs: I) -> Result<Record>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<FieldName>,
        V: Into<Value>,
    {
        let schema = self.schema();
        let mut slots: Vec<Option<Value>> = vec![None; schema.len()];
        let mut supplied: Vec<FieldName> = Vec::new();
        let mut unexpected: Vec<FieldName> = Vec::new();

        for (key, value) in pairs {
            let key = key.into();
            match schema.index_of(key.as_str()) {
                Some(i) => slots[i] = Some(value.into()),
                None if !unexpected.contains(&key) => unexpected.push(key.clone()),
                None => {}
            }
            if !supplied.contains(&key) {
                supplied.push(key);
            }
        }

        let missing: Vec<FieldName> = schema
            .iter()
            .zip(&slots)
            .filter(|(_, slot)| slot.is_none())
            .map(|(name, _)| name.clone())
            .collect();

        if !unexpected.is_empty() {
            return Err(Error::unexpected_fields(unexpected, missing)
                .with_context(self.error_context("construct_from_map")));
        }
        if !missing.is_empty() {
            return Err(Error::missing_fields(missing, supplied)
                .with_context(self.error_context("construct_from_map")));
        }

        Ok(Record::from_parts(self.clone(), slots.into_iter().flatten().collect()))
    }
}

impl PartialEq for RecordType {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl Eq for RecordType {}

impl Hash for RecordType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

impl fmt::Debug for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordType({} {:?} {:?})", self.name(), self.0.id, self.0.schema)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Builder for [`RecordType`].
#[must_use]
pub struct RecordTypeBuilder {
    fields: Vec<FieldName>,
    name: Option<Arc<str>>,
    extension: Option<Arc<dyn Extension>>,
}

impl RecordTypeBuilder {
    /// Sets the display name used by inspect output and errors.
    pub fn name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attaches extra behavior to the type.
    pub fn extension(mut self, extension: Arc<dyn Extension>) -> Self {
        self.extension = Some(extension);
        self
    }

    /// Generates the record type.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchema` if no fields were given or a name repeats.
    pub fn build(self) -> Result<RecordType> {
        let schema = FieldSchema::new(self.fields)?;
        let id = TypeId::next();
        tracing::trace!(
            type_id = id.index(),
            name = self.name.as_deref().unwrap_or(ANONYMOUS_TYPE_NAME),
            fields = ?schema,
            "generated record type"
        );
        Ok(RecordType(Arc::new(TypeDescriptor {
            id,
            name: self.name,
            schema,
            extension: self.extension,
        })))
    }
}
