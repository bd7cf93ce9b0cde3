//! Field names and the ordered field schema shared by a record type.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};

/// Name of a record field.
///
/// Cheap to clone; equality and ordering are by string content.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldName(Arc<str>);

impl FieldName {
    /// Creates a field name.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldName {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for FieldName {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&String> for FieldName {
    fn from(s: &String) -> Self {
        Self(s.as_str().into())
    }
}

impl From<Arc<str>> for FieldName {
    fn from(s: Arc<str>) -> Self {
        Self(s)
    }
}

impl From<&FieldName> for FieldName {
    fn from(name: &FieldName) -> Self {
        name.clone()
    }
}

impl fmt::Debug for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, immutable list of field names for one record type.
///
/// The order defines positional construction order and export order. The
/// name→index table is built once here so records never search by name.
#[derive(Clone)]
pub struct FieldSchema {
    fields: Arc<[FieldName]>,
    index: Arc<HashMap<FieldName, usize>>,
}

impl FieldSchema {
    /// Creates a schema from field names in order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchema` if `fields` is empty or contains a duplicate.
    pub fn new<I, N>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<FieldName>,
    {
        let fields: Vec<FieldName> = fields.into_iter().map(Into::into).collect();
        if fields.is_empty() {
            return Err(Error::invalid_schema(
                "wrong number of arguments (0 for 1+)",
            ));
        }

        let mut index = HashMap::with_capacity(fields.len());
        for (i, name) in fields.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(Error::invalid_schema(format!(
                    "duplicate field name :{name}"
                )));
            }
        }

        Ok(Self {
            fields: fields.into(),
            index: Arc::new(index),
        })
    }

    /// Returns the field names in schema order.
    #[must_use]
    pub fn fields(&self) -> &[FieldName] {
        &self.fields
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the position of `name`, if it is a field.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns true if `name` is a field of this schema.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns an iterator over the field names.
    pub fn iter(&self) -> impl Iterator<Item = &FieldName> {
        self.fields.iter()
    }
}

impl PartialEq for FieldSchema {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for FieldSchema {}

impl fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.fields.iter()).finish()
    }
}
