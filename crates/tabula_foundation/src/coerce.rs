//! Conversion of arbitrary inputs into field maps.
//!
//! The type cache derives a record type from anything that can produce
//! `(field, value)` pairs. Native maps, pair lists, records and map values
//! all qualify; user types opt in by implementing [`AsFieldMap`].

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::collections::TbMap;
use crate::error::{Error, Result};
use crate::field::FieldName;
use crate::record::Record;
use crate::value::Value;

/// A source that can be viewed as a field→value mapping.
pub trait AsFieldMap {
    /// Returns the `(field, value)` pairs of this source.
    ///
    /// # Errors
    ///
    /// Returns an uncoercible-input error if this source has no mapping form.
    fn as_field_map(&self) -> Result<Vec<(FieldName, Value)>>;
}

impl AsFieldMap for Record {
    fn as_field_map(&self) -> Result<Vec<(FieldName, Value)>> {
        Ok(self.to_pairs())
    }
}

impl AsFieldMap for Value {
    fn as_field_map(&self) -> Result<Vec<(FieldName, Value)>> {
        match self {
            Self::Map(map) => map
                .iter()
                .map(|(k, v)| match k {
                    Self::String(name) => Ok((FieldName::from(name.clone()), v.clone())),
                    other => Err(Error::uncoercible(format!(
                        "map with {} key {other:?}",
                        other.kind_name()
                    ))),
                })
                .collect(),
            Self::Record(record) => record.as_field_map(),
            other => Err(Error::uncoercible(other.kind_name())),
        }
    }
}

impl<V: Clone + Into<Value>> AsFieldMap for TbMap<FieldName, V> {
    fn as_field_map(&self) -> Result<Vec<(FieldName, Value)>> {
        Ok(self
            .iter()
            .map(|(k, v)| (k.clone(), v.clone().into()))
            .collect())
    }
}

impl<K, V, S> AsFieldMap for HashMap<K, V, S>
where
    K: AsRef<str>,
    V: Clone + Into<Value>,
    S: BuildHasher,
{
    fn as_field_map(&self) -> Result<Vec<(FieldName, Value)>> {
        Ok(self
            .iter()
            .map(|(k, v)| (FieldName::from(k.as_ref()), v.clone().into()))
            .collect())
    }
}

impl<K, V> AsFieldMap for BTreeMap<K, V>
where
    K: AsRef<str>,
    V: Clone + Into<Value>,
{
    fn as_field_map(&self) -> Result<Vec<(FieldName, Value)>> {
        Ok(self
            .iter()
            .map(|(k, v)| (FieldName::from(k.as_ref()), v.clone().into()))
            .collect())
    }
}

impl<K, V> AsFieldMap for [(K, V)]
where
    K: AsRef<str>,
    V: Clone + Into<Value>,
{
    fn as_field_map(&self) -> Result<Vec<(FieldName, Value)>> {
        Ok(self
            .iter()
            .map(|(k, v)| (FieldName::from(k.as_ref()), v.clone().into()))
            .collect())
    }
}

impl<K, V> AsFieldMap for Vec<(K, V)>
where
    K: AsRef<str>,
    V: Clone + Into<Value>,
{
    fn as_field_map(&self) -> Result<Vec<(FieldName, Value)>> {
        self.as_slice().as_field_map()
    }
}

impl<K, V, const N: usize> AsFieldMap for [(K, V); N]
where
    K: AsRef<str>,
    V: Clone + Into<Value>,
{
    fn as_field_map(&self) -> Result<Vec<(FieldName, Value)>> {
        self.as_slice().as_field_map()
    }
}

impl<T: AsFieldMap + ?Sized> AsFieldMap for &T {
    fn as_field_map(&self) -> Result<Vec<(FieldName, Value)>> {
        (**self).as_field_map()
    }
}
