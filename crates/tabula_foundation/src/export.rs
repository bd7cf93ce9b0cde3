//! Structural export of records into plain pairs and maps.

use crate::collections::TbMap;
use crate::field::FieldName;
use crate::record::Record;
use crate::value::Value;

impl Record {
    /// Returns `(field, value)` pairs in schema order. Values are not converted.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(FieldName, Value)> {
        self.iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Returns a map from field name to value. Values are not converted.
    #[must_use]
    pub fn to_map(&self) -> TbMap<FieldName, Value> {
        self.iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Returns a map from field name to value with every nested record,
    /// at any depth, unfolded into a plain map.
    ///
    /// Cyclic structures cannot be built from immutable values, so this
    /// always terminates.
    #[must_use]
    pub fn to_map_recursive(&self) -> TbMap<FieldName, Value> {
        self.iter()
            .map(|(name, value)| (name.clone(), value.to_plain()))
            .collect()
    }

    /// Returns the record as a `Value::Map` keyed by field-name strings.
    #[must_use]
    pub fn to_value_map(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(name, value)| (Value::from(name.clone()), value.to_plain()))
                .collect(),
        )
    }
}

impl Value {
    /// Converts this value into plain data.
    ///
    /// - maps are converted value by value (keys are kept as they are)
    /// - vectors and sets are converted element by element
    /// - records become maps keyed by field-name strings
    /// - everything else, `nil` and `false` included, passes through
    #[must_use]
    pub fn to_plain(&self) -> Value {
        match self {
            Self::Map(map) => Self::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_plain()))
                    .collect(),
            ),
            Self::Vec(items) => Self::Vec(items.iter().map(Self::to_plain).collect()),
            Self::Set(items) => Self::Set(items.iter().map(Self::to_plain).collect()),
            Self::Record(record) => record.to_value_map(),
            other => other.clone(),
        }
    }
}
