//! `Serialize` support for values and records (enabled by the `serde` feature).
//!
//! Records serialize as maps of field name to value in schema order, the same
//! shape as [`Record::to_map_recursive`]. There is no `Deserialize`: a plain
//! map carries no record type to rebuild into.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::field::FieldName;
use crate::record::Record;
use crate::value::Value;

impl Serialize for FieldName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values().len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Int(n) => serializer.serialize_i64(*n),
            Self::Float(n) => serializer.serialize_f64(*n),
            Self::String(s) => serializer.serialize_str(s),
            Self::Vec(v) => v.serialize(serializer),
            Self::Set(s) => s.serialize(serializer),
            Self::Map(m) => m.serialize(serializer),
            Self::Record(r) => r.serialize(serializer),
        }
    }
}
