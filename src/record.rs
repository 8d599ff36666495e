//! Typed row representation for parsed CSV data.
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A single cell value: raw text, or an integer for the coerced `id` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

/// One data row keyed by header name.
///
/// Field order follows header order and survives serialization, so the
/// emitted JSON objects read like the source rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, name: &str, value: FieldValue) {
        self.fields.push((name.to_string(), value));
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
