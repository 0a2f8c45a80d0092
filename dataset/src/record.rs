//! FILENAME: dataset/src/record.rs
//! A single source record with formatted and raw value access.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

/// One row of source data.
///
/// Each field can carry two representations: the source's pre-formatted
/// display string and the typed raw value. Either may be absent for a given
/// column. The record id is always present among the raw values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: String,

    /// Pre-formatted display strings, keyed by column name.
    formatted: HashMap<String, String>,

    /// Typed raw values, keyed by column name.
    raw: HashMap<String, FieldValue>,
}

impl Record {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let mut raw = HashMap::new();
        raw.insert("id".to_string(), FieldValue::Text(id.clone()));
        Record {
            id,
            formatted: HashMap::new(),
            raw,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sets the formatted display string for a column.
    pub fn set_formatted(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.formatted.insert(column.into(), value.into());
    }

    /// Sets the typed raw value for a column.
    pub fn set_raw(&mut self, column: impl Into<String>, value: FieldValue) {
        self.raw.insert(column.into(), value);
    }

    /// Builder-style variant of `set_formatted` for fixture construction.
    pub fn with_formatted(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_formatted(column, value);
        self
    }

    /// Builder-style variant of `set_raw` for fixture construction.
    pub fn with_raw(mut self, column: impl Into<String>, value: FieldValue) -> Self {
        self.set_raw(column, value);
        self
    }

    /// The formatted display string for a column, when the source supplied one.
    pub fn formatted_value(&self, column: &str) -> Option<&str> {
        self.formatted.get(column).map(|s| s.as_str())
    }

    /// The typed raw value for a column, when present.
    pub fn raw_value(&self, column: &str) -> Option<&FieldValue> {
        self.raw.get(column)
    }
}
