//! FILENAME: dataset/src/column.rs
//! Column metadata as declared by the data source.

use serde::{Deserialize, Serialize};

/// One declared column of the source dataset.
/// Immutable for the duration of a grouping pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Stable identifier used to look values up on records.
    pub name: String,

    /// Human-readable header label.
    pub display_name: String,

    /// Width hint for rendering, when the source declares one.
    #[serde(default)]
    pub width_hint: Option<u16>,
}

impl ColumnMeta {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        ColumnMeta {
            name: name.into(),
            display_name: display_name.into(),
            width_hint: None,
        }
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width_hint = Some(width);
        self
    }
}
