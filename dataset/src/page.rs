//! FILENAME: dataset/src/page.rs
//! One loaded page of records: display order, id-keyed lookup, and the
//! declared columns.
//!
//! The engine never paginates; it consumes a page the host already loaded.
//! Construction validates that the parts the host supplies agree with each
//! other. After that, every operation over the page is infallible.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::column::ColumnMeta;
use crate::error::DatasetError;
use crate::record::Record;

/// Explicit paging position, passed through the grouping pass unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub page_number: u32,
}

impl PageState {
    pub fn new(page_number: u32) -> Self {
        PageState { page_number }
    }
}

impl Default for PageState {
    fn default() -> Self {
        PageState { page_number: 1 }
    }
}

/// An immutable snapshot of one loaded page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordPage {
    columns: Vec<ColumnMeta>,

    /// Record ids in display (sorted) order.
    record_order: Vec<String>,

    /// Record lookup keyed by id.
    records: HashMap<String, Record>,
}

impl RecordPage {
    /// Builds a page from the host-supplied parts.
    ///
    /// Fails when a column name is declared twice or when the display order
    /// references a record id that was not supplied. A record supplied twice
    /// under the same id keeps the last occurrence, matching the id-keyed
    /// bag the order list points into.
    pub fn from_parts(
        columns: Vec<ColumnMeta>,
        record_order: Vec<String>,
        records: Vec<Record>,
    ) -> Result<Self, DatasetError> {
        let mut seen_columns: HashMap<&str, bool> = HashMap::new();
        for column in &columns {
            if seen_columns.insert(column.name.as_str(), true).is_some() {
                return Err(DatasetError::DuplicateColumn(column.name.clone()));
            }
        }

        let mut by_id: HashMap<String, Record> = HashMap::with_capacity(records.len());
        for record in records {
            by_id.insert(record.id().to_string(), record);
        }

        for id in &record_order {
            if !by_id.contains_key(id) {
                return Err(DatasetError::UnknownRecordId(id.clone()));
            }
        }

        Ok(RecordPage {
            columns,
            record_order,
            records: by_id,
        })
    }

    /// A page with no columns and no records.
    pub fn empty() -> Self {
        RecordPage {
            columns: Vec::new(),
            record_order: Vec::new(),
            records: HashMap::new(),
        }
    }

    pub fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    pub fn record_count(&self) -> usize {
        self.record_order.len()
    }

    pub fn record(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    /// Iterates records in display order.
    pub fn records_in_order(&self) -> impl Iterator<Item = &Record> {
        self.record_order
            .iter()
            .filter_map(move |id| self.records.get(id))
    }
}
