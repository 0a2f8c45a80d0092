//! FILENAME: grouping-engine/src/definition.rs
//! Grouping Definition - The serializable configuration.
//!
//! This module contains the types needed to DESCRIBE a grouping pass.
//! These structures are designed to be:
//! - Serializable (for saving/loading view state)
//! - Immutable snapshots of user intent
//!
//! Paging position travels through the definition and back out through the
//! result, so the pass stays a pure function of its inputs.

use serde::{Deserialize, Serialize};

use dataset::{ColumnMeta, PageState};

/// Number of grouping levels applied when the caller does not choose one.
pub const DEFAULT_LEVEL_COUNT: usize = 2;

/// The complete configuration of one grouping pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupingDefinition {
    /// How many leading columns become grouping levels (outermost first).
    #[serde(default = "default_level_count")]
    pub level_count: usize,

    /// The page this pass consumes.
    #[serde(default)]
    pub page: PageState,
}

fn default_level_count() -> usize {
    DEFAULT_LEVEL_COUNT
}

impl Default for GroupingDefinition {
    fn default() -> Self {
        GroupingDefinition {
            level_count: DEFAULT_LEVEL_COUNT,
            page: PageState::default(),
        }
    }
}

impl GroupingDefinition {
    pub fn new(level_count: usize, page: PageState) -> Self {
        GroupingDefinition { level_count, page }
    }

    pub fn with_level_count(level_count: usize) -> Self {
        GroupingDefinition {
            level_count,
            ..Default::default()
        }
    }

    /// Picks the grouping levels: the first `level_count` column names in
    /// declaration order. Truncates when fewer columns exist; empty when the
    /// column list is empty. Pure truncation, never an error.
    pub fn select_levels(&self, columns: &[ColumnMeta]) -> Vec<String> {
        columns
            .iter()
            .take(self.level_count)
            .map(|c| c.name.clone())
            .collect()
    }
}
