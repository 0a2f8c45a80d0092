//! FILENAME: grouping-engine/src/lib.rs
//! Hierarchical grouping subsystem for paginated record views.
//!
//! This crate turns one loaded page of records into a multi-level group
//! tree and a flattened, order-consistent item list, ready for a grouped
//! list rendering. It depends on `dataset` only for shared types
//! (ColumnMeta, Record, RecordPage, FieldValue).
//!
//! Layers:
//! - `definition`: Serializable configuration (what the grouping IS)
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `engine`: Calculation engine (HOW we calculate)

pub mod definition;
pub mod view;
pub mod engine;

pub use definition::*;
pub use view::*;
pub use engine::{group_records, project_display_columns, project_flat};
