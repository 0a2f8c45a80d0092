//! FILENAME: dataset/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Record order references unknown record id: {0}")]
    UnknownRecordId(String),

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),
}
