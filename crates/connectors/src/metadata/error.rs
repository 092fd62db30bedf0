use crate::error::ConnectorError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while classifying a table directory.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// Reading from the underlying source failed.
    #[error(transparent)]
    Source(#[from] ConnectorError),

    /// The directory is not tagged as a table.
    #[error("{path} is not a table (type '{found}')")]
    NotATable { path: PathBuf, found: String },

    /// No schema or table name can be derived from the path.
    #[error("Cannot derive schema and table name from {0}")]
    InvalidTablePath(PathBuf),

    /// A column's `column_id` is not an integer.
    #[error("Invalid column_id '{value}' on {path}")]
    InvalidColumnId { path: PathBuf, value: String },

    /// Two columns claim the same ordinal.
    #[error("Columns '{first}' and '{second}' share column_id {ordinal}")]
    DuplicateColumnId {
        ordinal: i64,
        first: String,
        second: String,
    },
}
