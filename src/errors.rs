use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while loading or normalizing the reference catalog.
///
/// These are fatal at startup: a session cannot be built without a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Catalog source not found: {}", .0.display())]
    MissingSource(PathBuf),
    #[error("Invalid {table} row {row}: {reason}")]
    InvalidRow {
        table: &'static str,
        row: usize,
        reason: String,
    },
}

impl CatalogError {
    pub(crate) fn invalid_row(table: &'static str, row: usize, reason: impl Into<String>) -> Self {
        CatalogError::InvalidRow {
            table,
            row,
            reason: reason.into(),
        }
    }
}
