use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building the catalog from its dataset source.
///
/// Every variant is fatal: the process must not enter a serving state with
/// a missing, unreadable, or partially parsed dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The dataset file does not exist.
    #[error("dataset not found at {path}")]
    DatasetMissing { path: PathBuf },

    /// The dataset file exists but could not be read.
    #[error("failed to read dataset at {path}: {source}")]
    DatasetUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a valid list of question/answer records.
    #[error("malformed dataset: {0}")]
    DatasetMalformed(#[from] serde_json::Error),
}
