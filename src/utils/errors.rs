use std::path::PathBuf;
use thiserror::Error;

use crate::api::ApiError;

/// Hard failures that abort a snapshot run
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("NBU: missing {0} in response")]
    MissingCurrencies(String),
    #[error("Failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
