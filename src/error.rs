//! Error Types

use thiserror::Error;

/// Rejected board operations. State is left untouched when one is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("source row {0} is not in the source table")]
    UnknownSource(String),
    #[error("target row {0} does not exist")]
    UnknownTarget(u32),
    #[error("nothing to undo")]
    NothingToUndo,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to remove {key}: {reason}")]
    Remove { key: String, reason: String },
}
