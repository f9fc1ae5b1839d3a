use std::path::PathBuf;

use thiserror::Error;

use crate::store::model::{CounterId, GroupId};

/// Errors raised by the counter store and its snapshot file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Counter {id} not found")]
    CounterNotFound { id: CounterId },

    #[error("Group {id} not found")]
    GroupNotFound { id: GroupId },

    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("Adding {delta} to counter {id} overflows its value")]
    Overflow { id: CounterId, delta: i64 },

    #[error("Duplicate key {key} in table '{table}'")]
    DuplicateKey { table: &'static str, key: i64 },

    #[error("Snapshot file '{path}' is locked by another process")]
    Locked { path: PathBuf },

    #[error("Failed to read snapshot '{path}': {source}")]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse snapshot '{path}': {source}")]
    SnapshotParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write snapshot '{path}': {source}")]
    SnapshotWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
