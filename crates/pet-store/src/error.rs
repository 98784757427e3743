//! Error types for pet-store.

use std::path::PathBuf;

use pet_behavior::BehaviorError;
use thiserror::Error;

/// Everything that can go wrong reading or writing a snapshot.
///
/// Load errors are recovered by the `*_or_*` helpers on
/// [`StateStore`][crate::StateStore]; write errors are logged and dropped by
/// the snapshot sinks.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{} is unavailable: {source}", path.display())]
    Unavailable {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("{} is malformed: {source}", path.display())]
    Malformed {
        path:   PathBuf,
        source: serde_json::Error,
    },

    #[error("{} holds an invalid value: {source}", path.display())]
    InvalidValue {
        path:   PathBuf,
        source: BehaviorError,
    },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("could not encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("could not start snapshot writer: {0}")]
    Spawn(#[source] std::io::Error),
}

impl StoreError {
    /// `true` when the document simply does not exist yet.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::Unavailable { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;
