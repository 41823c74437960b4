//! Durable storage port for the task collection.

use crate::task::domain::Task;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task storage operations.
pub type TaskStorageResult<T> = Result<T, TaskStorageError>;

/// Serialized form of the whole collection plus store metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    /// Name of the store that wrote the snapshot.
    pub store: String,
    /// Snapshot format version.
    pub version: u32,
    /// Tasks in canonical order.
    pub tasks: Vec<Task>,
}

impl TaskSnapshot {
    /// Creates a snapshot of `tasks` for the named store.
    #[must_use]
    pub fn new(store: impl Into<String>, version: u32, tasks: Vec<Task>) -> Self {
        Self {
            store: store.into(),
            version,
            tasks,
        }
    }
}

/// Durable storage of a single named task collection record.
///
/// The record is read once at start-up and rewritten after every mutation.
#[async_trait]
pub trait TaskStorage: Send + Sync {
    /// Reads the stored snapshot.
    ///
    /// Returns `None` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError`] when the record exists but cannot be
    /// read or decoded.
    async fn load(&self) -> TaskStorageResult<Option<TaskSnapshot>>;

    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError`] when the record cannot be written.
    async fn save(&self, snapshot: &TaskSnapshot) -> TaskStorageResult<()>;
}

/// Errors returned by task storage implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStorageError {
    /// The stored record could not be decoded.
    #[error("corrupt task snapshot: {0}")]
    Corrupt(String),

    /// The stored record was written with an unsupported format version.
    #[error("unsupported snapshot version {found}, expected {expected}")]
    UnsupportedVersion {
        /// Version found in storage.
        found: u32,
        /// Version this build reads.
        expected: u32,
    },

    /// The stored record, or the snapshot being saved, belongs to another
    /// store.
    #[error("snapshot belongs to store `{found}`, expected `{expected}`")]
    StoreMismatch {
        /// Store name carried by the snapshot.
        found: String,
        /// Store name this storage was opened for.
        expected: String,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStorageError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
