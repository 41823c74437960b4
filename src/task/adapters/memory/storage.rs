//! In-memory task storage.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::ports::{TaskSnapshot, TaskStorage, TaskStorageError, TaskStorageResult};

/// Thread-safe in-memory storage for a single task snapshot.
///
/// Clones share state, so a test can keep a handle and inspect what the
/// store wrote.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStorage {
    state: Arc<RwLock<InMemoryStorageState>>,
}

#[derive(Debug, Default)]
struct InMemoryStorageState {
    snapshot: Option<TaskSnapshot>,
    history: Vec<TaskSnapshot>,
}

impl InMemoryTaskStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage that already holds `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: TaskSnapshot) -> Self {
        let state = InMemoryStorageState {
            snapshot: Some(snapshot),
            history: Vec::new(),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns the most recently saved snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError::Persistence`] when the lock is poisoned.
    pub fn saved(&self) -> TaskStorageResult<Option<TaskSnapshot>> {
        let state = self.state.read().map_err(|err| {
            TaskStorageError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.snapshot.clone())
    }

    /// Returns every snapshot saved so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError::Persistence`] when the lock is poisoned.
    pub fn history(&self) -> TaskStorageResult<Vec<TaskSnapshot>> {
        let state = self.state.read().map_err(|err| {
            TaskStorageError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.history.clone())
    }

    /// Returns the number of saves performed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError::Persistence`] when the lock is poisoned.
    pub fn save_count(&self) -> TaskStorageResult<usize> {
        Ok(self.history()?.len())
    }
}

#[async_trait]
impl TaskStorage for InMemoryTaskStorage {
    async fn load(&self) -> TaskStorageResult<Option<TaskSnapshot>> {
        self.saved()
    }

    async fn save(&self, snapshot: &TaskSnapshot) -> TaskStorageResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskStorageError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.snapshot = Some(snapshot.clone());
        state.history.push(snapshot.clone());
        Ok(())
    }
}
