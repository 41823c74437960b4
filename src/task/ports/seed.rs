//! Port for the remote payload that seeds an empty board.

use crate::task::domain::SeedPayload;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for seed source operations.
pub type SeedSourceResult<T> = Result<T, SeedSourceError>;

/// Source of the initial task list.
///
/// Fetching is fire-and-forget from the board's point of view: there is no
/// cancellation, and a late result is simply ignored once the store has
/// been populated.
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Fetches the seed payload.
    ///
    /// # Errors
    ///
    /// Returns [`SeedSourceError`] when the payload cannot be retrieved or
    /// decoded.
    async fn fetch(&self) -> SeedSourceResult<SeedPayload>;
}

/// Errors returned by seed sources.
#[derive(Debug, Clone, Error)]
pub enum SeedSourceError {
    /// The payload could not be decoded.
    #[error("malformed seed payload: {0}")]
    Malformed(String),

    /// Transport-level failure.
    #[error("seed transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl SeedSourceError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
