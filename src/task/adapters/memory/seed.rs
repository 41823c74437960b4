//! Seed source backed by a fixed payload.

use async_trait::async_trait;

use crate::task::{
    domain::SeedPayload,
    ports::{SeedSource, SeedSourceError, SeedSourceResult},
};

/// Seed source that always returns the same payload.
#[derive(Debug, Clone)]
pub struct StaticSeedSource {
    payload: SeedPayload,
}

impl StaticSeedSource {
    /// Creates a source returning `payload`.
    #[must_use]
    pub const fn new(payload: SeedPayload) -> Self {
        Self { payload }
    }

    /// Creates a source from the JSON body of a seed response.
    ///
    /// # Errors
    ///
    /// Returns [`SeedSourceError::Malformed`] when `body` is not a valid
    /// seed payload.
    pub fn from_json(body: &str) -> SeedSourceResult<Self> {
        let payload = serde_json::from_str(body)
            .map_err(|err| SeedSourceError::Malformed(err.to_string()))?;
        Ok(Self::new(payload))
    }
}

#[async_trait]
impl SeedSource for StaticSeedSource {
    async fn fetch(&self) -> SeedSourceResult<SeedPayload> {
        Ok(self.payload.clone())
    }
}
