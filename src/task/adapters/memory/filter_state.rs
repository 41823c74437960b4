//! Filter state held in process memory.

use std::sync::{Arc, PoisonError, RwLock};

use crate::task::{
    domain::{FilterUpdate, TaskFilter},
    ports::FilterState,
};

/// Shared in-memory filter criteria.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFilterState {
    filter: Arc<RwLock<TaskFilter>>,
}

impl InMemoryFilterState {
    /// Creates state holding `filter`.
    #[must_use]
    pub fn new(filter: TaskFilter) -> Self {
        Self {
            filter: Arc::new(RwLock::new(filter)),
        }
    }
}

impl FilterState for InMemoryFilterState {
    fn current(&self) -> TaskFilter {
        self.filter
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn apply(&self, update: FilterUpdate) {
        let mut filter = self
            .filter
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        filter.apply(update);
    }
}
