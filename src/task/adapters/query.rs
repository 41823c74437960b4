//! Filter state stored as query-string style key-value pairs.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::task::{
    domain::{DEVELOPERS_KEY, FilterUpdate, SEARCH_KEY, STATUS_KEY, TaskFilter},
    ports::FilterState,
};

const FILTER_KEYS: [&str; 3] = [STATUS_KEY, DEVELOPERS_KEY, SEARCH_KEY];

/// Filter state kept in a string map, the way a page keeps it in its URL.
///
/// Keys other than the filter keys are left untouched by updates.
#[derive(Debug, Clone, Default)]
pub struct QueryFilterState {
    params: Arc<RwLock<BTreeMap<String, String>>>,
}

impl QueryFilterState {
    /// Creates state from existing key-value pairs.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let params = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            params: Arc::new(RwLock::new(params)),
        }
    }

    /// Returns a copy of the stored pairs.
    #[must_use]
    pub fn params(&self) -> BTreeMap<String, String> {
        self.params
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl FilterState for QueryFilterState {
    fn current(&self) -> TaskFilter {
        let params = self.params.read().unwrap_or_else(PoisonError::into_inner);
        TaskFilter::from_query_pairs(params.iter())
    }

    fn apply(&self, update: FilterUpdate) {
        let mut params = self.params.write().unwrap_or_else(PoisonError::into_inner);
        let mut filter = TaskFilter::from_query_pairs(params.iter());
        filter.apply(update);
        for key in FILTER_KEYS {
            params.remove(key);
        }
        params.extend(
            filter
                .to_query_pairs()
                .into_iter()
                .map(|(key, value)| (key.to_owned(), value)),
        );
    }
}
