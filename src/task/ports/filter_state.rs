//! Port for externally owned filter state.

use crate::task::domain::{FilterUpdate, TaskFilter};

/// Key-value filter state owned outside the core (for example the page's
/// query string).
///
/// The core reads the current criteria and hands changes back through
/// [`FilterState::apply`]; it never owns the representation.
pub trait FilterState: Send + Sync {
    /// Returns the current filter criteria.
    fn current(&self) -> TaskFilter;

    /// Merges `update` into the state.
    fn apply(&self, update: FilterUpdate);
}
