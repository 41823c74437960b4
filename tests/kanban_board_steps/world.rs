//! Shared world state for kanban board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::task::{
    adapters::memory::{InMemoryFilterState, InMemoryTaskStorage, StaticSeedSource},
    domain::{SeedPayload, TaskDraft, TaskId},
    services::{TaskBoard, TaskStore},
};

/// Board type used by the BDD world.
pub type TestBoard = TaskBoard<InMemoryTaskStorage, DefaultClock>;

/// Scenario world for kanban board behaviour tests.
pub struct KanbanWorld {
    pub storage: InMemoryTaskStorage,
    pub board: TestBoard,
    pub pending: Vec<(TaskId, TaskDraft)>,
    pub saves_after_load: usize,
}

impl KanbanWorld {
    /// Creates a world with empty storage and no pending tasks.
    #[must_use]
    pub fn new() -> Self {
        let storage = InMemoryTaskStorage::new();
        let clock = Arc::new(DefaultClock);
        let store = Arc::new(TaskStore::new(Arc::new(storage.clone()), Arc::clone(&clock)));
        let board = TaskBoard::new(
            store,
            Arc::new(StaticSeedSource::new(SeedPayload::unavailable())),
            Arc::new(InMemoryFilterState::default()),
            clock,
        );

        Self {
            storage,
            board,
            pending: Vec::new(),
            saves_after_load: 0,
        }
    }
}

impl Default for KanbanWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> KanbanWorld {
    KanbanWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Parses a comma-separated list of task identifiers.
///
/// # Errors
///
/// Returns an error if any entry is not a valid identifier.
pub fn parse_ids(list: &str) -> Result<Vec<u64>, eyre::Report> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<u64>()
                .map_err(|err| eyre::eyre!("invalid task id {entry:?}: {err}"))
        })
        .collect()
}
