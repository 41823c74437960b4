//! Shared test helpers for in-memory board integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rand::{SeedableRng, rngs::StdRng};
use rstest::fixture;
use taskboard::task::{
    adapters::memory::{InMemoryFilterState, InMemoryTaskStorage, StaticSeedSource},
    ports::FilterState,
    services::{TaskBoard, TaskStore},
};

/// Board type used by in-memory integration tests.
pub type MemoryBoard = TaskBoard<InMemoryTaskStorage, DefaultClock>;

/// Seed response body in the shape the seed endpoint returns.
pub const SEED_BODY: &str = r#"{
    "response": true,
    "data": [
        {"title": "Set up CI pipeline", "developer": "Alice", "status": "Done",
         "priority": "High", "type": "Other", "Estimated SP": 3, "Actual SP": 4},
        {"title": "Login form validation", "developer": "Alice, Bob",
         "status": "In Progress", "priority": "Critical", "type": "Bug",
         "Estimated SP": 5, "Actual SP": 2},
        {"title": "Export invoices", "developer": "Carol", "status": "Ready to start",
         "priority": "Medium", "type": "Feature Enhancements", "Estimated SP": 8,
         "Actual SP": 0}
    ]
}"#;

/// Deterministic random source for timestamp synthesis.
#[fixture]
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Builds a board over `storage` seeded from [`SEED_BODY`].
///
/// # Errors
///
/// Returns an error if the seed body cannot be decoded.
pub fn board_with(
    storage: &InMemoryTaskStorage,
    filter: Arc<dyn FilterState>,
) -> Result<MemoryBoard, eyre::Report> {
    let clock = Arc::new(DefaultClock);
    let store = Arc::new(TaskStore::new(Arc::new(storage.clone()), Arc::clone(&clock)));
    let seed = StaticSeedSource::from_json(SEED_BODY)?;
    Ok(TaskBoard::new(store, Arc::new(seed), filter, clock))
}

/// Builds a board with fresh storage and an empty in-memory filter.
///
/// # Errors
///
/// Returns an error if the seed body cannot be decoded.
pub fn fresh_board() -> Result<(MemoryBoard, InMemoryTaskStorage), eyre::Report> {
    let storage = InMemoryTaskStorage::new();
    let board = board_with(&storage, Arc::new(InMemoryFilterState::default()))?;
    Ok((board, storage))
}

/// Returns the titles of the tasks currently in the store.
pub async fn titles(board: &MemoryBoard) -> Vec<String> {
    board
        .store()
        .tasks()
        .await
        .iter()
        .map(|task| task.title().to_owned())
        .collect()
}
