//! In-memory adapters for tests and embedding.

mod filter_state;
mod seed;
mod storage;

pub use filter_state::InMemoryFilterState;
pub use seed::StaticSeedSource;
pub use storage::InMemoryTaskStorage;
