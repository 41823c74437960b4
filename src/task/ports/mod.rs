//! Port contracts for the task board.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod filter_state;
pub mod seed;
pub mod storage;

pub use filter_state::FilterState;
pub use seed::{SeedSource, SeedSourceError, SeedSourceResult};
pub use storage::{TaskSnapshot, TaskStorage, TaskStorageError, TaskStorageResult};
