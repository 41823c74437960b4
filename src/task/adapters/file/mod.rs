//! File-backed adapters.

mod storage;

pub use storage::FileTaskStorage;
