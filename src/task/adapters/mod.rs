//! Adapter implementations of the task board ports.

pub mod file;
pub mod memory;
pub mod query;
