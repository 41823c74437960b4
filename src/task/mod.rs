//! Task board core.
//!
//! An ordered, persisted task collection with derived views: the filtered
//! table, kanban columns reconciled against the flat order, and summary
//! statistics. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
