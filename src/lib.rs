//! Taskboard: a persistent task board core.
//!
//! This crate owns an ordered task collection, persists it across
//! restarts, and derives what a board UI renders from it: the filtered
//! table, kanban columns, and a summary row.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage, seed data, and
//!   filter state
//! - **Adapters**: Concrete implementations of ports (files, memory, query
//!   strings)
//!
//! # Modules
//!
//! - [`task`]: Task collection, filtering, kanban moves, and summaries

pub mod task;
