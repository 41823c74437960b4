//! Step definitions for kanban board scenarios.

mod given;
mod then;
mod when;
pub mod world;
