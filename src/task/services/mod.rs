//! Application services for the task board.
//!
//! Pure derivations (filtering, column reconciliation, summaries, seed
//! preparation) live beside the stateful [`TaskStore`] and the
//! [`TaskBoard`] facade that ties them to the ports.

pub mod board;
pub mod filter;
pub mod reorder;
pub mod seeding;
pub mod store;
pub mod summary;

pub use board::{BoardView, BootstrapReport, CellEdit, TaskBoard, TaskBoardError, TaskBoardResult};
pub use filter::{distinct_developers, filter_tasks, matches};
pub use reorder::{KanbanColumn, column, columns, move_task, resolve_drop_index};
pub use seeding::{SeedError, prepare_seed, random_instant_in_month};
pub use store::{
    HydrationOutcome, SeedOutcome, StorePhase, TaskStore, TaskStoreError, TaskStoreResult,
};
pub use summary::{FieldValue, PointField, Share, TaskSummary, percentage, sum_points};
