//! Domain model for the task board.
//!
//! Tasks, their identifiers and closed classification sets, the partial
//! shapes used to create and edit them, filter criteria, and the seed
//! payload. Nothing here touches storage or presentation.

mod classification;
mod error;
mod filter;
mod ids;
mod points;
mod seed;
mod task;

pub use classification::{ChipColor, TaskKind, TaskPriority, TaskStatus};
pub use error::{ParseClassificationError, TaskDomainError};
pub use filter::{DEVELOPERS_KEY, FieldUpdate, FilterUpdate, SEARCH_KEY, STATUS_KEY, TaskFilter};
pub use ids::TaskId;
pub use points::StoryPoints;
pub use seed::{SeedPayload, SeedTask};
pub use task::{PersistedTaskData, Task, TaskDraft, TaskPatch, split_developers};
