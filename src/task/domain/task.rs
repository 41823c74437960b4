//! Task entity and the partial shapes used to create and edit it.

use super::{StoryPoints, TaskId, TaskKind, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single unit of work on the board.
///
/// Field names on the wire follow the seed payload, including the
/// space-separated point fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    developer: String,
    status: TaskStatus,
    priority: TaskPriority,
    #[serde(rename = "type")]
    kind: TaskKind,
    #[serde(rename = "Estimated SP")]
    estimated_points: StoryPoints,
    #[serde(rename = "Actual SP")]
    actual_points: StoryPoints,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a task with a known identity.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Field values of the task.
    pub draft: TaskDraft,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task from a draft, stamping the creation time from
    /// `clock`.
    #[must_use]
    pub fn new(id: TaskId, draft: TaskDraft, clock: &impl Clock) -> Self {
        Self::from_persisted(PersistedTaskData {
            id,
            draft,
            created_at: clock.utc(),
        })
    }

    /// Reconstructs a task whose identity and creation time already exist.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        let TaskDraft {
            title,
            developer,
            status,
            priority,
            kind,
            estimated_points,
            actual_points,
        } = data.draft;
        Self {
            id: data.id,
            title,
            developer,
            status,
            priority,
            kind,
            estimated_points,
            actual_points,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw comma-separated developer field.
    #[must_use]
    pub fn developer(&self) -> &str {
        &self.developer
    }

    /// Returns the assigned developer names, trimmed, skipping empty entries.
    pub fn developers(&self) -> impl Iterator<Item = &str> {
        split_developers(&self.developer)
    }

    /// Returns the workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the work type.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns the estimated story points.
    #[must_use]
    pub const fn estimated_points(&self) -> StoryPoints {
        self.estimated_points
    }

    /// Returns the actual story points.
    #[must_use]
    pub const fn actual_points(&self) -> StoryPoints {
        self.actual_points
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Moves the task to another workflow status.
    #[expect(
        clippy::missing_const_for_fn,
        reason = "&mut self methods cannot be const in stable Rust"
    )]
    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    /// Shallow-merges the fields present in `patch` into this task.
    ///
    /// Identity and creation time are not part of a patch and never change.
    pub fn apply(&mut self, patch: TaskPatch) {
        let TaskPatch {
            title,
            developer,
            status,
            priority,
            kind,
            estimated_points,
            actual_points,
        } = patch;
        if let Some(value) = title {
            self.title = value;
        }
        if let Some(value) = developer {
            self.developer = value;
        }
        if let Some(value) = status {
            self.status = value;
        }
        if let Some(value) = priority {
            self.priority = value;
        }
        if let Some(value) = kind {
            self.kind = value;
        }
        if let Some(value) = estimated_points {
            self.estimated_points = value;
        }
        if let Some(value) = actual_points {
            self.actual_points = value;
        }
    }
}

/// Splits a comma-separated developer field into trimmed, non-empty names.
pub fn split_developers(field: &str) -> impl Iterator<Item = &str> {
    field.split(',').map(str::trim).filter(|name| !name.is_empty())
}

/// Task fields without identity or creation time.
///
/// The default draft is the blank task created by the "new task" action.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    /// Task title.
    pub title: String,
    /// Comma-separated developer names.
    pub developer: String,
    /// Workflow status.
    pub status: TaskStatus,
    /// Priority.
    pub priority: TaskPriority,
    /// Work type.
    pub kind: TaskKind,
    /// Estimated story points.
    pub estimated_points: StoryPoints,
    /// Actual story points.
    pub actual_points: StoryPoints,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            developer: String::new(),
            status: TaskStatus::Todo,
            priority: TaskPriority::BestEffort,
            kind: TaskKind::Feature,
            estimated_points: StoryPoints::ZERO,
            actual_points: StoryPoints::ZERO,
        }
    }
}

impl TaskDraft {
    /// Creates a blank draft with the given title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the developer field.
    #[must_use]
    pub fn with_developer(mut self, developer: impl Into<String>) -> Self {
        self.developer = developer.into();
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the work type.
    #[must_use]
    pub const fn with_kind(mut self, kind: TaskKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets estimated and actual story points.
    #[must_use]
    pub const fn with_points(mut self, estimated: StoryPoints, actual: StoryPoints) -> Self {
        self.estimated_points = estimated;
        self.actual_points = actual;
        self
    }
}

/// A partial set of task fields to merge into an existing task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    /// New title.
    pub title: Option<String>,
    /// New developer field.
    pub developer: Option<String>,
    /// New status.
    pub status: Option<TaskStatus>,
    /// New priority.
    pub priority: Option<TaskPriority>,
    /// New work type.
    pub kind: Option<TaskKind>,
    /// New estimated points.
    pub estimated_points: Option<StoryPoints>,
    /// New actual points.
    pub actual_points: Option<StoryPoints>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.developer.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.kind.is_none()
            && self.estimated_points.is_none()
            && self.actual_points.is_none()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the developer field.
    #[must_use]
    pub fn with_developer(mut self, developer: impl Into<String>) -> Self {
        self.developer = Some(developer.into());
        self
    }

    /// Sets the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the work type.
    #[must_use]
    pub const fn with_kind(mut self, kind: TaskKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the estimated points.
    #[must_use]
    pub const fn with_estimated_points(mut self, points: StoryPoints) -> Self {
        self.estimated_points = Some(points);
        self
    }

    /// Sets the actual points.
    #[must_use]
    pub const fn with_actual_points(mut self, points: StoryPoints) -> Self {
        self.actual_points = Some(points);
        self
    }
}
