//! Shape of the remote payload used to seed an empty board.

use super::{StoryPoints, TaskDraft, TaskId, TaskKind, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope returned by the seed endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPayload {
    /// `false` when the endpoint reports that no data is available.
    pub response: bool,
    /// Seed tasks in delivery order.
    #[serde(default)]
    pub data: Vec<SeedTask>,
}

impl SeedPayload {
    /// Creates a successful payload carrying `data`.
    #[must_use]
    pub const fn available(data: Vec<SeedTask>) -> Self {
        Self {
            response: true,
            data,
        }
    }

    /// Creates a payload reporting that no data is available.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            response: false,
            data: Vec::new(),
        }
    }
}

/// A task as delivered by the seed endpoint.
///
/// Identity and creation time may be missing; they are synthesized before
/// the task reaches the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedTask {
    /// Identifier, when the endpoint provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    /// Task title.
    #[serde(default)]
    pub title: String,
    /// Comma-separated developer names.
    #[serde(default)]
    pub developer: String,
    /// Workflow status.
    #[serde(default = "default_status")]
    pub status: TaskStatus,
    /// Priority.
    #[serde(default = "default_priority")]
    pub priority: TaskPriority,
    /// Work type.
    #[serde(rename = "type", default = "default_kind")]
    pub kind: TaskKind,
    /// Estimated story points.
    #[serde(rename = "Estimated SP", default)]
    pub estimated_points: StoryPoints,
    /// Actual story points.
    #[serde(rename = "Actual SP", default)]
    pub actual_points: StoryPoints,
    /// Creation timestamp, when the endpoint provides one.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl SeedTask {
    /// Creates a seed task without identity or creation time.
    #[must_use]
    pub fn from_draft(draft: TaskDraft) -> Self {
        Self {
            id: None,
            title: draft.title,
            developer: draft.developer,
            status: draft.status,
            priority: draft.priority,
            kind: draft.kind,
            estimated_points: draft.estimated_points,
            actual_points: draft.actual_points,
            created_at: None,
        }
    }

    /// Sets the identifier.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the creation timestamp.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Returns the task fields without identity or creation time.
    #[must_use]
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            developer: self.developer.clone(),
            status: self.status,
            priority: self.priority,
            kind: self.kind,
            estimated_points: self.estimated_points,
            actual_points: self.actual_points,
        }
    }
}

const fn default_status() -> TaskStatus {
    TaskStatus::Todo
}

const fn default_priority() -> TaskPriority {
    TaskPriority::BestEffort
}

const fn default_kind() -> TaskKind {
    TaskKind::Feature
}
