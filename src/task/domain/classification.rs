//! Closed classification sets for tasks: workflow status, priority, and
//! work type, together with their presentation colors.
//!
//! Serialized forms use the human-readable labels of the seed payload
//! (for example `"Ready to start"`), so persisted snapshots and seed data
//! share one wire vocabulary.

use super::ParseClassificationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation color attached to a classification value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipColor {
    /// Neutral color.
    Default,
    /// Brand accent color.
    Primary,
    /// Secondary accent color.
    Secondary,
    /// Positive outcome color.
    Success,
    /// Attention color.
    Warning,
    /// Error or urgency color.
    Danger,
}

impl ChipColor {
    /// Returns the canonical name of the color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Workflow stage of a task.
///
/// Declaration order is the kanban column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started.
    #[serde(rename = "Ready to start")]
    Todo,
    /// Work is underway.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Work is waiting for review.
    #[serde(rename = "Waiting for review")]
    InReview,
    /// Work is merged and waiting for deployment.
    #[serde(rename = "Pending Deploy")]
    PendingDeploy,
    /// Work is complete.
    #[serde(rename = "Done")]
    Done,
    /// Work is blocked.
    #[serde(rename = "Stuck")]
    Stuck,
}

impl TaskStatus {
    /// Every status in kanban column order.
    pub const ALL: [Self; 6] = [
        Self::Todo,
        Self::InProgress,
        Self::InReview,
        Self::PendingDeploy,
        Self::Done,
        Self::Stuck,
    ];

    /// Returns the display label, which is also the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "Ready to start",
            Self::InProgress => "In Progress",
            Self::InReview => "Waiting for review",
            Self::PendingDeploy => "Pending Deploy",
            Self::Done => "Done",
            Self::Stuck => "Stuck",
        }
    }

    /// Returns the chip color used to render this status.
    #[must_use]
    pub const fn color(self) -> ChipColor {
        match self {
            Self::Todo => ChipColor::Default,
            Self::InProgress => ChipColor::Warning,
            Self::InReview => ChipColor::Secondary,
            Self::PendingDeploy => ChipColor::Primary,
            Self::Done => ChipColor::Success,
            Self::Stuck => ChipColor::Danger,
        }
    }
}

/// Severity of a task, from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskPriority {
    /// Must be handled immediately.
    Critical,
    /// Should be handled soon.
    High,
    /// Normal urgency.
    Medium,
    /// Can wait.
    Low,
    /// Handled when time allows.
    #[serde(rename = "Best Effort")]
    BestEffort,
}

impl TaskPriority {
    /// Every priority from most to least urgent.
    pub const ALL: [Self; 5] = [
        Self::Critical,
        Self::High,
        Self::Medium,
        Self::Low,
        Self::BestEffort,
    ];

    /// Returns the display label, which is also the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::BestEffort => "Best Effort",
        }
    }

    /// Returns the chip color used to render this priority.
    #[must_use]
    pub const fn color(self) -> ChipColor {
        match self {
            Self::Critical => ChipColor::Danger,
            Self::High => ChipColor::Warning,
            Self::Medium => ChipColor::Primary,
            Self::Low => ChipColor::Secondary,
            Self::BestEffort => ChipColor::Default,
        }
    }
}

/// Work classification of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskKind {
    /// New or improved functionality.
    #[serde(rename = "Feature Enhancements")]
    Feature,
    /// Anything that is neither a feature nor a bug.
    Other,
    /// Defect fix.
    Bug,
}

impl TaskKind {
    /// Every work type in display order.
    pub const ALL: [Self; 3] = [Self::Feature, Self::Other, Self::Bug];

    /// Returns the display label, which is also the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "Feature Enhancements",
            Self::Other => "Other",
            Self::Bug => "Bug",
        }
    }

    /// Returns the chip color used to render this work type.
    #[must_use]
    pub const fn color(self) -> ChipColor {
        match self {
            Self::Feature => ChipColor::Primary,
            Self::Other => ChipColor::Default,
            Self::Bug => ChipColor::Danger,
        }
    }
}

/// Finds the value whose label matches `value`, ignoring case and
/// surrounding whitespace.
fn parse_label<T: Copy>(
    field: &'static str,
    value: &str,
    all: &[T],
    label: impl Fn(T) -> &'static str,
) -> Result<T, ParseClassificationError> {
    let normalized = value.trim();
    all.iter()
        .copied()
        .find(|candidate| label(*candidate).eq_ignore_ascii_case(normalized))
        .ok_or_else(|| ParseClassificationError::new(field, value))
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseClassificationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_label("status", value, &Self::ALL, Self::as_str)
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseClassificationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_label("priority", value, &Self::ALL, Self::as_str)
    }
}

impl TryFrom<&str> for TaskKind {
    type Error = ParseClassificationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_label("type", value, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
