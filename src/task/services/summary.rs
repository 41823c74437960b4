//! Percentage breakdowns and point totals over a task list.

use crate::task::domain::{ChipColor, StoryPoints, Task, TaskKind, TaskPriority, TaskStatus};

/// A classification field paired with the value to count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldValue {
    /// Match on workflow status.
    Status(TaskStatus),
    /// Match on priority.
    Priority(TaskPriority),
    /// Match on work type.
    Kind(TaskKind),
}

impl FieldValue {
    /// Returns `true` when `task` holds this value in the selected field.
    #[must_use]
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::Status(status) => task.status() == status,
            Self::Priority(priority) => task.priority() == priority,
            Self::Kind(kind) => task.kind() == kind,
        }
    }

    /// Returns the display label of the value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Status(status) => status.as_str(),
            Self::Priority(priority) => priority.as_str(),
            Self::Kind(kind) => kind.as_str(),
        }
    }

    /// Returns the chip color of the value.
    #[must_use]
    pub const fn color(self) -> ChipColor {
        match self {
            Self::Status(status) => status.color(),
            Self::Priority(priority) => priority.color(),
            Self::Kind(kind) => kind.color(),
        }
    }
}

/// Numeric task field that can be totalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointField {
    /// Estimated story points.
    Estimated,
    /// Actual story points.
    Actual,
}

impl PointField {
    const fn of(self, task: &Task) -> StoryPoints {
        match self {
            Self::Estimated => task.estimated_points(),
            Self::Actual => task.actual_points(),
        }
    }
}

/// Returns the share of `tasks` holding `value`, as a whole percentage
/// rounded half up.
///
/// An empty list yields 0.
#[must_use]
pub fn percentage(tasks: &[Task], value: FieldValue) -> u8 {
    let total = tasks.len();
    let count = tasks.iter().filter(|task| value.matches(task)).count();
    rounded_percent(count, total)
}

/// Returns the total of `field` over `tasks`, 0 for an empty list.
#[must_use]
pub fn sum_points(tasks: &[Task], field: PointField) -> StoryPoints {
    tasks.iter().map(|task| field.of(task)).sum()
}

#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "round-half-up on whole counts avoids float rounding drift"
)]
fn rounded_percent(count: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let doubled = count.saturating_mul(200).saturating_add(total);
    let percent = doubled / total.saturating_mul(2);
    u8::try_from(percent).unwrap_or(100)
}

/// Share of the list held by one classification value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Share {
    /// The counted value.
    pub value: FieldValue,
    /// Whole percentage of the list, 1 to 100.
    pub percentage: u8,
}

/// Summary row shown under the task table.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskSummary {
    /// Non-zero status shares in column order.
    pub statuses: Vec<Share>,
    /// Non-zero priority shares from most to least urgent.
    pub priorities: Vec<Share>,
    /// Non-zero work type shares in display order.
    pub kinds: Vec<Share>,
    /// Total estimated points.
    pub estimated_points: StoryPoints,
    /// Total actual points.
    pub actual_points: StoryPoints,
}

impl TaskSummary {
    /// Computes the summary over `tasks`, normally the filtered list.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            statuses: shares(tasks, TaskStatus::ALL.map(FieldValue::Status)),
            priorities: shares(tasks, TaskPriority::ALL.map(FieldValue::Priority)),
            kinds: shares(tasks, TaskKind::ALL.map(FieldValue::Kind)),
            estimated_points: sum_points(tasks, PointField::Estimated),
            actual_points: sum_points(tasks, PointField::Actual),
        }
    }
}

fn shares(tasks: &[Task], values: impl IntoIterator<Item = FieldValue>) -> Vec<Share> {
    values
        .into_iter()
        .map(|value| Share {
            value,
            percentage: percentage(tasks, value),
        })
        .filter(|share| share.percentage > 0)
        .collect()
}
