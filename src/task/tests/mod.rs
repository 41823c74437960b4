//! Unit tests for the task board core.

mod domain_tests;

use crate::task::domain::{PersistedTaskData, Task, TaskDraft, TaskId, TaskStatus};
use chrono::{DateTime, Utc};

/// Fixed creation time for tasks built by tests.
pub(super) fn fixed_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).expect("valid fixed timestamp")
}

/// Builds a task with a known identity.
pub(super) fn task_from(id: u64, draft: TaskDraft) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id).expect("valid task id"),
        draft,
        created_at: fixed_time(),
    })
}

/// Builds a titled task in the given status.
pub(super) fn task(id: u64, title: &str, status: TaskStatus) -> Task {
    task_from(id, TaskDraft::new(title).with_status(status))
}

/// Returns the identifiers of `tasks` in order.
pub(super) fn ids(tasks: &[Task]) -> Vec<u64> {
    tasks.iter().map(|task| task.id().value()).collect()
}

/// Shorthand for a valid task identifier.
pub(super) fn id(value: u64) -> TaskId {
    TaskId::new(value).expect("valid task id")
}
