//! Filter predicate evaluation over the task collection.

use crate::task::domain::{Task, TaskFilter};
use std::collections::HashSet;

/// Returns `true` when `task` satisfies every active criterion of `filter`.
#[must_use]
pub fn matches(task: &Task, filter: &TaskFilter) -> bool {
    matches_status(task, filter) && matches_developers(task, filter) && matches_search(task, filter)
}

/// Returns the visible subset of `tasks`, preserving collection order.
#[must_use]
pub fn filter_tasks(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| matches(task, filter))
        .cloned()
        .collect()
}

/// Returns every distinct developer name across `tasks`, in order of first
/// appearance.
///
/// Names are trimmed and empty entries dropped. Comparison is exact, so
/// names differing only in case are listed separately.
#[must_use]
pub fn distinct_developers(tasks: &[Task]) -> Vec<String> {
    let mut seen = HashSet::new();
    tasks
        .iter()
        .flat_map(Task::developers)
        .filter(|name| seen.insert(*name))
        .map(str::to_owned)
        .collect()
}

fn matches_status(task: &Task, filter: &TaskFilter) -> bool {
    filter.status.is_none_or(|status| task.status() == status)
}

/// Every selected developer must be assigned to the task.
fn matches_developers(task: &Task, filter: &TaskFilter) -> bool {
    let selected = filter.selected_developers();
    if selected.is_empty() {
        return true;
    }
    let assigned: HashSet<String> = task.developers().map(str::to_lowercase).collect();
    selected
        .iter()
        .all(|name| assigned.contains(&name.trim().to_lowercase()))
}

fn matches_search(task: &Task, filter: &TaskFilter) -> bool {
    filter.active_search().is_none_or(|search| {
        task.title()
            .to_lowercase()
            .contains(&search.to_lowercase())
    })
}
