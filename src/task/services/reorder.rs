//! Move reconciliation for the kanban board.
//!
//! The flat collection order is the only ordering there is: a kanban
//! column is the subsequence of tasks sharing a status, in collection
//! order. Moves splice the flat collection so columns can never drift
//! apart from it.

use crate::task::domain::{Task, TaskId, TaskStatus};

/// One kanban column derived from the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct KanbanColumn {
    /// Status shared by every task in the column.
    pub status: TaskStatus,
    /// Tasks in on-screen order.
    pub tasks: Vec<Task>,
}

impl KanbanColumn {
    /// Returns the number of cards in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Returns the tasks of one column in collection order.
pub fn column(tasks: &[Task], status: TaskStatus) -> impl Iterator<Item = &Task> {
    tasks.iter().filter(move |task| task.status() == status)
}

/// Splits the collection into one column per status, in column order.
///
/// Every status gets a column, empty or not.
#[must_use]
pub fn columns(tasks: &[Task]) -> Vec<KanbanColumn> {
    TaskStatus::ALL
        .iter()
        .map(|status| KanbanColumn {
            status: *status,
            tasks: column(tasks, *status).cloned().collect(),
        })
        .collect()
}

/// Returns the collection after moving task `id` into the `to_status`
/// column at `to_index`.
///
/// `to_index` counts positions among the other tasks of that column. The
/// task is inserted just before the task currently at that position, or
/// appended to the end of the collection when the index is past the end
/// of the column. An unknown `id` returns the collection unchanged, as
/// does a move to the position the task already holds.
#[must_use]
pub fn move_task(tasks: &[Task], id: TaskId, to_status: TaskStatus, to_index: usize) -> Vec<Task> {
    let mut reordered = tasks.to_vec();
    let Some(position) = reordered.iter().position(|task| task.id() == id) else {
        return reordered;
    };
    if column_index(tasks, id, to_status) == Some(to_index) {
        return reordered;
    }

    let mut moved = reordered.remove(position);
    moved.set_status(to_status);

    let insert_at = reordered
        .iter()
        .enumerate()
        .filter(|(_, task)| task.status() == to_status)
        .nth(to_index)
        .map_or(reordered.len(), |(index, _)| index);
    reordered.insert(insert_at, moved);
    reordered
}

/// Translates a drop position in a filtered column into a position in the
/// full column.
///
/// `visible_index` counts the other visible tasks of the `to_status`
/// column. The result counts the other tasks of that column in `all`, so
/// the card lands just before the same neighbour it was dropped on. A drop
/// past the last visible card maps past the end of the full column.
#[must_use]
pub fn resolve_drop_index(
    all: &[Task],
    visible: &[Task],
    moving: TaskId,
    to_status: TaskStatus,
    visible_index: usize,
) -> usize {
    let others = |tasks: &[Task]| {
        tasks
            .iter()
            .filter(move |task| task.status() == to_status && task.id() != moving)
            .map(Task::id)
            .collect::<Vec<_>>()
    };
    let full = others(all);
    others(visible)
        .get(visible_index)
        .and_then(|anchor| full.iter().position(|id| id == anchor))
        .unwrap_or(full.len())
}

/// Returns the position of task `id` within the `status` column, when the
/// task is in that column.
fn column_index(tasks: &[Task], id: TaskId, status: TaskStatus) -> Option<usize> {
    column(tasks, status).position(|task| task.id() == id)
}
