//! Board facade wiring UI events to the store and deriving the views the
//! table and kanban board render.

use crate::task::{
    domain::{
        FilterUpdate, StoryPoints, Task, TaskDraft, TaskFilter, TaskId, TaskKind, TaskPatch,
        TaskPriority, TaskStatus,
    },
    ports::{FilterState, SeedSource, SeedSourceError, TaskStorage},
    services::{
        filter::{distinct_developers, filter_tasks},
        reorder::{KanbanColumn, columns},
        seeding::{SeedError, prepare_seed},
        store::{HydrationOutcome, SeedOutcome, TaskStore, TaskStoreError},
        summary::TaskSummary,
    },
};
use mockable::Clock;
use rand::Rng;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors returned by board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// The seed payload could not be fetched.
    #[error("failed to load tasks: {0}")]
    SeedSource(#[from] SeedSourceError),
    /// The seed payload could not be turned into tasks.
    #[error("failed to load tasks: {0}")]
    Seed(#[from] SeedError),
}

/// Result type for board operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Edit made in a single table cell.
///
/// Point cells carry the raw text typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellEdit {
    /// Title cell.
    Title(String),
    /// Developers cell, comma-separated.
    Developer(String),
    /// Status chip.
    Status(TaskStatus),
    /// Priority chip.
    Priority(TaskPriority),
    /// Work type chip.
    Kind(TaskKind),
    /// Estimated points cell.
    EstimatedPoints(String),
    /// Actual points cell.
    ActualPoints(String),
}

impl CellEdit {
    /// Converts the edit into a patch, coercing unparseable points to 0.
    #[must_use]
    pub fn into_patch(self) -> TaskPatch {
        let patch = TaskPatch::new();
        match self {
            Self::Title(title) => patch.with_title(title),
            Self::Developer(developer) => patch.with_developer(developer),
            Self::Status(status) => patch.with_status(status),
            Self::Priority(priority) => patch.with_priority(priority),
            Self::Kind(kind) => patch.with_kind(kind),
            Self::EstimatedPoints(raw) => patch.with_estimated_points(StoryPoints::from_input(&raw)),
            Self::ActualPoints(raw) => patch.with_actual_points(StoryPoints::from_input(&raw)),
        }
    }
}

/// Outcome of [`TaskBoard::bootstrap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    /// What hydration found.
    pub hydration: HydrationOutcome,
    /// Whether the seed populated the store.
    pub seed: SeedOutcome,
}

/// Everything the presentation layer renders, derived from one read of the
/// store.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    /// Whether hydration has completed; render a loading state until then.
    pub hydrated: bool,
    /// Criteria the view was computed with.
    pub filter: TaskFilter,
    /// Visible tasks in table order.
    pub visible: Vec<Task>,
    /// Distinct developers across the whole collection.
    pub developers: Vec<String>,
    /// Kanban columns over the visible tasks.
    pub columns: Vec<KanbanColumn>,
    /// Summary row over the visible tasks.
    pub summary: TaskSummary,
}

/// Board facade combining the store, the seed source, and the filter state.
pub struct TaskBoard<S, C>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    store: Arc<TaskStore<S, C>>,
    seed_source: Arc<dyn SeedSource>,
    filter_state: Arc<dyn FilterState>,
    clock: Arc<C>,
}

impl<S, C> TaskBoard<S, C>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    /// Creates a board over an existing store.
    #[must_use]
    pub fn new(
        store: Arc<TaskStore<S, C>>,
        seed_source: Arc<dyn SeedSource>,
        filter_state: Arc<dyn FilterState>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            store,
            seed_source,
            filter_state,
            clock,
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &Arc<TaskStore<S, C>> {
        &self.store
    }

    /// Hydrates the store and seeds it when persisted state is empty.
    ///
    /// The seed source is only consulted when the hydrated collection is
    /// empty. A failed or unavailable seed leaves the store empty; calling
    /// this again retries.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Store`] when storage cannot be read or
    /// persisting the seed fails; nothing is seeded over unreadable
    /// storage. Returns [`TaskBoardError::SeedSource`] or
    /// [`TaskBoardError::Seed`] when seed data cannot be loaded.
    pub async fn bootstrap<R: Rng>(&self, rng: &mut R) -> TaskBoardResult<BootstrapReport> {
        let hydration = self.store.hydrate().await?;
        if !self.store.is_empty().await {
            return Ok(BootstrapReport {
                hydration,
                seed: SeedOutcome::Skipped,
            });
        }

        let payload = self.seed_source.fetch().await.inspect_err(|err| {
            warn!(error = %err, "seed fetch failed");
        })?;
        let seed = prepare_seed(payload, &*self.clock, rng).inspect_err(|err| {
            warn!(error = %err, "seed data rejected");
        })?;
        let outcome = self.store.seed_if_empty(seed).await?;
        info!(?hydration, ?outcome, "board bootstrapped");
        Ok(BootstrapReport {
            hydration,
            seed: outcome,
        })
    }

    /// Adds a blank task at the top of the board.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Store`] when the store rejects the change.
    pub async fn new_task(&self) -> TaskBoardResult<Task> {
        Ok(self.store.add(TaskDraft::default()).await?)
    }

    /// Applies a table cell edit to the task with the given identifier.
    ///
    /// Returns `None` when the task no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Store`] when the store rejects the change.
    pub async fn edit_cell(&self, id: TaskId, edit: CellEdit) -> TaskBoardResult<Option<Task>> {
        Ok(self.store.update(id, edit.into_patch()).await?)
    }

    /// Handles a kanban drop of task `id` onto the `to_status` column at
    /// `visible_index`, counted among the cards currently shown there.
    ///
    /// Returns `false` when the task no longer exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Store`] when the store rejects the change.
    pub async fn drop_card(
        &self,
        id: TaskId,
        to_status: TaskStatus,
        visible_index: usize,
    ) -> TaskBoardResult<bool> {
        let filter = self.filter_state.current();
        Ok(self
            .store
            .move_visible_task(id, to_status, &filter, visible_index)
            .await?)
    }

    /// Returns the current filter criteria.
    #[must_use]
    pub fn filter(&self) -> TaskFilter {
        self.filter_state.current()
    }

    /// Merges a change into the filter state.
    pub fn update_filter(&self, update: FilterUpdate) {
        self.filter_state.apply(update);
    }

    /// Adds a developer to the developer filter.
    pub fn select_developer(&self, developer: &str) {
        let update = FilterUpdate::select_developer(&self.filter(), developer);
        self.update_filter(update);
    }

    /// Removes a developer from the developer filter.
    pub fn deselect_developer(&self, developer: &str) {
        let update = FilterUpdate::deselect_developer(&self.filter(), developer);
        self.update_filter(update);
    }

    /// Computes the current view.
    pub async fn view(&self) -> BoardView {
        let filter = self.filter();
        let all = self.store.tasks().await;
        let visible = filter_tasks(&all, &filter);
        BoardView {
            hydrated: self.store.has_hydrated(),
            developers: distinct_developers(&all),
            columns: columns(&visible),
            summary: TaskSummary::from_tasks(&visible),
            filter,
            visible,
        }
    }
}
