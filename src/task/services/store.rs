//! Persistent, ordered task collection with an explicit hydration
//! lifecycle.
//!
//! The store is the single owner of the collection. Readers get copies.
//! Every mutation runs behind one lock that is held through the storage
//! write, so writes reach storage in the order mutations were issued.

use crate::task::{
    config::TaskStoreConfig,
    domain::{Task, TaskDomainError, TaskDraft, TaskFilter, TaskId, TaskPatch, TaskStatus},
    ports::{TaskSnapshot, TaskStorage, TaskStorageError},
    services::{filter::filter_tasks, reorder},
};
use mockable::Clock;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{Mutex, MutexGuard, watch};
use tracing::{debug, info, warn};

/// Lifecycle phase of a [`TaskStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorePhase {
    /// Constructed; persisted state has not been read.
    Initialised,
    /// Persisted state is being read.
    Hydrating,
    /// Persisted state has been read; the store accepts mutations.
    Ready,
}

/// Result of [`TaskStore::hydrate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationOutcome {
    /// Tasks were restored from storage.
    Restored {
        /// Number of restored tasks.
        count: usize,
    },
    /// Storage held nothing usable; the store starts empty.
    Empty,
    /// The store had already been hydrated; nothing was read.
    AlreadyHydrated,
}

/// Result of [`TaskStore::seed_if_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The collection was populated from the seed.
    Seeded {
        /// Number of seeded tasks.
        count: usize,
    },
    /// The collection already held tasks or the seed was empty.
    Skipped,
}

/// Errors returned by task store operations.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// A mutation was attempted before hydration completed.
    #[error("task store has not been hydrated")]
    NotHydrated,
    /// Domain invariant violated.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Storage could not be read, or a mutation was applied but could not
    /// be persisted.
    #[error(transparent)]
    Storage(#[from] TaskStorageError),
}

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Canonical ordered task collection persisted through a [`TaskStorage`].
///
/// Changes are applied optimistically: when persisting fails the in-memory
/// collection keeps the change and the error is returned, so the next
/// successful write brings storage up to date.
pub struct TaskStore<S, C>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    storage: Arc<S>,
    clock: Arc<C>,
    config: TaskStoreConfig,
    tasks: Mutex<Vec<Task>>,
    phase: watch::Sender<StorePhase>,
}

impl<S, C> TaskStore<S, C>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    /// Creates an empty, not yet hydrated store with default settings.
    #[must_use]
    pub fn new(storage: Arc<S>, clock: Arc<C>) -> Self {
        Self::with_config(storage, clock, TaskStoreConfig::default())
    }

    /// Creates an empty, not yet hydrated store.
    #[must_use]
    pub fn with_config(storage: Arc<S>, clock: Arc<C>, config: TaskStoreConfig) -> Self {
        let (phase, _) = watch::channel(StorePhase::Initialised);
        Self {
            storage,
            clock,
            config,
            tasks: Mutex::new(Vec::new()),
            phase,
        }
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskStoreConfig {
        &self.config
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> StorePhase {
        *self.phase.borrow()
    }

    /// Returns `true` once the persisted state has been read.
    #[must_use]
    pub fn has_hydrated(&self) -> bool {
        self.phase() == StorePhase::Ready
    }

    /// Subscribes to lifecycle phase changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<StorePhase> {
        self.phase.subscribe()
    }

    /// Waits until hydration has completed.
    ///
    /// Returns `false` only if the store is dropped while waiting.
    pub async fn wait_until_hydrated(&self) -> bool {
        let mut receiver = self.phase.subscribe();
        receiver
            .wait_for(|phase| *phase == StorePhase::Ready)
            .await
            .is_ok()
    }

    /// Reads the persisted collection and marks the store ready.
    ///
    /// The ready phase is reached exactly once, whether or not storage held
    /// data. A snapshot that is corrupt or of an unsupported version is
    /// logged and treated as empty. Calling this again after hydration does
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Storage`] when storage cannot be read at
    /// all or holds another store's record. The store then returns to [`StorePhase::Initialised`], refuses
    /// mutations and seeding, and hydration can be retried.
    pub async fn hydrate(&self) -> TaskStoreResult<HydrationOutcome> {
        let mut tasks = self.tasks.lock().await;
        if self.has_hydrated() {
            return Ok(HydrationOutcome::AlreadyHydrated);
        }
        self.phase.send_replace(StorePhase::Hydrating);

        let restored = match self.storage.load().await {
            Ok(Some(snapshot)) => snapshot.tasks,
            Ok(None) => Vec::new(),
            Err(
                err @ (TaskStorageError::Corrupt(_) | TaskStorageError::UnsupportedVersion { .. }),
            ) => {
                warn!(
                    store = %self.config.store_name,
                    error = %err,
                    "discarding unreadable task snapshot"
                );
                Vec::new()
            }
            Err(err) => {
                self.phase.send_replace(StorePhase::Initialised);
                warn!(
                    store = %self.config.store_name,
                    error = %err,
                    "failed to read task snapshot"
                );
                return Err(err.into());
            }
        };
        warn_on_duplicate_ids(&restored);
        *tasks = restored;
        let count = tasks.len();
        self.phase.send_replace(StorePhase::Ready);
        info!(store = %self.config.store_name, count, "task store hydrated");

        if count == 0 {
            Ok(HydrationOutcome::Empty)
        } else {
            Ok(HydrationOutcome::Restored { count })
        }
    }

    /// Returns a copy of the collection in canonical order.
    pub async fn tasks(&self) -> Vec<Task> {
        self.tasks.lock().await.clone()
    }

    /// Returns the number of tasks.
    pub async fn len(&self) -> usize {
        self.tasks.lock().await.len()
    }

    /// Returns `true` when the collection holds no tasks.
    pub async fn is_empty(&self) -> bool {
        self.tasks.lock().await.is_empty()
    }

    /// Returns the task with the given identifier, if any.
    pub async fn get_by_id(&self, id: TaskId) -> Option<Task> {
        self.tasks
            .lock()
            .await
            .iter()
            .find(|task| task.id() == id)
            .cloned()
    }

    /// Replaces the whole collection.
    ///
    /// The caller is responsible for identifier uniqueness; duplicates are
    /// logged but accepted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotHydrated`] before hydration and
    /// [`TaskStoreError::Storage`] when the write fails.
    pub async fn set_all(&self, replacement: Vec<Task>) -> TaskStoreResult<()> {
        let mut tasks = self.ready_tasks().await?;
        warn_on_duplicate_ids(&replacement);
        *tasks = replacement;
        debug!(count = tasks.len(), "task collection replaced");
        self.persist(&tasks).await
    }

    /// Creates a task from `draft` at the front of the collection.
    ///
    /// The new identifier is one past the largest existing identifier, or 1
    /// for an empty collection. The creation time comes from the clock.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotHydrated`] before hydration,
    /// [`TaskStoreError::Domain`] when no identifier is left, and
    /// [`TaskStoreError::Storage`] when the write fails.
    pub async fn add(&self, draft: TaskDraft) -> TaskStoreResult<Task> {
        let mut tasks = self.ready_tasks().await?;
        let id = TaskId::next_after(tasks.iter().map(Task::id))?;
        let task = Task::new(id, draft, &*self.clock);
        tasks.insert(0, task.clone());
        debug!(task_id = %id, "task added");
        self.persist(&tasks).await?;
        Ok(task)
    }

    /// Merges `patch` into the task with the given identifier.
    ///
    /// Returns the updated task, or `None` without touching storage when
    /// no task has that identifier. Collection order never changes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotHydrated`] before hydration and
    /// [`TaskStoreError::Storage`] when the write fails.
    pub async fn update(&self, id: TaskId, patch: TaskPatch) -> TaskStoreResult<Option<Task>> {
        let mut tasks = self.ready_tasks().await?;
        let Some(task) = tasks.iter_mut().find(|task| task.id() == id) else {
            debug!(task_id = %id, "ignoring update for unknown task");
            return Ok(None);
        };
        task.apply(patch);
        let updated = task.clone();
        debug!(task_id = %id, "task updated");
        self.persist(&tasks).await?;
        Ok(Some(updated))
    }

    /// Moves a task into the `to_status` column at `to_index`.
    ///
    /// See [`reorder::move_task`] for the placement rule. Returns `false`
    /// without touching storage when no task has that identifier. A move to
    /// the position the task already holds is not written.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotHydrated`] before hydration and
    /// [`TaskStoreError::Storage`] when the write fails.
    pub async fn move_task_by_id(
        &self,
        id: TaskId,
        to_status: TaskStatus,
        to_index: usize,
    ) -> TaskStoreResult<bool> {
        let mut tasks = self.ready_tasks().await?;
        self.apply_move(&mut tasks, id, to_status, to_index).await
    }

    /// Moves a task into the `to_status` column at `visible_index`, counted
    /// among the tasks in that column which match `filter`.
    ///
    /// The visible position is translated into a collection index under the
    /// same lock that applies the move, so concurrent mutations cannot make
    /// the translation stale.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotHydrated`] before hydration and
    /// [`TaskStoreError::Storage`] when the write fails.
    pub async fn move_visible_task(
        &self,
        id: TaskId,
        to_status: TaskStatus,
        filter: &TaskFilter,
        visible_index: usize,
    ) -> TaskStoreResult<bool> {
        let mut tasks = self.ready_tasks().await?;
        let visible = filter_tasks(&tasks, filter);
        let to_index = reorder::resolve_drop_index(&tasks, &visible, id, to_status, visible_index);
        self.apply_move(&mut tasks, id, to_status, to_index).await
    }

    /// Populates an empty collection from `seed`.
    ///
    /// Seeding happens at most once per storage lifetime: once the
    /// collection holds tasks, later seeds (including late-arriving ones)
    /// are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotHydrated`] before hydration and
    /// [`TaskStoreError::Storage`] when the write fails.
    pub async fn seed_if_empty(&self, seed: Vec<Task>) -> TaskStoreResult<SeedOutcome> {
        let mut tasks = self.ready_tasks().await?;
        if !tasks.is_empty() || seed.is_empty() {
            debug!(existing = tasks.len(), seed = seed.len(), "skipping seed");
            return Ok(SeedOutcome::Skipped);
        }
        warn_on_duplicate_ids(&seed);
        *tasks = seed;
        let count = tasks.len();
        info!(store = %self.config.store_name, count, "task store seeded");
        self.persist(&tasks).await?;
        Ok(SeedOutcome::Seeded { count })
    }

    async fn apply_move(
        &self,
        tasks: &mut Vec<Task>,
        id: TaskId,
        to_status: TaskStatus,
        to_index: usize,
    ) -> TaskStoreResult<bool> {
        if !tasks.iter().any(|task| task.id() == id) {
            debug!(task_id = %id, "ignoring move for unknown task");
            return Ok(false);
        }
        let reordered = reorder::move_task(tasks, id, to_status, to_index);
        if reordered == *tasks {
            debug!(task_id = %id, "task already in place");
            return Ok(true);
        }
        *tasks = reordered;
        debug!(task_id = %id, status = %to_status, to_index, "task moved");
        self.persist(tasks).await?;
        Ok(true)
    }

    async fn ready_tasks(&self) -> TaskStoreResult<MutexGuard<'_, Vec<Task>>> {
        let tasks = self.tasks.lock().await;
        if !self.has_hydrated() {
            return Err(TaskStoreError::NotHydrated);
        }
        Ok(tasks)
    }

    async fn persist(&self, tasks: &[Task]) -> TaskStoreResult<()> {
        let snapshot = TaskSnapshot::new(
            self.config.store_name.clone(),
            self.config.snapshot_version,
            tasks.to_vec(),
        );
        self.storage.save(&snapshot).await.map_err(|err| {
            warn!(store = %self.config.store_name, error = %err, "failed to persist tasks");
            TaskStoreError::from(err)
        })
    }
}

fn warn_on_duplicate_ids(tasks: &[Task]) {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if !seen.insert(task.id()) {
            warn!(task_id = %task.id(), "duplicate task identifier in collection");
        }
    }
}
