//! Given steps for kanban board BDD scenarios.

use super::world::{KanbanWorld, run_async};
use chrono::Utc;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::{
    config::TaskStoreConfig,
    domain::{PersistedTaskData, Task, TaskDraft, TaskId, TaskStatus},
    ports::{TaskSnapshot, TaskStorage},
};

#[given(r#"task {id:u64} "{title}" with status "{status}""#)]
fn task_with_status(
    world: &mut KanbanWorld,
    id: u64,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id).wrap_err("task id in scenario")?;
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    world
        .pending
        .push((task_id, TaskDraft::new(title).with_status(parsed)));
    Ok(())
}

#[given(r#"developers "{developers}" are assigned to task {id:u64}"#)]
fn developers_assigned(
    world: &mut KanbanWorld,
    developers: String,
    id: u64,
) -> Result<(), eyre::Report> {
    let (_, draft) = world
        .pending
        .iter_mut()
        .find(|(task_id, _)| task_id.value() == id)
        .ok_or_else(|| eyre::eyre!("task {id} not defined in scenario"))?;
    draft.developer = developers;
    Ok(())
}

#[given("the board has loaded")]
fn board_has_loaded(world: &mut KanbanWorld) -> Result<(), eyre::Report> {
    let tasks: Vec<Task> = world
        .pending
        .drain(..)
        .map(|(id, draft)| {
            Task::from_persisted(PersistedTaskData {
                id,
                draft,
                created_at: Utc::now(),
            })
        })
        .collect();
    let snapshot = TaskSnapshot::new(
        TaskStoreConfig::DEFAULT_STORE_NAME,
        TaskStoreConfig::CURRENT_SNAPSHOT_VERSION,
        tasks,
    );
    run_async(world.storage.save(&snapshot)).wrap_err("write scenario snapshot")?;
    run_async(world.board.store().hydrate()).wrap_err("hydrate scenario store")?;
    world.saves_after_load = world.storage.save_count().wrap_err("count saves")?;
    Ok(())
}
