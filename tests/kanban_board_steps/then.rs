//! Then steps for kanban board BDD scenarios.

use super::world::{KanbanWorld, parse_ids, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskboard::task::{
    domain::{Task, TaskStatus},
    services::{FieldValue, percentage},
};

fn ids_of<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<u64> {
    tasks.into_iter().map(|task| task.id().value()).collect()
}

fn parse_status(status: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(status).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

#[then(r#"the task order is "{order}""#)]
fn task_order_is(world: &KanbanWorld, order: String) -> Result<(), eyre::Report> {
    let expected = parse_ids(&order)?;
    let actual = ids_of(&run_async(world.board.store().tasks()));
    eyre::ensure!(actual == expected, "expected order {expected:?}, found {actual:?}");
    Ok(())
}

#[then(r#"the "{status}" column is "{order}""#)]
fn column_is(world: &KanbanWorld, status: String, order: String) -> Result<(), eyre::Report> {
    let target = parse_status(&status)?;
    let expected = parse_ids(&order)?;
    let view = run_async(world.board.view());
    let column = view
        .columns
        .iter()
        .find(|column| column.status == target)
        .ok_or_else(|| eyre::eyre!("missing column {status}"))?;
    let actual = ids_of(&column.tasks);
    eyre::ensure!(
        actual == expected,
        "expected {status} column {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then("storage was written {count:u64} times since loading")]
fn storage_written(world: &KanbanWorld, count: u64) -> Result<(), eyre::Report> {
    let saves = world.storage.save_count().wrap_err("count saves")?;
    let since_load = u64::try_from(saves.saturating_sub(world.saves_after_load))?;
    eyre::ensure!(
        since_load == count,
        "expected {count} writes since loading, found {since_load}"
    );
    Ok(())
}

#[then(r#"the visible tasks are "{order}""#)]
fn visible_tasks_are(world: &KanbanWorld, order: String) -> Result<(), eyre::Report> {
    let expected = parse_ids(&order)?;
    let actual = ids_of(&run_async(world.board.view()).visible);
    eyre::ensure!(actual == expected, "expected visible {expected:?}, found {actual:?}");
    Ok(())
}

#[then(r#"the "{status}" share is {percent:u64} percent"#)]
fn share_is(world: &KanbanWorld, status: String, percent: u64) -> Result<(), eyre::Report> {
    let target = parse_status(&status)?;
    let visible = run_async(world.board.view()).visible;
    let actual = u64::from(percentage(&visible, FieldValue::Status(target)));
    eyre::ensure!(
        actual == percent,
        "expected {status} share {percent}%, found {actual}%"
    );
    Ok(())
}
