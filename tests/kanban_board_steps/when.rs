//! When steps for kanban board BDD scenarios.

use super::world::{KanbanWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::task::{
    domain::{TaskId, TaskStatus},
    services::CellEdit,
};

#[when(r#"a new task titled "{title}" is added"#)]
fn new_task_added(world: &mut KanbanWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(world.board.new_task()).wrap_err("add task")?;
    run_async(world.board.edit_cell(created.id(), CellEdit::Title(title)))
        .wrap_err("title new task")?;
    Ok(())
}

#[when(r#"task {id:u64} is dropped on "{status}" at position {position:u64}"#)]
fn task_dropped(
    world: &mut KanbanWorld,
    id: u64,
    status: String,
    position: u64,
) -> Result<(), eyre::Report> {
    let task_id = TaskId::new(id).wrap_err("task id in scenario")?;
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let index = usize::try_from(position).wrap_err("drop position")?;
    let moved = run_async(world.board.drop_card(task_id, target, index)).wrap_err("drop card")?;
    eyre::ensure!(moved, "task {id} was not found on the board");
    Ok(())
}

#[when(r#"the developer "{developer}" is selected"#)]
fn developer_selected(world: &mut KanbanWorld, developer: String) {
    world.board.select_developer(&developer);
}
