//! End-to-end board flows over in-memory adapters.

use std::sync::Arc;

use super::helpers::{board_with, fresh_board, rng, titles};
use rand::rngs::StdRng;
use rstest::rstest;
use taskboard::task::{
    adapters::memory::InMemoryFilterState,
    domain::{StoryPoints, TaskStatus},
    services::{CellEdit, SeedOutcome},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_board_survives_restart(mut rng: StdRng) -> Result<(), eyre::Report> {
    let (board, storage) = fresh_board()?;
    let first = board.bootstrap(&mut rng).await?;
    eyre::ensure!(
        first.seed == SeedOutcome::Seeded { count: 3 },
        "expected three seeded tasks, got {:?}",
        first.seed
    );
    let created = board.new_task().await?;
    board
        .edit_cell(created.id(), CellEdit::Title("Write release notes".to_owned()))
        .await?;

    let restarted = board_with(&storage, Arc::new(InMemoryFilterState::default()))?;
    let second = restarted.bootstrap(&mut rng).await?;

    eyre::ensure!(second.seed == SeedOutcome::Skipped, "seed ran twice");
    assert_eq!(titles(&restarted).await, titles(&board).await);
    assert_eq!(
        titles(&restarted).await.first().map(String::as_str),
        Some("Write release notes")
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn kanban_move_updates_table_order(mut rng: StdRng) -> Result<(), eyre::Report> {
    let (board, _storage) = fresh_board()?;
    board.bootstrap(&mut rng).await?;
    let export = board
        .store()
        .tasks()
        .await
        .into_iter()
        .find(|task| task.title() == "Export invoices")
        .ok_or_else(|| eyre::eyre!("seeded task missing"))?;

    board.drop_card(export.id(), TaskStatus::Done, 0).await?;

    assert_eq!(
        titles(&board).await,
        vec![
            "Export invoices",
            "Set up CI pipeline",
            "Login form validation"
        ]
    );
    let view = board.view().await;
    let done: Vec<&str> = view
        .columns
        .iter()
        .filter(|column| column.status == TaskStatus::Done)
        .flat_map(|column| column.tasks.iter().map(|task| task.title()))
        .collect();
    assert_eq!(done, vec!["Export invoices", "Set up CI pipeline"]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn summary_reflects_point_edits(mut rng: StdRng) -> Result<(), eyre::Report> {
    let (board, _storage) = fresh_board()?;
    board.bootstrap(&mut rng).await?;
    let first = board
        .store()
        .tasks()
        .await
        .into_iter()
        .next()
        .ok_or_else(|| eyre::eyre!("seeded task missing"))?;

    board
        .edit_cell(first.id(), CellEdit::ActualPoints("not a number".to_owned()))
        .await?;

    let summary = board.view().await.summary;
    assert_eq!(summary.estimated_points, StoryPoints::from_input("16"));
    assert_eq!(summary.actual_points, StoryPoints::from_input("2"));
    Ok(())
}
