//! Query-string filter state driving the board view.

use std::sync::Arc;

use super::helpers::{board_with, rng};
use rand::rngs::StdRng;
use rstest::rstest;
use taskboard::task::{
    adapters::{memory::InMemoryTaskStorage, query::QueryFilterState},
    domain::{FilterUpdate, TaskStatus},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn view_follows_query_parameters(mut rng: StdRng) -> Result<(), eyre::Report> {
    let query = Arc::new(QueryFilterState::from_pairs([("developers", "alice")]));
    let board = board_with(&InMemoryTaskStorage::new(), query.clone())?;
    board.bootstrap(&mut rng).await?;

    let view = board.view().await;
    let visible: Vec<&str> = view.visible.iter().map(|task| task.title()).collect();
    assert_eq!(visible, vec!["Set up CI pipeline", "Login form validation"]);
    assert_eq!(view.developers, vec!["Alice", "Bob", "Carol"]);

    board.select_developer("Bob");
    board.update_filter(FilterUpdate::new().status(Some(TaskStatus::InProgress)));

    let narrowed = board.view().await;
    assert_eq!(narrowed.visible.len(), 1);
    let params = query.params();
    assert_eq!(params.get("developers").map(String::as_str), Some("alice,Bob"));
    assert_eq!(params.get("status").map(String::as_str), Some("In Progress"));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_criteria_removes_query_keys(mut rng: StdRng) -> Result<(), eyre::Report> {
    let query = Arc::new(QueryFilterState::from_pairs([
        ("search", "login"),
        ("status", "Stuck"),
    ]));
    let board = board_with(&InMemoryTaskStorage::new(), query.clone())?;
    board.bootstrap(&mut rng).await?;
    assert!(board.view().await.visible.is_empty());

    board.update_filter(FilterUpdate::new().status(None).search(Some(String::new())));

    assert!(query.params().is_empty());
    assert_eq!(board.view().await.visible.len(), 3);
    Ok(())
}
