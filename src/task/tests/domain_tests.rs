//! Domain tests for identifiers, classifications, points, and tasks.

use super::{fixed_time, task_from};
use crate::task::domain::{
    ChipColor, StoryPoints, Task, TaskDomainError, TaskDraft, TaskId, TaskKind, TaskPatch,
    TaskPriority, TaskStatus, split_developers,
};
use mockable::{Clock, DefaultClock};
use rstest::rstest;

#[rstest]
fn task_id_rejects_zero() {
    assert_eq!(TaskId::new(0), Err(TaskDomainError::InvalidTaskId(0)));
}

#[rstest]
#[case(vec![], 1)]
#[case(vec![3, 7, 5], 8)]
#[case(vec![1], 2)]
fn next_after_is_one_past_the_maximum(#[case] existing: Vec<u64>, #[case] expected: u64) {
    let ids = existing
        .into_iter()
        .map(|value| TaskId::new(value).expect("valid task id"));
    let next = TaskId::next_after(ids).expect("identifier space available");
    assert_eq!(next.value(), expected);
}

#[rstest]
fn next_reports_exhausted_identifier_space() {
    let last = TaskId::new(u64::MAX).expect("valid task id");
    assert_eq!(last.next(), Err(TaskDomainError::IdSpaceExhausted));
}

#[rstest]
fn task_id_rejects_zero_on_the_wire() {
    let result: Result<TaskId, _> = serde_json::from_str("0");
    assert!(result.is_err());
}

#[rstest]
#[case("Ready to start", TaskStatus::Todo)]
#[case("in progress", TaskStatus::InProgress)]
#[case("  Waiting for review ", TaskStatus::InReview)]
#[case("Pending Deploy", TaskStatus::PendingDeploy)]
#[case("DONE", TaskStatus::Done)]
#[case("Stuck", TaskStatus::Stuck)]
fn status_parses_labels_case_insensitively(#[case] label: &str, #[case] expected: TaskStatus) {
    assert_eq!(TaskStatus::try_from(label), Ok(expected));
}

#[rstest]
fn status_rejects_unknown_label() {
    let err = TaskStatus::try_from("Archived").expect_err("unknown status");
    assert_eq!(err.field, "status");
    assert_eq!(err.value, "Archived");
}

#[rstest]
#[case(TaskPriority::BestEffort, "Best Effort", ChipColor::Default)]
#[case(TaskPriority::Critical, "Critical", ChipColor::Danger)]
fn priority_has_label_and_color(
    #[case] priority: TaskPriority,
    #[case] label: &str,
    #[case] color: ChipColor,
) {
    assert_eq!(priority.as_str(), label);
    assert_eq!(priority.color(), color);
    assert_eq!(TaskPriority::try_from(label), Ok(priority));
}

#[rstest]
fn kind_serializes_to_display_label() {
    let json = serde_json::to_string(&TaskKind::Feature).expect("serialize kind");
    assert_eq!(json, "\"Feature Enhancements\"");
}

#[rstest]
#[case("5", 5.0)]
#[case(" 2.5 ", 2.5)]
#[case("", 0.0)]
#[case("abc", 0.0)]
#[case("NaN", 0.0)]
#[case("inf", 0.0)]
fn story_points_from_input_coerces_invalid_text(#[case] raw: &str, #[case] expected: f64) {
    assert_eq!(StoryPoints::from_input(raw).value(), expected);
}

#[rstest]
fn story_points_reject_non_finite_values() {
    assert_eq!(
        StoryPoints::new(f64::NAN),
        Err(TaskDomainError::NonFinitePoints)
    );
}

#[rstest]
fn new_task_takes_creation_time_from_clock() {
    let clock = DefaultClock;
    let before = clock.utc();
    let created = Task::new(
        TaskId::new(1).expect("valid task id"),
        TaskDraft::default(),
        &clock,
    );
    let after = clock.utc();

    assert!(created.created_at() >= before && created.created_at() <= after);
    assert_eq!(created.title(), "");
    assert_eq!(created.status(), TaskStatus::Todo);
    assert_eq!(created.priority(), TaskPriority::BestEffort);
    assert_eq!(created.kind(), TaskKind::Feature);
    assert_eq!(created.estimated_points(), StoryPoints::ZERO);
}

#[rstest]
fn apply_merges_only_present_fields() {
    let mut updated = task_from(
        4,
        TaskDraft::new("Write docs")
            .with_developer("Alice")
            .with_priority(TaskPriority::High),
    );

    updated.apply(
        TaskPatch::new()
            .with_status(TaskStatus::Done)
            .with_actual_points(StoryPoints::from_input("3")),
    );

    assert_eq!(updated.id().value(), 4);
    assert_eq!(updated.title(), "Write docs");
    assert_eq!(updated.developer(), "Alice");
    assert_eq!(updated.priority(), TaskPriority::High);
    assert_eq!(updated.status(), TaskStatus::Done);
    assert_eq!(updated.actual_points().value(), 3.0);
    assert_eq!(updated.created_at(), fixed_time());
}

#[rstest]
fn empty_patch_reports_empty() {
    assert!(TaskPatch::new().is_empty());
    assert!(!TaskPatch::new().with_title("x").is_empty());
}

#[rstest]
fn split_developers_trims_and_drops_blanks() {
    let names: Vec<&str> = split_developers(" Alice, ,Bob ,").collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[rstest]
fn task_uses_wire_field_names() {
    let value = serde_json::to_value(task_from(
        9,
        TaskDraft::new("Ship").with_points(
            StoryPoints::from_input("3"),
            StoryPoints::from_input("2"),
        ),
    ))
    .expect("serialize task");

    assert_eq!(value["id"], 9);
    assert_eq!(value["type"], "Feature Enhancements");
    assert_eq!(value["status"], "Ready to start");
    assert_eq!(value["Estimated SP"], 3.0);
    assert_eq!(value["Actual SP"], 2.0);
    assert!(value.get("createdAt").is_some());
}
