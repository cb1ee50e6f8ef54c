//! Integration tests for task status transitions and denormalized names.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use sitetrack_core::error::CoreError;
use sitetrack_core::status::{TaskPriority, TaskStatus};
use sitetrack_db::models::task::{CreateTask, UpdateTask};
use sitetrack_db::repositories::TaskRepo;
use sitetrack_db::views::task_view::{filter_tasks, group_by_phase, TaskFilter};
use sitetrack_db::Store;

fn new_task(name: &str, phase: (i64, &str), assignee: (i64, &str)) -> CreateTask {
    CreateTask {
        project_id: 1,
        phase_id: phase.0,
        phase_name: phase.1.to_string(),
        name: name.to_string(),
        description: None,
        due_date: NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
        priority: None,
        status: None,
        assignee_id: assignee.0,
        assignee_name: assignee.1.to_string(),
        estimated_duration: Some(3),
    }
}

async fn seeded_store() -> Store {
    let store = Store::empty();
    TaskRepo::create(&store, &new_task("Excavate", (1, "Foundation"), (10, "Dana Ortiz")))
        .await
        .unwrap();
    TaskRepo::create(&store, &new_task("Pour footings", (1, "Foundation"), (11, "Lee Park")))
        .await
        .unwrap();
    TaskRepo::create(&store, &new_task("Wall framing", (2, "Framing"), (10, "Dana Ortiz")))
        .await
        .unwrap();
    store
}

#[tokio::test]
async fn test_create_applies_defaults() {
    let store = Store::empty();
    let task = TaskRepo::create(&store, &new_task("Excavate", (1, "Foundation"), (10, "Dana")))
        .await
        .unwrap();
    assert_eq!(task.id, 1);
    assert_eq!(task.status, TaskStatus::NotStarted);
    assert_eq!(task.priority, TaskPriority::Medium);
    assert!(task.completed_date.is_none());
}

#[tokio::test]
async fn test_created_completed_task_is_stamped() {
    let store = Store::empty();
    let mut input = new_task("Survey", (1, "Site Prep"), (10, "Dana"));
    input.status = Some(TaskStatus::Completed);
    let task = TaskRepo::create(&store, &input).await.unwrap();
    assert!(task.completed_date.is_some());
}

#[tokio::test]
async fn test_completing_stamps_and_reopening_clears() {
    let store = seeded_store().await;

    let done = TaskRepo::update(&store, 1, &UpdateTask::status(TaskStatus::Completed))
        .await
        .unwrap();
    assert_eq!(done.status, TaskStatus::Completed);
    let stamped = done.completed_date.expect("completion time");

    // Re-sending Completed keeps the original stamp.
    let again = TaskRepo::update(&store, 1, &UpdateTask::status(TaskStatus::Completed))
        .await
        .unwrap();
    assert_eq!(again.completed_date, Some(stamped));

    let reopened = TaskRepo::update(&store, 1, &UpdateTask::status(TaskStatus::InProgress))
        .await
        .unwrap();
    assert_eq!(reopened.status, TaskStatus::InProgress);
    assert!(reopened.completed_date.is_none());
}

#[tokio::test]
async fn test_updates_without_status_keep_completion() {
    let store = seeded_store().await;
    TaskRepo::update(&store, 2, &UpdateTask::status(TaskStatus::Completed))
        .await
        .unwrap();

    let renamed = UpdateTask {
        name: Some("Pour footings (east)".to_string()),
        ..UpdateTask::default()
    };
    let task = TaskRepo::update(&store, 2, &renamed).await.unwrap();
    assert_eq!(task.status, TaskStatus::Completed);
    assert!(task.completed_date.is_some());
}

#[tokio::test]
async fn test_advance_toggles_between_in_progress_and_completed() {
    let store = seeded_store().await;

    let first = TaskRepo::advance_status(&store, 3).await.unwrap();
    assert_eq!(first.status, TaskStatus::InProgress);
    assert!(first.completed_date.is_none());

    let second = TaskRepo::advance_status(&store, 3).await.unwrap();
    assert_eq!(second.status, TaskStatus::Completed);
    assert!(second.completed_date.is_some());

    let third = TaskRepo::advance_status(&store, 3).await.unwrap();
    assert_eq!(third.status, TaskStatus::InProgress);
    assert!(third.completed_date.is_none());
}

#[tokio::test]
async fn test_assignee_change_resolves_name_from_other_tasks() {
    let store = seeded_store().await;
    let reassign = UpdateTask {
        assignee_id: Some(11),
        ..UpdateTask::default()
    };
    let task = TaskRepo::update(&store, 1, &reassign).await.unwrap();
    assert_eq!(task.assignee_id, 11);
    assert_eq!(task.assignee_name, "Lee Park");
}

#[tokio::test]
async fn test_phase_change_to_unknown_id_needs_a_name() {
    let store = seeded_store().await;
    let move_phase = UpdateTask {
        phase_id: Some(9),
        ..UpdateTask::default()
    };
    assert_matches!(
        TaskRepo::update(&store, 1, &move_phase).await,
        Err(CoreError::Validation(_))
    );
    let unchanged = TaskRepo::find_by_id(&store, 1).await.unwrap();
    assert_eq!(unchanged.phase_id, 1);

    let named = UpdateTask {
        phase_id: Some(9),
        phase_name: Some("Roofing".to_string()),
        ..UpdateTask::default()
    };
    let moved = TaskRepo::update(&store, 1, &named).await.unwrap();
    assert_eq!(moved.phase_id, 9);
    assert_eq!(moved.phase_name, "Roofing");
}

#[tokio::test]
async fn test_delete_missing_task_leaves_collection_alone() {
    let store = seeded_store().await;
    assert_matches!(
        TaskRepo::delete(&store, 42).await,
        Err(CoreError::NotFound { entity: "Task", id: 42 })
    );
    assert_eq!(TaskRepo::list(&store).await.len(), 3);
}

#[tokio::test]
async fn test_list_by_project() {
    let store = seeded_store().await;
    let mut other = new_task("Punch list", (3, "Closeout"), (10, "Dana Ortiz"));
    other.project_id = 2;
    TaskRepo::create(&store, &other).await.unwrap();

    let tasks = TaskRepo::list_by_project(&store, 1).await.unwrap();
    assert_eq!(tasks.len(), 3);
    assert!(tasks.iter().all(|t| t.project_id == 1));
    assert_matches!(
        TaskRepo::list_by_project(&store, 0).await,
        Err(CoreError::InvalidArgument(_))
    );
}

#[tokio::test]
async fn test_assignees_and_phases_are_unique() {
    let store = seeded_store().await;
    let assignees = TaskRepo::assignees(&store).await;
    let names: Vec<&str> = assignees.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Dana Ortiz", "Lee Park"]);

    let phases = TaskRepo::phases(&store).await;
    let names: Vec<&str> = phases.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Foundation", "Framing"]);
}

#[tokio::test]
async fn test_views_over_repository_snapshot() {
    let store = seeded_store().await;
    TaskRepo::update(&store, 1, &UpdateTask::status(TaskStatus::Completed))
        .await
        .unwrap();
    let tasks = TaskRepo::list(&store).await;

    let completed = filter_tasks(
        &tasks,
        &TaskFilter {
            status: Some(TaskStatus::Completed),
            ..TaskFilter::default()
        },
    );
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, 1);

    let groups = group_by_phase(&tasks);
    assert_eq!(groups[0].phase_name, "Foundation");
    assert_eq!(groups[0].completion_percentage, 50);
    assert_eq!(groups[1].completion_percentage, 0);
}
