//! File store tests
mod common;

use chrono::Weekday;
use common::{date, jan_25_2026};
use taskdeck::*;
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path().join("tasks.toml"))
}

#[tokio::test]
async fn test_missing_file_is_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    assert!(store.list().await.unwrap().is_empty());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn test_create_and_reload() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let first = store
        .create(TaskDraft {
            title: "Book club".to_string(),
            priority: Priority::High,
            due_date: Some(date(2026, 1, 12)),
            duration: Some(1.5),
            is_recurring: true,
            recurrence: Recurrence::ByWeekday {
                weekday: Weekday::Mon,
                occurrence: 2,
            },
            ..Default::default()
        })
        .await
        .unwrap();
    let second = store
        .create(TaskDraft {
            title: "Pay rent".to_string(),
            is_recurring: true,
            recurrence: Recurrence::ByDayOfMonth { day: 31 },
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(first.id, TaskId(1));
    assert_eq!(second.id, TaskId(2));

    // a fresh store reads what the first one wrote
    let reopened = store_in(&dir);
    let tasks = reopened.list().await.unwrap();
    assert_eq!(tasks, vec![second, first]);
}

#[tokio::test]
async fn test_update_and_delete_persist() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    let task = store
        .create(TaskDraft {
            title: "Launch".to_string(),
            due_date: Some(date(2026, 2, 3)),
            ..Default::default()
        })
        .await
        .unwrap();

    let deliverable = Deliverable::new("Write docs");
    let updated = store
        .update(
            task.id,
            TaskUpdates {
                completed: Some(true),
                due_date: Patch::Clear,
                deliverables: Patch::Set(vec![deliverable.clone()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.completed);
    assert_eq!(updated.due_date, None);

    let stored = store_in(&dir).list().await.unwrap();
    assert_eq!(stored[0].deliverables, vec![deliverable]);
    assert_eq!(stored[0].due_date, None);

    store.delete(task.id).await.unwrap();
    assert!(store.list().await.unwrap().is_empty());
    assert!(matches!(
        store.delete(task.id).await,
        Err(StoreError::NotFound(TaskId(1)))
    ));
    assert!(matches!(
        store.update(task.id, TaskUpdates::default()).await,
        Err(StoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_hand_edited_file_is_read_leniently() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.toml");
    std::fs::write(
        &path,
        r#"
next_id = 1

[[tasks]]
id = 7
title = "Review budget"
priority = "low"
due_date = "2026-03-27T00:00:00Z"
is_recurring = true
recurring_day = 15
recurring_weekday = 5
recurring_week_of_month = 5
deliverables = '[{"id":"a","title":"Spreadsheet","completed":true}]'

[[tasks]]
id = 3
title = "Broken date"
due_date = "next week"
deliverables = 42
"#,
    )
    .unwrap();
    let store = FileStore::new(&path);

    let tasks = store.list().await.unwrap();
    assert_eq!(tasks.len(), 2);

    let budget = &tasks[0];
    assert_eq!(budget.id, TaskId(7));
    assert_eq!(budget.priority, Priority::Low);
    assert_eq!(budget.due_date, Some(date(2026, 3, 27)));
    assert_eq!(
        budget.recurrence,
        Recurrence::ByWeekday {
            weekday: Weekday::Fri,
            occurrence: 5
        }
    );
    assert_eq!(budget.deliverables.len(), 1);
    assert!(budget.deliverables[0].completed);

    let broken = &tasks[1];
    assert_eq!(broken.due_date, None);
    assert_eq!(broken.priority, Priority::Medium);
    assert!(broken.deliverables.is_empty());

    // next_id is raised past the highest stored id
    let created = store
        .create(TaskDraft {
            title: "New".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, TaskId(8));
}

#[tokio::test]
async fn test_invalid_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.toml");
    std::fs::write(&path, "tasks = [").unwrap();

    let store = FileStore::new(&path);
    assert!(matches!(store.list().await, Err(StoreError::Parse(_))));

    let result = TaskBoard::open(store).await;
    assert!(matches!(result, Err(BoardError::Store(StoreError::Parse(_)))));
}

#[tokio::test]
async fn test_board_over_file_store() {
    let dir = TempDir::new().unwrap();
    let mut board = TaskBoard::open(store_in(&dir))
        .await
        .unwrap()
        .with_clock(jan_25_2026);

    let task = board
        .add_task(NewTask {
            title: "Month end report".to_string(),
            due_date: Some(date(2026, 1, 30)),
            is_recurring: true,
            ..Default::default()
        })
        .await
        .unwrap();
    let outcome = board.toggle_task(task.id).await.unwrap();
    assert_eq!(outcome.successor.unwrap().due_date, Some(date(2026, 2, 27)));

    let reopened = TaskBoard::open(store_in(&dir)).await.unwrap();
    let ids: Vec<TaskId> = reopened.tasks().iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![TaskId(2), TaskId(1)]);
    assert!(reopened.find(TaskId(1)).unwrap().completed);
}
