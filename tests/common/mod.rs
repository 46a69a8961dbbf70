//! Common test utilities for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::atomic::{AtomicBool, Ordering};
use taskdeck::{
    MemoryStore, Priority, Recurrence, StoreError, Task, TaskDraft, TaskId, TaskStore, TaskUpdates,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Fixed "today" for board tests
pub fn jan_25_2026() -> NaiveDate {
    date(2026, 1, 25)
}

/// Create a test task with minimal fields
pub fn create_test_task(id: i64, title: &str, due_date: Option<NaiveDate>) -> Task {
    Task {
        id: TaskId(id),
        title: title.to_string(),
        completed: false,
        priority: Priority::Medium,
        due_date,
        duration: None,
        is_recurring: false,
        recurrence: Recurrence::None,
        deliverables: Vec::new(),
    }
}

/// Create a recurring test task
pub fn create_recurring_task(
    id: i64,
    title: &str,
    due_date: Option<NaiveDate>,
    recurrence: Recurrence,
) -> Task {
    Task {
        is_recurring: true,
        recurrence,
        ..create_test_task(id, title, due_date)
    }
}

/// Memory store whose `create` and `update` can be switched to fail
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_create: AtomicBool,
    pub fail_update: AtomicBool,
}

impl FlakyStore {
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            inner: MemoryStore::with_tasks(tasks),
            ..Default::default()
        }
    }

    pub fn set_fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_update(&self, fail: bool) {
        self.fail_update.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl TaskStore for FlakyStore {
    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        self.inner.list().await
    }

    async fn create(&self, draft: TaskDraft) -> Result<Task, StoreError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("create rejected".to_string()));
        }
        self.inner.create(draft).await
    }

    async fn update(&self, id: TaskId, updates: TaskUpdates) -> Result<Task, StoreError> {
        if self.fail_update.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("update rejected".to_string()));
        }
        self.inner.update(id, updates).await
    }

    async fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        self.inner.delete(id).await
    }
}
