use super::{StoreError, TaskStore};
use crate::task::{Task, TaskDraft, TaskId, TaskUpdates};
use async_trait::async_trait;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct MemoryState {
    next_id: i64,
    tasks: Vec<Task>,
}

/// Task store held entirely in memory
///
/// IDs start at 1 and are never reused. `list` returns the newest task first.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with tasks; later IDs continue after the highest one
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
        Self {
            state: Mutex::new(MemoryState { next_id, tasks }),
        }
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let state = self.state.lock().await;
        let mut tasks = state.tasks.clone();
        tasks.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(tasks)
    }

    async fn create(&self, draft: TaskDraft) -> Result<Task, StoreError> {
        let mut state = self.state.lock().await;
        state.next_id += 1;
        let task = Task::from_draft(TaskId(state.next_id), draft);
        state.tasks.push(task.clone());
        tracing::debug!(id = %task.id, "created task in memory store");
        Ok(task)
    }

    async fn update(&self, id: TaskId, updates: TaskUpdates) -> Result<Task, StoreError> {
        let mut state = self.state.lock().await;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        updates.apply_to(task);
        Ok(task.clone())
    }

    async fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        if state.tasks.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let a = store.create(draft("A")).await.unwrap();
        let b = store.create(draft("B")).await.unwrap();
        assert_eq!(a.id, TaskId(1));
        assert_eq!(b.id, TaskId(2));
    }

    #[tokio::test]
    async fn test_list_returns_newest_first() {
        let store = MemoryStore::new();
        store.create(draft("A")).await.unwrap();
        store.create(draft("B")).await.unwrap();

        let titles: Vec<String> = store.list().await.unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_task() {
        let store = MemoryStore::new();
        let result = store.update(TaskId(9), TaskUpdates::default()).await;
        assert!(matches!(result, Err(StoreError::NotFound(TaskId(9)))));
        assert!(matches!(store.delete(TaskId(9)).await, Err(StoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_applies_partial_fields() {
        let store = MemoryStore::new();
        let task = store.create(draft("A")).await.unwrap();
        let updated = store
            .update(
                task.id,
                TaskUpdates {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(updated.completed);
        assert_eq!(updated.title, "A");
    }

    #[tokio::test]
    async fn test_with_tasks_continues_ids() {
        let seeded = Task::from_draft(TaskId(10), draft("Seed"));
        let store = MemoryStore::with_tasks(vec![seeded]);
        let created = store.create(draft("Next")).await.unwrap();
        assert_eq!(created.id, TaskId(11));
    }
}
