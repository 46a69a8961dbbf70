use super::{StoreError, TaskStore};
use crate::task::{Task, TaskDraft, TaskId, TaskUpdates};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

/// On-disk layout of the task file
#[derive(Debug, Default, Serialize, Deserialize)]
struct TaskFile {
    /// Last ID handed out
    #[serde(default)]
    next_id: i64,
    #[serde(default)]
    tasks: Vec<Task>,
}

/// Task store backed by a TOML file
///
/// Every operation reads the file, applies the change and writes it back. A
/// missing file is an empty store.
pub struct FileStore {
    file_path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    async fn load(&self) -> Result<TaskFile, StoreError> {
        if !fs::try_exists(&self.file_path).await? {
            return Ok(TaskFile::default());
        }

        let content = fs::read_to_string(&self.file_path).await?;
        let mut data: TaskFile = toml::from_str(&content)?;
        // keep IDs unique even if the counter was edited by hand
        let max_id = data.tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
        data.next_id = data.next_id.max(max_id);
        Ok(data)
    }

    async fn save(&self, data: &TaskFile) -> Result<(), StoreError> {
        let content = toml::to_string_pretty(data)?;
        fs::write(&self.file_path, content).await?;
        tracing::debug!(path = %self.file_path.display(), tasks = data.tasks.len(), "saved task file");
        Ok(())
    }
}

#[async_trait]
impl TaskStore for FileStore {
    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        let _guard = self.lock.lock().await;
        let mut tasks = self.load().await?.tasks;
        tasks.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(tasks)
    }

    async fn create(&self, draft: TaskDraft) -> Result<Task, StoreError> {
        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;
        data.next_id += 1;
        let task = Task::from_draft(TaskId(data.next_id), draft);
        data.tasks.push(task.clone());
        self.save(&data).await?;
        Ok(task)
    }

    async fn update(&self, id: TaskId, updates: TaskUpdates) -> Result<Task, StoreError> {
        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;
        let task = data
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound(id))?;
        updates.apply_to(task);
        let updated = task.clone();
        self.save(&data).await?;
        Ok(updated)
    }

    async fn delete(&self, id: TaskId) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut data = self.load().await?;
        let before = data.tasks.len();
        data.tasks.retain(|t| t.id != id);
        if data.tasks.len() == before {
            return Err(StoreError::NotFound(id));
        }
        self.save(&data).await
    }
}
