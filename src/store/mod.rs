//! Persistence boundary for tasks
//!
//! The board only ever talks to a [`TaskStore`]. Two implementations ship with
//! the crate: [`MemoryStore`] for tests and embedding, and [`FileStore`], which
//! keeps tasks in a TOML file.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::task::{Task, TaskDraft, TaskId, TaskUpdates};
use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a task store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Task {0} not found")]
    NotFound(TaskId),

    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse task file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Failure reported by a store that is not file-backed
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Async CRUD interface over persisted tasks
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// All stored tasks; callers impose their own order
    async fn list(&self) -> Result<Vec<Task>, StoreError>;

    /// Store a draft and return it with its assigned ID
    async fn create(&self, draft: TaskDraft) -> Result<Task, StoreError>;

    /// Apply a partial update and return the stored result
    async fn update(&self, id: TaskId, updates: TaskUpdates) -> Result<Task, StoreError>;

    async fn delete(&self, id: TaskId) -> Result<(), StoreError>;
}
