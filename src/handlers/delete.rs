//! Delete handler

use crate::board::{BoardError, TaskBoard};
use crate::store::TaskStore;
use crate::task::TaskId;

impl<S: TaskStore> TaskBoard<S> {
    /// Delete a task from the store, then from the local list
    pub async fn delete_task(&mut self, id: TaskId) -> Result<(), BoardError> {
        self.require(id)?;
        self.store.delete(id).await?;
        self.tasks.retain(|t| t.id != id);
        tracing::info!(id = %id, "task deleted");
        Ok(())
    }
}
