//! Edit handler

use crate::board::{BoardError, TaskBoard};
use crate::store::TaskStore;
use crate::task::{Task, TaskEditor, TaskId};

impl<S: TaskStore> TaskBoard<S> {
    /// Open an edit buffer filled from the stored task
    pub fn editor(&self, id: TaskId) -> Result<TaskEditor, BoardError> {
        Ok(TaskEditor::from_task(self.require(id)?))
    }

    /// Save an edit buffer
    ///
    /// Returns `Ok(None)` when the buffer matches the stored task and nothing
    /// was sent to the store.
    pub async fn save_edits(
        &mut self,
        id: TaskId,
        editor: &TaskEditor,
    ) -> Result<Option<Task>, BoardError> {
        let updates = editor.build_updates(self.require(id)?)?;
        if updates.is_empty() {
            return Ok(None);
        }

        let updated = self.store.update(id, updates).await?;
        self.replace_local(updated.clone());
        tracing::info!(id = %id, "task updated");
        Ok(Some(updated))
    }
}
