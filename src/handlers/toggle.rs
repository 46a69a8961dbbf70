//! Toggle handler
//!
//! Completing a recurring occurrence stores a successor task. The completion
//! and the successor are two separate store calls; if the second one fails the
//! completion stands and the failure is reported in the outcome.

use crate::board::{BoardError, TaskBoard};
use crate::store::{StoreError, TaskStore};
use crate::task::{Task, TaskId, TaskUpdates, successor_on_completion};

/// Result of flipping a task's completion state
#[derive(Debug)]
pub struct ToggleOutcome {
    /// The task as stored after the toggle
    pub task: Task,
    /// Next occurrence created for a completed recurring task
    pub successor: Option<Task>,
    /// Set when the successor could not be stored; toggling the task off and
    /// on again retries it
    pub successor_error: Option<StoreError>,
}

impl<S: TaskStore> TaskBoard<S> {
    /// Flip the completion state of a task
    pub async fn toggle_task(&mut self, id: TaskId) -> Result<ToggleOutcome, BoardError> {
        let before = self.require(id)?.clone();
        let completed = !before.completed;

        let updates = TaskUpdates {
            completed: Some(completed),
            ..Default::default()
        };
        let updated = self.store.update(id, updates).await?;
        self.replace_local(updated.clone());

        let mut outcome = ToggleOutcome {
            task: updated,
            successor: None,
            successor_error: None,
        };

        if !completed {
            return Ok(outcome);
        }

        let Some(draft) = successor_on_completion(&before, self.today()) else {
            return Ok(outcome);
        };

        match self.store.create(draft).await {
            Ok(created) => {
                tracing::info!(
                    id = %id,
                    successor = %created.id,
                    due = ?created.due_date,
                    "created next occurrence"
                );
                self.tasks.insert(0, created.clone());
                outcome.successor = Some(created);
            }
            Err(e) => {
                tracing::warn!(
                    id = %id,
                    error = %e,
                    "task completed but next occurrence could not be created"
                );
                outcome.successor_error = Some(e);
            }
        }

        Ok(outcome)
    }
}
