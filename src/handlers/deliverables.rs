//! Deliverable handlers
//!
//! Deliverable edits show up locally before the store confirms them. When the
//! store rejects the write the board re-fetches the list so it matches the
//! store again.

use crate::board::{BoardError, TaskBoard};
use crate::store::TaskStore;
use crate::task::{Deliverable, Patch, TaskId, TaskUpdates};
use crate::validation::ValidationError;

impl<S: TaskStore> TaskBoard<S> {
    /// Append a deliverable to a task
    pub async fn add_deliverable(
        &mut self,
        task_id: TaskId,
        title: &str,
    ) -> Result<Deliverable, BoardError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyDeliverable.into());
        }

        let deliverable = Deliverable::new(title);
        let mut deliverables = self.require(task_id)?.deliverables.clone();
        deliverables.push(deliverable.clone());

        self.update_deliverables(task_id, deliverables).await?;
        Ok(deliverable)
    }

    /// Flip a deliverable between open and done
    pub async fn toggle_deliverable(
        &mut self,
        task_id: TaskId,
        deliverable_id: &str,
    ) -> Result<(), BoardError> {
        let task = self.require(task_id)?;
        if task.find_deliverable(deliverable_id).is_none() {
            return Err(BoardError::DeliverableNotFound {
                task: task_id,
                deliverable: deliverable_id.to_string(),
            });
        }

        let deliverables = task
            .deliverables
            .iter()
            .map(|d| {
                if d.id == deliverable_id {
                    Deliverable {
                        completed: !d.completed,
                        ..d.clone()
                    }
                } else {
                    d.clone()
                }
            })
            .collect();

        self.update_deliverables(task_id, deliverables).await
    }

    /// Remove a deliverable from a task
    pub async fn remove_deliverable(
        &mut self,
        task_id: TaskId,
        deliverable_id: &str,
    ) -> Result<(), BoardError> {
        let task = self.require(task_id)?;
        if task.find_deliverable(deliverable_id).is_none() {
            return Err(BoardError::DeliverableNotFound {
                task: task_id,
                deliverable: deliverable_id.to_string(),
            });
        }

        let deliverables = task
            .deliverables
            .iter()
            .filter(|d| d.id != deliverable_id)
            .cloned()
            .collect();

        self.update_deliverables(task_id, deliverables).await
    }

    async fn update_deliverables(
        &mut self,
        task_id: TaskId,
        deliverables: Vec<Deliverable>,
    ) -> Result<(), BoardError> {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == task_id) {
            task.deliverables = deliverables.clone();
        }

        let updates = TaskUpdates {
            deliverables: Patch::Set(deliverables),
            ..Default::default()
        };

        match self.store.update(task_id, updates).await {
            Ok(updated) => {
                self.replace_local(updated);
                Ok(())
            }
            Err(e) => {
                tracing::warn!(id = %task_id, error = %e, "deliverable update failed, reloading tasks");
                if let Err(reload) = self.refresh().await {
                    tracing::warn!(error = %reload, "reload after failed deliverable update failed");
                }
                Err(e.into())
            }
        }
    }
}
