//! Add handler

use crate::board::{BoardError, TaskBoard};
use crate::store::TaskStore;
use crate::task::{Priority, Recurrence, Task, TaskDraft};
use crate::validation::{self, ValidationError};
use chrono::NaiveDate;

/// Input for a new task
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub priority: Priority,
    /// Due date, or the first occurrence for a recurring task
    pub due_date: Option<NaiveDate>,
    pub duration: Option<f64>,
    pub is_recurring: bool,
}

impl<S: TaskStore> TaskBoard<S> {
    /// Create a task and put it at the front of the list
    ///
    /// A recurring task with a date takes its weekday pattern from that date.
    /// Without a date it is stored as recurring with no pattern yet.
    pub async fn add_task(&mut self, new_task: NewTask) -> Result<Task, BoardError> {
        let title = validation::validate_title(&new_task.title)?;

        if let Some(hours) = new_task.duration
            && !(hours.is_finite() && hours > 0.0)
        {
            return Err(ValidationError::InvalidDuration(hours.to_string()).into());
        }

        let recurrence = match new_task.due_date {
            Some(anchor) if new_task.is_recurring => Recurrence::from_anchor_date(anchor),
            _ => Recurrence::None,
        };

        let draft = TaskDraft {
            title,
            completed: false,
            priority: new_task.priority,
            due_date: new_task.due_date,
            duration: new_task.duration,
            is_recurring: new_task.is_recurring,
            recurrence,
            deliverables: Vec::new(),
        };

        let created = self.store.create(draft).await?;
        tracing::info!(id = %created.id, title = %created.title, "task created");
        self.tasks.insert(0, created.clone());
        Ok(created)
    }
}
