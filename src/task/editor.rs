//! Edit buffer for a single task
//!
//! The editor holds raw user input separately from the stored [`Task`]; the
//! task is only changed through the [`TaskUpdates`] the editor produces.

use super::model::{Patch, Priority, Task, TaskUpdates};
use super::recurrence::Recurrence;
use crate::validation::{self, ValidationError};

#[derive(Debug, Clone, PartialEq)]
pub struct TaskEditor {
    pub title: String,
    pub priority: Priority,
    /// YYYY-MM-DD or "" for no date
    pub due_date: String,
    /// Hours as text or "" for no duration
    pub duration: String,
    pub is_recurring: bool,
}

impl TaskEditor {
    /// Fill the buffer from the stored task
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            priority: task.priority,
            due_date: task
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            duration: task.duration.map(|h| h.to_string()).unwrap_or_default(),
            is_recurring: task.is_recurring,
        }
    }

    /// Diff the buffer against `task`
    ///
    /// Returns an empty [`TaskUpdates`] when nothing changed. A recurring task
    /// with a date gets its weekday pattern re-derived from that date.
    pub fn build_updates(&self, task: &Task) -> Result<TaskUpdates, ValidationError> {
        let title = validation::validate_title(&self.title)?;
        let due_date = validation::parse_date_input(&self.due_date)?;

        let turning_on_recurring = self.is_recurring && !task.is_recurring;
        if turning_on_recurring && due_date.is_none() {
            return Err(ValidationError::RecurringWithoutDate);
        }

        let duration = validation::parse_duration_input(&self.duration)?;

        let mut updates = TaskUpdates::default();
        if title != task.title {
            updates.title = Some(title);
        }
        if self.priority != task.priority {
            updates.priority = Some(self.priority);
        }
        if due_date != task.due_date {
            updates.due_date = Patch::from_option(due_date);
        }
        if duration != task.duration {
            updates.duration = Patch::from_option(duration);
        }
        if self.is_recurring != task.is_recurring {
            updates.is_recurring = Some(self.is_recurring);
        }
        if self.is_recurring
            && let Some(anchor) = due_date
        {
            let recurrence = Recurrence::from_anchor_date(anchor);
            if recurrence != task.recurrence {
                updates.recurrence = Patch::Set(recurrence);
            }
        }

        Ok(updates)
    }
}
