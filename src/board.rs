//! Task board: the in-memory task list kept in step with a store

use chrono::NaiveDate;
use thiserror::Error;

use crate::store::{StoreError, TaskStore};
use crate::task::{
    CalendarMonth, Task, TaskId, local_date_today, next_due_task_id, order_tasks, project_month,
};
use crate::validation::ValidationError;

/// Errors returned by board operations
#[derive(Debug, Error)]
pub enum BoardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Task {0} not found. Use list to see available tasks.")]
    TaskNotFound(TaskId),

    #[error("Deliverable '{deliverable}' not found on task {task}")]
    DeliverableNotFound { task: TaskId, deliverable: String },
}

/// Application service over a [`TaskStore`]
///
/// Holds the last list fetched from the store and applies every user action
/// to the store first. Local state only changes once the store accepted the
/// change; deliverable edits are the exception and are reconciled by a
/// re-fetch when the store rejects them.
pub struct TaskBoard<S> {
    pub(crate) store: S,
    pub(crate) tasks: Vec<Task>,
    pub(crate) today: fn() -> NaiveDate,
}

impl<S: TaskStore> TaskBoard<S> {
    /// Create an empty board; call [`TaskBoard::refresh`] to load tasks
    pub fn new(store: S) -> Self {
        Self {
            store,
            tasks: Vec::new(),
            today: local_date_today,
        }
    }

    /// Create a board and load the current task list
    pub async fn open(store: S) -> Result<Self, BoardError> {
        let mut board = Self::new(store);
        board.refresh().await?;
        Ok(board)
    }

    /// Replace the source of "today" (used by tests and replays)
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Re-fetch the task list; on failure the current list is kept
    pub async fn refresh(&mut self) -> Result<(), BoardError> {
        let tasks = self.store.list().await?;
        tracing::debug!(count = tasks.len(), "loaded tasks");
        self.tasks = tasks;
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Tasks in store order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn today(&self) -> NaiveDate {
        (self.today)()
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub(crate) fn require(&self, id: TaskId) -> Result<&Task, BoardError> {
        self.find(id).ok_or(BoardError::TaskNotFound(id))
    }

    pub(crate) fn replace_local(&mut self, updated: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == updated.id) {
            *slot = updated;
        }
    }

    /// Tasks in display order: overdue, upcoming, undated
    pub fn ordered_tasks(&self) -> Vec<&Task> {
        order_tasks(&self.tasks, self.today())
    }

    /// The incomplete task due soonest from today on
    pub fn next_due_task_id(&self) -> Option<TaskId> {
        next_due_task_id(&self.tasks, self.today())
    }

    /// Calendar view of a month, including generated recurring occurrences
    pub fn calendar(&self, year: i32, month: u32) -> CalendarMonth<'_> {
        project_month(&self.tasks, year, month)
    }
}
