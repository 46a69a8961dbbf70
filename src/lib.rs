//! Taskdeck Library
//!
//! This library provides the task side of a personal productivity dashboard:
//! tasks with priorities, durations and deliverables, a calendar view, and a
//! recurring-task engine that turns patterns like "2nd Monday" or "day 31"
//! into concrete dates.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Board Layer**: `TaskBoard` - Applies user actions and keeps the task list in step with the store
//! - **Domain Layer**: `task` module - Task model and the pure recurrence, ordering and calendar logic
//! - **Persistence Layer**: `store` module - The async `TaskStore` boundary with memory and TOML file stores
//!
//! # Example
//!
//! ```no_run
//! use taskdeck::{FileStore, NewTask, TaskBoard};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let mut board = TaskBoard::open(FileStore::new("taskdeck.toml")).await?;
//!     board
//!         .add_task(NewTask {
//!             title: "Pay rent".to_string(),
//!             is_recurring: true,
//!             due_date: chrono::NaiveDate::from_ymd_opt(2026, 1, 30),
//!             ..Default::default()
//!         })
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod board;
pub mod config;
pub mod formatting;
pub mod handlers;
pub mod store;
pub mod task;
pub mod validation;

// Re-export commonly used types
pub use board::{BoardError, TaskBoard};
pub use config::Config;
pub use handlers::add::NewTask;
pub use handlers::toggle::ToggleOutcome;
pub use store::{FileStore, MemoryStore, StoreError, TaskStore};
pub use task::{
    CalendarEntry, CalendarMonth, Deliverable, Patch, Priority, Recurrence, Task, TaskDraft,
    TaskEditor, TaskId, TaskUpdates,
};
pub use validation::ValidationError;
