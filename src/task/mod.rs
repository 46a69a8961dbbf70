//! Task domain models and the recurring-date engine
//!
//! This module contains the core task data structures and the pure date logic.
//! It is split into submodules:
//! - `model`: Task, drafts, partial updates and deliverables
//! - `date_math`: nth-weekday arithmetic and occurrence classification
//! - `recurrence`: recurrence patterns, next occurrence, successor drafts
//! - `ordering`: display ordering and the next due task
//! - `calendar`: per-day projection of a month, with generated occurrences
//! - `editor`: edit buffer that produces partial updates
//! - `serde_impl`: storage row serialization

pub mod calendar;
pub mod date_math;
mod editor;
mod model;
pub mod ordering;
pub mod recurrence;
mod serde_impl;

// Re-export all public types
pub use calendar::{CalendarEntry, CalendarMonth, project_month};
pub use date_math::{LAST_OCCURRENCE, classify_occurrence, local_date_today, nth_weekday_of_month};
pub use editor::TaskEditor;
pub use model::{Deliverable, Patch, Priority, Task, TaskDraft, TaskId, TaskUpdates};
pub use ordering::{next_due_task_id, order_tasks};
pub use recurrence::{Recurrence, next_occurrence_after, occurrence_date_for_month, successor_on_completion};
