use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::recurrence::Recurrence;

/// Store-assigned task identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .trim_start_matches('#')
            .parse::<i64>()
            .map(TaskId)
            .map_err(|_| format!("Invalid task ID '{}'. Use the numeric ID shown by list", s))
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, medium, high",
                s
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// A checklist item attached to a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deliverable {
    /// Opaque identifier, unique within its task
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Deliverable {
    /// Create an open deliverable with a fresh identifier
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
        }
    }
}

/// A persisted task
///
/// Serialized through the flat storage row (see `serde_impl`), so the
/// recurrence variant round-trips as `recurring_weekday`,
/// `recurring_week_of_month` and `recurring_day` columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    /// Due date; unparseable stored dates load as `None`
    pub due_date: Option<NaiveDate>,
    /// Expected effort in hours (e.g. 1.5)
    pub duration: Option<f64>,
    pub is_recurring: bool,
    pub recurrence: Recurrence,
    /// Checklist in display order
    pub deliverables: Vec<Deliverable>,
}

impl Task {
    /// Build the stored task for a draft once the store has assigned an ID
    pub fn from_draft(id: TaskId, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            completed: draft.completed,
            priority: draft.priority,
            due_date: draft.due_date,
            duration: draft.duration,
            is_recurring: draft.is_recurring,
            recurrence: draft.recurrence,
            deliverables: draft.deliverables,
        }
    }

    /// Find a deliverable by its ID
    pub fn find_deliverable(&self, deliverable_id: &str) -> Option<&Deliverable> {
        self.deliverables.iter().find(|d| d.id == deliverable_id)
    }
}

/// A task that has not been stored yet
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub duration: Option<f64>,
    pub is_recurring: bool,
    pub recurrence: Recurrence,
    pub deliverables: Vec<Deliverable>,
}

/// Change to a nullable field
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Patch<T> {
    /// Leave the field untouched
    #[default]
    Keep,
    /// Null the field
    Clear,
    /// Replace the value
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, Patch::Keep)
    }

    /// Build a patch from an optional value where `None` means "clear"
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Patch::Set(v),
            None => Patch::Clear,
        }
    }

    fn apply_to(&self, slot: &mut Option<T>)
    where
        T: Clone,
    {
        match self {
            Patch::Keep => {}
            Patch::Clear => *slot = None,
            Patch::Set(v) => *slot = Some(v.clone()),
        }
    }
}

/// Partial update of a stored task
///
/// Fields left at their default are not touched by the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskUpdates {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub due_date: Patch<NaiveDate>,
    pub duration: Patch<f64>,
    pub is_recurring: Option<bool>,
    pub recurrence: Patch<Recurrence>,
    pub deliverables: Patch<Vec<Deliverable>>,
}

impl TaskUpdates {
    /// Check if the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.due_date.is_keep()
            && self.duration.is_keep()
            && self.is_recurring.is_none()
            && self.recurrence.is_keep()
            && self.deliverables.is_keep()
    }

    /// Apply the present fields to `task`
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(ref title) = self.title {
            task.title = title.clone();
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        self.due_date.apply_to(&mut task.due_date);
        self.duration.apply_to(&mut task.duration);
        if let Some(is_recurring) = self.is_recurring {
            task.is_recurring = is_recurring;
        }
        match &self.recurrence {
            Patch::Keep => {}
            Patch::Clear => task.recurrence = Recurrence::None,
            Patch::Set(r) => task.recurrence = *r,
        }
        match &self.deliverables {
            Patch::Keep => {}
            Patch::Clear => task.deliverables.clear(),
            Patch::Set(list) => task.deliverables = list.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn sample_task() -> Task {
        Task {
            id: TaskId(1),
            title: "Write report".to_string(),
            completed: false,
            priority: Priority::Medium,
            due_date: NaiveDate::from_ymd_opt(2026, 3, 2),
            duration: Some(2.0),
            is_recurring: false,
            recurrence: Recurrence::None,
            deliverables: vec![Deliverable::new("Outline")],
        }
    }

    #[test]
    fn test_task_id_from_str() {
        assert_eq!("42".parse::<TaskId>(), Ok(TaskId(42)));
        assert_eq!(" #7 ".parse::<TaskId>(), Ok(TaskId(7)));
        assert!("abc".parse::<TaskId>().is_err());
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!(Priority::from_str("high"), Ok(Priority::High));
        assert!(Priority::from_str("urgent").is_err());
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn test_deliverable_new_has_unique_ids() {
        let a = Deliverable::new("A");
        let b = Deliverable::new("A");
        assert_ne!(a.id, b.id);
        assert!(!a.completed);
    }

    #[test]
    fn test_empty_updates_leave_task_unchanged() {
        let updates = TaskUpdates::default();
        assert!(updates.is_empty());

        let mut task = sample_task();
        let before = task.clone();
        updates.apply_to(&mut task);
        assert_eq!(task, before);
    }

    #[test]
    fn test_updates_set_and_clear_fields() {
        let mut task = sample_task();
        let updates = TaskUpdates {
            title: Some("Write final report".to_string()),
            due_date: Patch::Clear,
            duration: Patch::Set(1.5),
            is_recurring: Some(true),
            recurrence: Patch::Set(Recurrence::ByWeekday {
                weekday: Weekday::Mon,
                occurrence: 1,
            }),
            deliverables: Patch::Clear,
            ..Default::default()
        };
        assert!(!updates.is_empty());

        updates.apply_to(&mut task);
        assert_eq!(task.title, "Write final report");
        assert_eq!(task.due_date, None);
        assert_eq!(task.duration, Some(1.5));
        assert!(task.is_recurring);
        assert!(task.recurrence.is_configured());
        assert!(task.deliverables.is_empty());
        // untouched
        assert_eq!(task.priority, Priority::Medium);
        assert!(!task.completed);
    }

    #[test]
    fn test_patch_from_option() {
        assert_eq!(Patch::from_option(Some(3)), Patch::Set(3));
        assert_eq!(Patch::<i32>::from_option(None), Patch::Clear);
    }
}
