//! Serialization and deserialization implementations for Task
//!
//! Tasks are stored as flat rows: the recurrence variant is spread over three
//! nullable integer columns and the due date is plain text. Reading a row is
//! lenient; a bad date or a malformed deliverables column never fails the load.

use super::date_math::{LAST_OCCURRENCE, parse_due_date, weekday_from_index};
use super::model::{Deliverable, Priority, Task, TaskId};
use super::recurrence::Recurrence;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Storage row layout of a task
#[derive(Debug, Serialize, Deserialize)]
struct TaskRow {
    id: TaskId,
    title: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration: Option<f64>,
    #[serde(default)]
    is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recurring_day: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recurring_weekday: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    recurring_week_of_month: Option<i64>,
    #[serde(
        default,
        deserialize_with = "deserialize_deliverables",
        skip_serializing_if = "Vec::is_empty"
    )]
    deliverables: Vec<Deliverable>,
}

/// Shapes the deliverables column has been seen in
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDeliverables {
    List(Vec<Deliverable>),
    /// JSON-encoded array stored as text
    Encoded(String),
    Other(IgnoredAny),
}

fn deserialize_deliverables<'de, D>(deserializer: D) -> Result<Vec<Deliverable>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawDeliverables>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawDeliverables::List(list)) => list,
        Some(RawDeliverables::Encoded(text)) => {
            serde_json::from_str::<Vec<Deliverable>>(&text).unwrap_or_default()
        }
        Some(RawDeliverables::Other(_)) | None => Vec::new(),
    })
}

/// Weekday pair wins over the legacy day column when both are present
fn recurrence_from_columns(day: Option<i64>, weekday: Option<i64>, week: Option<i64>) -> Recurrence {
    if let (Some(weekday), Some(week)) = (weekday, week)
        && let Some(weekday) = weekday_from_index(weekday)
        && (1..=i64::from(LAST_OCCURRENCE)).contains(&week)
    {
        return Recurrence::ByWeekday {
            weekday,
            occurrence: week as u32,
        };
    }

    match day {
        Some(day) => Recurrence::ByDayOfMonth {
            day: day.clamp(0, 31) as u32,
        },
        None => Recurrence::None,
    }
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            title: row.title,
            completed: row.completed,
            priority: row.priority,
            due_date: row.due_date.as_deref().and_then(parse_due_date),
            duration: row.duration,
            is_recurring: row.is_recurring,
            recurrence: recurrence_from_columns(
                row.recurring_day,
                row.recurring_weekday,
                row.recurring_week_of_month,
            ),
            deliverables: row.deliverables,
        }
    }
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        let (recurring_day, recurring_weekday, recurring_week_of_month) = match task.recurrence {
            Recurrence::None => (None, None, None),
            Recurrence::ByWeekday {
                weekday,
                occurrence,
            } => (
                None,
                Some(i64::from(weekday.num_days_from_sunday())),
                Some(i64::from(occurrence)),
            ),
            Recurrence::ByDayOfMonth { day } => (Some(i64::from(day)), None, None),
        };

        TaskRow {
            id: task.id,
            title: task.title.clone(),
            completed: task.completed,
            priority: task.priority,
            due_date: task.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
            duration: task.duration,
            is_recurring: task.is_recurring,
            recurring_day,
            recurring_weekday,
            recurring_week_of_month,
            deliverables: task.deliverables.clone(),
        }
    }
}

impl Serialize for Task {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        TaskRow::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Task {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        TaskRow::deserialize(deserializer).map(Task::from)
    }
}
