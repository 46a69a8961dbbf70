//! Recurrence engine
//!
//! Maps a recurrence pattern onto concrete dates and decides what the successor
//! of a completed occurrence looks like. Everything here is pure; "today" is
//! always passed in by the caller.

use chrono::{Datelike, NaiveDate, Weekday};

use super::date_math::{
    LAST_OCCURRENCE, classify_occurrence, days_in_month, following_month, nth_weekday_of_month,
};
use super::model::{Task, TaskDraft};

/// Recurrence pattern for recurring tasks
///
/// The weekday form always takes precedence over the legacy day-of-month form
/// when a stored row carries both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Recurrence {
    /// Recurring task whose pattern has not been configured yet
    #[default]
    None,
    /// The `occurrence`-th `weekday` of each month (occurrence 5 = last)
    ByWeekday { weekday: Weekday, occurrence: u32 },
    /// Legacy form: the same day number each month, clamped to the month length
    ByDayOfMonth { day: u32 },
}

impl Recurrence {
    /// Derive a weekday pattern from the first chosen occurrence date
    ///
    /// The 25th of a 31-day month becomes "last <weekday>", not "4th".
    pub fn from_anchor_date(date: NaiveDate) -> Self {
        Recurrence::ByWeekday {
            weekday: date.weekday(),
            occurrence: classify_occurrence(date),
        }
    }

    /// Check if a pattern is configured
    pub fn is_configured(&self) -> bool {
        !matches!(self, Recurrence::None)
    }

    /// Human-readable pattern, e.g. "Second Monday" or "Day 15"
    pub fn label(&self) -> String {
        match self {
            Recurrence::ByWeekday {
                weekday,
                occurrence,
            } => {
                let ordinal = match *occurrence {
                    1 => "First",
                    2 => "Second",
                    3 => "Third",
                    4 => "Fourth",
                    _ => "Last",
                };
                format!("{} {}", ordinal, weekday_name(*weekday))
            }
            Recurrence::ByDayOfMonth { day } => format!("Day {}", day),
            Recurrence::None => "Monthly".to_string(),
        }
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// The date a pattern lands on in the given month
///
/// Returns `None` for [`Recurrence::None`]; callers must not synthesize an
/// occurrence for an unconfigured pattern.
pub fn occurrence_date_for_month(recurrence: &Recurrence, year: i32, month: u32) -> Option<NaiveDate> {
    let len = days_in_month(year, month);
    if len == 0 {
        return None;
    }

    let day = match *recurrence {
        Recurrence::ByWeekday {
            weekday,
            occurrence,
        } => {
            let occurrence = occurrence.clamp(1, LAST_OCCURRENCE);
            nth_weekday_of_month(year, month, weekday, occurrence)?.clamp(1, len)
        }
        Recurrence::ByDayOfMonth { day } => day.clamp(1, len),
        Recurrence::None => return None,
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// The first occurrence strictly after `from`
///
/// Looks at `from`'s own month first; if that date is on or before `from`,
/// moves exactly one month ahead.
pub fn next_occurrence_after(recurrence: &Recurrence, from: NaiveDate) -> Option<NaiveDate> {
    let candidate = occurrence_date_for_month(recurrence, from.year(), from.month())?;
    if candidate > from {
        return Some(candidate);
    }

    let (year, month) = following_month(from.year(), from.month());
    occurrence_date_for_month(recurrence, year, month)
}

/// Draft of the task that replaces `task` once it is marked completed
///
/// `task` is the occurrence as it was before the toggle: only an incomplete,
/// recurring task with a configured pattern produces a successor.
///
/// The weekday form advances from the task's own due date (or `today`). The
/// legacy day form always lands in the month after `today`, whatever the task's
/// due date was.
pub fn successor_on_completion(task: &Task, today: NaiveDate) -> Option<TaskDraft> {
    if !task.is_recurring || task.completed {
        return None;
    }

    let due_date = match task.recurrence {
        Recurrence::ByWeekday { .. } => {
            next_occurrence_after(&task.recurrence, task.due_date.unwrap_or(today))?
        }
        Recurrence::ByDayOfMonth { day } if day > 0 => {
            let (year, month) = following_month(today.year(), today.month());
            occurrence_date_for_month(&task.recurrence, year, month)?
        }
        _ => return None,
    };

    Some(TaskDraft {
        title: task.title.clone(),
        completed: false,
        priority: task.priority,
        due_date: Some(due_date),
        duration: task.duration,
        is_recurring: true,
        recurrence: task.recurrence,
        deliverables: Vec::new(),
    })
}
