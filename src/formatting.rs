//! Formatting helper functions for command-line output
//!
//! This module renders tasks, the task list and calendar months as text.

use crate::task::{CalendarEntry, CalendarMonth, Task, TaskId, date_math};
use chrono::{Datelike, NaiveDate};

/// Format a duration in hours, e.g. `2h`, `45m` or `1h 30m`
///
/// Returns an empty string for no duration.
pub fn format_duration(hours: Option<f64>) -> String {
    let Some(hours) = hours.filter(|h| *h > 0.0) else {
        return String::new();
    };

    if hours.fract() == 0.0 {
        return format!("{}h", hours);
    }

    let whole_hours = hours.floor();
    let minutes = ((hours - whole_hours) * 60.0).round();
    if whole_hours == 0.0 {
        format!("{}m", minutes)
    } else {
        format!("{}h {}m", whole_hours, minutes)
    }
}

/// Human-readable recurrence of a task, or `None` if it does not recur
pub fn recurrence_label(task: &Task) -> Option<String> {
    task.is_recurring.then(|| task.recurrence.label())
}

/// Format a single task line with its details
pub fn format_task(task: &Task, is_next: bool) -> String {
    let check = if task.completed { "x" } else { " " };
    let mut result = format!(
        "- [{}] #{} {} (priority: {})",
        check, task.id, task.title, task.priority
    );
    if is_next {
        result.push_str("  <- next");
    }
    result.push('\n');

    if let Some(ref date) = task.due_date {
        result.push_str(&format!("  Due: {}\n", date));
    }
    let duration = format_duration(task.duration);
    if !duration.is_empty() {
        result.push_str(&format!("  Duration: {}\n", duration));
    }
    if let Some(pattern) = recurrence_label(task) {
        result.push_str(&format!("  Repeats: {}\n", pattern));
    }
    for deliverable in &task.deliverables {
        let mark = if deliverable.completed { "x" } else { " " };
        result.push_str(&format!(
            "    [{}] {} ({})\n",
            mark, deliverable.title, deliverable.id
        ));
    }

    result
}

/// Format the ordered task list
pub fn format_tasks(tasks: &[&Task], next_id: Option<TaskId>) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for task in tasks {
        result.push_str(&format_task(task, Some(task.id) == next_id));
    }
    result
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Render a month as a Sunday-first grid with the number of items per day
///
/// `today` is marked with `*`. Days with more than two items show `+N`.
pub fn format_calendar(calendar: &CalendarMonth<'_>, today: NaiveDate) -> String {
    let month_name = MONTH_NAMES
        .get(calendar.month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("?");
    let mut result = format!("{} {}\n", month_name, calendar.year);
    result.push_str(" Sun  Mon  Tue  Wed  Thu  Fri  Sat\n");

    let Some(first) = NaiveDate::from_ymd_opt(calendar.year, calendar.month, 1) else {
        return result;
    };
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = date_math::days_in_month(calendar.year, calendar.month);

    let mut cells: Vec<String> = vec!["    ".to_string(); leading];
    for day in 1..=days {
        let Some(date) = NaiveDate::from_ymd_opt(calendar.year, calendar.month, day) else {
            continue;
        };
        let marker = if date == today { '*' } else { ' ' };
        let count = calendar.entries_on(date).len();
        let badge = match count {
            0 => " ".to_string(),
            1 | 2 => "•".repeat(count),
            n => format!("+{}", n),
        };
        cells.push(format!("{}{:>2}{:<2}", marker, day, badge));
    }

    for week in cells.chunks(7) {
        result.push_str(week.join(" ").trim_end());
        result.push('\n');
    }
    result
}

/// Format the entries of a single day
pub fn format_day(calendar: &CalendarMonth<'_>, date: NaiveDate) -> String {
    let entries = calendar.entries_on(date);
    if entries.is_empty() {
        return format!("No tasks for {}", date);
    }

    let mut result = format!("Tasks for {}:\n", date);
    for entry in entries {
        let task = entry.task();
        let state = if task.completed { "Completed" } else { "Pending" };
        result.push_str(&format!(
            "- #{} {} ({}, {})",
            task.id, task.title, task.priority, state
        ));
        let duration = format_duration(task.duration);
        if !duration.is_empty() {
            result.push_str(&format!(", Duration: {}", duration));
        }
        if let CalendarEntry::Generated(_) = entry {
            result.push_str(", Recurring");
        }
        result.push('\n');
    }
    result
}
