//! Display ordering of the task list

use chrono::NaiveDate;

use super::model::{Task, TaskId};

/// Order tasks for display: overdue, then upcoming, then undated
///
/// Overdue and upcoming tasks are sorted by due date, earliest first, so the
/// longest-overdue task leads. Undated tasks follow, newest ID first. Sorting
/// is stable, so equal dates keep the input order.
pub fn order_tasks(tasks: &[Task], today: NaiveDate) -> Vec<&Task> {
    let mut overdue: Vec<(&Task, NaiveDate)> = Vec::new();
    let mut upcoming: Vec<(&Task, NaiveDate)> = Vec::new();
    let mut undated: Vec<&Task> = Vec::new();

    for task in tasks {
        match task.due_date {
            Some(due) if due < today => overdue.push((task, due)),
            Some(due) => upcoming.push((task, due)),
            None => undated.push(task),
        }
    }

    overdue.sort_by_key(|(_, due)| *due);
    upcoming.sort_by_key(|(_, due)| *due);
    undated.sort_by(|a, b| b.id.cmp(&a.id));

    overdue
        .into_iter()
        .chain(upcoming)
        .map(|(task, _)| task)
        .chain(undated)
        .collect()
}

/// The incomplete task due soonest on or after `today`
///
/// Ties go to the task encountered first.
pub fn next_due_task_id(tasks: &[Task], today: NaiveDate) -> Option<TaskId> {
    let mut next: Option<(TaskId, NaiveDate)> = None;

    for task in tasks.iter().filter(|t| !t.completed) {
        let Some(due) = task.due_date else {
            continue;
        };
        if due < today {
            continue;
        }
        if next.is_none_or(|(_, best)| due < best) {
            next = Some((task.id, due));
        }
    }

    next.map(|(id, _)| id)
}
