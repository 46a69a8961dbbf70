//! Calendar projection of tasks onto a displayed month
//!
//! Stored tasks land on their own due dates. Each recurring series additionally
//! gets at most one generated occurrence per month, which exists only in the
//! returned [`CalendarMonth`] and is never written to the store.

use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, HashMap};

use super::date_math::{month_ordinal, month_ordinal_of};
use super::model::{Priority, Task};
use super::recurrence::{Recurrence, occurrence_date_for_month};

/// One item shown on a calendar day
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarEntry<'a> {
    /// A task as stored
    Stored(&'a Task),
    /// A display-only occurrence of a recurring series
    Generated(Task),
}

impl CalendarEntry<'_> {
    pub fn task(&self) -> &Task {
        match self {
            CalendarEntry::Stored(task) => task,
            CalendarEntry::Generated(task) => task,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, CalendarEntry::Generated(_))
    }
}

/// Tasks of one month bucketed by day
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonth<'a> {
    pub year: i32,
    pub month: u32,
    pub days: BTreeMap<NaiveDate, Vec<CalendarEntry<'a>>>,
}

impl<'a> CalendarMonth<'a> {
    /// Entries on a given day, in display order
    pub fn entries_on(&self, date: NaiveDate) -> &[CalendarEntry<'a>] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of entries in the month
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn push(&mut self, date: NaiveDate, entry: CalendarEntry<'a>) {
        self.days.entry(date).or_default().push(entry);
    }
}

/// Tasks belonging to the same recurring series
type SeriesKey<'a> = (&'a str, Priority, Recurrence);

/// Project `tasks` onto the given month
pub fn project_month(tasks: &[Task], year: i32, month: u32) -> CalendarMonth<'_> {
    let mut calendar = CalendarMonth {
        year,
        month,
        days: BTreeMap::new(),
    };

    for task in tasks {
        if let Some(due) = task.due_date
            && due.year() == year
            && due.month() == month
        {
            calendar.push(due, CalendarEntry::Stored(task));
        }
    }

    let view_month = month_ordinal(year, month);
    for series in recurring_series(tasks) {
        if let Some((date, task)) = generated_occurrence(&series, year, month, view_month) {
            calendar.push(date, CalendarEntry::Generated(task));
        }
    }

    calendar
}

/// Group recurring tasks by series, in order of first appearance
fn recurring_series(tasks: &[Task]) -> Vec<Vec<&Task>> {
    let mut index: HashMap<SeriesKey<'_>, usize> = HashMap::new();
    let mut series: Vec<Vec<&Task>> = Vec::new();

    for task in tasks {
        if !task.is_recurring || !task.recurrence.is_configured() {
            continue;
        }
        let key = (task.title.as_str(), task.priority, task.recurrence);
        match index.get(&key) {
            Some(&i) => series[i].push(task),
            None => {
                index.insert(key, series.len());
                series.push(vec![task]);
            }
        }
    }

    series
}

fn generated_occurrence(
    series: &[&Task],
    year: i32,
    month: u32,
    view_month: i64,
) -> Option<(NaiveDate, Task)> {
    let earliest = series.iter().filter_map(|t| t.due_date).min();
    if let Some(earliest) = earliest
        && view_month < month_ordinal_of(earliest)
    {
        return None;
    }

    let latest = latest_member(series)?;
    let date = occurrence_date_for_month(&latest.recurrence, year, month)?;
    if series.iter().any(|t| t.due_date == Some(date)) {
        return None;
    }

    let mut generated = latest.clone();
    generated.due_date = Some(date);
    generated.completed = false;
    Some((date, generated))
}

/// The member with the latest due date; the first one wins ties
fn latest_member<'a>(series: &[&'a Task]) -> Option<&'a Task> {
    let (first, rest) = series.split_first()?;
    Some(rest.iter().copied().fold(*first, |latest, task| match (task.due_date, latest.due_date) {
        (Some(_), None) => task,
        (Some(due), Some(best)) if due > best => task,
        _ => latest,
    }))
}
