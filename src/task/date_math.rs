//! Calendar arithmetic used by the recurrence engine
//!
//! Months are 1-based (January = 1) throughout, matching `chrono`.
//! Weekdays cross the storage boundary as 0 = Sunday .. 6 = Saturday.

use chrono::{Datelike, Local, NaiveDate, Weekday};

/// Occurrence number meaning "the last such weekday of the month"
pub const LAST_OCCURRENCE: u32 = 5;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Number of days in the given month, or 0 if `(year, month)` is not a real month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = following_month(year, month);
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .filter(|last| last.month() == month)
        .map(|last| last.day())
        .unwrap_or(0)
}

/// The month after `(year, month)`, wrapping December into January of the next year
pub fn following_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Linear month index (`year * 12 + month0`) used to compare months
pub fn month_ordinal(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month) - 1
}

/// Month ordinal of a date
pub fn month_ordinal_of(date: NaiveDate) -> i64 {
    month_ordinal(date.year(), date.month())
}

/// Day of the month of the `occurrence`-th `weekday` in the given month
///
/// For `occurrence` 1..=4 this is the first matching date plus `(occurrence - 1) * 7`.
/// For [`LAST_OCCURRENCE`] it walks back from the last day of the month.
///
/// The result is not checked against the month length; callers clamp.
/// Occurrences past the 5th saturate instead of overflowing.
/// Returns `None` only when `(year, month)` is not a real month.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, occurrence: u32) -> Option<u32> {
    let target = weekday.num_days_from_sunday();

    if occurrence == LAST_OCCURRENCE {
        let last_day = days_in_month(year, month);
        let last = NaiveDate::from_ymd_opt(year, month, last_day)?;
        let diff = (last.weekday().num_days_from_sunday() + 7 - target) % 7;
        return Some(last_day - diff);
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let diff = (target + 7 - first.weekday().num_days_from_sunday()) % 7;
    Some((1 + diff).saturating_add(occurrence.saturating_sub(1).saturating_mul(7)))
}

/// Classify a date as the 1st..4th occurrence of its weekday, or [`LAST_OCCURRENCE`]
///
/// Any date with fewer than 7 days left in its month is "last", even when it is
/// numerically the 4th occurrence.
pub fn classify_occurrence(date: NaiveDate) -> u32 {
    let day = date.day();
    let days_until_end = days_in_month(date.year(), date.month()).saturating_sub(day);
    if days_until_end < 7 {
        return LAST_OCCURRENCE;
    }
    day.div_ceil(7)
}

/// Parse a stored due date, keeping only the `YYYY-MM-DD` part before any `T`
///
/// Anything that does not parse is treated as "no due date".
pub fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next()?.trim();
    if date_part.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Weekday from its storage index (0 = Sunday .. 6 = Saturday)
pub fn weekday_from_index(index: i64) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
