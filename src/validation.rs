//! Validation helper functions for user input
//!
//! This module turns raw text from the command line or an edit buffer into
//! typed values. An empty string always means "no value".

use crate::task::{Priority, TaskId};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised when user input cannot be accepted
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Task title is required.")]
    EmptyTitle,

    #[error("Deliverable title is required.")]
    EmptyDeliverable,

    #[error("Invalid date format '{0}'. Use YYYY-MM-DD (e.g., '2026-03-15')")]
    InvalidDate(String),

    #[error("Invalid month '{0}'. Use YYYY-MM (e.g., '2026-03')")]
    InvalidMonth(String),

    #[error("Duration must be a positive number of hours, got '{0}'")]
    InvalidDuration(String),

    #[error("Select a date to set the recurring pattern.")]
    RecurringWithoutDate,

    #[error("{0}")]
    InvalidPriority(String),

    #[error("{0}")]
    InvalidTaskId(String),
}

/// Trim a title and reject it if nothing is left
pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// Parse a date field; an empty string means "no date"
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format, or ""
pub fn parse_date_input(date_str: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate(date_str.to_string()))
}

/// Parse a duration in hours; an empty string means "no duration"
pub fn parse_duration_input(duration_str: &str) -> Result<Option<f64>, ValidationError> {
    let trimmed = duration_str.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(hours) if hours.is_finite() && hours > 0.0 => Ok(Some(hours)),
        _ => Err(ValidationError::InvalidDuration(duration_str.to_string())),
    }
}

/// Parse a `YYYY-MM` month selector into `(year, month)`
pub fn parse_month_input(month_str: &str) -> Result<(i32, u32), ValidationError> {
    let invalid = || ValidationError::InvalidMonth(month_str.to_string());
    let (year, month) = month_str.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

pub fn parse_priority(priority_str: &str) -> Result<Priority, ValidationError> {
    priority_str
        .parse()
        .map_err(ValidationError::InvalidPriority)
}

pub fn parse_task_id(id_str: &str) -> Result<TaskId, ValidationError> {
    id_str.parse().map_err(ValidationError::InvalidTaskId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title("  Buy milk "), Ok("Buy milk".to_string()));
        assert_eq!(validate_title("   "), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input(""), Ok(None));
        assert_eq!(
            parse_date_input("2026-03-15"),
            Ok(NaiveDate::from_ymd_opt(2026, 3, 15))
        );
        assert!(matches!(
            parse_date_input("15/03/2026"),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_parse_duration_input() {
        assert_eq!(parse_duration_input(""), Ok(None));
        assert_eq!(parse_duration_input("1.5"), Ok(Some(1.5)));
        assert!(parse_duration_input("abc").is_err());
        assert!(parse_duration_input("0").is_err());
        assert!(parse_duration_input("-2").is_err());
        assert!(parse_duration_input("NaN").is_err());
    }

    #[test]
    fn test_parse_month_input() {
        assert_eq!(parse_month_input("2026-02"), Ok((2026, 2)));
        assert!(parse_month_input("2026-13").is_err());
        assert!(parse_month_input("February").is_err());
    }

    #[test]
    fn test_parse_priority_and_id() {
        assert_eq!(parse_priority("low"), Ok(Priority::Low));
        assert!(matches!(
            parse_priority("urgent"),
            Err(ValidationError::InvalidPriority(_))
        ));
        assert_eq!(parse_task_id("12"), Ok(TaskId(12)));
        assert!(parse_task_id("x").is_err());
    }
}
