use crate::utils::error::{CheckError, Result};
use chrono::{Datelike, NaiveDate, Weekday};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn parse_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| CheckError::RulesetValidationError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Invalid date, expected YYYY-MM-DD: {}", e),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CheckError::RulesetValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CheckError::RulesetValidationError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_date_order(field_name: &str, start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        return Err(CheckError::RulesetValidationError {
            field: field_name.to_string(),
            value: format!("{}..{}", start, end),
            reason: "Start date must not be after end date".to_string(),
        });
    }
    Ok(())
}

/// Shifted workdays only ever replace a Saturday or Sunday.
pub fn validate_weekend(field_name: &str, date: NaiveDate) -> Result<()> {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => Ok(()),
        weekday => Err(CheckError::RulesetValidationError {
            field: field_name.to_string(),
            value: date.to_string(),
            reason: format!("Shifted workday falls on {}, not a weekend", weekday),
        }),
    }
}
