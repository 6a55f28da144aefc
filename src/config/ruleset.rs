use crate::domain::model::{Holiday, HolidayPeriod};
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{self, Validate};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Ruleset compiled into the binary.
pub const BUILTIN_RULESET: &str = include_str!("../../data/chinese_calendar.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct RulesetFile {
    pub name: String,
    pub revision: Option<String>,
    pub first_year: i32,
    pub last_year: i32,
    #[serde(default)]
    pub years: Vec<YearRules>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct YearRules {
    pub year: i32,
    #[serde(default)]
    pub workdays: Vec<String>,
    #[serde(default)]
    pub holidays: Vec<HolidayPeriodConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HolidayPeriodConfig {
    pub holiday: Holiday,
    pub start: String,
    pub end: String,
}

impl RulesetFile {
    /// 從 TOML 檔案載入規則
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CheckError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CheckError::RulesetParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_RULESET)
    }

    pub fn holiday_periods(&self) -> Result<Vec<HolidayPeriod>> {
        let mut periods = Vec::new();
        for rules in &self.years {
            let field = format!("years.{}.holidays", rules.year);
            for period in &rules.holidays {
                let start = validation::parse_date(&field, &period.start)?;
                let end = validation::parse_date(&field, &period.end)?;
                validation::validate_date_order(&field, start, end)?;
                periods.push(HolidayPeriod {
                    holiday: period.holiday,
                    start,
                    end,
                });
            }
        }
        Ok(periods)
    }

    pub fn shifted_workdays(&self) -> Result<Vec<NaiveDate>> {
        let mut workdays = Vec::new();
        for rules in &self.years {
            let field = format!("years.{}.workdays", rules.year);
            for day in &rules.workdays {
                let date = validation::parse_date(&field, day)?;
                validation::validate_weekend(&field, date)?;
                workdays.push(date);
            }
        }
        Ok(workdays)
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("name", &self.name)?;

        // Keep one spare year on each side so the New Year margin below stays a valid date.
        let lowest = NaiveDate::MIN.year() + 1;
        let highest = NaiveDate::MAX.year() - 1;
        validation::validate_range("first_year", self.first_year, lowest, highest)?;
        validation::validate_range("last_year", self.last_year, self.first_year, highest)?;

        let mut years = HashSet::new();
        for rules in &self.years {
            validation::validate_range("years.year", rules.year, self.first_year, self.last_year)?;
            if !years.insert(rules.year) {
                return Err(CheckError::RulesetValidationError {
                    field: "years.year".to_string(),
                    value: rules.year.to_string(),
                    reason: "Year is listed more than once".to_string(),
                });
            }
        }
        if let Some(year) = (self.first_year..=self.last_year).find(|year| !years.contains(year)) {
            return Err(CheckError::RulesetValidationError {
                field: "years".to_string(),
                value: year.to_string(),
                reason: "No rules for a year inside first_year..last_year".to_string(),
            });
        }

        // New Year periods may start in December of the previous year.
        let min_year = self.first_year - 1;
        let max_year = self.last_year + 1;

        let mut holidays = HashSet::new();
        for period in self.holiday_periods()? {
            validation::validate_range("holidays", period.start.year(), min_year, max_year)?;
            validation::validate_range("holidays", period.end.year(), min_year, max_year)?;
            for day in period.days() {
                if !holidays.insert(day) {
                    return Err(CheckError::RulesetValidationError {
                        field: "holidays".to_string(),
                        value: day.to_string(),
                        reason: format!("Date overlaps another holiday period ({})", period.holiday),
                    });
                }
            }
        }

        for day in self.shifted_workdays()? {
            validation::validate_range("workdays", day.year(), min_year, max_year)?;
            if holidays.contains(&day) {
                return Err(CheckError::RulesetValidationError {
                    field: "workdays".to_string(),
                    value: day.to_string(),
                    reason: "Date is listed both as a holiday and as a workday".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Validate for RulesetFile {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SMALL_RULESET: &str = r#"
name = "test-calendar"
first_year = 2024
last_year = 2024

[[years]]
year = 2024
workdays = ["2024-02-04"]
holidays = [
    { holiday = "spring_festival", start = "2024-02-10", end = "2024-02-17" },
]
"#;

    #[test]
    fn test_builtin_ruleset_is_valid() {
        let ruleset = RulesetFile::builtin().unwrap();
        assert_eq!(ruleset.name, "chinese-calendar");
        assert!(ruleset.first_year <= ruleset.last_year);
        assert!(ruleset.validate().is_ok());
    }

    #[test]
    fn test_parse_small_ruleset() {
        let ruleset = RulesetFile::from_toml_str(SMALL_RULESET).unwrap();

        assert_eq!(ruleset.name, "test-calendar");
        assert!(ruleset.revision.is_none());
        assert_eq!(ruleset.holiday_periods().unwrap().len(), 1);
        assert_eq!(
            ruleset.shifted_workdays().unwrap(),
            vec![NaiveDate::from_ymd_opt(2024, 2, 4).unwrap()]
        );
        assert!(ruleset.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = RulesetFile::from_toml_str("name = ").unwrap_err();
        assert!(matches!(err, CheckError::RulesetParseError { .. }));
    }

    #[test]
    fn test_weekday_shifted_workday_rejected() {
        let content = SMALL_RULESET.replace("2024-02-04", "2024-02-05");
        let ruleset = RulesetFile::from_toml_str(&content).unwrap();
        assert!(ruleset.validate().is_err());
    }

    #[test]
    fn test_workday_inside_holiday_rejected() {
        let content = SMALL_RULESET.replace("2024-02-04", "2024-02-10");
        let ruleset = RulesetFile::from_toml_str(&content).unwrap();
        assert!(ruleset.validate().is_err());
    }

    #[test]
    fn test_reversed_period_rejected() {
        let content = SMALL_RULESET.replace(
            r#"start = "2024-02-10", end = "2024-02-17""#,
            r#"start = "2024-02-17", end = "2024-02-10""#,
        );
        let ruleset = RulesetFile::from_toml_str(&content).unwrap();
        assert!(ruleset.validate().is_err());
    }

    #[test]
    fn test_year_outside_range_rejected() {
        let content = SMALL_RULESET.replace("year = 2024\nworkdays", "year = 2025\nworkdays");
        let ruleset = RulesetFile::from_toml_str(&content).unwrap();
        assert!(ruleset.validate().is_err());
    }

    #[test]
    fn test_ruleset_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(SMALL_RULESET.as_bytes()).unwrap();

        let ruleset = RulesetFile::from_file(temp_file.path()).unwrap();
        assert_eq!(ruleset.name, "test-calendar");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RulesetFile::from_file("/nonexistent/ruleset.toml").unwrap_err();
        assert!(matches!(err, CheckError::IoError(_)));
    }

    #[test]
    fn test_extreme_years_rejected() {
        let ruleset =
            RulesetFile::from_toml_str("name = \"x\"\nfirst_year = -2147483648\nlast_year = 0")
                .unwrap();
        let err = ruleset.validate().unwrap_err();
        assert!(matches!(err, CheckError::RulesetValidationError { ref field, .. } if field == "first_year"));

        let ruleset =
            RulesetFile::from_toml_str("name = \"x\"\nfirst_year = 2024\nlast_year = 2147483647")
                .unwrap();
        assert!(ruleset.validate().is_err());
    }

    #[test]
    fn test_year_without_rules_rejected() {
        let content = SMALL_RULESET.replace("last_year = 2024", "last_year = 2030");
        let ruleset = RulesetFile::from_toml_str(&content).unwrap();
        match ruleset.validate().unwrap_err() {
            CheckError::RulesetValidationError { field, value, .. } => {
                assert_eq!(field, "years");
                assert_eq!(value, "2025");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_year_rejected() {
        let content = format!("{}\n[[years]]\nyear = 2024\n", SMALL_RULESET);
        let ruleset = RulesetFile::from_toml_str(&content).unwrap();
        assert!(ruleset.validate().is_err());
    }

    #[test]
    fn test_overlapping_holiday_periods_rejected() {
        let content = SMALL_RULESET.replace(
            r#"end = "2024-02-17" },"#,
            r#"end = "2024-02-17" },
    { holiday = "new_years_day", start = "2024-02-17", end = "2024-02-18" },"#,
        );
        let ruleset = RulesetFile::from_toml_str(&content).unwrap();
        match ruleset.validate().unwrap_err() {
            CheckError::RulesetValidationError { field, value, .. } => {
                assert_eq!(field, "holidays");
                assert_eq!(value, "2024-02-17");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
