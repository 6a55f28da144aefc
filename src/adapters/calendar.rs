//! Year-by-year workday rules for mainland China.
//!
//! Days are classified in three steps: statutory holidays first, then
//! shifted workdays (weekend days worked to make up for a holiday), and
//! finally the plain Monday-Friday rule.

use crate::config::ruleset::RulesetFile;
use crate::domain::model::{DayKind, Holiday};
use crate::domain::ports::WorkdayProvider;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::Validate;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ChineseCalendar {
    name: String,
    revision: Option<String>,
    first_year: i32,
    last_year: i32,
    holidays: HashMap<NaiveDate, Holiday>,
    workdays: HashSet<NaiveDate>,
}

impl ChineseCalendar {
    /// The ruleset shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_ruleset(RulesetFile::builtin()?)
    }

    /// Loads an external ruleset. Any failure means the provider is unavailable.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let label = path.display().to_string();
        tracing::debug!("Loading ruleset from {}", label);

        RulesetFile::from_file(path)
            .and_then(Self::from_ruleset)
            .map_err(|e| e.into_missing_dependency(&label))
    }

    pub fn from_ruleset(ruleset: RulesetFile) -> Result<Self> {
        ruleset.validate()?;

        let mut holidays = HashMap::new();
        for period in ruleset.holiday_periods()? {
            for day in period.days() {
                holidays.insert(day, period.holiday);
            }
        }
        let workdays: HashSet<NaiveDate> = ruleset.shifted_workdays()?.into_iter().collect();

        tracing::debug!(
            "Ruleset '{}' ({}) covers {}-{}: {} holidays, {} shifted workdays",
            ruleset.name,
            ruleset.revision.as_deref().unwrap_or("unversioned"),
            ruleset.first_year,
            ruleset.last_year,
            holidays.len(),
            workdays.len()
        );

        Ok(Self {
            name: ruleset.name,
            revision: ruleset.revision,
            first_year: ruleset.first_year,
            last_year: ruleset.last_year,
            holidays,
            workdays,
        })
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    fn ensure_supported(&self, date: NaiveDate) -> Result<()> {
        if self.supported_years().contains(&date.year()) {
            Ok(())
        } else {
            Err(CheckError::UnsupportedDate {
                name: self.name.clone(),
                date,
                first_year: self.first_year,
                last_year: self.last_year,
            })
        }
    }
}

impl WorkdayProvider for ChineseCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn supported_years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.last_year
    }

    fn day_kind(&self, date: NaiveDate) -> Result<DayKind> {
        self.ensure_supported(date)?;

        if let Some(holiday) = self.holidays.get(&date) {
            return Ok(DayKind::Holiday(*holiday));
        }
        if self.workdays.contains(&date) {
            return Ok(DayKind::ShiftedWorkday);
        }
        Ok(match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayKind::Weekend,
            _ => DayKind::Workday,
        })
    }
}
