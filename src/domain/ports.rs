use crate::domain::model::{DayKind, Holiday};
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::ops::RangeInclusive;

/// A source of workday classifications for a jurisdiction.
///
/// Queries outside `supported_years` fail with `CheckError::UnsupportedDate`.
pub trait WorkdayProvider {
    fn name(&self) -> &str;
    fn supported_years(&self) -> RangeInclusive<i32>;
    fn day_kind(&self, date: NaiveDate) -> Result<DayKind>;

    fn is_workday(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.day_kind(date)?.is_workday())
    }

    fn is_holiday(&self, date: NaiveDate) -> Result<bool> {
        Ok(!self.is_workday(date)?)
    }

    fn is_shifted_workday(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.day_kind(date)? == DayKind::ShiftedWorkday)
    }

    /// Whether `date` is a day off, and which statutory holiday it belongs to if any.
    fn holiday_detail(&self, date: NaiveDate) -> Result<(bool, Option<Holiday>)> {
        let kind = self.day_kind(date)?;
        Ok((!kind.is_workday(), kind.holiday()))
    }
}

pub trait Clock {
    fn today(&self) -> NaiveDate;
}
