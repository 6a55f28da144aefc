use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// Statutory public holidays of mainland China.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holiday {
    NewYearsDay,
    SpringFestival,
    TombSweepingDay,
    LabourDay,
    DragonBoatFestival,
    NationalDay,
    MidAutumnFestival,
}

impl Holiday {
    pub fn name(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "New Year's Day",
            Holiday::SpringFestival => "Spring Festival",
            Holiday::TombSweepingDay => "Tomb-sweeping Day",
            Holiday::LabourDay => "Labour Day",
            Holiday::DragonBoatFestival => "Dragon Boat Festival",
            Holiday::NationalDay => "National Day",
            Holiday::MidAutumnFestival => "Mid-autumn Festival",
        }
    }

    pub fn chinese_name(&self) -> &'static str {
        match self {
            Holiday::NewYearsDay => "元旦",
            Holiday::SpringFestival => "春节",
            Holiday::TombSweepingDay => "清明",
            Holiday::LabourDay => "劳动节",
            Holiday::DragonBoatFestival => "端午",
            Holiday::NationalDay => "国庆节",
            Holiday::MidAutumnFestival => "中秋",
        }
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An inclusive run of days off for one holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayPeriod {
    pub holiday: Holiday,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl HolidayPeriod {
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Workday,
    /// A weekend day declared a working day in exchange for a holiday.
    ShiftedWorkday,
    Weekend,
    Holiday(Holiday),
}

impl DayKind {
    pub fn is_workday(&self) -> bool {
        matches!(self, DayKind::Workday | DayKind::ShiftedWorkday)
    }

    pub fn holiday(&self) -> Option<Holiday> {
        match self {
            DayKind::Holiday(holiday) => Some(*holiday),
            _ => None,
        }
    }
}
