use crate::adapters::calendar::ChineseCalendar;
use crate::adapters::clock::{FixedClock, SystemClock};
use crate::config::CliConfig;
use crate::domain::ports::Clock;
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Name reported when the built-in ruleset cannot be loaded.
pub const BUILTIN_RULESET_NAME: &str = "chinese-calendar";

#[derive(Debug, Clone, Copy)]
pub enum CliClock {
    System(SystemClock),
    Fixed(FixedClock),
}

impl Clock for CliClock {
    fn today(&self) -> NaiveDate {
        match self {
            CliClock::System(clock) => clock.today(),
            CliClock::Fixed(clock) => clock.today(),
        }
    }
}

impl CliConfig {
    pub fn clock(&self) -> CliClock {
        match self.date {
            Some(date) => CliClock::Fixed(FixedClock::new(date)),
            None => CliClock::System(SystemClock),
        }
    }

    /// Loads the configured ruleset. Every failure surfaces as `MissingDependency`.
    pub fn load_provider(&self) -> Result<ChineseCalendar> {
        match &self.ruleset {
            Some(path) => ChineseCalendar::from_file(path),
            None => ChineseCalendar::builtin()
                .map_err(|e| e.into_missing_dependency(BUILTIN_RULESET_NAME)),
        }
    }
}
