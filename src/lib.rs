pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::calendar::ChineseCalendar;
pub use crate::adapters::clock::{FixedClock, SystemClock};
pub use crate::config::CliConfig;
pub use crate::core::checker::{Outcome, WorkdayChecker};
pub use crate::domain::model::{DayKind, Holiday};
pub use crate::domain::ports::{Clock, WorkdayProvider};
pub use crate::utils::error::{CheckError, Result};
