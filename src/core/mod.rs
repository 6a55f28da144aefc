pub mod checker;

pub use crate::domain::model::{DayKind, Holiday};
pub use crate::domain::ports::{Clock, WorkdayProvider};
pub use crate::utils::error::Result;
