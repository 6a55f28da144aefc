use chrono::{Datelike, NaiveDate};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Ruleset '{name}' could not be loaded: {reason}")]
    MissingDependency { name: String, reason: String },

    #[error("Ruleset '{name}' does not cover {date} (supported years {first_year}-{last_year})")]
    UnsupportedDate {
        name: String,
        date: NaiveDate,
        first_year: i32,
        last_year: i32,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Ruleset parsing error: {message}")]
    RulesetParseError { message: String },

    #[error("Invalid ruleset value for '{field}': {value} ({reason})")]
    RulesetValidationError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },
}

impl CheckError {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::UnsupportedDate { .. } => 2,
            CheckError::InvalidArguments { .. } => 3,
            _ => 1,
        }
    }

    /// The single line printed on stdout when the check fails.
    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::MissingDependency { name, .. } => {
                format!("Ruleset '{}' is not installed.", name)
            }
            CheckError::UnsupportedDate { name, .. } => format!("Ruleset '{}' is old.", name),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CheckError::MissingDependency { .. } => {
                "Check the --ruleset path (or CHECK_WORKDAY_RULESET) points to a readable, valid ruleset file".to_string()
            }
            CheckError::UnsupportedDate { date, .. } => format!(
                "Install a ruleset revision that covers the year {}",
                date.year()
            ),
            CheckError::IoError(_) => "Check file permissions and paths".to_string(),
            CheckError::RulesetParseError { .. } => {
                "Check the ruleset file is valid TOML with name, first_year, last_year and [[years]] entries".to_string()
            }
            CheckError::RulesetValidationError { field, .. } => {
                format!("Fix the value of '{}' in the ruleset file", field)
            }
            CheckError::InvalidArguments { .. } => {
                "Run without arguments, or see --help for the optional flags".to_string()
            }
        }
    }

    /// Folds any load-time failure into `MissingDependency` for the named ruleset.
    pub fn into_missing_dependency(self, name: &str) -> CheckError {
        match self {
            missing @ CheckError::MissingDependency { .. } => missing,
            other => CheckError::MissingDependency {
                name: name.to_string(),
                reason: other.to_string(),
            },
        }
    }
}

impl From<clap::Error> for CheckError {
    /// Keeps only the headline of clap's report so stdout stays a single line.
    fn from(e: clap::Error) -> Self {
        let rendered = e.to_string();
        let headline = rendered.lines().next().unwrap_or_default();
        CheckError::InvalidArguments {
            message: headline.trim_start_matches("error: ").trim().to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
