use crate::domain::ports::{Clock, WorkdayProvider};
use crate::utils::error::{CheckError, Result};

/// Result of a single check, ready to be printed and turned into an exit code.
#[derive(Debug)]
pub enum Outcome {
    Workday,
    NonWorkday,
    Failed(CheckError),
}

impl Outcome {
    /// The one line written to stdout.
    pub fn message(&self) -> String {
        match self {
            Outcome::Workday => "true".to_string(),
            Outcome::NonWorkday => "false".to_string(),
            Outcome::Failed(e) => e.user_friendly_message(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Workday | Outcome::NonWorkday => 0,
            Outcome::Failed(e) => e.exit_code(),
        }
    }
}

impl From<Result<bool>> for Outcome {
    fn from(result: Result<bool>) -> Self {
        match result {
            Ok(true) => Outcome::Workday,
            Ok(false) => Outcome::NonWorkday,
            Err(e) => Outcome::Failed(e),
        }
    }
}

pub struct WorkdayChecker<P: WorkdayProvider, C: Clock> {
    provider: P,
    clock: C,
}

impl<P: WorkdayProvider, C: Clock> WorkdayChecker<P, C> {
    pub fn new(provider: P, clock: C) -> Self {
        Self { provider, clock }
    }

    pub fn check(&self) -> Result<bool> {
        let today = self.clock.today();
        tracing::debug!("Checking {} against ruleset '{}'", today, self.provider.name());

        let is_workday = self.provider.is_workday(today)?;
        tracing::info!("{} is {}a workday", today, if is_workday { "" } else { "not " });
        Ok(is_workday)
    }

    pub fn run(&self) -> Outcome {
        let outcome = Outcome::from(self.check());
        if let Outcome::Failed(e) = &outcome {
            tracing::error!("❌ Workday check failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        }
        outcome
    }
}
