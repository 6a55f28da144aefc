pub mod cli;
pub mod ruleset;

use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "check-workday", version)]
#[command(about = "Print whether today is a workday under the Chinese holiday calendar")]
pub struct CliConfig {
    /// Check this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Load the workday ruleset from a TOML file instead of the built-in one
    #[arg(long, env = "CHECK_WORKDAY_RULESET")]
    pub ruleset: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
