use check_workday::utils::logger;
use check_workday::{CheckError, CliConfig, Outcome, WorkdayChecker};
use clap::error::ErrorKind;
use clap::Parser;

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // 完整的 clap 說明寫到 stderr，stdout 只留一行
            eprint!("{}", e);
            let err = CheckError::from(e);
            println!("{}", err.user_friendly_message());
            std::process::exit(err.exit_code());
        }
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 載入規則，失敗時不進行查詢
    let outcome = match config.load_provider() {
        Ok(provider) => WorkdayChecker::new(provider, config.clock()).run(),
        Err(e) => {
            tracing::error!("❌ Ruleset unavailable: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            Outcome::Failed(e)
        }
    };

    println!("{}", outcome.message());
    std::process::exit(outcome.exit_code());
}
