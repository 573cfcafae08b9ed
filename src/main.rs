use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use privat_rates::utils::logger::{self, LogFormat};
use privat_rates::utils::validation::{parse_days, Validate};
use privat_rates::{CliConfig, RateFetchOrchestrator};

const USAGE: &str = "Usage: privat-rates <number_of_days>";

// The current-thread runtime is picked once here, before any future runs; every
// request of a batch is multiplexed on it.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{}", USAGE);
            std::process::exit(1);
        }
    };

    let days = match parse_days(&cli.days) {
        Ok(days) => days,
        Err(e) => {
            println!("{}", e);
            std::process::exit(1);
        }
    };

    let log_format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(log_format, cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = cli.rates_config().context("failed to load configuration")?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let orchestrator = RateFetchOrchestrator::new(config);
    let results = match orchestrator.fetch_rates(days).await {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("❌ Rate fetch failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&results)?
    } else {
        serde_json::to_string(&results)?
    };
    println!("{}", output);

    Ok(())
}
