pub mod toml_config;

pub use toml_config::RatesConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "privat-rates", version)]
#[command(about = "Fetch PrivatBank EUR/USD exchange rates for the last N days")]
#[command(override_usage = "privat-rates <number_of_days>")]
pub struct CliConfig {
    /// Number of days to fetch, counting back from today (1-10)
    #[arg(value_name = "number_of_days", allow_negative_numbers = true)]
    pub days: String,

    #[arg(long, help = "Load settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Override the rates endpoint base URL")]
    pub base_url: Option<String>,

    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Resolves the file layer (or defaults) and applies CLI overrides on top.
    pub fn rates_config(&self) -> crate::utils::error::Result<RatesConfig> {
        let config = match &self.config {
            Some(path) => RatesConfig::from_file(path)?,
            None => RatesConfig::default(),
        };
        Ok(match &self.base_url {
            Some(base_url) => config.with_base_url(base_url.clone()),
            None => config,
        })
    }
}
