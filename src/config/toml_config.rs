use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RatesError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates?date=";
pub const DEFAULT_CURRENCIES: [&str; 2] = ["EUR", "USD"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatesConfig {
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_currencies")]
    pub currencies: Vec<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_currencies() -> Vec<String> {
    DEFAULT_CURRENCIES.iter().map(|c| c.to_string()).collect()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            currencies: default_currencies(),
        }
    }
}

impl RatesConfig {
    /// Loads the config from a TOML file; missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| RatesError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RatesError::ConfigError {
            message: format!("Failed to parse TOML config: {}", e),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.source.base_url = base_url.into();
        self
    }
}

impl Validate for RatesConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.base_url", &self.source.base_url)?;
        validate_non_empty_list("source.currencies", &self.source.currencies)?;
        Ok(())
    }
}

impl ConfigProvider for RatesConfig {
    fn base_url(&self) -> &str {
        &self.source.base_url
    }

    fn currencies(&self) -> &[String] {
        &self.source.currencies
    }
}
