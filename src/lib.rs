pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::RatesConfig;
pub use crate::core::fetcher::{date_keys, RateFetchOrchestrator};
pub use crate::domain::model::{
    DailyOutcome, DailyResult, DateKey, FetchResults, RateEntry, RateRecord, ERROR_SENTINEL,
};
pub use crate::utils::error::{RatesError, Result};
