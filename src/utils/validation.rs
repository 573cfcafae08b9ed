use crate::utils::error::{RatesError, Result};
use url::Url;

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 10;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(RatesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(RatesError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(RatesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RatesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(RatesError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one entry is required".to_string(),
        });
    }
    for value in values {
        validate_non_empty_string(field_name, value)?;
    }
    Ok(())
}

/// Parses the raw day-count argument and checks it against `MIN_DAYS..=MAX_DAYS`.
pub fn parse_days(raw: &str) -> Result<u32> {
    let days: i64 = raw.trim().parse().map_err(|_| RatesError::ValidationError {
        message: format!("Number of days must be an integer, got '{}'.", raw),
    })?;

    if days < i64::from(MIN_DAYS) || days > i64::from(MAX_DAYS) {
        return Err(RatesError::ValidationError {
            message: format!(
                "Number of days must be between {} and {}.",
                MIN_DAYS, MAX_DAYS
            ),
        });
    }

    Ok(days as u32)
}
