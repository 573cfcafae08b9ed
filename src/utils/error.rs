use thiserror::Error;

#[derive(Error, Debug)]
pub enum RatesError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Malformed response for {date}: {message}")]
    MalformedResponseError { date: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{message}")]
    ValidationError { message: String },
}

impl RatesError {
    /// Transport failures are recovered per date; everything else aborts the batch.
    pub fn is_transport(&self) -> bool {
        matches!(self, RatesError::ApiError(_))
    }
}

pub type Result<T> = std::result::Result<T, RatesError>;
