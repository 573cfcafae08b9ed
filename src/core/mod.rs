pub mod fetcher;
pub mod parser;

pub use crate::domain::model::{DailyResult, DateKey, FetchResults, RateEntry, RateRecord};
pub use crate::domain::ports::ConfigProvider;
pub use crate::utils::error::Result;
