use crate::core::parser::{decode_body, parse_response};
use crate::domain::model::{DailyResult, DateKey, FetchResults};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use chrono::{Local, NaiveDate};
use futures_util::future::try_join_all;
use reqwest::Client;

/// Enumerates `today - k` for `k` in `0..days`, most recent first.
pub fn date_keys(today: NaiveDate, days: u32) -> Vec<DateKey> {
    (0..days)
        .filter_map(|offset| DateKey::days_before(today, offset))
        .collect()
}

/// Fans out one request per day against the rates endpoint and collects the
/// answers in day order.
///
/// Transport failures are absorbed per day and reported as
/// [`ERROR_SENTINEL`](crate::domain::model::ERROR_SENTINEL) for that day only.
/// A body that is not JSON, or that lacks the `exchangeRate` array, fails the
/// whole batch and discards the days that did succeed. The asymmetry is
/// long-standing observable behaviour and is kept as is.
pub struct RateFetchOrchestrator<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> RateFetchOrchestrator<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// The caller guarantees `days` is within 1..=10.
    pub async fn fetch_rates(&self, days: u32) -> Result<FetchResults> {
        self.fetch_rates_from(Local::now().date_naive(), days).await
    }

    pub async fn fetch_rates_from(&self, today: NaiveDate, days: u32) -> Result<FetchResults> {
        let dates = date_keys(today, days);
        tracing::info!("Fetching rates for {} day(s) starting {}", dates.len(), today);

        // One client per batch, shared by every in-flight request and dropped
        // on return whichever way the batch ends.
        let client = Client::new();
        let results = try_join_all(
            dates
                .into_iter()
                .map(|date| self.fetch_rate_for_date(&client, date)),
        )
        .await;

        match &results {
            Ok(results) => {
                let failed = results.iter().filter(|r| r.is_failed()).count();
                tracing::debug!("Batch finished: {} ok, {} failed", results.len() - failed, failed);
            }
            Err(e) => tracing::error!("Batch aborted: {}", e),
        }
        results
    }

    async fn fetch_rate_for_date(&self, client: &Client, date: DateKey) -> Result<DailyResult> {
        let url = format!("{}{}", self.config.base_url(), date);
        tracing::debug!("Making API request to: {}", url);

        let body = match Self::request_body(client, &url).await {
            Ok(body) => body,
            Err(e) if e.is_transport() => {
                tracing::warn!("Error fetching data for {}: {}", date, e);
                return Ok(DailyResult::failed(date));
            }
            Err(e) => return Err(e),
        };

        let data = decode_body(&date, &body)?;
        parse_response(date, &data, self.config.currencies())
    }

    async fn request_body(client: &Client, url: &str) -> Result<Vec<u8>> {
        let response = client.get(url).send().await?;
        tracing::debug!("API response status: {}", response.status());
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
