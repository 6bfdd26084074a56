//! Daily price client.
//!
//! Every operation is one GET against the `TIME_SERIES_DAILY` function. The
//! decoded document is dropped when the call returns; nothing is cached
//! between calls, so concurrent use needs no locking. Concurrency is
//! unbounded here and the upstream rate limit is not enforced client-side.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::domain::{DailyRecord, TimeSeries};
use crate::error::{ClientError, TransportError};
use crate::http_client::{HttpClient, HttpRequest, ReqwestHttpClient};

const FUNCTION_DAILY: &str = "TIME_SERIES_DAILY";

/// Point lookups and windowed extrema over a symbol's daily series.
///
/// The operations are `async` and need an executor such as tokio to drive
/// them. Each call awaits exactly one request; nothing is cached between
/// calls.
#[derive(Clone)]
pub struct PriceClient {
    config: ClientConfig,
    http_client: Arc<dyn HttpClient>,
}

impl PriceClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::default()))
    }

    pub fn with_http_client(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the daily series URL for `symbol`, or for the configured default.
    pub fn request_url(&self, symbol: Option<&str>) -> Result<String, ClientError> {
        let symbol = self.config.resolve_symbol(symbol)?;
        Ok(daily_series_url(
            self.config.base_url(),
            symbol,
            self.config.api_key(),
        ))
    }

    /// The record for `date` (`YYYY-MM-DD`), unconverted.
    ///
    /// `Ok(None)` means the date is not in the series, e.g. a weekend or
    /// market holiday.
    pub async fn lookup(
        &self,
        date: &str,
        symbol: Option<&str>,
    ) -> Result<Option<DailyRecord>, ClientError> {
        let series = self.fetch_series(symbol).await?;
        let record = series.get(date).cloned();
        log::debug!("lookup {date}: {}", if record.is_some() { "hit" } else { "no data" });
        Ok(record)
    }

    /// Lowest low among the `n` chronologically *oldest* dates returned.
    ///
    /// This reads from the start of the history while
    /// [`PriceClient::max_over_window`] reads from the end. `Ok(None)` when the
    /// window is empty.
    pub async fn min_over_window(
        &self,
        n: usize,
        symbol: Option<&str>,
    ) -> Result<Option<f64>, ClientError> {
        let series = self.fetch_series(symbol).await?;
        log::debug!("min over {n} oldest of {} days", series.len());
        series.lowest_low(n)
    }

    /// Highest high among the `n` most recent dates. `Ok(None)` when the
    /// window is empty.
    pub async fn max_over_window(
        &self,
        n: usize,
        symbol: Option<&str>,
    ) -> Result<Option<f64>, ClientError> {
        let series = self.fetch_series(symbol).await?;
        log::debug!("max over {n} newest of {} days", series.len());
        series.highest_high(n)
    }

    async fn fetch_series(&self, symbol: Option<&str>) -> Result<TimeSeries, ClientError> {
        let symbol = self.config.resolve_symbol(symbol)?;
        let url = daily_series_url(self.config.base_url(), symbol, self.config.api_key());
        // never log `url`, it carries the api key
        log::debug!(
            "GET {} function={FUNCTION_DAILY} symbol={symbol}",
            self.config.base_url()
        );

        let request = HttpRequest::get(url).with_timeout_ms(self.config.timeout_ms());
        let response = self.http_client.execute(request).await?;

        if !response.is_success() {
            return Err(TransportError::Status {
                status: response.status,
                body: response.body,
            }
            .into());
        }

        let series = TimeSeries::from_body(&response.body)?;
        log::debug!("{symbol}: decoded {} daily records", series.len());
        Ok(series)
    }
}

fn daily_series_url(base_url: &str, symbol: &str, api_key: &str) -> String {
    format!(
        "{base_url}?function={FUNCTION_DAILY}&symbol={}&apikey={}",
        urlencoding::encode(symbol),
        urlencoding::encode(api_key)
    )
}
