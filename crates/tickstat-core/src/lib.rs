//! # Tickstat Core
//!
//! Daily equity prices from Alpha Vantage, with point lookups and rolling
//! extrema over a window of trading days.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`PriceClient`] and its three operations |
//! | [`config`] | Client configuration and environment loading |
//! | [`domain`] | Daily records, bars, and the time series |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP transport seam |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tickstat_core::{ClientConfig, PriceClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tickstat_core::ClientError> {
//!     let client = PriceClient::new(ClientConfig::from_env()?.with_default_symbol("IBM"));
//!
//!     if let Some(record) = client.lookup("2024-05-01", None).await? {
//!         println!("IBM close: {}", record.close().unwrap_or("-"));
//!     }
//!     let lowest = client.min_over_window(10, Some("MSFT")).await?;
//!     println!("MSFT lowest low: {lowest:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! A missing date or an empty window is `Ok(None)`, not an error. Failures
//! are classified by [`ErrorKind`]:
//!
//! ```rust
//! use tickstat_core::{ClientError, ErrorKind};
//!
//! fn handle_error(error: ClientError) {
//!     match error.kind() {
//!         ErrorKind::Configuration => {
//!             // Supply a symbol
//!         }
//!         ErrorKind::UpstreamData => {
//!             // Inspect error.payload()
//!         }
//!         ErrorKind::Transport => {}
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The API key is never logged and is redacted from `Debug` output
//! - Query values are percent-encoded

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod http_client;

pub use client::PriceClient;

pub use config::{ClientConfig, API_KEY_ENV, DEFAULT_BASE_URL, SYMBOL_ENV};

pub use domain::{DailyBar, DailyRecord, TimeSeries, TIME_SERIES_DAILY_KEY};

pub use error::{ClientError, ErrorKind, TransportError};

pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, ReqwestHttpClient,
    DEFAULT_TIMEOUT_MS,
};
