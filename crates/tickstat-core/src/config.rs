//! Client configuration.

use std::fmt::{Debug, Formatter};

use crate::error::ClientError;
use crate::http_client::DEFAULT_TIMEOUT_MS;

/// Alpha Vantage query endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "TICKSTAT_API_KEY";

/// Environment variable holding the optional default symbol.
pub const SYMBOL_ENV: &str = "TICKSTAT_SYMBOL";

/// Immutable settings for a [`crate::PriceClient`].
///
/// Neither the key nor the symbol is validated here; a bad value surfaces
/// from the upstream on first use.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_key: String,
    default_symbol: Option<String>,
    base_url: String,
    timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            default_symbol: None,
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Build from `TICKSTAT_API_KEY` and the optional `TICKSTAT_SYMBOL`.
    ///
    /// A missing or blank key is a configuration error; a blank symbol is
    /// treated as unset.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let api_key = var(API_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ClientError::configuration(format!("{API_KEY_ENV} is not set")))?;

        let config = Self::new(api_key);
        Ok(match var(SYMBOL_ENV) {
            Some(symbol) if !symbol.trim().is_empty() => config.with_default_symbol(symbol),
            _ => config,
        })
    }

    pub fn with_default_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.default_symbol = Some(symbol.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn default_symbol(&self) -> Option<&str> {
        self.default_symbol.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Per-call override wins over the configured default.
    pub fn resolve_symbol<'a>(&'a self, symbol: Option<&'a str>) -> Result<&'a str, ClientError> {
        symbol.or(self.default_symbol.as_deref()).ok_or_else(|| {
            ClientError::configuration(
                "no symbol given and no default symbol configured on the client",
            )
        })
    }
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("default_symbol", &self.default_symbol)
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}
