//! CLI argument definitions for tickstat.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `lookup` | One day's OHLCV record |
//! | `min` | Lowest low over the oldest N days returned |
//! | `max` | Highest high over the newest N days returned |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--api-key` | `$TICKSTAT_API_KEY` | Alpha Vantage API key |
//! | `--symbol` | `$TICKSTAT_SYMBOL` | Default ticker symbol |
//! | `--base-url` | Alpha Vantage | Query endpoint |
//! | `--timeout-ms` | `5000` | Request timeout in ms |
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! # Examples
//!
//! ```bash
//! tickstat --symbol IBM lookup 2024-05-01
//! tickstat --symbol IBM min 10
//! tickstat max 10 --symbol-override MSFT --pretty
//! ```

use clap::{Args, Parser, Subcommand};

use tickstat_core::{API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, SYMBOL_ENV};

/// Daily price lookups and rolling extrema from Alpha Vantage.
#[derive(Debug, Parser)]
#[command(name = "tickstat", author, version, about)]
pub struct Cli {
    /// Alpha Vantage API key.
    #[arg(long, global = true, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Default ticker symbol used when a command gives no override.
    #[arg(long, global = true, env = SYMBOL_ENV)]
    pub symbol: Option<String>,

    /// Query endpoint.
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in milliseconds.
    #[arg(long, global = true, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the record for one date; `null` for non-trading days.
    Lookup(LookupArgs),
    /// Lowest low over the N chronologically oldest dates returned.
    Min(WindowArgs),
    /// Highest high over the N most recent dates.
    Max(WindowArgs),
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Trading date as YYYY-MM-DD.
    #[arg(value_parser = parse_trading_date)]
    pub date: String,

    /// Symbol for this call only.
    #[arg(long)]
    pub symbol_override: Option<String>,

    /// Convert the record to numbers instead of raw upstream strings.
    #[arg(long, default_value_t = false)]
    pub numeric: bool,
}

#[derive(Debug, Args)]
pub struct WindowArgs {
    /// Number of trading days in the window; zero or less yields `null`.
    #[arg(allow_negative_numbers = true)]
    pub days: i64,

    /// Symbol for this call only.
    #[arg(long)]
    pub symbol_override: Option<String>,
}

impl WindowArgs {
    pub fn window(&self) -> usize {
        usize::try_from(self.days).unwrap_or(0)
    }
}

fn parse_trading_date(raw: &str) -> Result<String, String> {
    let format = time::format_description::parse("[year]-[month]-[day]")
        .map_err(|e| e.to_string())?;
    time::Date::parse(raw, &format)
        .map(|_| raw.to_owned())
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
