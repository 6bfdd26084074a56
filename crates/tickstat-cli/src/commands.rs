use std::io::Write;

use serde::Serialize;
use serde_json::Value;

use tickstat_core::{ClientConfig, PriceClient};

use crate::cli::{Cli, Command, LookupArgs, WindowArgs};
use crate::error::CliError;

#[derive(Debug, Serialize)]
struct LowestLowData<'a> {
    symbol: &'a str,
    window: usize,
    lowest_low: Option<f64>,
}

#[derive(Debug, Serialize)]
struct HighestHighData<'a> {
    symbol: &'a str,
    window: usize,
    highest_high: Option<f64>,
}

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    let client = PriceClient::new(client_config(cli)?);

    match &cli.command {
        Command::Lookup(args) => lookup(&client, args).await,
        Command::Min(args) => min(&client, args).await,
        Command::Max(args) => max(&client, args).await,
    }
}

pub fn render(value: &Value, pretty: bool) -> Result<(), CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}

fn client_config(cli: &Cli) -> Result<ClientConfig, CliError> {
    let api_key = cli
        .api_key
        .as_deref()
        .filter(|key| !key.trim().is_empty())
        .ok_or(CliError::MissingApiKey)?;

    let config = ClientConfig::new(api_key)
        .with_base_url(cli.base_url.as_str())
        .with_timeout_ms(cli.timeout_ms);
    Ok(match &cli.symbol {
        Some(symbol) => config.with_default_symbol(symbol.as_str()),
        None => config,
    })
}

async fn lookup(client: &PriceClient, args: &LookupArgs) -> Result<Value, CliError> {
    let record = client
        .lookup(&args.date, args.symbol_override.as_deref())
        .await?;

    let value = match record {
        Some(record) if args.numeric => serde_json::to_value(record.to_bar()?)?,
        Some(record) => serde_json::to_value(record)?,
        None => Value::Null,
    };
    Ok(value)
}

async fn min(client: &PriceClient, args: &WindowArgs) -> Result<Value, CliError> {
    let symbol = client
        .config()
        .resolve_symbol(args.symbol_override.as_deref())?;
    let lowest_low = client
        .min_over_window(args.window(), Some(symbol))
        .await?;

    Ok(serde_json::to_value(LowestLowData {
        symbol,
        window: args.window(),
        lowest_low,
    })?)
}

async fn max(client: &PriceClient, args: &WindowArgs) -> Result<Value, CliError> {
    let symbol = client
        .config()
        .resolve_symbol(args.symbol_override.as_deref())?;
    let highest_high = client
        .max_over_window(args.window(), Some(symbol))
        .await?;

    Ok(serde_json::to_value(HighestHighData {
        symbol,
        window: args.window(),
        highest_high,
    })?)
}
