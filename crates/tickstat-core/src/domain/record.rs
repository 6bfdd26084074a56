use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ClientError;

pub const OPEN_KEY: &str = "1. open";
pub const HIGH_KEY: &str = "2. high";
pub const LOW_KEY: &str = "3. low";
pub const CLOSE_KEY: &str = "4. close";
pub const VOLUME_KEY: &str = "5. volume";

/// One trading day exactly as the upstream sent it.
///
/// The JSON object is kept whole, including keys this crate does not read.
/// Fields are only checked when something reads them, so a partial record
/// never fails an operation that does not touch it. Use
/// [`DailyRecord::to_bar`] for numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyRecord(Map<String, Value>);

impl DailyRecord {
    pub fn new(
        open: impl Into<String>,
        high: impl Into<String>,
        low: impl Into<String>,
        close: impl Into<String>,
        volume: impl Into<String>,
    ) -> Self {
        Self::default()
            .with_field(OPEN_KEY, open)
            .with_field(HIGH_KEY, high)
            .with_field(LOW_KEY, low)
            .with_field(CLOSE_KEY, close)
            .with_field(VOLUME_KEY, volume)
    }

    /// Set or replace one raw string field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), Value::String(value.into()));
        self
    }

    pub fn without_field(mut self, key: &str) -> Self {
        self.0.remove(key);
        self
    }

    /// Any field by its upstream key, including ones outside the OHLCV set.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn open(&self) -> Option<&str> {
        self.text(OPEN_KEY)
    }

    pub fn high(&self) -> Option<&str> {
        self.text(HIGH_KEY)
    }

    pub fn low(&self) -> Option<&str> {
        self.text(LOW_KEY)
    }

    pub fn close(&self) -> Option<&str> {
        self.text(CLOSE_KEY)
    }

    pub fn volume(&self) -> Option<&str> {
        self.text(VOLUME_KEY)
    }

    pub fn high_price(&self) -> Result<f64, ClientError> {
        parse_price(HIGH_KEY, self.required(HIGH_KEY)?)
    }

    pub fn low_price(&self) -> Result<f64, ClientError> {
        parse_price(LOW_KEY, self.required(LOW_KEY)?)
    }

    /// Convert every OHLCV field; the first missing or malformed one fails
    /// the whole record.
    pub fn to_bar(&self) -> Result<DailyBar, ClientError> {
        Ok(DailyBar {
            open: parse_price(OPEN_KEY, self.required(OPEN_KEY)?)?,
            high: self.high_price()?,
            low: self.low_price()?,
            close: parse_price(CLOSE_KEY, self.required(CLOSE_KEY)?)?,
            volume: parse_volume(self.required(VOLUME_KEY)?)?,
        })
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    fn required(&self, field: &'static str) -> Result<&str, ClientError> {
        match self.0.get(field) {
            Some(Value::String(raw)) => Ok(raw),
            Some(other) => Err(ClientError::upstream_data(
                format!("field '{field}' is not a decimal string: {other}"),
                other.to_string(),
            )),
            None => Err(ClientError::upstream_data(
                format!("field '{field}' is missing"),
                Value::Object(self.0.clone()).to_string(),
            )),
        }
    }
}

impl From<Map<String, Value>> for DailyRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Numeric form of a [`DailyRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl TryFrom<&DailyRecord> for DailyBar {
    type Error = ClientError;

    fn try_from(record: &DailyRecord) -> Result<Self, Self::Error> {
        record.to_bar()
    }
}

fn parse_price(field: &'static str, raw: &str) -> Result<f64, ClientError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ClientError::upstream_data(
            format!("field '{field}' is not a finite decimal: '{raw}'"),
            raw,
        )),
    }
}

fn parse_volume(raw: &str) -> Result<u64, ClientError> {
    raw.trim().parse::<u64>().map_err(|_| {
        ClientError::upstream_data(
            format!("field '{VOLUME_KEY}' is not a whole number: '{raw}'"),
            raw,
        )
    })
}
