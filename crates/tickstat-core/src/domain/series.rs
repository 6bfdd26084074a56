use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::DailyRecord;
use crate::error::ClientError;

/// Top-level key holding the daily series in a successful response.
pub const TIME_SERIES_DAILY_KEY: &str = "Time Series (Daily)";

/// Keys the upstream sends in place of the series on errors and throttling.
const ERROR_ENVELOPE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

/// Daily records for one symbol, keyed by ISO `YYYY-MM-DD` date.
///
/// Keys sort lexically, which for ISO dates is chronological order, so the
/// map iterates oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    records: BTreeMap<String, DailyRecord>,
}

impl TimeSeries {
    /// Decode a raw response body.
    ///
    /// A body that is not JSON is a transport failure. JSON without the daily
    /// series key, or whose series is not an object of objects, is an upstream
    /// data failure carrying the raw body. Record fields are not checked here.
    pub fn from_body(body: &str) -> Result<Self, ClientError> {
        let mut document: Value = serde_json::from_str(body)?;

        let Some(series) = document.get_mut(TIME_SERIES_DAILY_KEY).map(Value::take) else {
            let message = match upstream_message(&document) {
                Some(note) => format!("upstream returned no daily series: {note}"),
                None => format!("response has no '{TIME_SERIES_DAILY_KEY}' key"),
            };
            log::warn!("{message}");
            return Err(ClientError::upstream_data(message, body));
        };

        let records = serde_json::from_value::<BTreeMap<String, DailyRecord>>(series)
            .map_err(|e| ClientError::upstream_data(format!("malformed daily series: {e}"), body))?;

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, date: &str) -> Option<&DailyRecord> {
        self.records.get(date)
    }

    /// All dates, oldest first.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// The `n` chronologically earliest days, oldest first.
    pub fn oldest(&self, n: usize) -> impl Iterator<Item = (&str, &DailyRecord)> {
        self.records.iter().take(n).map(|(date, record)| (date.as_str(), record))
    }

    /// The `n` most recent days, newest first.
    pub fn newest(&self, n: usize) -> impl Iterator<Item = (&str, &DailyRecord)> {
        self.records
            .iter()
            .rev()
            .take(n)
            .map(|(date, record)| (date.as_str(), record))
    }

    /// Lowest `"3. low"` across the `n` oldest days.
    ///
    /// The window runs from the start of the returned history, unlike
    /// [`TimeSeries::highest_high`] which reads from the end. Both directions
    /// are kept until callers confirm they should both mean "most recent".
    pub fn lowest_low(&self, n: usize) -> Result<Option<f64>, ClientError> {
        extremum(self.oldest(n), DailyRecord::low_price, f64::min)
    }

    /// Highest `"2. high"` across the `n` most recent days.
    pub fn highest_high(&self, n: usize) -> Result<Option<f64>, ClientError> {
        extremum(self.newest(n), DailyRecord::high_price, f64::max)
    }
}

impl FromIterator<(String, DailyRecord)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (String, DailyRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

fn extremum<'a>(
    mut window: impl Iterator<Item = (&'a str, &'a DailyRecord)>,
    price: fn(&DailyRecord) -> Result<f64, ClientError>,
    pick: fn(f64, f64) -> f64,
) -> Result<Option<f64>, ClientError> {
    window.try_fold(None, |best: Option<f64>, (date, record)| {
        let value = price(record).map_err(|error| match error {
            ClientError::UpstreamData { message, payload } => {
                ClientError::upstream_data(format!("{date}: {message}"), payload)
            }
            other => other,
        })?;
        Ok(Some(best.map_or(value, |best| pick(best, value))))
    })
}

fn upstream_message(document: &Value) -> Option<&str> {
    ERROR_ENVELOPE_KEYS
        .iter()
        .find_map(|key| document.get(key).and_then(Value::as_str))
}
