//! # Domain Models
//!
//! Daily price types decoded from the upstream payload.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`DailyRecord`] | One day's OHLCV values as raw decimal strings |
//! | [`DailyBar`] | Numeric conversion of a [`DailyRecord`] |
//! | [`TimeSeries`] | Date-ordered records with windowed extrema |

mod record;
mod series;

pub use record::{DailyBar, DailyRecord, CLOSE_KEY, HIGH_KEY, LOW_KEY, OPEN_KEY, VOLUME_KEY};
pub use series::{TimeSeries, TIME_SERIES_DAILY_KEY};
