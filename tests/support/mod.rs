//! Shared fakes for behaviour tests.

#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tickstat_core::{
    ClientConfig, HttpClient, HttpError, HttpRequest, HttpResponse, PriceClient,
};

/// Serves one canned response and records every request it sees.
#[derive(Debug)]
pub struct RecordingHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn json(body: impl Into<String>) -> Arc<Self> {
        Self::responding(Ok(HttpResponse::ok_json(body)))
    }

    pub fn responding(response: Result<HttpResponse, HttpError>) -> Arc<Self> {
        Arc::new(Self {
            response,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

/// Client for `IBM` backed by `transport`.
pub fn client_with(transport: Arc<RecordingHttpClient>) -> PriceClient {
    PriceClient::with_http_client(
        ClientConfig::new("test-key").with_default_symbol("IBM"),
        transport,
    )
}

/// Three trading days: lows 10, 5, 8 and highs 15, 11, 12.
pub const THREE_DAY_FIXTURE: &str = r#"{
    "Meta Data": {
        "1. Information": "Daily Prices (open, high, low, close) and Volumes",
        "2. Symbol": "IBM",
        "3. Last Refreshed": "2023-01-03",
        "4. Output Size": "Compact",
        "5. Time Zone": "US/Eastern"
    },
    "Time Series (Daily)": {
        "2023-01-03": {
            "1. open": "9.5000",
            "2. high": "12.0000",
            "3. low": "8.0000",
            "4. close": "11.2500",
            "5. volume": "3100200"
        },
        "2023-01-01": {
            "1. open": "12.0000",
            "2. high": "15.0000",
            "3. low": "10.0000",
            "4. close": "14.1000",
            "5. volume": "2901552"
        },
        "2023-01-02": {
            "1. open": "10.5000",
            "2. high": "11.0000",
            "3. low": "5.0000",
            "4. close": "6.7500",
            "5. volume": "4410023"
        }
    }
}"#;

/// Two complete days and a newest day holding only a high and a low.
pub const PARTIAL_RECORD_FIXTURE: &str = r#"{
    "Time Series (Daily)": {
        "2023-01-01": {
            "1. open": "12.0000",
            "2. high": "15.0000",
            "3. low": "10.0000",
            "4. close": "14.1000",
            "5. volume": "2901552"
        },
        "2023-01-02": {
            "1. open": "10.5000",
            "2. high": "11.0000",
            "3. low": "5.0000",
            "4. close": "6.7500",
            "5. volume": "4410023"
        },
        "2023-01-03": {
            "2. high": "12.0000",
            "3. low": "8.0000"
        }
    }
}"#;

pub const EMPTY_SERIES_FIXTURE: &str = r#"{"Meta Data": {}, "Time Series (Daily)": {}}"#;

pub const RATE_LIMIT_FIXTURE: &str = r#"{"Note": "rate limited"}"#;
