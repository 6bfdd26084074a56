use thiserror::Error;

use crate::http_client::HttpError;

/// Coarse error classification for callers that branch on failure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    UpstreamData,
    Transport,
}

/// Failures below the data layer: network, HTTP status, or a body that is not JSON.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("transport error: {0}")]
    Http(#[from] HttpError),

    #[error("upstream returned status {status}")]
    Status { status: u16, body: String },

    #[error("response body is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

/// Top-level error type for [`crate::PriceClient`] operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The response decoded but did not carry usable daily data.
    /// `payload` holds the raw body or the offending field value.
    #[error("upstream data error: {message}")]
    UpstreamData { message: String, payload: String },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ClientError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn upstream_data(message: impl Into<String>, payload: impl Into<String>) -> Self {
        Self::UpstreamData {
            message: message.into(),
            payload: payload.into(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::UpstreamData { .. } => ErrorKind::UpstreamData,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Raw upstream payload attached to an [`ErrorKind::UpstreamData`] or
    /// non-2xx status error.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::UpstreamData { payload, .. } => Some(payload),
            Self::Transport(TransportError::Status { body, .. }) => Some(body),
            _ => None,
        }
    }
}

impl From<HttpError> for ClientError {
    fn from(error: HttpError) -> Self {
        Self::Transport(TransportError::Http(error))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        Self::Transport(TransportError::MalformedBody(error))
    }
}
