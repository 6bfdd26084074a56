use thiserror::Error;

use tickstat_core::{ClientError, ErrorKind};

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing api key: pass --api-key or set {}", tickstat_core::API_KEY_ENV)]
    MissingApiKey,

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::MissingApiKey => 2,
            Self::Client(error) => match error.kind() {
                ErrorKind::Configuration => 2,
                ErrorKind::UpstreamData => 3,
                ErrorKind::Transport => 5,
            },
            Self::Serialization(_) => 4,
            Self::Io(_) => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_kinds_map_to_distinct_exit_codes() {
        let configuration = CliError::from(ClientError::configuration("no symbol"));
        let upstream = CliError::from(ClientError::upstream_data("no series", "{}"));
        let transport = CliError::from(ClientError::from(tickstat_core::HttpError::connect(
            "refused",
        )));

        assert_eq!(configuration.exit_code(), 2);
        assert_eq!(upstream.exit_code(), 3);
        assert_eq!(transport.exit_code(), 5);
        assert_eq!(CliError::MissingApiKey.exit_code(), 2);
    }
}
