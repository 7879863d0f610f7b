//! Error types shared by the fetcher, the controller and configuration loading.

use std::fmt;
use thiserror::Error;

/// Why a fetch produced no articles.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("API key not configured")]
    Configuration,

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("upstream returned HTTP {status}")]
    Http { status: u16 },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Configuration => FetchErrorKind::Configuration,
            FetchError::Network(_) => FetchErrorKind::Network,
            FetchError::Http { .. } => FetchErrorKind::Http,
            FetchError::Decode(_) => FetchErrorKind::Decode,
        }
    }
}

/// Copyable summary of a [`FetchError`], kept by the controller for the
/// diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Configuration,
    Network,
    Http,
    Decode,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FetchErrorKind::Configuration => "configuration",
            FetchErrorKind::Network => "network",
            FetchErrorKind::Http => "http",
            FetchErrorKind::Decode => "decode",
        };
        f.write_str(label)
    }
}

/// Problems found while building the startup [`Config`](crate::config::Config).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid base URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(FetchError::Configuration.kind(), FetchErrorKind::Configuration);
        assert_eq!(FetchError::Http { status: 503 }.kind(), FetchErrorKind::Http);
        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(FetchError::from(decode).kind(), FetchErrorKind::Decode);
    }

    #[test]
    fn test_display() {
        assert_eq!(FetchError::Http { status: 401 }.to_string(), "upstream returned HTTP 401");
        assert_eq!(FetchErrorKind::Network.to_string(), "network");
    }
}
