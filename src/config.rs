//! Runtime configuration for the search client.
//!
//! Values come from command-line flags, which clap backs with environment
//! variables; anything left unset falls back to the defaults below.

use crate::search::{SearchError, parse_endpoint};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://genesis-backend-1-1.onrender.com/api/search";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENDPOINT_ENV: &str = "GENESIS_ENDPOINT";
pub const TIMEOUT_ENV: &str = "GENESIS_TIMEOUT_SECS";
pub const LOG_FILE_ENV: &str = "GENESIS_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub timeout: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            log_file: None,
        }
    }
}

impl Config {
    /// Build a config from optional overrides and validate the endpoint.
    pub fn resolve(
        endpoint: Option<String>,
        timeout_secs: Option<u64>,
        log_file: Option<PathBuf>,
    ) -> Result<Self, SearchError> {
        let defaults = Self::default();
        let endpoint = endpoint
            .map(|e| e.trim().to_string())
            .filter(|e| !e.is_empty())
            .unwrap_or(defaults.endpoint);
        parse_endpoint(&endpoint)?;

        Ok(Self {
            endpoint,
            timeout: timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            log_file,
        })
    }

    /// Where the interactive UI writes its log when no path is configured.
    pub fn log_file_or_default(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(default_log_file)
    }
}

pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("genesis").join("genesis.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::resolve(None, None, None).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::resolve(
            Some(" http://localhost:8000/api/search ".to_string()),
            Some(5),
            Some(PathBuf::from("/tmp/genesis.log")),
        )
        .unwrap();

        assert_eq!(config.endpoint, "http://localhost:8000/api/search");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.log_file_or_default(), Some(PathBuf::from("/tmp/genesis.log")));
    }

    #[test]
    fn test_blank_endpoint_uses_default() {
        let config = Config::resolve(Some("   ".to_string()), None, None).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let err = Config::resolve(Some("not a url".to_string()), None, None).unwrap_err();
        assert!(matches!(err, SearchError::InvalidEndpoint(_)));
    }
}
