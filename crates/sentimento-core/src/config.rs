//! Analyzer configuration.
//!
//! Credentials are optional here: a missing key or endpoint only becomes an
//! error when a request actually needs them.

use std::time::Duration;

use crate::error::{SentimentoError, SentimentoResult};
use crate::model::DEFAULT_LANGUAGE;

/// Environment variable holding the service access key.
pub const KEY_ENV: &str = "AZURE_LANGUAGE_KEY";

/// Environment variable holding the service endpoint URL.
pub const ENDPOINT_ENV: &str = "AZURE_LANGUAGE_ENDPOINT";

/// Default upstream request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the external sentiment service.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub key: Option<String>,
    pub endpoint: Option<String>,
    pub default_language: String,
    pub timeout: Duration,
}

/// Borrowed, validated credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub key: &'a str,
    pub endpoint: &'a str,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            key: None,
            endpoint: None,
            default_language: DEFAULT_LANGUAGE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AnalyzerConfig {
    /// Read credentials from `AZURE_LANGUAGE_KEY` and `AZURE_LANGUAGE_ENDPOINT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            key: lookup(KEY_ENV),
            endpoint: lookup(ENDPOINT_ENV),
            ..Self::default()
        }
    }

    pub fn with_credentials(key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            endpoint: Some(endpoint.into()),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Key and endpoint, or a configuration error if either is missing or blank.
    pub fn credentials(&self) -> SentimentoResult<Credentials<'_>> {
        let key = non_blank(self.key.as_deref());
        let endpoint = non_blank(self.endpoint.as_deref());

        match (key, endpoint) {
            (Some(key), Some(endpoint)) => Ok(Credentials { key, endpoint }),
            _ => Err(missing_configuration()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_ok()
    }
}

/// Error raised when the service credentials are not available.
pub fn missing_configuration() -> SentimentoError {
    SentimentoError::config(format!(
        "Configuração em falta. Verifique as variáveis de ambiente {} e {}.",
        KEY_ENV, ENDPOINT_ENV
    ))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
