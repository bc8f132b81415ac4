use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const BASE_URL_ENV: &str = "PROGRESSION_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "PROGRESSION_API_TIMEOUT_MS";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Where the progression calculator lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressionConfig {
    base_url: Url,
    timeout: Duration,
}

impl ProgressionConfig {
    /// # Errors
    ///
    /// Returns `ConfigError` if the base url does not parse or is not http(s).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
            raw: trimmed.to_string(),
            source,
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                scheme: parsed.scheme().to_string(),
            });
        }
        Ok(Self {
            base_url: parsed,
            timeout,
        })
    }

    /// Read `PROGRESSION_API_BASE_URL` and `PROGRESSION_API_TIMEOUT_MS`, falling back to
    /// a local calculator with a ten second timeout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for malformed values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let timeout = match env::var(TIMEOUT_ENV) {
            Ok(raw) => parse_timeout_ms(&raw)?,
            Err(_) => Duration::from_millis(DEFAULT_TIMEOUT_MS),
        };
        Self::new(&base_url, timeout)
    }

    /// Replace the base url, keeping the timeout.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the new url is invalid.
    pub fn with_base_url(self, base_url: &str) -> Result<Self, ConfigError> {
        Self::new(base_url, self.timeout)
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `POST` target of the calculation endpoint.
    #[must_use]
    pub fn calculate_url(&self) -> String {
        format!(
            "{}/api/calculate",
            self.base_url.as_str().trim_end_matches('/')
        )
    }
}

fn parse_timeout_ms(raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
        .ok_or_else(|| ConfigError::InvalidTimeout {
            raw: raw.to_string(),
        })
}
