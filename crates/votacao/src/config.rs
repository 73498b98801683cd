//! Backend endpoint configuration.
//!
//! A bundled single-page app has no process environment at runtime, so the
//! values are read from the build environment (`VOTACAO_API_URL`,
//! `VOTACAO_API_TIMEOUT_MS`) when the crate is compiled.

use std::time::Duration;

/// Base URL used when `VOTACAO_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// `None` means a request waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the configuration from the compile-time environment.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("VOTACAO_API_URL"),
            option_env!("VOTACAO_API_TIMEOUT_MS"),
        )
    }

    fn from_values(url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let url = url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);

        let timeout = timeout_ms
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        Self {
            base_url: normalize_base_url(url.to_string()),
            timeout,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
