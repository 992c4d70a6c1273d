//! Client configuration resolved once at startup and never mutated.

use std::time::Duration;

/// Environment variable that overrides the API base URL.
pub const API_URL_ENV: &str = "DSGEN_API_URL";

/// Base URL used when no override is supplied.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Default per-call timeout for JSON requests.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Default per-call timeout for multipart uploads. Larger than the JSON
/// default so big files are not cut off mid-transfer.
pub const DEFAULT_UPLOAD_TIMEOUT: Duration = Duration::from_millis(300_000);

/// Immutable configuration injected into [`crate::http::HttpClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    timeout: Duration,
    upload_timeout: Duration,
}

impl ApiConfig {
    /// Creates a config for the given base URL. A trailing slash is
    /// stripped so endpoint paths can always start with one.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            upload_timeout: DEFAULT_UPLOAD_TIMEOUT,
        }
    }

    /// Resolves the base URL from `DSGEN_API_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// Overrides the default JSON request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the default upload timeout.
    pub fn with_upload_timeout(mut self, timeout: Duration) -> Self {
        self.upload_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn upload_timeout(&self) -> Duration {
        self.upload_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ApiConfig::new("http://localhost:8000/api/");
        assert_eq!(config.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::new("http://localhost:8000/api");
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.upload_timeout(), DEFAULT_UPLOAD_TIMEOUT);
    }

    #[test]
    fn test_timeout_overrides() {
        let config = ApiConfig::new("http://localhost:8000/api")
            .with_timeout(Duration::from_millis(50))
            .with_upload_timeout(Duration::from_millis(100));
        assert_eq!(config.timeout(), Duration::from_millis(50));
        assert_eq!(config.upload_timeout(), Duration::from_millis(100));
    }
}
