//! Backend Configuration
//!
//! Base URL and request timeout, fixed at build time.

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://dslist-production-330e.up.railway.app";
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Where the DSList backend lives and how long a call may take
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS as u64),
        }
    }
}

impl ApiConfig {
    /// Build from `DSLIST_API_URL` / `DSLIST_API_TIMEOUT_MS` set at compile time
    pub fn from_env() -> Self {
        Self::from_values(option_env!("DSLIST_API_URL"), option_env!("DSLIST_API_TIMEOUT_MS"))
    }

    fn from_values(url: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(ms) = timeout_ms.and_then(|ms| ms.trim().parse::<u64>().ok()) {
            config.request_timeout = Duration::from_millis(ms);
        }
        config
    }

    /// Absolute URL for an API path such as `/lists/1/games`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_values(None, None);
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_values(Some("http://localhost:8080/"), Some("2500"));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout, Duration::from_millis(2500));
    }

    #[test]
    fn test_bad_timeout_keeps_default() {
        let config = ApiConfig::from_values(Some("  "), Some("soon"));
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_url_joins_paths() {
        let config = ApiConfig::default();
        assert_eq!(config.url("/lists/2/games"), format!("{}/lists/2/games", DEFAULT_API_URL));
        assert_eq!(config.url("games"), format!("{}/games", DEFAULT_API_URL));
    }
}
