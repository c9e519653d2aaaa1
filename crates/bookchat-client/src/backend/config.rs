//! Backend transport configuration.

use std::time::Duration;

/// Deployed fallback instance, used when the hosting site supplies no
/// backend URL of its own.
pub const DEFAULT_BACKEND_URL: &str =
    "https://ai-native-book-backend-production-0fd7.up.railway.app";

/// Backend transport configuration.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl BackendConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }

    /// Resolve the backend URL from the hosting environment.
    ///
    /// Reads `CHATBOT_API_URL` (the site configuration key), falling back
    /// to the deployed default instance.
    pub fn from_env() -> Self {
        match std::env::var("CHATBOT_API_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BACKEND_URL),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_deployed_instance() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = BackendConfig::new("http://localhost:8000/");
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn builders_override_timeouts() {
        let config = BackendConfig::new("http://localhost:8000")
            .with_connect_timeout(Duration::from_secs(2))
            .with_request_timeout(Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
