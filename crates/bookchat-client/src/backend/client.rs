//! HTTP backend client struct and endpoint routing.

use super::config::BackendConfig;

/// Reqwest-based implementation of the `Backend` trait.
pub struct HttpBackend {
    pub(crate) config: BackendConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { config, http }
    }

    pub(crate) fn chat_url(&self) -> String {
        format!("{}/chat", self.config.base_url)
    }

    pub(crate) fn history_url(&self) -> String {
        format!("{}/history", self.config.base_url)
    }

    pub(crate) fn clear_url(&self) -> String {
        format!("{}/sessions/clear", self.config.base_url)
    }
}
