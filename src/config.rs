//! Application configuration

use std::time::Duration;

/// Fixed extraction API endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "https://danilomodz-youtube-data-extractor-api.onrender.com/";

/// Client-side timeout for one extraction request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Application settings
///
/// There is no file or environment configuration surface; the defaults are
/// the production values. Tests and the headless mode construct their own
/// instances to point at a different endpoint.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the extraction API
    pub endpoint: String,

    /// Hard client-side timeout per request
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

impl AppConfig {
    /// Config pointed at a non-default endpoint, keeping the default timeout.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}
