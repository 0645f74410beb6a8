//! Public configuration for the backend API client.
//!
//! The configuration is plain data: callers construct it once and hand it
//! to [`DefaultApiClient::new`](crate::DefaultApiClient::new). Nothing in
//! this crate reads the process environment.

use std::time::Duration;

/// Base URL used when none is supplied.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Per-request timeout used when none is supplied.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Content type sent with every request that carries a body.
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Configuration for the backend API client.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use vdl_api::ApiClientConfig;
///
/// let config = ApiClientConfig::new()
///     .with_base_url("http://downloader.lan:8000")
///     .with_timeout(Duration::from_secs(10));
/// assert_eq!(config.base_url(), "http://downloader.lan:8000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Base URL of the backend service
    pub(crate) base_url: String,
    /// Request timeout applied to every call
    pub(crate) timeout: Duration,
    /// Content type for request bodies
    pub(crate) content_type: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            user_agent: concat!("vdl-api/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the backend.
    ///
    /// Defaults to `http://localhost:8000`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the content type sent with request bodies.
    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
