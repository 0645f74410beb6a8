//! Client for the video-download backend.
//!
//! Operations are split by area: [`media`] covers lookups keyed by a media
//! URL or task artwork, [`tasks`] covers the download task lifecycle and the
//! queue. Every operation sends exactly one request through the backend.

mod media;
mod tasks;

use crate::config::ApiClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::http::{HttpBackend, ReqwestBackend};
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default client using the reqwest HTTP backend.
pub type DefaultApiClient = ApiClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the video-download backend REST API.
///
/// The client is immutable once built and cheap to share behind an `Arc`;
/// concurrent calls only share the backend's connection pool.
pub struct ApiClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &ApiClientConfig) -> ApiResult<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, base_url })
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> ApiResult<Self> {
        Self::new(&ApiClientConfig::default())
    }
}

impl<B: HttpBackend> ApiClient<B> {
    /// Create a client over a custom HTTP backend.
    pub const fn with_backend(base_url: Url, backend: B) -> Self {
        Self { backend, base_url }
    }

    /// Base URL every endpoint is resolved against.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/// Parse the configured base URL, rejecting URLs that cannot carry a path.
fn parse_base_url(raw: &str) -> ApiResult<Url> {
    let url = Url::parse(raw.trim())?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidUrl(
            url::ParseError::RelativeUrlWithCannotBeABaseBase,
        ));
    }
    Ok(url)
}
