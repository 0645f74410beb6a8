//! HTTP backend abstraction for the video-download API.
//!
//! The client never talks to reqwest directly; it hands an [`ApiRequest`] to
//! an [`HttpBackend`]. Production code uses [`ReqwestBackend`], tests swap in
//! a recording fake.

use crate::config::ApiClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::ApiRequest;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Transport that executes one [`ApiRequest`] and returns the response body.
///
/// Implementations must not retry: every request is sent exactly once and
/// failures are returned as-is.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Send the request and decode a JSON response body.
    async fn send_json(&self, request: ApiRequest) -> ApiResult<Value>;

    /// Send the request and return the response body undecoded.
    async fn send_bytes(&self, request: ApiRequest) -> ApiResult<Bytes>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using a pooled `reqwest::Client`.
pub struct ReqwestBackend {
    client: reqwest::Client,
    content_type: String,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &ApiClientConfig) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            content_type: config.content_type.clone(),
        })
    }

    fn build_request(&self, request: &ApiRequest) -> ApiResult<reqwest::RequestBuilder> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.as_str());
        if let Some(ref body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, self.content_type.as_str())
                .body(serde_json::to_vec(body)?);
        }
        Ok(builder)
    }

    /// Send a request once and fail on any non-2xx status.
    async fn execute(&self, request: &ApiRequest) -> ApiResult<reqwest::Response> {
        tracing::debug!(method = %request.method, url = %request.url, "Sending backend request");

        let response = self.build_request(request)?.send().await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), url = %request.url, "Backend responded");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            status = status.as_u16(),
            method = %request.method,
            url = %request.url,
            "Backend request failed"
        );
        Err(ApiError::Status {
            status: status.as_u16(),
            url: request.url.to_string(),
            body,
        })
    }
}

/// Decode a JSON response body; an empty body decodes to `null`.
fn decode_json(body: &[u8]) -> ApiResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(body)?)
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn send_json(&self, request: ApiRequest) -> ApiResult<Value> {
        let response = self.execute(&request).await?;
        let body = response.bytes().await?;
        decode_json(&body)
    }

    async fn send_bytes(&self, request: ApiRequest) -> ApiResult<Bytes> {
        let response = self.execute(&request).await?;
        Ok(response.bytes().await?)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
