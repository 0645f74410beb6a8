#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod port;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{ApiClient, DefaultApiClient};
pub use port::VideoApi;

// Transport
pub use http::{HttpBackend, ReqwestBackend};

// Configuration
pub use config::{ApiClientConfig, DEFAULT_BASE_URL, DEFAULT_CONTENT_TYPE, DEFAULT_TIMEOUT};

// Errors
pub use error::{ApiError, ApiResult};

// Request types
pub use models::{
    ApiRequest, DEFAULT_SUBTITLE_LANG, DEFAULT_TASK_LIMIT, DownloadRequest, SubtitleQuery,
    TaskListQuery,
};

// Re-exported so callers can name response and transport types without
// adding their own dependencies.
pub use bytes::Bytes;
pub use reqwest::Method;
pub use serde_json::Value;

// Silence unused dev-dependency warnings
#[cfg(test)]
use axum as _;
