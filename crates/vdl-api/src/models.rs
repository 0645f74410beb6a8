//! Request-side types for the backend API.
//!
//! Response payloads stay as `serde_json::Value`: their shape
//! belongs to the backend and is passed through untouched.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

/// Number of tasks requested by a listing when no limit is given.
pub const DEFAULT_TASK_LIMIT: u32 = 50;

/// Subtitle language requested when no language is given.
pub const DEFAULT_SUBTITLE_LANG: &str = "ja";

// ============================================================================
// Wire request
// ============================================================================

/// A single HTTP request as handed to an [`HttpBackend`](crate::HttpBackend).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    /// JSON body, sent with the configured content type when present
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            body: None,
        }
    }

    pub fn post(url: Url, body: Option<Value>) -> Self {
        Self {
            method: Method::POST,
            url,
            body,
        }
    }

    pub fn delete(url: Url) -> Self {
        Self {
            method: Method::DELETE,
            url,
            body: None,
        }
    }
}

// ============================================================================
// Query parameters
// ============================================================================

/// Filter for the task listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListQuery {
    /// Only list tasks in this state; omitted from the request when `None`
    pub status: Option<String>,
    /// Maximum number of tasks to return (default: 50)
    pub limit: u32,
}

impl Default for TaskListQuery {
    fn default() -> Self {
        Self {
            status: None,
            limit: DEFAULT_TASK_LIMIT,
        }
    }
}

impl TaskListQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Parameters for the subtitle endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleQuery {
    /// Media page URL
    pub url: String,
    /// Subtitle language code (default: `ja`)
    pub lang: String,
}

impl SubtitleQuery {
    /// Query subtitles for `url` in the default language.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            lang: DEFAULT_SUBTITLE_LANG.to_string(),
        }
    }

    #[must_use]
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }
}

// ============================================================================
// Download request
// ============================================================================

/// Convenience builder for a download request body.
///
/// The backend defines the real schema; anything beyond `url` and `format`
/// goes into `extra` and is flattened into the same JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DownloadRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            format: None,
            extra: Map::new(),
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Add an arbitrary backend-specific field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
