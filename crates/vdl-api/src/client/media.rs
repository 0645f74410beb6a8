//! Media lookups: video metadata, subtitles and task thumbnails.

use serde_json::Value;

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::{ApiRequest, SubtitleQuery};
use crate::url::{build_info_url, build_subtitles_url, build_thumbnail_url};

use super::ApiClient;

impl<B: HttpBackend> ApiClient<B> {
    /// Fetch metadata for a media URL (`GET /api/info`).
    pub async fn get_video_info(&self, media_url: &str) -> ApiResult<Value> {
        let url = build_info_url(&self.base_url, media_url);
        self.backend.send_json(ApiRequest::get(url)).await
    }

    /// Fetch the thumbnail reference for a task (`GET /api/thumbnail/{id}`).
    pub async fn get_thumbnail(&self, task_id: &str) -> ApiResult<Value> {
        let url = build_thumbnail_url(&self.base_url, task_id);
        self.backend.send_json(ApiRequest::get(url)).await
    }

    /// Fetch subtitles for a media URL (`GET /api/subtitles`).
    pub async fn get_subtitles(&self, query: &SubtitleQuery) -> ApiResult<Value> {
        let url = build_subtitles_url(&self.base_url, query);
        self.backend.send_json(ApiRequest::get(url)).await
    }
}
