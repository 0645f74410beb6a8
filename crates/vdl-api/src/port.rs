//! The `VideoApi` port and its implementation for [`ApiClient`].
//!
//! Consumers that only need the operations (the CLI, or anything that wants
//! to substitute a mock) depend on this trait instead of the concrete client.

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::{SubtitleQuery, TaskListQuery};

/// Operations exposed by the video-download backend.
///
/// Each method issues exactly one HTTP request and returns the decoded body.
#[async_trait]
pub trait VideoApi: Send + Sync {
    /// `GET /api/info?url=...`
    async fn get_video_info(&self, media_url: &str) -> ApiResult<Value>;

    /// `POST /api/download` with `request` as the JSON body.
    async fn create_download(&self, request: &Value) -> ApiResult<Value>;

    /// `GET /api/status/{task_id}`
    async fn get_task_status(&self, task_id: &str) -> ApiResult<Value>;

    /// `GET /api/download/{task_id}`, body returned undecoded.
    async fn download_file(&self, task_id: &str) -> ApiResult<Bytes>;

    /// `POST /api/cancel/{task_id}`
    async fn cancel_task(&self, task_id: &str) -> ApiResult<Value>;

    /// `DELETE /api/task/{task_id}`
    async fn delete_task(&self, task_id: &str) -> ApiResult<Value>;

    /// `GET /api/tasks?status=...&limit=...`
    async fn list_tasks(&self, query: &TaskListQuery) -> ApiResult<Value>;

    /// `GET /api/thumbnail/{task_id}`
    async fn get_thumbnail(&self, task_id: &str) -> ApiResult<Value>;

    /// `GET /api/subtitles?url=...&lang=...`
    async fn get_subtitles(&self, query: &SubtitleQuery) -> ApiResult<Value>;

    /// `GET /api/queue/stats`
    async fn get_queue_stats(&self) -> ApiResult<Value>;
}

#[async_trait]
impl<B: HttpBackend> VideoApi for ApiClient<B> {
    async fn get_video_info(&self, media_url: &str) -> ApiResult<Value> {
        Self::get_video_info(self, media_url).await
    }

    async fn create_download(&self, request: &Value) -> ApiResult<Value> {
        Self::create_download(self, request).await
    }

    async fn get_task_status(&self, task_id: &str) -> ApiResult<Value> {
        Self::get_task_status(self, task_id).await
    }

    async fn download_file(&self, task_id: &str) -> ApiResult<Bytes> {
        Self::download_file(self, task_id).await
    }

    async fn cancel_task(&self, task_id: &str) -> ApiResult<Value> {
        Self::cancel_task(self, task_id).await
    }

    async fn delete_task(&self, task_id: &str) -> ApiResult<Value> {
        Self::delete_task(self, task_id).await
    }

    async fn list_tasks(&self, query: &TaskListQuery) -> ApiResult<Value> {
        Self::list_tasks(self, query).await
    }

    async fn get_thumbnail(&self, task_id: &str) -> ApiResult<Value> {
        Self::get_thumbnail(self, task_id).await
    }

    async fn get_subtitles(&self, query: &SubtitleQuery) -> ApiResult<Value> {
        Self::get_subtitles(self, query).await
    }

    async fn get_queue_stats(&self) -> ApiResult<Value> {
        Self::get_queue_stats(self).await
    }
}
