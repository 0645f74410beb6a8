//! Download task lifecycle and queue statistics.

use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiResult;
use crate::http::HttpBackend;
use crate::models::{ApiRequest, TaskListQuery};
use crate::url::{
    build_cancel_url, build_create_download_url, build_file_url, build_queue_stats_url,
    build_status_url, build_task_url, build_tasks_url,
};

use super::ApiClient;

impl<B: HttpBackend> ApiClient<B> {
    /// Create a download task (`POST /api/download`).
    ///
    /// `request` is serialized and forwarded as-is; see
    /// [`DownloadRequest`](crate::DownloadRequest) for a convenient shape.
    pub async fn create_download<T>(&self, request: &T) -> ApiResult<Value>
    where
        T: Serialize + Sync + ?Sized,
    {
        let body = serde_json::to_value(request)?;
        let url = build_create_download_url(&self.base_url);
        self.backend.send_json(ApiRequest::post(url, Some(body))).await
    }

    /// Poll the state of a task (`GET /api/status/{id}`).
    pub async fn get_task_status(&self, task_id: &str) -> ApiResult<Value> {
        let url = build_status_url(&self.base_url, task_id);
        self.backend.send_json(ApiRequest::get(url)).await
    }

    /// Download the finished file of a task (`GET /api/download/{id}`).
    ///
    /// The body is returned exactly as received.
    pub async fn download_file(&self, task_id: &str) -> ApiResult<Bytes> {
        let url = build_file_url(&self.base_url, task_id);
        self.backend.send_bytes(ApiRequest::get(url)).await
    }

    /// Cancel a task (`POST /api/cancel/{id}`, no body).
    pub async fn cancel_task(&self, task_id: &str) -> ApiResult<Value> {
        let url = build_cancel_url(&self.base_url, task_id);
        self.backend.send_json(ApiRequest::post(url, None)).await
    }

    /// Delete a task (`DELETE /api/task/{id}`).
    pub async fn delete_task(&self, task_id: &str) -> ApiResult<Value> {
        let url = build_task_url(&self.base_url, task_id);
        self.backend.send_json(ApiRequest::delete(url)).await
    }

    /// List tasks (`GET /api/tasks`).
    pub async fn list_tasks(&self, query: &TaskListQuery) -> ApiResult<Value> {
        let url = build_tasks_url(&self.base_url, query);
        self.backend.send_json(ApiRequest::get(url)).await
    }

    /// Fetch queue and worker statistics (`GET /api/queue/stats`).
    pub async fn get_queue_stats(&self) -> ApiResult<Value> {
        let url = build_queue_stats_url(&self.base_url);
        self.backend.send_json(ApiRequest::get(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::fake_client;
    use crate::error::ApiError;
    use crate::http::testing::CannedResponse;
    use crate::models::{DownloadRequest, TaskListQuery};
    use bytes::Bytes;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_download_forwards_body_verbatim() {
        let (client, backend) = fake_client();
        let backend = backend.with_response(
            Method::POST,
            "/api/download",
            CannedResponse::Json(json!({"task_id": "abc123", "status": "pending"})),
        );

        let body = json!({"url": "http://x", "format": "mp4"});
        let created = client.create_download(&body).await.unwrap();
        assert_eq!(created, json!({"task_id": "abc123", "status": "pending"}));

        let request = backend.single_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.as_str(), "http://localhost:8000/api/download");
        assert_eq!(request.body, Some(body));
    }

    #[tokio::test]
    async fn test_create_download_from_typed_request() {
        let (client, backend) = fake_client();
        let backend = backend.with_response(
            Method::POST,
            "/api/download",
            CannedResponse::Json(json!({"task_id": "t1"})),
        );

        let request = DownloadRequest::new("http://x")
            .with_format("mp3")
            .with_field("audio_only", true);
        client.create_download(&request).await.unwrap();

        assert_eq!(
            backend.single_request().body,
            Some(json!({"url": "http://x", "format": "mp3", "audio_only": true}))
        );
    }

    #[tokio::test]
    async fn test_get_task_status() {
        let (client, backend) = fake_client();
        let payload = json!({"task_id": "abc123", "status": "downloading", "progress": 41.5});
        let backend = backend.with_response(
            Method::GET,
            "/api/status/abc123",
            CannedResponse::Json(payload.clone()),
        );

        let status = client.get_task_status("abc123").await.unwrap();
        assert_eq!(status, payload);

        let request = backend.single_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.url.as_str(),
            "http://localhost:8000/api/status/abc123"
        );
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_download_file_returns_raw_bytes() {
        let (client, backend) = fake_client();
        let data = Bytes::from_static(b"\x00\x00\x00\x18ftypmp42");
        let backend = backend.with_response(
            Method::GET,
            "/api/download/abc123",
            CannedResponse::Bytes(data.clone()),
        );

        let file = client.download_file("abc123").await.unwrap();
        assert_eq!(file, data);
        assert_eq!(backend.single_request().method, Method::GET);
    }

    #[tokio::test]
    async fn test_download_file_does_not_parse_json() {
        let (client, backend) = fake_client();
        let _backend = backend.with_response(
            Method::GET,
            "/api/download/abc123",
            CannedResponse::Bytes(Bytes::from_static(br#"{"not": "decoded"}"#)),
        );

        let file = client.download_file("abc123").await.unwrap();
        assert_eq!(file.as_ref(), br#"{"not": "decoded"}"#);
    }

    #[tokio::test]
    async fn test_cancel_task_posts_without_body() {
        let (client, backend) = fake_client();
        let backend = backend.with_response(
            Method::POST,
            "/api/cancel/abc123",
            CannedResponse::Json(json!({"message": "cancelled"})),
        );

        client.cancel_task("abc123").await.unwrap();

        let request = backend.single_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.path(), "/api/cancel/abc123");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_delete_task() {
        let (client, backend) = fake_client();
        let backend = backend.with_response(
            Method::DELETE,
            "/api/task/abc123",
            CannedResponse::Json(json!({"message": "deleted"})),
        );

        let result = client.delete_task("abc123").await.unwrap();
        assert_eq!(result["message"], "deleted");

        let request = backend.single_request();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.url.path(), "/api/task/abc123");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_list_tasks_defaults() {
        let (client, backend) = fake_client();
        let backend = backend.with_response(
            Method::GET,
            "/api/tasks",
            CannedResponse::Json(json!({"tasks": [], "total": 0})),
        );

        client.list_tasks(&TaskListQuery::default()).await.unwrap();

        let request = backend.single_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url.query(), Some("limit=50"));
    }

    #[tokio::test]
    async fn test_list_tasks_with_status_filter() {
        let (client, backend) = fake_client();
        let backend = backend.with_response(
            Method::GET,
            "/api/tasks",
            CannedResponse::Json(json!({"tasks": []})),
        );

        let query = TaskListQuery::new().with_status("failed").with_limit(5);
        client.list_tasks(&query).await.unwrap();

        assert_eq!(
            backend.single_request().url.query(),
            Some("status=failed&limit=5")
        );
    }

    #[tokio::test]
    async fn test_get_queue_stats() {
        let (client, backend) = fake_client();
        let stats = json!({"queued": 3, "active": 1, "workers": 2});
        let backend = backend.with_response(
            Method::GET,
            "/api/queue/stats",
            CannedResponse::Json(stats.clone()),
        );

        assert_eq!(client.get_queue_stats().await.unwrap(), stats);
        assert_eq!(
            backend.single_request().url.as_str(),
            "http://localhost:8000/api/queue/stats"
        );
    }

    #[tokio::test]
    async fn test_missing_task_surfaces_status() {
        let (client, _backend) = fake_client();

        let err = client.get_task_status("missing").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert!(matches!(err, ApiError::Status { .. }));
    }
}
