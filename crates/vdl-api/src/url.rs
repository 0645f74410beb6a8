//! URL construction helpers for the backend API.
//!
//! Pure functions, one per endpoint. Each keeps whatever path prefix the base
//! URL carries, so a backend mounted under `/downloader/` works unchanged.

use crate::models::{SubtitleQuery, TaskListQuery};
use url::Url;

/// Join an absolute endpoint path onto the base URL.
fn endpoint(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}{path}"));
    url.set_query(None);
    url.set_fragment(None);
    url
}

/// Join `{prefix}/{task_id}` with the task id encoded as one path segment.
fn task_endpoint(base: &Url, prefix: &str, task_id: &str) -> Url {
    endpoint(base, &format!("{prefix}/{}", urlencoding::encode(task_id)))
}

/// `GET /api/info?url=...`
pub fn build_info_url(base: &Url, media_url: &str) -> Url {
    let mut url = endpoint(base, "/api/info");
    url.query_pairs_mut().append_pair("url", media_url);
    url
}

/// `POST /api/download`
pub fn build_create_download_url(base: &Url) -> Url {
    endpoint(base, "/api/download")
}

/// `GET /api/status/{task_id}`
pub fn build_status_url(base: &Url, task_id: &str) -> Url {
    task_endpoint(base, "/api/status", task_id)
}

/// `GET /api/download/{task_id}`
pub fn build_file_url(base: &Url, task_id: &str) -> Url {
    task_endpoint(base, "/api/download", task_id)
}

/// `POST /api/cancel/{task_id}`
pub fn build_cancel_url(base: &Url, task_id: &str) -> Url {
    task_endpoint(base, "/api/cancel", task_id)
}

/// `DELETE /api/task/{task_id}`
pub fn build_task_url(base: &Url, task_id: &str) -> Url {
    task_endpoint(base, "/api/task", task_id)
}

/// `GET /api/tasks?status=...&limit=...`
///
/// `status` is left out entirely when the query has none.
pub fn build_tasks_url(base: &Url, query: &TaskListQuery) -> Url {
    let mut url = endpoint(base, "/api/tasks");
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(ref status) = query.status {
            pairs.append_pair("status", status);
        }
        pairs.append_pair("limit", &query.limit.to_string());
    }
    url
}

/// `GET /api/thumbnail/{task_id}`
pub fn build_thumbnail_url(base: &Url, task_id: &str) -> Url {
    task_endpoint(base, "/api/thumbnail", task_id)
}

/// `GET /api/subtitles?url=...&lang=...`
pub fn build_subtitles_url(base: &Url, query: &SubtitleQuery) -> Url {
    let mut url = endpoint(base, "/api/subtitles");
    url.query_pairs_mut()
        .append_pair("url", &query.url)
        .append_pair("lang", &query.lang);
    url
}

/// `GET /api/queue/stats`
pub fn build_queue_stats_url(base: &Url) -> Url {
    endpoint(base, "/api/queue/stats")
}
