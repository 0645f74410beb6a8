//! Task lifecycle handlers: `download`, `status`, `cancel`, `delete`,
//! `list` and `stats`.

use std::io::Write;

use vdl_api::{DownloadRequest, TaskListQuery, Value, VideoApi};

use crate::error::{CliError, CliResult};
use crate::presentation::{task_rows, write_json, write_task_table};

/// Build the request body for `vdl download`.
///
/// A raw `--body` wins and must be a JSON object; otherwise the body is
/// assembled from the URL and optional format.
fn download_body(
    url: Option<String>,
    format: Option<String>,
    raw: Option<&str>,
) -> CliResult<Value> {
    if let Some(raw) = raw {
        let body: Value = serde_json::from_str(raw)
            .map_err(|e| CliError::Arguments(format!("--body is not valid JSON: {e}")))?;
        if !body.is_object() {
            return Err(CliError::Arguments(
                "--body must be a JSON object".to_string(),
            ));
        }
        return Ok(body);
    }

    let url = url.ok_or_else(|| CliError::Arguments("a video URL is required".to_string()))?;
    let mut request = DownloadRequest::new(url);
    if let Some(format) = format {
        request = request.with_format(format);
    }
    serde_json::to_value(&request).map_err(|e| CliError::Arguments(e.to_string()))
}

/// Create a download task and print the backend's answer.
pub async fn create(
    api: &dyn VideoApi,
    out: &mut dyn Write,
    url: Option<String>,
    format: Option<String>,
    raw_body: Option<&str>,
) -> CliResult<()> {
    let body = download_body(url, format, raw_body)?;
    let created = api.create_download(&body).await?;
    write_json(out, &created)?;

    if let Some(task_id) = created.get("task_id").and_then(Value::as_str) {
        writeln!(out, "\nTrack progress with: vdl status {task_id}")?;
    }
    Ok(())
}

/// Print the status of a task.
pub async fn status(api: &dyn VideoApi, out: &mut dyn Write, task_id: &str) -> CliResult<()> {
    let status = api.get_task_status(task_id).await?;
    write_json(out, &status)?;
    Ok(())
}

pub async fn cancel(api: &dyn VideoApi, out: &mut dyn Write, task_id: &str) -> CliResult<()> {
    let result = api.cancel_task(task_id).await?;
    write_json(out, &result)?;
    Ok(())
}

pub async fn delete(api: &dyn VideoApi, out: &mut dyn Write, task_id: &str) -> CliResult<()> {
    let result = api.delete_task(task_id).await?;
    write_json(out, &result)?;
    Ok(())
}

/// List tasks as a table, or as raw JSON with `--json` or when the payload
/// is not a recognisable task list.
pub async fn list(
    api: &dyn VideoApi,
    out: &mut dyn Write,
    status: Option<String>,
    limit: u32,
    json: bool,
) -> CliResult<()> {
    let query = TaskListQuery { status, limit };
    let payload = api.list_tasks(&query).await?;

    match task_rows(&payload) {
        Some(tasks) if !json => {
            if tasks.is_empty() {
                writeln!(out, "No tasks found.")?;
                writeln!(out, "Use 'vdl download <url>' to queue your first download.")?;
                return Ok(());
            }
            writeln!(out, "Found {} task(s):\n", tasks.len())?;
            write_task_table(out, tasks)?;
        }
        _ => write_json(out, &payload)?,
    }
    Ok(())
}

/// Print queue and worker statistics.
pub async fn stats(api: &dyn VideoApi, out: &mut dyn Write) -> CliResult<()> {
    let stats = api.get_queue_stats().await?;
    write_json(out, &stats)?;
    Ok(())
}
