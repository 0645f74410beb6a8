//! `vdl fetch`: save the file produced by a finished task.

use std::io::Write;
use std::path::Path;

use vdl_api::VideoApi;

use crate::error::{CliError, CliResult};
use crate::presentation::format_bytes;

/// Download the task's file to `output`, or stream it to `out` when no path
/// is given.
pub async fn execute(
    api: &dyn VideoApi,
    out: &mut dyn Write,
    task_id: &str,
    output: Option<&Path>,
) -> CliResult<()> {
    let data = api.download_file(task_id).await?;

    let Some(path) = output else {
        out.write_all(&data)?;
        out.flush()?;
        return Ok(());
    };

    tokio::fs::write(path, &data)
        .await
        .map_err(|e| CliError::Io(format!("cannot write {}: {e}", path.display())))?;
    tracing::info!(task_id, path = %path.display(), bytes = data.len(), "Saved task file");
    writeln!(
        out,
        "Saved {} to {}",
        format_bytes(data.len()),
        path.display()
    )?;
    Ok(())
}
