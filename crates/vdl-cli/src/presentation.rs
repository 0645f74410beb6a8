//! Shared CLI presentation utilities.
//!
//! Format-only helpers: nothing in here interprets backend payloads beyond
//! picking out display fields when they happen to be present.

use std::io::{self, Write};

use vdl_api::Value;

/// Truncate a string to `max_len` characters, adding an ellipsis if cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Write a horizontal separator line.
pub fn write_separator(out: &mut dyn Write, width: usize) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(width))
}

/// Pretty-print a JSON payload followed by a newline.
pub fn write_json(out: &mut dyn Write, value: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// Human-readable byte count, e.g. `1.5 MiB`.
#[allow(clippy::cast_precision_loss)] // display only
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut size = bytes as f64 / 1024.0;
    let mut unit = UNITS[0];
    for next in &UNITS[1..] {
        if size < 1024.0 {
            break;
        }
        size /= 1024.0;
        unit = next;
    }
    format!("{size:.1} {unit}")
}

/// Extract the task array from a listing payload.
///
/// Accepts either a bare array or an object with a `tasks` array. Returns
/// `None` for any other shape so the caller can fall back to raw JSON.
pub fn task_rows(payload: &Value) -> Option<&[Value]> {
    match payload {
        Value::Array(items) => Some(items),
        Value::Object(map) => map.get("tasks").and_then(Value::as_array).map(Vec::as_slice),
        _ => None,
    }
}

fn text_field<'a>(task: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| task.get(*key).and_then(Value::as_str))
}

fn progress_field(task: &Value) -> String {
    match task.get("progress") {
        Some(Value::Number(n)) => n
            .as_f64()
            .map_or_else(|| n.to_string(), |p| format!("{p:.1}%")),
        Some(Value::String(s)) => s.clone(),
        _ => "--".to_string(),
    }
}

/// Write a task listing as a table.
pub fn write_task_table(out: &mut dyn Write, tasks: &[Value]) -> io::Result<()> {
    writeln!(
        out,
        "{:<36} {:<12} {:>8}  Title",
        "Task ID", "Status", "Progress"
    )?;
    write_separator(out, 100)?;

    for task in tasks {
        let id = text_field(task, &["task_id", "id"]).unwrap_or("--");
        let status = text_field(task, &["status", "state"]).unwrap_or("--");
        let title = text_field(task, &["title", "filename", "url"]).unwrap_or("--");
        writeln!(
            out,
            "{:<36} {:<12} {:>8}  {}",
            truncate_string(id, 36),
            truncate_string(status, 12),
            progress_field(task),
            truncate_string(title, 40)
        )?;
    }
    Ok(())
}
