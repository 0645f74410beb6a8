//! Subcommands, one per backend operation.

use std::path::PathBuf;

use clap::Subcommand;
use vdl_api::{DEFAULT_SUBTITLE_LANG, DEFAULT_TASK_LIMIT};

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show metadata for a video URL
    Info {
        /// Video page URL
        url: String,
    },

    /// Create a download task
    Download {
        /// Video page URL
        #[arg(required_unless_present = "body")]
        url: Option<String>,
        /// Output format requested from the backend (e.g. "mp4", "mp3")
        #[arg(short, long)]
        format: Option<String>,
        /// Raw JSON request body, sent verbatim
        #[arg(long, conflicts_with_all = ["url", "format"])]
        body: Option<String>,
    },

    /// Show the status of a task
    Status {
        /// Task ID
        task_id: String,
    },

    /// Save the downloaded file of a finished task
    Fetch {
        /// Task ID
        task_id: String,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Cancel a running task
    Cancel {
        /// Task ID
        task_id: String,
    },

    /// Delete a task
    Delete {
        /// Task ID
        task_id: String,
    },

    /// List tasks
    List {
        /// Only show tasks with this status
        #[arg(short, long)]
        status: Option<String>,
        /// Maximum number of tasks
        #[arg(short, long, default_value_t = DEFAULT_TASK_LIMIT)]
        limit: u32,
        /// Print the raw JSON response
        #[arg(long)]
        json: bool,
    },

    /// Show the thumbnail of a task
    Thumbnail {
        /// Task ID
        task_id: String,
    },

    /// Fetch subtitles for a video URL
    Subtitles {
        /// Video page URL
        url: String,
        /// Subtitle language code
        #[arg(short, long, default_value = DEFAULT_SUBTITLE_LANG)]
        lang: String,
    },

    /// Show queue and worker statistics
    Stats,
}
