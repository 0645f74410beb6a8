//! Main CLI parser and top-level argument handling.

use clap::{Args, Parser};
use vdl_api::DEFAULT_BASE_URL;

use crate::commands::Commands;

/// Command-line client for the video-download backend.
#[derive(Parser)]
#[command(name = "vdl")]
#[command(about = "Queue, monitor and fetch downloads from a video-download backend")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Base URL of the backend API
    #[arg(
        long = "base-url",
        env = "VDL_API_BASE_URL",
        default_value = DEFAULT_BASE_URL,
        global = true
    )]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS", default_value_t = 30, global = true)]
    pub timeout: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}
