//! Command-line client for the video-download backend.
//!
//! `main.rs` is the composition root; everything else is reachable from here
//! so it can be tested without spawning the binary.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary target only
use anyhow as _;
use dotenvy as _;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, init_logging};
pub use commands::Commands;
pub use error::{CliError, CliResult};
pub use parser::{Cli, GlobalArgs};
