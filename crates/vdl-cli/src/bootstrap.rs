//! Composition root: turns parsed arguments into a ready API client.
//!
//! This is the only place that knows about the reqwest-backed client; every
//! handler receives a `&dyn VideoApi`.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use vdl_api::{ApiClientConfig, DefaultApiClient, VideoApi};

use crate::error::{CliError, CliResult};
use crate::parser::GlobalArgs;

/// Resolved configuration for one CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl CliConfig {
    /// Build the configuration from global arguments.
    ///
    /// The base URL has already been resolved by clap from the flag,
    /// `VDL_API_BASE_URL` (including `.env`), or the default.
    pub fn from_args(args: &GlobalArgs) -> CliResult<Self> {
        if args.timeout == 0 {
            return Err(CliError::Arguments(
                "--timeout must be at least 1 second".to_string(),
            ));
        }
        Ok(Self {
            base_url: args.base_url.clone(),
            timeout: Duration::from_secs(args.timeout),
        })
    }

    fn client_config(&self) -> ApiClientConfig {
        ApiClientConfig::new()
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout)
            .with_user_agent(concat!("vdl/", env!("CARGO_PKG_VERSION")))
    }
}

/// Everything a handler needs.
pub struct CliContext {
    pub api: Arc<dyn VideoApi>,
}

/// Construct the API client for this invocation.
pub fn bootstrap(config: &CliConfig) -> CliResult<CliContext> {
    let client = DefaultApiClient::new(&config.client_config()).map_err(|e| {
        CliError::Config(format!("cannot use base URL '{}': {e}", config.base_url))
    })?;
    tracing::debug!(base_url = %client.base_url(), timeout = ?config.timeout, "API client ready");
    Ok(CliContext {
        api: Arc::new(client),
    })
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `debug` and the
/// default is `warn`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
