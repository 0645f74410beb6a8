//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, installs logging, builds the one API
//! client for this invocation and dispatches to a handler.

use clap::{CommandFactory, Parser};

use vdl_cli::{Cli, CliConfig, CliError, Commands, GlobalArgs, bootstrap, handlers, init_logging};

async fn run(global: &GlobalArgs, command: Commands) -> Result<(), CliError> {
    let config = CliConfig::from_args(global)?;
    let ctx = bootstrap(&config)?;

    let mut stdout = std::io::stdout();
    handlers::dispatch(ctx.api.as_ref(), command, &mut stdout).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before parsing so VDL_API_BASE_URL can come from it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Err(err) = run(&cli.global, command).await {
        tracing::debug!(error = ?err, "Command failed");
        eprintln!("Error: {err}");
        if let Some(detail) = err.detail() {
            eprintln!("{detail}");
        }
        std::process::exit(err.exit_code());
    }

    Ok(())
}
