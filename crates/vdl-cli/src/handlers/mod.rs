//! Command handlers.
//!
//! Handlers are thin wrappers that:
//! 1. Validate CLI-specific input
//! 2. Call exactly one `VideoApi` operation
//! 3. Format the result for the terminal
//!
//! Output goes to the `out` writer so handlers can be exercised in tests.

pub mod fetch;
pub mod media;
pub mod tasks;

use std::io::Write;

use vdl_api::VideoApi;

use crate::commands::Commands;
use crate::error::CliResult;

/// Route a parsed command to its handler.
pub async fn dispatch(api: &dyn VideoApi, command: Commands, out: &mut dyn Write) -> CliResult<()> {
    match command {
        Commands::Info { url } => media::info(api, out, &url).await,
        Commands::Download { url, format, body } => {
            tasks::create(api, out, url, format, body.as_deref()).await
        }
        Commands::Status { task_id } => tasks::status(api, out, &task_id).await,
        Commands::Fetch { task_id, output } => {
            fetch::execute(api, out, &task_id, output.as_deref()).await
        }
        Commands::Cancel { task_id } => tasks::cancel(api, out, &task_id).await,
        Commands::Delete { task_id } => tasks::delete(api, out, &task_id).await,
        Commands::List {
            status,
            limit,
            json,
        } => tasks::list(api, out, status, limit, json).await,
        Commands::Thumbnail { task_id } => media::thumbnail(api, out, &task_id).await,
        Commands::Subtitles { url, lang } => media::subtitles(api, out, &url, &lang).await,
        Commands::Stats => tasks::stats(api, out).await,
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingApi;
    use super::*;
    use crate::Cli;
    use clap::Parser;
    use serde_json::json;

    async fn run(api: &RecordingApi, args: &[&str]) -> String {
        let mut argv = vec!["vdl"];
        argv.extend_from_slice(args);
        let command = Cli::try_parse_from(argv).unwrap().command.unwrap();
        let mut out = Vec::new();
        dispatch(api, command, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_each_command_calls_one_operation() {
        let cases: &[(&[&str], &str)] = &[
            (&["info", "https://v.example/1"], "info https://v.example/1"),
            (&["status", "abc123"], "status abc123"),
            (&["cancel", "abc123"], "cancel abc123"),
            (&["delete", "abc123"], "delete abc123"),
            (&["list"], "list None 50"),
            (
                &["list", "--status", "failed", "--limit", "5"],
                r#"list Some("failed") 5"#,
            ),
            (&["thumbnail", "abc123"], "thumbnail abc123"),
            (&["subtitles", "https://v.example/1"], "subtitles https://v.example/1 ja"),
            (
                &["subtitles", "https://v.example/1", "--lang", "en"],
                "subtitles https://v.example/1 en",
            ),
            (&["stats"], "stats"),
        ];

        for (args, expected) in cases {
            let api = RecordingApi::returning(json!({}));
            run(&api, args).await;
            assert_eq!(api.calls(), vec![expected.to_string()], "args: {args:?}");
        }
    }

    #[tokio::test]
    async fn test_json_output_is_pretty_printed() {
        let api = RecordingApi::returning(json!({"task_id": "abc123", "status": "completed"}));
        let out = run(&api, &["status", "abc123"]).await;
        assert_eq!(
            out,
            "{\n  \"status\": \"completed\",\n  \"task_id\": \"abc123\"\n}\n"
        );
    }

    #[tokio::test]
    async fn test_backend_failure_propagates() {
        let api = RecordingApi::failing(404);
        let command = Cli::try_parse_from(["vdl", "status", "missing"])
            .unwrap()
            .command
            .unwrap();
        let mut out = Vec::new();

        let err = dispatch(&api, command, &mut out).await.unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.detail(), Some(r#"{"detail":"rejected"}"#));
        assert!(out.is_empty());
    }
}
