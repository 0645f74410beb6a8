//! Media lookup handlers: `info`, `thumbnail`, `subtitles`.

use std::io::Write;

use vdl_api::{SubtitleQuery, VideoApi};

use crate::error::CliResult;
use crate::presentation::write_json;

/// Print metadata for a video URL.
pub async fn info(api: &dyn VideoApi, out: &mut dyn Write, url: &str) -> CliResult<()> {
    let info = api.get_video_info(url).await?;
    write_json(out, &info)?;
    Ok(())
}

/// Print the thumbnail reference of a task.
pub async fn thumbnail(api: &dyn VideoApi, out: &mut dyn Write, task_id: &str) -> CliResult<()> {
    let thumbnail = api.get_thumbnail(task_id).await?;
    write_json(out, &thumbnail)?;
    Ok(())
}

/// Print subtitles for a video URL.
pub async fn subtitles(
    api: &dyn VideoApi,
    out: &mut dyn Write,
    url: &str,
    lang: &str,
) -> CliResult<()> {
    let query = SubtitleQuery::new(url).with_lang(lang);
    let subtitles = api.get_subtitles(&query).await?;
    write_json(out, &subtitles)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::RecordingApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_info_prints_payload() {
        let api = RecordingApi::returning(json!({"title": "Clip"}));
        let mut out = Vec::new();

        info(&api, &mut out, "https://v.example/1").await.unwrap();

        let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed, json!({"title": "Clip"}));
        assert_eq!(api.calls(), vec!["info https://v.example/1"]);
    }

    #[tokio::test]
    async fn test_subtitles_passes_language() {
        let api = RecordingApi::returning(json!({"subtitles": []}));
        let mut out = Vec::new();

        subtitles(&api, &mut out, "https://v.example/1", "ko").await.unwrap();
        assert_eq!(api.calls(), vec!["subtitles https://v.example/1 ko"]);
    }
}
