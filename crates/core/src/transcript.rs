//! Transcript fetching through `yt-dlp` caption downloads.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::{fs, process::Command};
use tracing::{debug, info};

use crate::{
    error::{ChaptersError, Result},
    types::TranscriptSegment,
    video_id::VideoId,
};

#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    async fn fetch_transcript(&self, video_id: &VideoId) -> Result<Vec<TranscriptSegment>>;
}

/// Downloads manual or auto-generated captions in yt-dlp's `json3` format.
#[derive(Clone, Debug)]
pub struct YtDlpTranscripts {
    program: PathBuf,
    sub_langs: String,
}

impl Default for YtDlpTranscripts {
    fn default() -> Self {
        Self::new("en.*")
    }
}

impl YtDlpTranscripts {
    /// `sub_langs` is passed to `--sub-langs` as is, e.g. `"en.*,de"`.
    pub fn new(sub_langs: impl Into<String>) -> Self {
        Self {
            program: PathBuf::from("yt-dlp"),
            sub_langs: sub_langs.into(),
        }
    }

    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    async fn download_captions(&self, video_id: &VideoId, dir: &Path) -> Result<String> {
        let failed = |reason: String| ChaptersError::TranscriptFailed {
            video_id: video_id.clone(),
            reason,
        };

        let output_template = dir.join("%(id)s.%(ext)s");
        let output = Command::new(&self.program)
            .arg("--skip-download")
            .arg("--write-subs")
            .arg("--write-auto-subs")
            .arg("--sub-langs")
            .arg(&self.sub_langs)
            .arg("--sub-format")
            .arg("json3")
            .arg("--no-warnings")
            .arg("-o")
            .arg(&output_template)
            .arg(video_id.watch_url())
            .output()
            .await
            .map_err(|e| failed(format!("failed to run {}: {e}", self.program.display())))?;

        if !output.status.success() {
            return Err(failed(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let caption_file = find_caption_file(dir).await?.ok_or_else(|| {
            failed(format!(
                "no captions available for languages {}",
                self.sub_langs
            ))
        })?;
        debug!(path = %caption_file.display(), "reading caption file");

        Ok(fs::read_to_string(&caption_file).await?)
    }
}

#[async_trait]
impl TranscriptProvider for YtDlpTranscripts {
    async fn fetch_transcript(&self, video_id: &VideoId) -> Result<Vec<TranscriptSegment>> {
        info!(%video_id, "fetching transcript");
        let workdir = tempfile::tempdir()?;
        let raw = self.download_captions(video_id, workdir.path()).await?;

        parse_json3(&raw).map_err(|e| ChaptersError::TranscriptFailed {
            video_id: video_id.clone(),
            reason: format!("unreadable caption data: {e}"),
        })
    }
}

async fn find_caption_file(dir: &Path) -> Result<Option<PathBuf>> {
    let mut entries = fs::read_dir(dir).await?;
    let mut found = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json3") {
            found.push(path);
        }
    }
    // manual tracks before yt-dlp's `-orig` speech recognition track, then by name
    found.sort_by_cached_key(|path| (is_asr_original(path), path.clone()));
    Ok(found.into_iter().next())
}

/// `ID.en-orig.json3` is the untranslated auto-generated track.
fn is_asr_original(path: &Path) -> bool {
    path.file_stem()
        .map(Path::new)
        .and_then(Path::extension)
        .and_then(|lang| lang.to_str())
        .is_some_and(|lang| lang.ends_with("-orig"))
}

#[derive(Deserialize)]
struct Json3Captions {
    #[serde(default)]
    events: Vec<Json3Event>,
}

#[derive(Deserialize)]
struct Json3Event {
    #[serde(rename = "tStartMs", default)]
    t_start_ms: u64,
    #[serde(default)]
    segs: Option<Vec<Json3Seg>>,
}

#[derive(Deserialize)]
struct Json3Seg {
    #[serde(default)]
    utf8: String,
}

/// Decode yt-dlp `json3` captions into segments.
///
/// Window-setup events (no `segs`) and line-break-only events are dropped.
pub fn parse_json3(raw: &str) -> serde_json::Result<Vec<TranscriptSegment>> {
    let captions: Json3Captions = serde_json::from_str(raw)?;

    Ok(captions
        .events
        .into_iter()
        .filter_map(|event| {
            let text = event
                .segs?
                .iter()
                .map(|s| s.utf8.as_str())
                .collect::<String>()
                .replace('\n', " ");
            let text = text.trim();
            (!text.is_empty()).then(|| TranscriptSegment {
                start: event.t_start_ms / 1000,
                text: text.to_string(),
            })
        })
        .collect())
}

/// The whole transcript as one paragraph.
pub fn full_transcript_text(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
