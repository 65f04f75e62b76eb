//! The "Generate" action: URL in, chapters out, recorded in the session.

use tracing::{info, warn};

use crate::{
    chapters::parse_chapter_lines,
    error::{ChaptersError, Result},
    generate::{ChapterGenerator, build_chapter_prompt},
    provider::Provider,
    session::Session,
    transcript::TranscriptProvider,
    types::{ParsedChapters, TranscriptSegment},
    video_id::{VideoId, extract_video_id},
};

pub struct ChapterPipeline<T, G> {
    provider: Provider,
    transcripts: T,
    generator: G,
}

impl<T: TranscriptProvider, G: ChapterGenerator> ChapterPipeline<T, G> {
    pub fn new(provider: Provider, transcripts: T, generator: G) -> Self {
        Self {
            provider,
            transcripts,
            generator,
        }
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Check inputs and switch the session to the new video.
    ///
    /// Fails without touching the session or any provider when the API key is
    /// missing, the URL is empty, or no video ID can be found.
    pub fn prepare(
        &self,
        session: &mut Session,
        url: &str,
        api_key: Option<&str>,
    ) -> Result<VideoId> {
        if api_key.is_none_or(|k| k.trim().is_empty()) {
            return Err(self.provider.missing_api_key());
        }

        let url = url.trim();
        if url.is_empty() {
            return Err(ChaptersError::EmptyUrl);
        }

        let video_id = extract_video_id(url).ok_or_else(|| ChaptersError::InvalidVideoUrl {
            url: url.to_string(),
        })?;

        info!(session = %session.id(), %video_id, "loading video");
        session.load_video(video_id.clone());
        Ok(video_id)
    }

    pub async fn fetch_transcript<'s>(
        &self,
        session: &'s mut Session,
    ) -> Result<&'s [TranscriptSegment]> {
        let video_id = session
            .video_id()
            .cloned()
            .ok_or(ChaptersError::NoVideoLoaded)?;

        let segments = self
            .transcripts
            .fetch_transcript(&video_id)
            .await
            .inspect_err(|e| warn!(%video_id, error = %e, "transcript fetch failed"))?;
        info!(%video_id, segments = segments.len(), "transcript fetched");

        session.set_transcript(segments);
        Ok(session.transcript().unwrap_or_default())
    }

    pub async fn generate_chapters<'s>(
        &self,
        session: &'s mut Session,
        api_key: &str,
    ) -> Result<&'s ParsedChapters> {
        let video_id = session
            .video_id()
            .cloned()
            .ok_or(ChaptersError::NoVideoLoaded)?;
        let segments = session
            .transcript()
            .ok_or_else(|| ChaptersError::TranscriptMissing {
                video_id: video_id.clone(),
            })?;

        let prompt = build_chapter_prompt(segments);
        let raw = self
            .generator
            .generate(api_key, &prompt)
            .await
            .inspect_err(|e| warn!(%video_id, error = %e, "chapter generation failed"))?;

        let parsed = parse_chapter_lines(&raw);
        if parsed.skipped > 0 {
            warn!(
                %video_id,
                skipped = parsed.skipped,
                kept = parsed.len(),
                "dropped unrecognised chapter lines"
            );
        }
        info!(%video_id, chapters = parsed.len(), "chapters generated");

        session.set_chapters(raw, parsed);
        Ok(session.chapters())
    }

    /// Prepare, fetch and generate in one go.
    pub async fn run<'s>(
        &self,
        session: &'s mut Session,
        url: &str,
        api_key: Option<&str>,
    ) -> Result<&'s ParsedChapters> {
        self.prepare(session, url, api_key)?;
        self.fetch_transcript(session).await?;
        // prepare guarantees a key
        let api_key = api_key.unwrap_or_default();
        self.generate_chapters(session, api_key).await
    }
}
