//! Per-session state: what the player points at and the last results.

use serde::Serialize;
use uuid::Uuid;

use crate::{
    transcript::full_transcript_text,
    types::{ParsedChapters, TranscriptSegment},
    video_id::VideoId,
};

/// What an embedded player should show.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayerTarget {
    pub video_id: VideoId,
    pub start_seconds: Option<u64>,
    pub autoplay: bool,
}

impl PlayerTarget {
    pub fn embed_url(&self) -> String {
        match self.start_seconds {
            Some(start) => format!(
                "https://www.youtube.com/embed/{}?start={}&autoplay={}",
                self.video_id,
                start,
                u8::from(self.autoplay)
            ),
            None => format!("https://www.youtube.com/embed/{}", self.video_id),
        }
    }

    pub fn watch_url(&self) -> String {
        match self.start_seconds {
            Some(start) => format!("{}&t={}s", self.video_id.watch_url(), start),
            None => self.video_id.watch_url(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    Loaded,
    Seeking,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    video_id: Option<VideoId>,
    active_start_seconds: Option<u64>,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn video_id(&self) -> Option<&VideoId> {
        self.video_id.as_ref()
    }

    pub fn active_start_seconds(&self) -> Option<u64> {
        self.active_start_seconds
    }

    pub fn phase(&self) -> PlaybackPhase {
        match (&self.video_id, self.active_start_seconds) {
            (None, _) => PlaybackPhase::Idle,
            (Some(_), None) => PlaybackPhase::Loaded,
            (Some(_), Some(_)) => PlaybackPhase::Seeking,
        }
    }

    /// New video: play from the start.
    pub fn load(&mut self, video_id: VideoId) {
        self.video_id = Some(video_id);
        self.active_start_seconds = None;
    }

    /// Seek within the loaded video. Does nothing while idle.
    pub fn select(&mut self, start_seconds: u64) -> Option<PlayerTarget> {
        self.video_id.as_ref()?;
        self.active_start_seconds = Some(start_seconds);
        self.target()
    }

    pub fn target(&self) -> Option<PlayerTarget> {
        let video_id = self.video_id.clone()?;
        Some(PlayerTarget {
            video_id,
            start_seconds: self.active_start_seconds,
            autoplay: self.active_start_seconds.is_some(),
        })
    }
}

/// Everything one user session remembers between actions.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    playback: PlaybackState,
    transcript: Option<Vec<TranscriptSegment>>,
    chapter_text: String,
    chapters: ParsedChapters,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            playback: PlaybackState::new(),
            transcript: None,
            chapter_text: String::new(),
            chapters: ParsedChapters::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// Switch to a new video, dropping results that belonged to the old one.
    pub fn load_video(&mut self, video_id: VideoId) {
        self.playback.load(video_id);
        self.transcript = None;
        self.chapter_text.clear();
        self.chapters = ParsedChapters::default();
    }

    /// Jump to the chapter at `index`.
    pub fn select_chapter(&mut self, index: usize) -> Option<PlayerTarget> {
        let start = self.chapters.chapters.get(index)?.start_seconds;
        self.playback.select(start)
    }

    pub fn video_id(&self) -> Option<&VideoId> {
        self.playback.video_id()
    }

    pub fn transcript(&self) -> Option<&[TranscriptSegment]> {
        self.transcript.as_deref()
    }

    pub fn transcript_text(&self) -> Option<String> {
        self.transcript.as_deref().map(full_transcript_text)
    }

    pub fn chapter_text(&self) -> &str {
        &self.chapter_text
    }

    pub fn chapters(&self) -> &ParsedChapters {
        &self.chapters
    }

    pub(crate) fn set_transcript(&mut self, segments: Vec<TranscriptSegment>) {
        self.transcript = Some(segments);
    }

    pub(crate) fn set_chapters(&mut self, raw: String, parsed: ParsedChapters) {
        self.chapter_text = raw;
        self.chapters = parsed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapters::parse_chapter_lines;

    fn vid(s: &str) -> VideoId {
        VideoId::new(s).unwrap()
    }

    #[test]
    fn starts_idle_and_ignores_selection() {
        let mut state = PlaybackState::new();
        assert_eq!(state.phase(), PlaybackPhase::Idle);
        assert_eq!(state.select(30), None);
        assert_eq!(state.phase(), PlaybackPhase::Idle);
        assert_eq!(state.target(), None);
    }

    #[test]
    fn selection_keeps_video_and_sets_offset() {
        let mut state = PlaybackState::new();
        state.load(vid("XYZxyz12345"));
        assert_eq!(state.phase(), PlaybackPhase::Loaded);

        let target = state.select(90).unwrap();
        assert_eq!(state.phase(), PlaybackPhase::Seeking);
        assert_eq!(state.video_id(), Some(&vid("XYZxyz12345")));
        assert_eq!(state.active_start_seconds(), Some(90));
        assert_eq!(target.start_seconds, Some(90));
        assert!(target.autoplay);

        state.select(255).unwrap();
        assert_eq!(state.video_id(), Some(&vid("XYZxyz12345")));
        assert_eq!(state.active_start_seconds(), Some(255));
    }

    #[test]
    fn loading_a_new_video_resets_offset() {
        let mut state = PlaybackState::new();
        state.load(vid("aaaaaaaaaaa"));
        state.select(120);
        state.load(vid("bbbbbbbbbbb"));

        assert_eq!(state.phase(), PlaybackPhase::Loaded);
        assert_eq!(state.active_start_seconds(), None);
        assert_eq!(state.video_id(), Some(&vid("bbbbbbbbbbb")));
    }

    #[test]
    fn player_urls() {
        let mut state = PlaybackState::new();
        state.load(vid("dQw4w9WgXcQ"));
        let start = state.target().unwrap();
        assert!(!start.autoplay);
        assert_eq!(start.embed_url(), "https://www.youtube.com/embed/dQw4w9WgXcQ");
        assert_eq!(start.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");

        let seek = state.select(75).unwrap();
        assert_eq!(
            seek.embed_url(),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?start=75&autoplay=1"
        );
        assert_eq!(
            seek.watch_url(),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=75s"
        );
    }

    #[test]
    fn session_load_clears_previous_results() {
        let mut session = Session::new();
        session.load_video(vid("aaaaaaaaaaa"));
        session.set_transcript(vec![TranscriptSegment {
            start: 0,
            text: "hello".into(),
        }]);
        let raw = "0:00 - 1:00 Intro\n1:00 - 2:00 Body".to_string();
        let parsed = parse_chapter_lines(&raw);
        session.set_chapters(raw, parsed);

        let target = session.select_chapter(1).unwrap();
        assert_eq!(target.start_seconds, Some(60));
        assert_eq!(session.select_chapter(5), None);

        session.load_video(vid("bbbbbbbbbbb"));
        assert_eq!(session.playback.active_start_seconds(), None);
        assert!(session.transcript().is_none());
        assert!(session.chapters().is_empty());
        assert_eq!(session.chapter_text(), "");
    }
}
