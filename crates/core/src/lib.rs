//! ytchapters core library
//!
//! Turns a YouTube URL into a transcript, asks a language model for chapter
//! markers and keeps the per-session playback state that chapter selection
//! drives.

pub mod chapters;
pub mod error;
pub mod export;
pub mod format;
pub mod generate;
pub mod pipeline;
pub mod provider;
pub mod session;
pub mod timecode;
pub mod transcript;
pub mod types;
pub mod video_id;

pub use chapters::{format_chapters_export, parse_chapter_lines};
pub use error::{ChaptersError, Result};
pub use export::{export_file_name, write_export};
pub use format::format_transcript_with_timestamps;
pub use generate::{ChapterGenerator, ChatCompletionsGenerator, build_chapter_prompt};
pub use pipeline::ChapterPipeline;
pub use provider::{Provider, ProviderConfig};
pub use session::{PlaybackPhase, PlaybackState, PlayerTarget, Session};
pub use timecode::{label_to_seconds, normalize_label, seconds_to_label};
pub use transcript::{TranscriptProvider, YtDlpTranscripts, full_transcript_text, parse_json3};
pub use types::{Chapter, ParsedChapters, TranscriptSegment};
pub use video_id::{VideoId, extract_video_id};
