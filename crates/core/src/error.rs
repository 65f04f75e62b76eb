use thiserror::Error;

use crate::video_id::VideoId;

#[derive(Error, Debug)]
pub enum ChaptersError {
    #[error("Missing API key for {provider_name}: enter it or set {env_var}")]
    MissingApiKey {
        provider_name: String,
        env_var: String,
    },

    #[error("Please enter a YouTube URL.")]
    EmptyUrl,

    #[error("Could not extract a YouTube video ID from {url}. Check the URL.")]
    InvalidVideoUrl { url: String },

    #[error("No video loaded: submit a URL first")]
    NoVideoLoaded,

    #[error("Transcript not fetched yet for {video_id}")]
    TranscriptMissing { video_id: VideoId },

    #[error("Could not retrieve transcript for {video_id}. Details: {reason}")]
    TranscriptFailed { video_id: VideoId, reason: String },

    #[error("Error generating chapters: {reason}")]
    GenerationFailed { reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),
}

impl ChaptersError {
    /// Errors raised before any external call was made.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ChaptersError::MissingApiKey { .. }
                | ChaptersError::EmptyUrl
                | ChaptersError::InvalidVideoUrl { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ChaptersError>;
