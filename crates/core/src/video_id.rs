//! YouTube video ID extraction.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

/// Standard `watch?v=` form first, then `youtu.be/`, then `embed/`.
static VIDEO_ID_PATTERNS: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    [
        r"(?:v=|/)([0-9A-Za-z_-]{11})(?:[?&/]|$)",
        r"youtu\.be/([0-9A-Za-z_-]{11})",
        r"embed/([0-9A-Za-z_-]{11})",
    ]
    .map(|p| Regex::new(p).expect("video id pattern is valid"))
});

/// An 11-character YouTube video identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub const LEN: usize = 11;

    /// Accepts exactly 11 characters from `[0-9A-Za-z_-]`.
    pub fn new(id: &str) -> Option<Self> {
        let valid = id.len() == Self::LEN
            && id
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        valid.then(|| Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video ID from a watch, short or embed URL.
pub fn extract_video_id(url: &str) -> Option<VideoId> {
    if url.is_empty() {
        return None;
    }

    VIDEO_ID_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| VideoId::new(&caps[1]))
}
