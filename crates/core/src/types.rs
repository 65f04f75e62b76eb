use serde::{Deserialize, Serialize};

use crate::timecode::label_to_seconds;

/// One caption unit, `start` in whole seconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub start: u64,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub start_seconds: u64,
    pub start_label: String,
    pub end_label: String,
    pub description: String,
}

impl Chapter {
    /// End of the chapter as the model wrote it; `None` if the label is unusable.
    pub fn end_seconds(&self) -> Option<u64> {
        label_to_seconds(&self.end_label)
    }
}

/// Result of best-effort parsing: the chapters that matched plus how many
/// non-empty lines were dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedChapters {
    pub chapters: Vec<Chapter>,
    pub skipped: usize,
}

impl ParsedChapters {
    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chapters.len()
    }
}
