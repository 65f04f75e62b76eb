use crate::{timecode::seconds_to_label, types::TranscriptSegment};

/// Format transcript segments as `[M:SS] text` lines.
pub fn format_transcript_with_timestamps(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|seg| format!("[{}] {}", seconds_to_label(seg.start), seg.text.replace('\n', " ")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_newlines_inside_segments() {
        let segments = vec![
            TranscriptSegment {
                start: 61,
                text: "two\nlines".into(),
            },
            TranscriptSegment {
                start: 3600,
                text: "an hour in".into(),
            },
        ];
        assert_eq!(
            format_transcript_with_timestamps(&segments),
            "[1:01] two lines\n[1:00:00] an hour in"
        );
    }
}
