//! Parsing of model-written chapter lines and the description export format.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::{
    timecode::label_to_seconds,
    types::{Chapter, ParsedChapters},
};

/// `start - end description`, with hyphen, en dash or em dash as separator.
static CHAPTER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([\d:]+)\s*[-–—]\s*([\d:]+)\s*(.*)$")
        .expect("chapter line pattern is valid")
});

/// Parse every line shaped like `0:00 - 1:30 Intro`.
///
/// Never fails: lines that do not match, or whose start label is not a valid
/// timestamp, are counted in `skipped` and otherwise ignored. Blank lines are
/// not counted.
pub fn parse_chapter_lines(text: &str) -> ParsedChapters {
    let mut parsed = ParsedChapters::default();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match parse_chapter_line(line) {
            Some(chapter) => parsed.chapters.push(chapter),
            None => {
                debug!(line, "skipping unrecognised chapter line");
                parsed.skipped += 1;
            }
        }
    }

    parsed
}

fn parse_chapter_line(line: &str) -> Option<Chapter> {
    let caps = CHAPTER_LINE.captures(line)?;
    let start_label = &caps[1];
    let start_seconds = label_to_seconds(start_label)?;

    Some(Chapter {
        start_seconds,
        start_label: start_label.to_string(),
        end_label: caps[2].to_string(),
        description: caps[3].trim().to_string(),
    })
}

/// Render chapters as `start - description` lines for a video description.
pub fn format_chapters_export(chapters: &[Chapter]) -> String {
    chapters
        .iter()
        .map(|c| format!("{} - {}", c.start_label, c.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_matching_lines_in_order() {
        let parsed = parse_chapter_lines("0:00 - 1:30 Intro\n1:30 - 4:15 Main topic\ngarbage line");

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed.skipped, 1);
        assert_eq!(parsed.chapters[0].start_seconds, 0);
        assert_eq!(parsed.chapters[0].description, "Intro");
        assert_eq!(parsed.chapters[1].start_seconds, 90);
        assert_eq!(parsed.chapters[1].start_label, "1:30");
        assert_eq!(parsed.chapters[1].end_label, "4:15");
        assert_eq!(parsed.chapters[1].description, "Main topic");
    }

    #[test]
    fn accepts_dash_variants_and_missing_spaces() {
        let parsed = parse_chapter_lines(
            "0:00–2:00 En dash\n2:00 — 1:02:03 Em dash\n1:02:03-1:10:00 Tight",
        );

        assert_eq!(parsed.skipped, 0);
        let starts: Vec<u64> = parsed.chapters.iter().map(|c| c.start_seconds).collect();
        assert_eq!(starts, vec![0, 120, 3723]);
        assert_eq!(parsed.chapters[2].description, "Tight");
        assert_eq!(parsed.chapters[1].end_seconds(), Some(3723));
    }

    #[test]
    fn allows_empty_description() {
        let parsed = parse_chapter_lines("0:00 - 0:45");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.chapters[0].description, "");
    }

    #[test]
    fn skips_invalid_start_labels() {
        // shape matches, but 4 parts is not a timestamp
        let parsed = parse_chapter_lines("1:2:3:4 - 5:00 Broken\n::: - 1:00 Colons");
        assert!(parsed.is_empty());
        assert_eq!(parsed.skipped, 2);
    }

    #[test]
    fn ignores_blank_lines_and_markdown_noise() {
        let text = "\n\n**Chapters**\n\n  0:00 - 1:00 Welcome  \n- 1:00 - 2:00 Bulleted\n\n";
        let parsed = parse_chapter_lines(text);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.chapters[0].description, "Welcome");
        assert_eq!(parsed.skipped, 2);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert_eq!(parse_chapter_lines(""), ParsedChapters::default());
    }

    #[test]
    fn exports_start_label_and_description() {
        let parsed = parse_chapter_lines("0:00 - 1:30 Intro\n1:30 - 4:15 Main topic");
        assert_eq!(
            format_chapters_export(&parsed.chapters),
            "0:00 - Intro\n1:30 - Main topic"
        );
        assert_eq!(format_chapters_export(&[]), "");
    }
}
