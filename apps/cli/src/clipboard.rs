use std::io::Write;

use base64::{Engine, engine::general_purpose::STANDARD};

/// OSC 52 "set clipboard" escape sequence for `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

/// Ask the terminal to put `text` on the system clipboard.
///
/// Works in terminals that honour OSC 52; others ignore the sequence.
pub fn copy_to_clipboard(text: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(osc52_sequence(text).as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_payload_as_base64() {
        assert_eq!(osc52_sequence("0:00 - Intro"), "\x1b]52;c;MDowMCAtIEludHJv\x07");
    }

    #[test]
    fn handles_multibyte_text() {
        let seq = osc52_sequence("1:30 – Müsli");
        let payload = seq
            .strip_prefix("\x1b]52;c;")
            .and_then(|s| s.strip_suffix('\x07'))
            .unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), "1:30 – Müsli");
    }
}
