//! Conversion between whole seconds and `M:SS` / `H:MM:SS` labels.

/// Format seconds as `M:SS`, or `H:MM:SS` from one hour up.
pub fn seconds_to_label(seconds: u64) -> String {
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

/// Parse `S`, `M:SS` or `H:MM:SS` into seconds. Padding is optional.
///
/// Returns `None` for any other number of parts, for parts that are not
/// non-negative integers and for values that overflow.
pub fn label_to_seconds(label: &str) -> Option<u64> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    let parts = label
        .split(':')
        .map(|p| p.parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()?;

    match parts.as_slice() {
        [s] => Some(*s),
        [m, s] => m.checked_mul(60)?.checked_add(*s),
        [h, m, s] => h
            .checked_mul(3600)?
            .checked_add(m.checked_mul(60)?)?
            .checked_add(*s),
        _ => None,
    }
}

/// Re-render a label with canonical padding, e.g. `"1:2:3"` -> `"1:02:03"`.
pub fn normalize_label(label: &str) -> Option<String> {
    label_to_seconds(label).map(seconds_to_label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_without_hours() {
        assert_eq!(seconds_to_label(0), "0:00");
        assert_eq!(seconds_to_label(5), "0:05");
        assert_eq!(seconds_to_label(90), "1:30");
        assert_eq!(seconds_to_label(3599), "59:59");
    }

    #[test]
    fn formats_hours_with_padded_minutes() {
        assert_eq!(seconds_to_label(3600), "1:00:00");
        assert_eq!(seconds_to_label(3723), "1:02:03");
        assert_eq!(seconds_to_label(36_000 + 61), "10:01:01");
    }

    #[test]
    fn parses_all_part_counts() {
        assert_eq!(label_to_seconds("42"), Some(42));
        assert_eq!(label_to_seconds("1:30"), Some(90));
        assert_eq!(label_to_seconds("1:02:03"), Some(3723));
        assert_eq!(label_to_seconds(" 1:2:3 "), Some(3723));
    }

    #[test]
    fn rejects_malformed_labels() {
        assert_eq!(label_to_seconds("abc"), None);
        assert_eq!(label_to_seconds("1:2:3:4"), None);
        assert_eq!(label_to_seconds(""), None);
        assert_eq!(label_to_seconds("1:"), None);
        assert_eq!(label_to_seconds("-1:00"), None);
        assert_eq!(label_to_seconds("1.5:00"), None);
    }

    #[test]
    fn rejects_overflow() {
        assert_eq!(label_to_seconds(&format!("{}:00:00", u64::MAX)), None);
    }

    #[test]
    fn round_trips_a_full_day() {
        for s in 0..86_400 {
            assert_eq!(label_to_seconds(&seconds_to_label(s)), Some(s), "s={s}");
        }
    }

    #[test]
    fn normalizes_padding() {
        assert_eq!(normalize_label("1:2:3").as_deref(), Some("1:02:03"));
        assert_eq!(normalize_label("0:7").as_deref(), Some("0:07"));
        assert_eq!(normalize_label("75").as_deref(), Some("1:15"));
        assert_eq!(normalize_label("x"), None);
    }
}
