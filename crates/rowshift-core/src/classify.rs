#![forbid(unsafe_code)]

//! Row classification: derive sortable facts from one row.
//!
//! Every function here is a pure read of current host-UI state. Nothing is
//! cached across passes — the UI can change between passes, so each reorder
//! pass re-classifies every row from scratch.
//!
//! # Failure Modes
//!
//! None. Missing markup degrades to neutral values (`false`, `None` color,
//! empty subject, timestamp `0`), never an error. The host markup is
//! outside this system's control and changes without notice.

use ahash::AHashSet;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::row::Row;
use crate::star::StarColor;

/// Label strings that mark a row as pinned, after normalization.
pub const PRIORITY_LABELS: &[&str] = &["sr founder", "sr grant founder"];

/// Sortable facts for one row, computed fresh per pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowFacts {
    /// Row carries a priority label.
    pub pinned: bool,
    /// Star color from the star control's label.
    pub star: StarColor,
    /// Trimmed, lowercased subject text; empty when absent.
    pub subject: String,
    /// Epoch milliseconds; `0` means unknown and sorts as oldest.
    pub timestamp_ms: i64,
}

/// Classify one row into its sortable facts.
#[must_use]
pub fn classify(row: &impl Row) -> RowFacts {
    RowFacts {
        pinned: is_pinned(row),
        star: star_color(row),
        subject: subject(row),
        timestamp_ms: timestamp_ms(row),
    }
}

/// Whether a row carries any of the fixed priority labels.
///
/// Candidate label texts are normalized (trim, lowercase, collapse internal
/// whitespace) and de-duplicated within the row before the membership test,
/// so repeated chips don't cost repeated comparisons. When no candidate
/// matches, falls back to a substring scan of the whole row text to cover
/// host markup variations where label chips render differently.
#[must_use]
pub fn is_pinned(row: &impl Row) -> bool {
    let mut seen: AHashSet<String> = AHashSet::new();
    for raw in row.label_texts() {
        let normalized = normalize_label(&raw);
        if normalized.is_empty() || !seen.insert(normalized.clone()) {
            continue;
        }
        if PRIORITY_LABELS.contains(&normalized.as_str()) {
            return true;
        }
    }

    let full = row.full_text().to_lowercase();
    PRIORITY_LABELS.iter().any(|label| full.contains(label))
}

/// Star color of a row.
///
/// Unread rows classify as [`StarColor::None`] without inspecting the star
/// control. Otherwise the first control label containing `"star"` is
/// mapped; `"not starred"` must be tested before `"starred"` because the
/// former contains the latter as a substring.
#[must_use]
pub fn star_color(row: &impl Row) -> StarColor {
    if row.is_unread() {
        return StarColor::None;
    }

    let Some(label) = row
        .control_labels()
        .into_iter()
        .map(|label| label.to_lowercase())
        .find(|label| label.contains("star"))
    else {
        return StarColor::None;
    };

    if label.contains("red-star") {
        StarColor::Red
    } else if label.contains("purple-star") {
        StarColor::Purple
    } else if label.contains("not starred") {
        StarColor::None
    } else if label.contains("starred") || label.contains("yellow-star") {
        StarColor::Yellow
    } else {
        StarColor::None
    }
}

/// Trimmed, lowercased subject text; empty string when the subject element
/// is absent.
#[must_use]
pub fn subject(row: &impl Row) -> String {
    row.subject_text()
        .map(|text| text.trim().to_lowercase())
        .unwrap_or_default()
}

/// Timestamp of a row in epoch milliseconds.
///
/// Tries the primary date attribute, then the fallback one. Accepted
/// formats: RFC 3339, RFC 2822, `%Y-%m-%d %H:%M[:%S]`, `%Y-%m-%d`.
/// Missing or unparseable text yields `0`, which sorts as oldest.
#[must_use]
pub fn timestamp_ms(row: &impl Row) -> i64 {
    let text = row
        .date_text()
        .filter(|t| !t.trim().is_empty())
        .or_else(|| row.date_text_fallback().filter(|t| !t.trim().is_empty()));

    text.and_then(|t| parse_date_ms(t.trim())).unwrap_or(0)
}

fn normalize_label(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn parse_date_ms(text: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.timestamp_millis());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeRow;

    #[test]
    fn pinned_via_normalized_label() {
        let row = FakeRow::new(1).with_label_text("  SR   Founder ");
        assert!(is_pinned(&row));
    }

    #[test]
    fn pinned_via_full_text_fallback() {
        let row = FakeRow::new(1).with_full_text("From: someone — SR Grant Founder — hello");
        assert!(is_pinned(&row));
    }

    #[test]
    fn not_pinned_without_priority_label() {
        let row = FakeRow::new(1)
            .with_label_text("important")
            .with_full_text("just an ordinary message");
        assert!(!is_pinned(&row));
    }

    #[test]
    fn duplicate_labels_do_not_confuse_scan() {
        let row = FakeRow::new(1)
            .with_label_text("newsletter")
            .with_label_text("newsletter")
            .with_label_text("sr founder");
        assert!(is_pinned(&row));
    }

    #[test]
    fn empty_labels_are_skipped() {
        let row = FakeRow::new(1).with_label_text("   ").with_label_text("");
        assert!(!is_pinned(&row));
    }

    #[test]
    fn unread_rows_have_no_star() {
        let row = FakeRow::new(1)
            .unread()
            .with_control_label("Starred yellow-star");
        assert_eq!(star_color(&row), StarColor::None);
    }

    #[test]
    fn star_label_mapping() {
        let cases = [
            ("red-star toggled", StarColor::Red),
            ("purple-star toggled", StarColor::Purple),
            ("Not starred", StarColor::None),
            ("Starred", StarColor::Yellow),
            ("yellow-star", StarColor::Yellow),
            ("some other control", StarColor::None),
        ];
        for (label, expected) in cases {
            let row = FakeRow::new(1).with_control_label(label);
            assert_eq!(star_color(&row), expected, "label {label:?}");
        }
    }

    #[test]
    fn not_starred_wins_over_starred_substring() {
        // "not starred" contains "starred"; match order matters.
        let row = FakeRow::new(1).with_control_label("Not starred message");
        assert_eq!(star_color(&row), StarColor::None);
    }

    #[test]
    fn first_star_control_wins() {
        let row = FakeRow::new(1)
            .with_control_label("archive")
            .with_control_label("red-star")
            .with_control_label("yellow-star");
        assert_eq!(star_color(&row), StarColor::Red);
    }

    #[test]
    fn no_star_control_is_none() {
        let row = FakeRow::new(1).with_control_label("archive");
        assert_eq!(star_color(&row), StarColor::None);
    }

    #[test]
    fn subject_is_trimmed_and_lowercased() {
        let row = FakeRow::new(1).with_subject("  Quarterly Report  ");
        assert_eq!(subject(&row), "quarterly report");
    }

    #[test]
    fn missing_subject_is_empty() {
        let row = FakeRow::new(1);
        assert_eq!(subject(&row), "");
    }

    #[test]
    fn timestamp_rfc3339() {
        let row = FakeRow::new(1).with_date("2025-03-01T12:00:00Z");
        assert_eq!(timestamp_ms(&row), 1_740_830_400_000);
    }

    #[test]
    fn timestamp_rfc2822() {
        let row = FakeRow::new(1).with_date("Sat, 1 Mar 2025 12:00:00 +0000");
        assert_eq!(timestamp_ms(&row), 1_740_830_400_000);
    }

    #[test]
    fn timestamp_naive_formats() {
        let row = FakeRow::new(1).with_date("2025-03-01 12:00:00");
        assert_eq!(timestamp_ms(&row), 1_740_830_400_000);

        let row = FakeRow::new(2).with_date("2025-03-01 12:00");
        assert_eq!(timestamp_ms(&row), 1_740_830_400_000);

        let row = FakeRow::new(3).with_date("2025-03-01");
        assert_eq!(timestamp_ms(&row), 1_740_787_200_000);
    }

    #[test]
    fn timestamp_falls_back_to_secondary_attribute() {
        let row = FakeRow::new(1)
            .with_date("")
            .with_date_fallback("2025-03-01T12:00:00Z");
        assert_eq!(timestamp_ms(&row), 1_740_830_400_000);
    }

    #[test]
    fn malformed_date_is_zero() {
        let row = FakeRow::new(1).with_date("yesterday-ish");
        assert_eq!(timestamp_ms(&row), 0);
    }

    #[test]
    fn missing_date_is_zero() {
        let row = FakeRow::new(1);
        assert_eq!(timestamp_ms(&row), 0);
    }

    #[test]
    fn classify_bundles_all_facts() {
        let row = FakeRow::new(1)
            .with_label_text("sr founder")
            .with_control_label("Starred")
            .with_subject("Hello")
            .with_date("2025-03-01T12:00:00Z");
        let facts = classify(&row);
        assert!(facts.pinned);
        assert_eq!(facts.star, StarColor::Yellow);
        assert_eq!(facts.subject, "hello");
        assert_eq!(facts.timestamp_ms, 1_740_830_400_000);
    }
}
