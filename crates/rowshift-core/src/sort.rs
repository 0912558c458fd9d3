#![forbid(unsafe_code)]

//! Comparators over classified rows.
//!
//! Both orderings are total and deterministic. Ties (equal keys all the way
//! down) return [`Ordering::Equal`]; callers sort with a stable sort so
//! fully tied rows keep their host-native order.

use std::cmp::Ordering;

use crate::classify::RowFacts;

/// Order by subject ascending, then timestamp descending (newer first).
///
/// Subjects are compared on their normalized (trimmed, lowercased) form,
/// which the classifier already produced.
#[must_use]
pub fn compare_by_subject(a: &RowFacts, b: &RowFacts) -> Ordering {
    match a.subject.cmp(&b.subject) {
        Ordering::Equal => b.timestamp_ms.cmp(&a.timestamp_ms),
        other => other,
    }
}

/// Order by pinned first, then star priority ascending, then timestamp
/// descending.
///
/// The star priority table ranks `none` ahead of every colored star within
/// a pinned tier; that non-intuitive ordering is preserved as observed
/// behavior (see [`crate::star::StarColor::priority`]).
#[must_use]
pub fn compare_by_star(a: &RowFacts, b: &RowFacts) -> Ordering {
    match (a.pinned, b.pinned) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }

    match a.star.priority().cmp(&b.star.priority()) {
        Ordering::Equal => b.timestamp_ms.cmp(&a.timestamp_ms),
        other => other,
    }
}
