#![forbid(unsafe_code)]

//! Fakes for exercising classification, ordering, and engine flow without a
//! host UI. Available to downstream crates through the `test-helpers`
//! feature.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};

use ahash::AHashMap;

use crate::clock::Clock;
use crate::row::{HostView, Row, RowId};
use crate::style::{StyleProp, StyleTarget, Surface};

/// In-memory row with builder-style setters.
#[derive(Debug, Clone, Default)]
pub struct FakeRow {
    pub id: u64,
    pub unread: bool,
    pub control_labels: Vec<String>,
    pub label_texts: Vec<String>,
    pub full_text: String,
    pub subject: Option<String>,
    pub date: Option<String>,
    pub date_fallback: Option<String>,
}

impl FakeRow {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn unread(mut self) -> Self {
        self.unread = true;
        self
    }

    #[must_use]
    pub fn with_control_label(mut self, label: &str) -> Self {
        self.control_labels.push(label.to_string());
        self
    }

    #[must_use]
    pub fn with_label_text(mut self, text: &str) -> Self {
        self.label_texts.push(text.to_string());
        self
    }

    #[must_use]
    pub fn with_full_text(mut self, text: &str) -> Self {
        self.full_text = text.to_string();
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }

    #[must_use]
    pub fn with_date_fallback(mut self, date: &str) -> Self {
        self.date_fallback = Some(date.to_string());
        self
    }
}

impl Row for FakeRow {
    fn id(&self) -> RowId {
        RowId::new(self.id)
    }

    fn is_unread(&self) -> bool {
        self.unread
    }

    fn control_labels(&self) -> Vec<String> {
        self.control_labels.clone()
    }

    fn label_texts(&self) -> Vec<String> {
        self.label_texts.clone()
    }

    fn full_text(&self) -> String {
        self.full_text.clone()
    }

    fn subject_text(&self) -> Option<String> {
        self.subject.clone()
    }

    fn date_text(&self) -> Option<String> {
        self.date.clone()
    }

    fn date_text_fallback(&self) -> Option<String> {
        self.date_fallback.clone()
    }
}

/// In-memory view over a vector of fake rows.
#[derive(Debug, Clone, Default)]
pub struct FakeView {
    pub rows: Vec<FakeRow>,
    pub target_view: bool,
    pub hovering: bool,
}

impl FakeView {
    /// A target view with the given rows, nothing hovered.
    #[must_use]
    pub fn with_rows(rows: Vec<FakeRow>) -> Self {
        Self {
            rows,
            target_view: true,
            hovering: false,
        }
    }
}

impl HostView for FakeView {
    type Row = FakeRow;

    fn rows(&self) -> Vec<FakeRow> {
        self.rows.clone()
    }

    fn is_target_view(&self) -> bool {
        self.target_view
    }

    fn row_under_pointer(&self) -> bool {
        self.hovering
    }
}

// Shared variant so a test can mutate the view while an engine pump owns it.
impl HostView for Arc<Mutex<FakeView>> {
    type Row = FakeRow;

    fn rows(&self) -> Vec<FakeRow> {
        self.lock().expect("fake view poisoned").rows.clone()
    }

    fn is_target_view(&self) -> bool {
        self.lock().expect("fake view poisoned").target_view
    }

    fn row_under_pointer(&self) -> bool {
        self.lock().expect("fake view poisoned").hovering
    }
}

/// Records every managed property write, keyed by target and property.
#[derive(Debug, Clone, Default)]
pub struct FakeSurface {
    pub ancestor_tabular: bool,
    props: AHashMap<(StyleTarget, StyleProp), String>,
}

impl FakeSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tabular() -> Self {
        Self {
            ancestor_tabular: true,
            ..Self::default()
        }
    }

    /// Current value of a managed property, if set.
    #[must_use]
    pub fn prop(&self, target: StyleTarget, prop: StyleProp) -> Option<&str> {
        self.props.get(&(target, prop)).map(String::as_str)
    }

    /// Visual order index of a row, parsed from its `Order` property.
    #[must_use]
    pub fn order_of(&self, id: RowId) -> Option<usize> {
        self.prop(StyleTarget::Row(id), StyleProp::Order)?
            .parse()
            .ok()
    }

    /// Row ids sorted by their current visual order index.
    #[must_use]
    pub fn visual_order(&self) -> Vec<RowId> {
        let mut ordered: Vec<(usize, RowId)> = self
            .props
            .iter()
            .filter_map(|((target, prop), value)| match (target, prop) {
                (StyleTarget::Row(id), StyleProp::Order) => {
                    Some((value.parse().ok()?, *id))
                }
                _ => None,
            })
            .collect();
        ordered.sort_unstable();
        ordered.into_iter().map(|(_, id)| id).collect()
    }

    /// Number of overridden properties across all targets.
    #[must_use]
    pub fn overridden_count(&self) -> usize {
        self.props.len()
    }

    /// True when no property override remains anywhere.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.props.is_empty()
    }
}

impl Surface for FakeSurface {
    fn ancestor_is_tabular(&self) -> bool {
        self.ancestor_tabular
    }

    fn set_prop(&mut self, target: StyleTarget, prop: StyleProp, value: &str) {
        self.props.insert((target, prop), value.to_string());
    }

    fn clear_prop(&mut self, target: StyleTarget, prop: StyleProp) {
        self.props.remove(&(target, prop));
    }
}

// Shared variant for pump tests.
impl Surface for Arc<Mutex<FakeSurface>> {
    fn ancestor_is_tabular(&self) -> bool {
        self.lock().expect("fake surface poisoned").ancestor_is_tabular()
    }

    fn set_prop(&mut self, target: StyleTarget, prop: StyleProp, value: &str) {
        self.lock()
            .expect("fake surface poisoned")
            .set_prop(target, prop, value);
    }

    fn clear_prop(&mut self, target: StyleTarget, prop: StyleProp) {
        self.lock()
            .expect("fake surface poisoned")
            .clear_prop(target, prop);
    }
}

/// Hand-advanced clock for deterministic gate and scheduler tests.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    /// Clock starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock starting at `now` milliseconds.
    #[must_use]
    pub fn at(now: u64) -> Self {
        let clock = Self::new();
        clock.set(now);
        clock
    }

    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, AtomicOrdering::SeqCst);
    }

    pub fn set(&self, now: u64) {
        self.now.store(now, AtomicOrdering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(AtomicOrdering::SeqCst)
    }
}
