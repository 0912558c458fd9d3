#![forbid(unsafe_code)]

//! Capability traits over host-owned message rows.
//!
//! The host UI owns the rows. The engine never creates, destroys, or
//! persists them; it reads attributes through [`Row`] and repositions them
//! through the style layer. Implementations are thin adapters over the
//! concrete UI element type, which keeps the classifier, comparators, and
//! the whole engine testable against fake rows with no real UI present.
//!
//! # Invariants
//!
//! 1. No `Row` method mutates the underlying element.
//! 2. A [`RowId`] is stable for the lifetime of a displayed row; the host
//!    adapter may recycle ids only after the row leaves the view.
//! 3. `Row` results are never cached across passes — the host UI redraws
//!    itself asynchronously, so every pass re-reads attributes.

/// Opaque identifier for one displayed row, assigned by the host adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub u64);

impl RowId {
    /// Construct an id from the adapter's raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Read-only capability over one visually rendered message entry.
///
/// Every accessor reflects the *current* state of the host UI. Missing
/// markup is reported as `None`/empty rather than an error; the classifier
/// maps those to neutral values (see [`crate::classify`]).
pub trait Row {
    /// Stable identifier for this row within the current view.
    fn id(&self) -> RowId;

    /// Whether the row is marked unread by the host UI.
    fn is_unread(&self) -> bool;

    /// Descriptive labels of button-like descendants of this row.
    ///
    /// The star control's label lives here; the classifier picks the first
    /// label containing `"star"`.
    fn control_labels(&self) -> Vec<String>;

    /// Candidate label strings gathered from the bounded set of likely
    /// label-bearing sub-elements (text content, title, tooltip, and
    /// descriptive label per element). Raw, un-normalized.
    fn label_texts(&self) -> Vec<String>;

    /// The whole row's visible text. Fallback for the priority-label scan
    /// when the host markup renders label chips differently.
    fn full_text(&self) -> String;

    /// Text of the row's subject element, if present.
    fn subject_text(&self) -> Option<String>;

    /// Primary date/time attribute of the row's time element.
    fn date_text(&self) -> Option<String>;

    /// Secondary date/time attribute, consulted when the primary is absent
    /// or empty.
    fn date_text_fallback(&self) -> Option<String>;
}

/// The engine's window onto the host UI: the current row sequence, the view
/// predicate, and the pointer-hover probe.
pub trait HostView {
    /// Concrete row type produced by this view.
    type Row: Row;

    /// The current ordered sequence of rows for the active view.
    /// May be empty; an empty set makes a pass a no-op, not an error.
    fn rows(&self) -> Vec<Self::Row>;

    /// Whether the currently displayed view is the reorderable target view.
    fn is_target_view(&self) -> bool;

    /// Whether any row is currently under pointer focus. Reordering while
    /// the user hovers a row would disturb an in-progress interaction.
    fn row_under_pointer(&self) -> bool;
}
