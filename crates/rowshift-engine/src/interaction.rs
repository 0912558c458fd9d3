#![forbid(unsafe_code)]

//! Interaction classification.
//!
//! A generic capturing pointer-activation observer and a key-press observer
//! live on the host side; they deliver raw activations here, and this
//! module decides whether the user just touched a star control or fired an
//! archive/reply action. Those two interactions arm the gate's cooldown
//! and pause windows respectively.

/// A pointer activation as observed on the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerActivation {
    /// Combined descriptive text of the activated element (label, tooltip,
    /// title).
    pub label: String,
    /// Whether the activation happened inside a message row.
    pub within_row: bool,
}

impl PointerActivation {
    #[must_use]
    pub fn new(label: impl Into<String>, within_row: bool) -> Self {
        Self {
            label: label.into(),
            within_row,
        }
    }
}

/// A key press as observed on the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: char,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
    /// Press landed inside an editable field (input, textarea,
    /// content-editable).
    pub in_editable: bool,
}

impl KeyPress {
    /// A bare key press with no modifiers, outside editable fields.
    #[must_use]
    pub fn bare(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            alt: false,
            meta: false,
            in_editable: false,
        }
    }
}

/// Interaction semantics the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    /// Star toggled on a row: arms the star cooldown.
    StarToggle,
    /// Archive or reply action: arms the pause window.
    ArchiveOrReply,
}

/// Classify a pointer activation.
///
/// Star toggles are only recognized inside a row; archive/reply controls
/// live in toolbars as well, so they match anywhere.
#[must_use]
pub fn classify_pointer(activation: &PointerActivation) -> Option<InteractionKind> {
    let label = activation.label.to_lowercase();
    if activation.within_row && label.contains("star") {
        return Some(InteractionKind::StarToggle);
    }
    if label.contains("archive") || label.contains("reply") {
        return Some(InteractionKind::ArchiveOrReply);
    }
    None
}

/// Classify a key press: `e`/`r` are the archive/reply shortcuts.
///
/// Modifier-chorded presses and presses inside editable fields are
/// ignored — those belong to the host UI, not to us.
#[must_use]
pub fn classify_key(press: &KeyPress) -> Option<InteractionKind> {
    if press.ctrl || press.alt || press.meta || press.in_editable {
        return None;
    }
    matches!(press.key.to_ascii_lowercase(), 'e' | 'r')
        .then_some(InteractionKind::ArchiveOrReply)
}
