#![forbid(unsafe_code)]

//! Star colors and their sort priorities.

/// Star color of a row, derived from the star control's descriptive label.
///
/// `Other` is never produced by the classifier (unknown labels classify as
/// `None`); it exists so the priority table keeps an explicit sorts-last
/// branch for values that bypass classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StarColor {
    /// No star, unread row, or unrecognized label.
    #[default]
    None,
    Purple,
    Red,
    Yellow,
    /// A color outside the known table. Sorts after every known color.
    Other,
}

impl StarColor {
    /// Sort priority, ascending (lower sorts first).
    ///
    /// The literal table is preserved as observed in the host behavior,
    /// including `None` ranking ahead of every colored star. Do not
    /// "correct" it; the ordering is intentional-as-shipped.
    #[must_use]
    pub const fn priority(self) -> u16 {
        match self {
            Self::None => 1,
            Self::Purple => 2,
            Self::Red => 3,
            Self::Yellow => 4,
            Self::Other => 9999,
        }
    }
}
