#![forbid(unsafe_code)]

//! Managed style vocabulary and the presentation-write capability.
//!
//! The engine repositions rows purely at the presentation layer: the rows'
//! shared container becomes a column-flex box (and its ancestor too, when
//! that ancestor is tabular, to defeat host-native table layout), and each
//! row becomes a row-flex box with fixed vertical rhythm plus an explicit
//! integer order index. This module names every property the engine is
//! allowed to touch, so reverting can clear them *by name* rather than by
//! restoring a snapshot.
//!
//! # Invariants
//!
//! 1. [`ROW_PROPS`] is the complete set of properties ever set on a row;
//!    clearing all of them leaves no observable residue.
//! 2. All rhythm values are fixed constants; only `Order` varies per row.

use crate::row::RowId;

/// A style property the engine manages. Nothing outside this set is ever
/// written or cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProp {
    Display,
    FlexDirection,
    AlignItems,
    Margin,
    Padding,
    LineHeight,
    Height,
    Order,
}

impl StyleProp {
    /// Host-facing property name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::FlexDirection => "flex-direction",
            Self::AlignItems => "align-items",
            Self::Margin => "margin",
            Self::Padding => "padding",
            Self::LineHeight => "line-height",
            Self::Height => "height",
            Self::Order => "order",
        }
    }
}

/// Fixed rhythm applied to every managed row. `Order` is set separately
/// with the row's position in the sorted sequence.
pub const ROW_RHYTHM_PROPS: &[(StyleProp, &str)] = &[
    (StyleProp::Display, "flex"),
    (StyleProp::FlexDirection, "row"),
    (StyleProp::AlignItems, "center"),
    (StyleProp::Margin, "0"),
    (StyleProp::Padding, "7px 0"),
    (StyleProp::LineHeight, "1.6"),
    (StyleProp::Height, "auto"),
];

/// Every property a managed row can carry, for clearing by name.
pub const ROW_PROPS: &[StyleProp] = &[
    StyleProp::Display,
    StyleProp::FlexDirection,
    StyleProp::AlignItems,
    StyleProp::Margin,
    StyleProp::Padding,
    StyleProp::LineHeight,
    StyleProp::Height,
    StyleProp::Order,
];

/// Column-flex conversion for the rows' container (and tabular ancestor).
pub const CONTAINER_PROPS: &[(StyleProp, &str)] = &[
    (StyleProp::Display, "flex"),
    (StyleProp::FlexDirection, "column"),
];

/// Element a managed property is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleTarget {
    /// One displayed row.
    Row(RowId),
    /// The rows' shared container.
    Container,
    /// The container's ancestor, managed only when tabular.
    Ancestor,
}

/// Presentation-write capability of the host adapter.
///
/// Implementations write to the live host UI. The engine guarantees it only
/// ever sets properties from this module's vocabulary and clears exactly
/// what it set, so adapters need no snapshotting.
pub trait Surface {
    /// Whether the container's ancestor uses a tabular layout that must be
    /// overridden for row ordering to take visual effect.
    fn ancestor_is_tabular(&self) -> bool;

    /// Set one managed property on a target.
    fn set_prop(&mut self, target: StyleTarget, prop: StyleProp, value: &str);

    /// Remove one managed property from a target. Removing a property that
    /// was never set must be a no-op.
    fn clear_prop(&mut self, target: StyleTarget, prop: StyleProp);
}
