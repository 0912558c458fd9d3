#![forbid(unsafe_code)]

//! Core vocabulary for rowshift: row capabilities, classification, ordering.
//!
//! # Role in rowshift
//! `rowshift-core` is the pure layer. It defines the capability traits the
//! host adapter implements ([`Row`], [`HostView`], [`Surface`]), the
//! classifier that derives sortable facts from a row, and the comparators
//! the engine sorts with. Nothing here spawns threads, performs I/O, or
//! holds state between passes.
//!
//! # This crate provides
//! - [`Row`] / [`HostView`]: read-only capabilities over host-owned rows.
//! - [`classify`] and friends: pure attribute extraction ([`RowFacts`]).
//! - [`compare_by_subject`] / [`compare_by_star`]: total orderings.
//! - [`Surface`] and the managed style vocabulary ([`StyleProp`]).
//! - [`Clock`]: monotonic milliseconds, with a manual clock for tests.
//!
//! # How it fits in the system
//! `rowshift-engine` consumes these types to decide *when* a reorder pass
//! runs and to apply/revert the resulting layout. This crate only answers
//! *what order* the rows belong in and *which properties* a pass may touch.

pub mod classify;
pub mod clock;
pub mod row;
pub mod sort;
pub mod star;
pub mod style;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use classify::{RowFacts, classify, is_pinned, star_color, subject, timestamp_ms};
pub use clock::{Clock, MonotonicClock};
pub use row::{HostView, Row, RowId};
pub use sort::{compare_by_star, compare_by_subject};
pub use star::StarColor;
pub use style::{
    CONTAINER_PROPS, ROW_PROPS, ROW_RHYTHM_PROPS, StyleProp, StyleTarget, Surface,
};
