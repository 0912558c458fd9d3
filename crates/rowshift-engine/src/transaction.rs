#![forbid(unsafe_code)]

//! The layout transaction: apply and revert visual reordering.
//!
//! Each pass converts the rows' shared container to a column-flex box (and
//! the container's ancestor too, when tabular), then writes the fixed row
//! rhythm plus an explicit `order` index per row. The transaction owns the
//! set of currently managed targets, so reverting clears exactly what was
//! set — by property name, never from a snapshot.
//!
//! # Invariants
//!
//! 1. The managed set is exactly the set of rows the engine currently
//!    controls; after [`LayoutTransaction::revert`] it is empty and no
//!    overridden property remains.
//! 2. [`LayoutTransaction::apply`] is idempotent and safe to call
//!    repeatedly with different orderings; each call fully re-specifies
//!    every managed row's order index and clears rows that left the view.

use ahash::AHashSet;

use rowshift_core::row::RowId;
use rowshift_core::style::{
    CONTAINER_PROPS, ROW_PROPS, ROW_RHYTHM_PROPS, StyleProp, StyleTarget, Surface,
};

/// Managed-set owner and apply/revert executor.
#[derive(Debug, Clone, Default)]
pub struct LayoutTransaction {
    managed_rows: Vec<RowId>,
    container_managed: bool,
    ancestor_managed: bool,
}

impl LayoutTransaction {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows currently under engine control, in their applied order.
    #[must_use]
    pub fn managed_rows(&self) -> &[RowId] {
        &self.managed_rows
    }

    /// Whether any target currently carries an override.
    #[must_use]
    pub fn is_managing(&self) -> bool {
        !self.managed_rows.is_empty() || self.container_managed || self.ancestor_managed
    }

    /// Apply `sorted` as the visual order (index 0 renders first).
    pub fn apply<S: Surface>(&mut self, surface: &mut S, sorted: &[RowId]) {
        // Rows that left the ordering lose their overrides; the managed set
        // must always equal the set of controlled rows.
        let next: AHashSet<RowId> = sorted.iter().copied().collect();
        for id in &self.managed_rows {
            if !next.contains(id) {
                clear_row(surface, *id);
            }
        }

        for &(prop, value) in CONTAINER_PROPS {
            surface.set_prop(StyleTarget::Container, prop, value);
        }
        self.container_managed = true;

        if surface.ancestor_is_tabular() {
            for &(prop, value) in CONTAINER_PROPS {
                surface.set_prop(StyleTarget::Ancestor, prop, value);
            }
            self.ancestor_managed = true;
        }

        for (index, &id) in sorted.iter().enumerate() {
            for &(prop, value) in ROW_RHYTHM_PROPS {
                surface.set_prop(StyleTarget::Row(id), prop, value);
            }
            surface.set_prop(StyleTarget::Row(id), StyleProp::Order, &index.to_string());
        }

        self.managed_rows = sorted.to_vec();
        tracing::trace!(rows = sorted.len(), "layout applied");
    }

    /// Remove every property this transaction ever set and empty the
    /// managed set. Safe to call when nothing is managed.
    pub fn revert<S: Surface>(&mut self, surface: &mut S) {
        for id in std::mem::take(&mut self.managed_rows) {
            clear_row(surface, id);
        }
        if self.container_managed {
            for &(prop, _) in CONTAINER_PROPS {
                surface.clear_prop(StyleTarget::Container, prop);
            }
            self.container_managed = false;
        }
        if self.ancestor_managed {
            for &(prop, _) in CONTAINER_PROPS {
                surface.clear_prop(StyleTarget::Ancestor, prop);
            }
            self.ancestor_managed = false;
        }
        tracing::trace!("layout reverted");
    }
}

fn clear_row<S: Surface>(surface: &mut S, id: RowId) {
    for &prop in ROW_PROPS {
        surface.clear_prop(StyleTarget::Row(id), prop);
    }
}
