#![forbid(unsafe_code)]

//! The reorder gate: may a pass run *right now*?
//!
//! The gate is a predicate, recomputed fresh on every scheduling tick, not
//! a persisted state machine. Its inputs are the active mode, the view
//! predicate, the pointer-hover probe, and two interaction timestamps.
//!
//! Closures come in two flavors with different consequences:
//!
//! - [`GateDecision::CloseDurable`] — wrong view or mode `default`. These
//!   are durable state changes: the engine reverts all style overrides and
//!   does not reschedule.
//! - [`GateDecision::CloseTransient`] — cooldown, pause, or hover. These
//!   pass on their own: styles stay as last applied and the engine re-arms
//!   a short retry.
//!
//! # Invariants
//!
//! 1. Cooldown windows are half-open: a star interaction at `t` closes the
//!    gate for `t..t+1000` and opens it at exactly `t+1000`.
//! 2. Fresh state (no interaction yet) never closes the gate.

use crate::mode::Mode;

/// Suppression window after a star toggle, in milliseconds.
pub const STAR_COOLDOWN_MS: u64 = 1_000;

/// Suppression window after an archive/reply action, in milliseconds.
pub const ACTION_COOLDOWN_MS: u64 = 1_200;

/// Recent-interaction timestamps, on the engine clock.
///
/// `None` means "never happened", i.e. expired. State is not persisted;
/// a fresh engine starts with both windows expired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateState {
    /// Last star-control interaction.
    pub last_star_interaction_at: Option<u64>,
    /// Reordering is paused until this instant.
    pub pause_until: Option<u64>,
}

impl GateState {
    /// Record a star interaction at `now`.
    pub fn stamp_star(&mut self, now: u64) {
        self.last_star_interaction_at = Some(now);
    }

    /// Pause reordering for the action cooldown starting at `now`.
    pub fn pause_for_action(&mut self, now: u64) {
        self.pause_until = Some(now + ACTION_COOLDOWN_MS);
    }
}

/// Outcome of a gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// A pass may run now.
    Open,
    /// Closed by a durable condition (view/mode): revert, don't retry.
    CloseDurable,
    /// Closed by a transient condition (cooldown/pause/hover): keep styles,
    /// retry shortly.
    CloseTransient,
}

/// Evaluate the gate at `now`.
#[must_use]
pub fn evaluate(
    now: u64,
    mode: Mode,
    on_target_view: bool,
    hovering: bool,
    state: &GateState,
) -> GateDecision {
    if !on_target_view || mode == Mode::Default {
        return GateDecision::CloseDurable;
    }

    if let Some(at) = state.last_star_interaction_at
        && now.saturating_sub(at) < STAR_COOLDOWN_MS
    {
        return GateDecision::CloseTransient;
    }

    if let Some(until) = state.pause_until
        && now < until
    {
        return GateDecision::CloseTransient;
    }

    if hovering {
        return GateDecision::CloseTransient;
    }

    GateDecision::Open
}
