#![forbid(unsafe_code)]

//! The reorder engine object.
//!
//! One [`ReorderEngine`] exists per view lifetime. It owns all mutable
//! reordering state: the mode store, the gate timestamps, the single
//! pending deadline, and the managed set. All
//! external triggers funnel through [`ReorderEngine::handle`]; the host
//! drives time by calling [`ReorderEngine::poll`] whenever a deadline may
//! have passed (an [`crate::pump::EnginePump`] can do this on a thread).
//!
//! # Pass flow
//!
//! ```text
//! triggers ──► scheduler (debounce) ──► gate ──► classify × N ──► sort ──► apply
//!                                        │
//!                                        ├─ durable close ──► revert
//!                                        └─ transient close ─► retry in 300ms
//! ```

use std::time::Duration;

use rowshift_core::classify::{RowFacts, classify};
use rowshift_core::clock::Clock;
use rowshift_core::row::{HostView, Row, RowId};
use rowshift_core::sort::{compare_by_star, compare_by_subject};
use rowshift_core::style::Surface;

use crate::gate::{self, GateDecision, GateState};
use crate::interaction::{
    InteractionKind, KeyPress, PointerActivation, classify_key, classify_pointer,
};
use crate::mode::{Mode, ModeStore};
use crate::scheduler::{COOLDOWN_SLACK_MS, RETRY_DELAY_MS, Scheduler};
use crate::transaction::LayoutTransaction;

/// External signal delivered to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The host UI's structure changed (possibly redundantly, possibly at a
    /// very high rate — the debounce absorbs it).
    UiChanged,
    /// The displayed view changed (navigation, hash change).
    ViewChanged,
    /// A pointer activation was observed.
    Pointer(PointerActivation),
    /// A key press was observed.
    Key(KeyPress),
}

/// What a call to [`ReorderEngine::poll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// No deadline was due; nothing ran.
    Idle,
    /// The gate was open and `n` rows were reordered.
    Reordered(usize),
    /// Durable closure: style overrides were reverted.
    Reverted,
    /// Transient closure: a retry was armed, styles left as applied.
    Deferred,
    /// The gate was open but the row set was empty; no-op pass.
    Skipped,
}

/// The reordering engine. See the module docs for the pass flow.
#[derive(Debug)]
pub struct ReorderEngine<C: Clock> {
    clock: C,
    mode: ModeStore,
    gate: GateState,
    scheduler: Scheduler,
    transaction: LayoutTransaction,
}

impl<C: Clock> ReorderEngine<C> {
    /// Build an engine. The first pass is armed a short startup delay out.
    #[must_use]
    pub fn new(clock: C, mode: ModeStore) -> Self {
        let now = clock.now_ms();
        Self {
            clock,
            mode,
            gate: GateState::default(),
            scheduler: Scheduler::new(now),
            transaction: LayoutTransaction::new(),
        }
    }

    /// The active sort mode, for a selector control to stay synchronized.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode.current()
    }

    /// Whether any row currently carries an engine override.
    #[must_use]
    pub fn is_managing(&self) -> bool {
        self.transaction.is_managing()
    }

    /// Rows currently under engine control, in applied order.
    #[must_use]
    pub fn managed_rows(&self) -> &[RowId] {
        self.transaction.managed_rows()
    }

    /// Change the sort mode.
    ///
    /// Persists best-effort through the mode store. Switching to
    /// [`Mode::Default`] reverts all visual overrides immediately — a mode
    /// change is durable, so cleanup is not deferred behind the debounce.
    /// Every mode change arms a fresh pass.
    pub fn set_mode<S: Surface>(&mut self, mode: Mode, surface: &mut S) {
        self.mode.set(mode);
        if mode == Mode::Default {
            self.transaction.revert(surface);
        }
        self.scheduler.schedule_debounced(self.clock.now_ms());
        tracing::debug!(mode = mode.as_str(), "mode changed");
    }

    /// Feed one external signal through the scheduler.
    ///
    /// Star toggles stamp the star cooldown and arm a retry for just after
    /// it expires; archive/reply interactions do the same with the pause
    /// window. Everything else debounces.
    pub fn handle(&mut self, event: EngineEvent) {
        let now = self.clock.now_ms();
        match event {
            EngineEvent::UiChanged | EngineEvent::ViewChanged => {
                self.scheduler.schedule_debounced(now);
            }
            EngineEvent::Pointer(activation) => {
                match classify_pointer(&activation) {
                    Some(InteractionKind::StarToggle) => self.arm_star_cooldown(now),
                    Some(InteractionKind::ArchiveOrReply) => self.arm_action_pause(now),
                    None => {}
                }
            }
            EngineEvent::Key(press) => {
                if classify_key(&press) == Some(InteractionKind::ArchiveOrReply) {
                    self.arm_action_pause(now);
                }
            }
        }
    }

    /// Run a pass if one is due. Cheap when idle; safe to call often.
    pub fn poll<V, S>(&mut self, view: &V, surface: &mut S) -> PassOutcome
    where
        V: HostView,
        S: Surface,
    {
        let now = self.clock.now_ms();
        if !self.scheduler.take_due(now) {
            return PassOutcome::Idle;
        }
        self.run_pass(now, view, surface)
    }

    /// The earliest instant the next pass can become due.
    #[must_use]
    pub fn next_deadline(&self) -> u64 {
        self.scheduler.next_deadline()
    }

    /// Time until the next deadline, for a pump's wait.
    #[must_use]
    pub fn until_next_deadline(&self) -> Duration {
        Duration::from_millis(self.next_deadline().saturating_sub(self.clock.now_ms()))
    }

    fn arm_star_cooldown(&mut self, now: u64) {
        self.gate.stamp_star(now);
        self.scheduler
            .schedule(now, gate::STAR_COOLDOWN_MS + COOLDOWN_SLACK_MS);
        tracing::trace!("star interaction; cooldown armed");
    }

    fn arm_action_pause(&mut self, now: u64) {
        self.gate.pause_for_action(now);
        self.scheduler
            .schedule(now, gate::ACTION_COOLDOWN_MS + COOLDOWN_SLACK_MS);
        tracing::trace!("archive/reply interaction; pause armed");
    }

    fn run_pass<V, S>(&mut self, now: u64, view: &V, surface: &mut S) -> PassOutcome
    where
        V: HostView,
        S: Surface,
    {
        let decision = gate::evaluate(
            now,
            self.mode.current(),
            view.is_target_view(),
            view.row_under_pointer(),
            &self.gate,
        );

        match decision {
            GateDecision::CloseDurable => {
                self.transaction.revert(surface);
                tracing::debug!("gate closed durably; overrides reverted");
                PassOutcome::Reverted
            }
            GateDecision::CloseTransient => {
                self.scheduler.schedule(now, RETRY_DELAY_MS);
                tracing::trace!("gate closed transiently; retry armed");
                PassOutcome::Deferred
            }
            GateDecision::Open => {
                let rows = view.rows();
                if rows.is_empty() {
                    return PassOutcome::Skipped;
                }

                // Classify once per row per pass; facts are never cached
                // across passes.
                let mut classified: Vec<(RowId, RowFacts)> =
                    rows.iter().map(|row| (row.id(), classify(row))).collect();

                match self.mode.current() {
                    Mode::Subject => {
                        classified.sort_by(|a, b| compare_by_subject(&a.1, &b.1));
                    }
                    Mode::Star => {
                        classified.sort_by(|a, b| compare_by_star(&a.1, &b.1));
                    }
                    // Unreachable through the gate; host-native order.
                    Mode::Default => {}
                }

                let order: Vec<RowId> = classified.iter().map(|(id, _)| *id).collect();
                self.transaction.apply(surface, &order);
                tracing::debug!(rows = order.len(), "reorder pass applied");
                PassOutcome::Reordered(order.len())
            }
        }
    }
}
