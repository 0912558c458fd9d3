#![forbid(unsafe_code)]

//! Engine: decides *when* a reorder pass may run and makes each pass a
//! reversible presentation-layer transaction.
//!
//! # Role in rowshift
//! `rowshift-engine` owns the mutable state the core layer deliberately
//! lacks: the active sort [`Mode`], the cooldown/pause [`gate`], the
//! single-slot debounce [`scheduler`], and the managed set behind the
//! [`LayoutTransaction`]. External signals (UI changes, pointer and key
//! interactions, timers) funnel through [`ReorderEngine::handle`]; the
//! host drives time by calling [`ReorderEngine::poll`] or by running an
//! [`EnginePump`] on a background thread.
//!
//! # Concurrency model
//! Single-threaded and cooperative. All engine entry points take
//! `&mut self`; "concurrency" is interleaving of event deliveries and
//! deadline expiries, never parallel passes. A pass runs to completion;
//! the only cancellation primitive is replacing the pending deadline.

pub mod engine;
pub mod gate;
pub mod interaction;
pub mod mode;
pub mod persistence;
pub mod pump;
pub mod scheduler;
pub mod transaction;

pub use engine::{EngineEvent, PassOutcome, ReorderEngine};
pub use gate::{ACTION_COOLDOWN_MS, GateDecision, GateState, STAR_COOLDOWN_MS};
pub use interaction::{InteractionKind, KeyPress, PointerActivation};
pub use mode::{FALLBACK_MODE, Mode, ModePersistence, ModeStore, ParseModeError};
pub use persistence::{FileModeStore, StoreError};
pub use pump::{EnginePump, PumpHandle};
pub use scheduler::{
    COOLDOWN_SLACK_MS, DEBOUNCE_MS, FALLBACK_INTERVAL_MS, RETRY_DELAY_MS, STARTUP_DELAY_MS,
    Scheduler,
};
pub use transaction::LayoutTransaction;
