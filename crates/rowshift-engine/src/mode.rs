#![forbid(unsafe_code)]

//! Sort mode and the mode store.
//!
//! The mode is process-wide and single-valued. It is mutated only through
//! [`ModeStore::set`], which persists best-effort: a persistence failure is
//! logged at debug and otherwise ignored, and the in-memory value still
//! changes. The engine layers the revert-or-reschedule side effects on top
//! (see [`crate::engine::ReorderEngine::set_mode`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::persistence::StoreError;

/// The active sort strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// No intervention: host-native order, no style overrides.
    Default,
    /// Subject ascending, newest first within a subject.
    Subject,
    /// Pinned first, then star priority, newest first within a tier.
    Star,
}

/// Mode assumed when nothing valid is persisted.
pub const FALLBACK_MODE: Mode = Mode::Star;

impl Mode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Subject => "subject",
            Self::Star => "star",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized mode: {0:?}")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "subject" => Ok(Self::Subject),
            "star" => Ok(Self::Star),
            other => Err(ParseModeError(other.to_string())),
        }
    }
}

/// External persistence for the mode. Implementations are best-effort;
/// the store swallows their errors.
pub trait ModePersistence {
    /// Load the persisted mode, `None` when nothing (valid) is stored.
    fn load(&self) -> Result<Option<Mode>, StoreError>;

    /// Persist the mode.
    fn save(&self, mode: Mode) -> Result<(), StoreError>;
}

/// Holds the active mode, with optional external persistence.
pub struct ModeStore {
    current: Mode,
    persistence: Option<Box<dyn ModePersistence + Send>>,
}

impl ModeStore {
    /// Store with no persistence, starting at [`FALLBACK_MODE`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            current: FALLBACK_MODE,
            persistence: None,
        }
    }

    /// Store backed by `persistence`. A load failure falls back to
    /// [`FALLBACK_MODE`] and is never surfaced.
    #[must_use]
    pub fn with_persistence(persistence: Box<dyn ModePersistence + Send>) -> Self {
        let current = match persistence.load() {
            Ok(Some(mode)) => mode,
            Ok(None) => FALLBACK_MODE,
            Err(error) => {
                tracing::debug!(%error, "mode load failed; using fallback");
                FALLBACK_MODE
            }
        };
        Self {
            current,
            persistence: Some(persistence),
        }
    }

    /// The active mode.
    #[must_use]
    pub fn current(&self) -> Mode {
        self.current
    }

    /// Set the active mode, persisting best-effort.
    pub fn set(&mut self, mode: Mode) {
        self.current = mode;
        if let Some(persistence) = &self.persistence
            && let Err(error) = persistence.save(mode)
        {
            tracing::debug!(%error, mode = mode.as_str(), "mode save failed; keeping in-memory value");
        }
    }
}

impl fmt::Debug for ModeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModeStore")
            .field("current", &self.current)
            .field("persistent", &self.persistence.is_some())
            .finish()
    }
}
