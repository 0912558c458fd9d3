#![forbid(unsafe_code)]

//! File-backed mode persistence.
//!
//! A tiny JSON document (`{"mode":"star"}`) at a host-chosen path. Errors
//! are typed here but swallowed by [`crate::mode::ModeStore`]; persistence
//! is strictly best-effort.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::mode::{Mode, ModePersistence};

/// Errors from a persistence backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredMode {
    mode: Mode,
}

/// Persists the mode as JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct FileModeStore {
    path: PathBuf,
}

impl FileModeStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModePersistence for FileModeStore {
    fn load(&self) -> Result<Option<Mode>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };
        let stored: StoredMode = serde_json::from_str(&text)?;
        Ok(Some(stored.mode))
    }

    fn save(&self, mode: Mode) -> Result<(), StoreError> {
        let text = serde_json::to_string(&StoredMode { mode })?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
