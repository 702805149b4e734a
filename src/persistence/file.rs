//! Score stored as decimal text in a file

use std::fs;
use std::path::{Path, PathBuf};

use super::{PersistenceError, ScoreStore};

#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty score file if none exists yet
    pub fn ensure_exists(&self) {
        if self.path.exists() {
            return;
        }
        match fs::write(&self.path, b"") {
            Ok(()) => log::info!("Created score file {}", self.path.display()),
            Err(e) => log::warn!("Could not create {}: {}", self.path.display(), e),
        }
    }

    /// Read and parse the stored score. Empty files hold 0.
    pub fn read(&self) -> Result<u64, PersistenceError> {
        let text = fs::read_to_string(&self.path)?;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        trimmed
            .parse()
            .map_err(|_| PersistenceError::Malformed(trimmed.to_string()))
    }

    pub fn write(&self, value: u64) -> Result<(), PersistenceError> {
        fs::write(&self.path, value.to_string())?;
        Ok(())
    }
}

impl ScoreStore for FileScoreStore {
    fn get(&self) -> u64 {
        self.read().unwrap_or_else(|e| {
            log::warn!("Ignoring score file {}: {}", self.path.display(), e);
            0
        })
    }

    fn set(&mut self, value: u64) {
        if let Err(e) = self.write(value) {
            log::warn!("High score not saved to {}: {}", self.path.display(), e);
        }
    }
}
