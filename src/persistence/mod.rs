//! High score persistence
//!
//! A store holds one non-negative integer. Reads never fail (anything
//! unreadable is 0) and failed writes are logged and dropped.

pub mod file;

pub use file::FileScoreStore;

use std::fmt;

/// Persistent single-integer score storage
pub trait ScoreStore {
    /// Stored value, or 0 if there is none or it can't be read
    fn get(&self) -> u64;

    /// Store a new value. Failures are swallowed.
    fn set(&mut self, value: u64);
}

/// Store that lives only as long as the process
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    value: u64,
    /// Number of successful `set` calls
    pub writes: u32,
}

impl MemoryScoreStore {
    pub fn new(value: u64) -> Self {
        Self { value, writes: 0 }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn get(&self) -> u64 {
        self.value
    }

    fn set(&mut self, value: u64) {
        self.value = value;
        self.writes += 1;
    }
}

/// Persistence error types
#[derive(Debug)]
pub enum PersistenceError {
    /// I/O error
    Io(std::io::Error),
    /// Stored text is not a non-negative integer
    Malformed(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Io(e) => write!(f, "I/O error: {}", e),
            PersistenceError::Malformed(s) => write!(f, "malformed score: {:?}", s),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistenceError::Io(e) => Some(e),
            PersistenceError::Malformed(_) => None,
        }
    }
}

impl From<std::io::Error> for PersistenceError {
    fn from(e: std::io::Error) -> Self {
        PersistenceError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryScoreStore::default();
        assert_eq!(store.get(), 0);
        store.set(17);
        assert_eq!(store.get(), 17);
        assert_eq!(store.writes, 1);
    }

    #[test]
    fn test_error_display() {
        let err = PersistenceError::Malformed("abc".to_string());
        assert_eq!(err.to_string(), "malformed score: \"abc\"");
    }
}
