//! High score tracking
//!
//! Only the single best score is kept. It is written back to the store when
//! a finished run strictly beats it.

use crate::persistence::ScoreStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore {
    best: u64,
}

impl HighScore {
    pub fn new(best: u64) -> Self {
        Self { best }
    }

    /// Load the stored best score (0 if there is none)
    pub fn load(store: &dyn ScoreStore) -> Self {
        let best = store.get();
        log::info!("Loaded high score {}", best);
        Self { best }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Check if a score beats the current record
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished run's score. Returns true if it was a new record.
    pub fn submit(&mut self, score: u64, store: &mut dyn ScoreStore) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        log::info!("New high score {} (was {})", score, self.best);
        self.best = score;
        store.set(score);
        true
    }
}
