//! High-score ledger - the top five scores, highest first
//!
//! The ledger always holds exactly [`HIGH_SCORE_SLOTS`] entries; unused slots are
//! zero. Persistence lives outside the engine.

use crate::types::HIGH_SCORE_SLOTS;

/// Top scores in descending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HighScores {
    scores: [u32; HIGH_SCORE_SLOTS],
}

impl HighScores {
    /// Empty ledger (all zeros)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from any scores: sorted descending, padded with zeros or
    /// truncated to the top entries.
    pub fn from_scores(scores: impl IntoIterator<Item = u32>) -> Self {
        let mut ledger = Self::new();
        for score in scores {
            ledger.record(score);
        }
        ledger
    }

    /// Insert a score, keep the list sorted and drop the lowest entry.
    ///
    /// Returns whether the score made it into the list.
    pub fn record(&mut self, score: u32) -> bool {
        // First slot holding a strictly lower score.
        let Some(pos) = self.scores.iter().position(|&s| s < score) else {
            return false;
        };
        self.scores[pos..].rotate_right(1);
        self.scores[pos] = score;
        true
    }

    pub fn scores(&self) -> &[u32; HIGH_SCORE_SLOTS] {
        &self.scores
    }

    /// Highest score recorded
    pub fn best(&self) -> u32 {
        self.scores[0]
    }

    /// Whether a score would enter the list
    pub fn qualifies(&self, score: u32) -> bool {
        self.scores.iter().any(|&s| s < score)
    }
}
