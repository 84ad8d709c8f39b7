//! High score leaderboard
//!
//! Kept in memory for the lifetime of a session. Finished rounds are ranked
//! by deliveries, then by how quickly they were made, then by the longest
//! chain carried.

use std::cmp::{Ordering, Reverse};

use serde::{Deserialize, Serialize};

use crate::sim::RoundStats;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A finished round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub stats: RoundStats,
    /// Round seed (replays the same spawns)
    pub seed: u64,
}

impl HighScoreEntry {
    fn rank_key(&self) -> (u32, Reverse<u64>, usize) {
        (
            self.stats.delivered,
            Reverse(self.stats.ticks),
            self.stats.longest_chain,
        )
    }

    /// `Greater` means a better round
    pub fn compare(&self, other: &Self) -> Ordering {
        self.rank_key().cmp(&other.rank_key())
    }
}

/// High score leaderboard, best first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a finished round. Returns its 1-indexed rank, or `None` when
    /// nothing was delivered or it falls off the board.
    pub fn record(&mut self, stats: RoundStats, seed: u64) -> Option<usize> {
        if stats.delivered == 0 {
            return None;
        }

        let entry = HighScoreEntry { stats, seed };
        // Equal rounds keep the earlier one ahead
        let pos = self
            .entries
            .partition_point(|e| e.compare(&entry) != Ordering::Less);
        if pos >= MAX_HIGH_SCORES {
            return None;
        }

        self.entries.insert(pos, entry);
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(pos + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best round so far
    pub fn best(&self) -> Option<&HighScoreEntry> {
        self.entries.first()
    }
}
