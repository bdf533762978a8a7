//! Game configuration.
//!
//! The defaults reproduce the classic board: 8 pairs on a 4×4 grid, a
//! starting score of 100, and a 10 point penalty for every try after the
//! thirteenth. Front ends override individual values with the `with_*`
//! builders.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// Number of distinct faces on the classic board.
pub const DEFAULT_PAIRS: usize = 8;

/// Tiles per row when the board is laid out as a grid.
pub const GRID_COLUMNS: usize = 4;

/// Score at the start of every deal.
pub const STARTING_SCORE: i64 = 100;

/// Points deducted for each try past the threshold.
pub const MISS_PENALTY: i64 = 10;

/// Tries allowed before the penalty starts to apply.
pub const PENALTY_THRESHOLD: u32 = 13;

/// Delay before a revealed pair is resolved.
pub const NORMAL_DELAY: Duration = Duration::from_millis(3000);

/// Delay used in fast mode.
pub const FAST_DELAY: Duration = Duration::from_millis(1000);

/// Largest pair count whose tiles still fit a `u8` index.
pub const MAX_PAIRS: usize = 128;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of distinct faces; the board holds twice as many tiles.
    pub pairs: usize,

    /// Score restored by every deal.
    pub starting_score: i64,

    /// Points deducted per qualifying try. Score has no floor.
    pub penalty: i64,

    /// The penalty applies once `tries > penalty_threshold`.
    pub penalty_threshold: u32,

    /// How long a completed pair stays face up before it is resolved.
    pub resolve_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pairs: DEFAULT_PAIRS,
            starting_score: STARTING_SCORE,
            penalty: MISS_PENALTY,
            penalty_threshold: PENALTY_THRESHOLD,
            resolve_delay: NORMAL_DELAY,
        }
    }
}

impl GameConfig {
    /// Create the classic configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pairs.
    #[must_use]
    pub fn with_pairs(mut self, pairs: usize) -> Self {
        self.pairs = pairs;
        self
    }

    /// Set the starting score.
    #[must_use]
    pub fn with_starting_score(mut self, score: i64) -> Self {
        self.starting_score = score;
        self
    }

    /// Set the per-try penalty.
    #[must_use]
    pub fn with_penalty(mut self, penalty: i64) -> Self {
        self.penalty = penalty;
        self
    }

    /// Set the number of free tries.
    #[must_use]
    pub fn with_penalty_threshold(mut self, threshold: u32) -> Self {
        self.penalty_threshold = threshold;
        self
    }

    /// Set the resolution delay.
    #[must_use]
    pub fn with_resolve_delay(mut self, delay: Duration) -> Self {
        self.resolve_delay = delay;
        self
    }

    /// Switch to the fast-mode delay.
    #[must_use]
    pub fn fast(self) -> Self {
        self.with_resolve_delay(FAST_DELAY)
    }

    /// Number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.pairs * 2
    }

    /// Check the configuration can back a game.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.pairs == 0 {
            return Err(MatchError::InvalidConfig(
                "a board needs at least one pair".to_string(),
            ));
        }
        if self.pairs > MAX_PAIRS {
            return Err(MatchError::InvalidConfig(format!(
                "at most {MAX_PAIRS} pairs supported, got {}",
                self.pairs
            )));
        }
        if self.penalty < 0 {
            return Err(MatchError::InvalidConfig(format!(
                "penalty must not be negative, got {}",
                self.penalty
            )));
        }
        Ok(())
    }
}
