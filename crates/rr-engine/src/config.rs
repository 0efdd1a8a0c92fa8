//! Configuration for a game session.

use serde::{Deserialize, Serialize};

use crate::strategy::Strategy;

/// Target score used when none (or an invalid one) is supplied.
pub const DEFAULT_TARGET_SCORE: u32 = 101;

/// Configuration for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Score a side must reach to trigger end-of-game evaluation.
    pub target_score: u32,
    /// The computer's re-roll policy.
    pub strategy: Strategy,
    /// RNG seed for reproducible games.
    pub seed: u64,
    /// Maximum event log size (oldest events dropped when exceeded).
    /// 0 = unlimited.
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            strategy: Strategy::Baseline,
            seed: 42,
            max_events: 0,
        }
    }
}

impl GameConfig {
    /// Set the target score. Zero is invalid and silently falls back to
    /// [`DEFAULT_TARGET_SCORE`].
    pub fn with_target_score(mut self, target: u32) -> Self {
        self.target_score = if target == 0 {
            DEFAULT_TARGET_SCORE
        } else {
            target
        };
        self
    }

    /// Set the computer's re-roll policy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }
}
