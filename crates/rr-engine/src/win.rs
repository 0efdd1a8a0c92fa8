//! Win evaluation: target threshold, the attempt-count fairness rule,
//! and tie detection.
//!
//! A side that reaches the target only has its win confirmed once both
//! sides have used the same number of attempts, so the trailing side
//! always gets to finish the cycle. When both sides are over the target,
//! fewer attempts wins, then higher score, and an exact double tie goes
//! to the shootout.

use serde::{Deserialize, Serialize};

use crate::player::Side;

/// Why a side won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// Reached the target alone, with attempt counts level.
    ReachedTarget,
    /// Both reached the target; this side used fewer attempts.
    FewerAttempts,
    /// Both reached the target in the same attempts; this side scored
    /// higher.
    HigherScore,
    /// Won the tie-break shootout.
    TieBreak,
}

/// The outcome of a win check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinVerdict {
    /// The game continues.
    Undecided,
    /// One side has won.
    Win {
        /// The winning side.
        side: Side,
        /// Why that side won.
        reason: WinReason,
    },
    /// Scores and attempts are exactly level; a tie-break is required.
    Tie,
}

impl WinVerdict {
    /// Whether the game has ended (win or tie).
    pub fn is_game_over(&self) -> bool {
        !matches!(self, Self::Undecided)
    }

    /// Whether a tie-break is required.
    pub fn is_tie(&self) -> bool {
        matches!(self, Self::Tie)
    }

    /// The winning side, if any.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Self::Win { side, .. } => Some(*side),
            _ => None,
        }
    }

    /// A player-facing announcement for a decided game, `None` while
    /// undecided or tied.
    pub fn message(&self, target: u32) -> Option<String> {
        let Self::Win { side, reason } = self else {
            return None;
        };
        Some(match (side, reason) {
            (Side::Human, WinReason::ReachedTarget) => {
                format!("You reached {target}! You win!")
            }
            (Side::Computer, WinReason::ReachedTarget) => {
                format!("Computer reached {target}! Computer wins!")
            }
            (Side::Human, WinReason::FewerAttempts) => {
                format!("You reached {target} first! You win!")
            }
            (Side::Computer, WinReason::FewerAttempts) => {
                format!("Computer reached {target} first! Computer wins!")
            }
            (Side::Human, WinReason::HigherScore) => {
                format!("Both reached {target}, but you have a higher score! You win!")
            }
            (Side::Computer, WinReason::HigherScore) => {
                format!("Both reached {target}, but Computer has a higher score! Computer wins!")
            }
            (Side::Human, WinReason::TieBreak) => "You won the tie-break shootout!".to_string(),
            (Side::Computer, WinReason::TieBreak) => {
                "Computer won the tie-break shootout!".to_string()
            }
        })
    }
}

/// Evaluate the win condition for the current scores and attempt counts.
///
/// Pure and total: every input combination yields exactly one verdict.
pub fn evaluate(
    human_score: u32,
    computer_score: u32,
    human_attempts: u32,
    computer_attempts: u32,
    target: u32,
) -> WinVerdict {
    let human_reached = human_score >= target;
    let computer_reached = computer_score >= target;

    match (human_reached, computer_reached) {
        (false, false) => WinVerdict::Undecided,
        // One side over the line: confirmed only with level attempts.
        (true, false) if human_attempts == computer_attempts => WinVerdict::Win {
            side: Side::Human,
            reason: WinReason::ReachedTarget,
        },
        (false, true) if human_attempts == computer_attempts => WinVerdict::Win {
            side: Side::Computer,
            reason: WinReason::ReachedTarget,
        },
        (true, false) | (false, true) => WinVerdict::Undecided,
        (true, true) => {
            if human_attempts < computer_attempts {
                WinVerdict::Win {
                    side: Side::Human,
                    reason: WinReason::FewerAttempts,
                }
            } else if computer_attempts < human_attempts {
                WinVerdict::Win {
                    side: Side::Computer,
                    reason: WinReason::FewerAttempts,
                }
            } else if human_score > computer_score {
                WinVerdict::Win {
                    side: Side::Human,
                    reason: WinReason::HigherScore,
                }
            } else if computer_score > human_score {
                WinVerdict::Win {
                    side: Side::Computer,
                    reason: WinReason::HigherScore,
                }
            } else {
                WinVerdict::Tie
            }
        }
    }
}
