//! Player identity and per-game state.

use serde::{Deserialize, Serialize};

use crate::dice::DiceSet;

/// Which side of the table a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The human player.
    Human,
    /// The computer player.
    Computer,
}

impl Side {
    /// The other side.
    pub fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Computer => write!(f, "computer"),
        }
    }
}

/// One side's state for the current game.
///
/// `score` and `attempts` only ever grow within a game, and only through
/// [`PlayerState::bank`]. `roll_count` tracks rolls used in the current
/// turn and resets to 0 at every turn boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Cumulative score for this game.
    pub score: u32,
    /// Completed scoring turns this game.
    pub attempts: u32,
    /// The dice as last rolled (or all ones before the first roll).
    pub dice: DiceSet,
    /// Rolls used in the current turn (0..=3).
    pub roll_count: u8,
}

impl PlayerState {
    /// Fresh state for a new game.
    pub fn new() -> Self {
        Self {
            score: 0,
            attempts: 0,
            dice: DiceSet::new(),
            roll_count: 0,
        }
    }

    /// Bank the current dice: add their sum to the score and count one
    /// completed attempt. Returns the banked sum.
    ///
    /// This is the only path that mutates `score` and `attempts`.
    pub fn bank(&mut self) -> u32 {
        let sum = self.dice.total();
        self.score += sum;
        self.attempts += 1;
        sum
    }

    /// Reset the per-turn roll counter.
    pub fn reset_turn(&mut self) {
        self.roll_count = 0;
    }

    /// Whether this side's score has reached `target`.
    pub fn has_reached(&self, target: u32) -> bool {
        self.score >= target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::DiceSet;

    #[test]
    fn opponent_flips_side() {
        assert_eq!(Side::Human.opponent(), Side::Computer);
        assert_eq!(Side::Computer.opponent(), Side::Human);
    }

    #[test]
    fn side_display() {
        assert_eq!(Side::Human.to_string(), "human");
        assert_eq!(Side::Computer.to_string(), "computer");
    }

    #[test]
    fn bank_accumulates_score_and_attempts() {
        let mut player = PlayerState::new();
        player.dice = DiceSet::from_values([2, 3, 4, 5, 6]);
        let sum = player.bank();
        assert_eq!(sum, 20);
        assert_eq!(player.score, 20);
        assert_eq!(player.attempts, 1);

        player.dice = DiceSet::from_values([1, 1, 1, 1, 1]);
        player.bank();
        assert_eq!(player.score, 25);
        assert_eq!(player.attempts, 2);
    }

    #[test]
    fn reset_turn_clears_roll_count_only() {
        let mut player = PlayerState::new();
        player.dice = DiceSet::from_values([6, 6, 6, 6, 6]);
        player.bank();
        player.roll_count = 3;
        player.reset_turn();
        assert_eq!(player.roll_count, 0);
        assert_eq!(player.score, 30);
        assert_eq!(player.attempts, 1);
    }

    #[test]
    fn has_reached_target() {
        let mut player = PlayerState::new();
        player.score = 100;
        assert!(!player.has_reached(101));
        player.score = 101;
        assert!(player.has_reached(101));
        player.score = 150;
        assert!(player.has_reached(101));
    }
}
