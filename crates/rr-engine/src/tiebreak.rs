//! Tie-break shootout: one full roll of five dice per side, strictly
//! higher sum wins; equal sums mean another round.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::dice::DiceSet;
use crate::player::Side;

/// One shootout round: both sides roll five fresh dice simultaneously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShootoutRound {
    /// The human's shootout dice.
    pub human: DiceSet,
    /// The computer's shootout dice.
    pub computer: DiceSet,
}

impl ShootoutRound {
    /// Roll one shootout round.
    pub fn roll(rng: &mut StdRng) -> Self {
        let mut human = DiceSet::new();
        let mut computer = DiceSet::new();
        human.roll_all(rng);
        computer.roll_all(rng);
        Self { human, computer }
    }

    /// Build a round from known dice.
    pub fn from_dice(human: DiceSet, computer: DiceSet) -> Self {
        Self { human, computer }
    }

    /// The human's sum this round.
    pub fn human_sum(&self) -> u32 {
        self.human.total()
    }

    /// The computer's sum this round.
    pub fn computer_sum(&self) -> u32 {
        self.computer.total()
    }

    /// The round winner by strict sum comparison, `None` when the sums
    /// are equal and the shootout must repeat.
    pub fn winner(&self) -> Option<Side> {
        match self.human_sum().cmp(&self.computer_sum()) {
            std::cmp::Ordering::Greater => Some(Side::Human),
            std::cmp::Ordering::Less => Some(Side::Computer),
            std::cmp::Ordering::Equal => None,
        }
    }
}
