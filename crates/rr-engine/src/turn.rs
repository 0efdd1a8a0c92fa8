//! The human turn state machine: roll budget, holds, and scoring.

use rand::rngs::StdRng;

use crate::dice::{DICE_COUNT, HoldMask};
use crate::player::PlayerState;

/// Maximum rolls per turn.
pub const MAX_ROLLS: u8 = 3;

/// Drives one player's turn: up to [`MAX_ROLLS`] rolls, hold toggling
/// between rolls, and banking the dice into the score.
///
/// Invalid actions (rolling past the budget, holding outside the allowed
/// window, scoring before the first roll) are no-ops, reported through
/// the return values; the engine never panics on them.
#[derive(Debug, Clone, Default)]
pub struct TurnEngine {
    holds: HoldMask,
}

impl TurnEngine {
    /// Create a turn engine with no dice held.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current hold mask.
    pub fn holds(&self) -> &HoldMask {
        &self.holds
    }

    /// Whether a roll is currently allowed: the budget has rolls left,
    /// and re-rolling would not be a no-op (at least one die unheld once
    /// the turn has started).
    pub fn can_roll(&self, player: &PlayerState) -> bool {
        player.roll_count < MAX_ROLLS && (player.roll_count == 0 || !self.holds.all_held())
    }

    /// Whether the turn can be scored (at least one roll used).
    pub fn can_score(&self, player: &PlayerState) -> bool {
        player.roll_count > 0
    }

    /// Whether hold toggling is allowed: only between the first and the
    /// last roll.
    pub fn can_hold(&self, player: &PlayerState) -> bool {
        (1..MAX_ROLLS).contains(&player.roll_count)
    }

    /// Advance the turn by one roll.
    ///
    /// The first roll rolls all five dice fresh and clears the holds;
    /// later rolls keep held dice and re-roll the rest. Returns false
    /// (without rolling) when no roll is allowed.
    pub fn roll(&mut self, player: &mut PlayerState, rng: &mut StdRng) -> bool {
        if !self.can_roll(player) {
            return false;
        }
        if player.roll_count == 0 {
            self.holds.clear();
            player.dice.roll_all(rng);
        } else {
            let holds = self.holds;
            player.dice.reroll_where(rng, |i, _| !holds.is_held(i));
        }
        player.roll_count += 1;
        true
    }

    /// Toggle the hold state of one die. Returns false (without toggling)
    /// outside the hold window or for an out-of-range index.
    pub fn toggle_hold(&mut self, player: &PlayerState, index: usize) -> bool {
        if !self.can_hold(player) || index >= DICE_COUNT {
            return false;
        }
        self.holds.toggle(index);
        true
    }

    /// End the turn: bank the dice, clear the holds, and reset the roll
    /// counter. Returns the banked sum, or `None` when no roll has been
    /// used yet.
    pub fn score(&mut self, player: &mut PlayerState) -> Option<u32> {
        if !self.can_score(player) {
            return None;
        }
        let sum = player.bank();
        self.holds.clear();
        player.reset_turn();
        Some(sum)
    }

    /// Clear the holds without touching the player.
    pub fn reset(&mut self) {
        self.holds.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn first_roll_rolls_everything() {
        let mut rng = rng();
        let mut turn = TurnEngine::new();
        let mut player = PlayerState::new();

        assert!(turn.roll(&mut player, &mut rng));
        assert_eq!(player.roll_count, 1);
        for value in player.dice.iter() {
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    fn held_dice_survive_reroll() {
        let mut rng = rng();
        let mut turn = TurnEngine::new();
        let mut player = PlayerState::new();

        turn.roll(&mut player, &mut rng);
        let before = player.dice.values();
        assert!(turn.toggle_hold(&player, 0));
        assert!(turn.toggle_hold(&player, 4));
        turn.roll(&mut player, &mut rng);
        let after = player.dice.values();

        assert_eq!(before[0], after[0]);
        assert_eq!(before[4], after[4]);
        assert_eq!(player.roll_count, 2);
    }

    #[test]
    fn roll_budget_is_three() {
        let mut rng = rng();
        let mut turn = TurnEngine::new();
        let mut player = PlayerState::new();

        assert!(turn.roll(&mut player, &mut rng));
        assert!(turn.roll(&mut player, &mut rng));
        assert!(turn.roll(&mut player, &mut rng));
        assert_eq!(player.roll_count, 3);
        // Fourth roll is rejected.
        assert!(!turn.roll(&mut player, &mut rng));
        assert_eq!(player.roll_count, 3);
    }

    #[test]
    fn all_held_blocks_reroll_but_not_before_first_roll() {
        let mut rng = rng();
        let mut turn = TurnEngine::new();
        let mut player = PlayerState::new();

        // Nothing held, no rolls used: rolling is allowed.
        assert!(turn.can_roll(&player));

        turn.roll(&mut player, &mut rng);
        for i in 0..DICE_COUNT {
            turn.toggle_hold(&player, i);
        }
        // Every die held: a re-roll would be a no-op and is rejected.
        assert!(!turn.can_roll(&player));
        assert!(!turn.roll(&mut player, &mut rng));
        assert_eq!(player.roll_count, 1);

        // Releasing one die re-enables the roll.
        turn.toggle_hold(&player, 2);
        assert!(turn.can_roll(&player));
    }

    #[test]
    fn hold_window_is_rolls_one_and_two() {
        let mut rng = rng();
        let mut turn = TurnEngine::new();
        let mut player = PlayerState::new();

        // Before the first roll: no holding.
        assert!(!turn.toggle_hold(&player, 0));

        turn.roll(&mut player, &mut rng);
        assert!(turn.toggle_hold(&player, 0));
        turn.roll(&mut player, &mut rng);
        assert!(turn.toggle_hold(&player, 1));

        turn.roll(&mut player, &mut rng);
        // After the third roll: no holding.
        assert!(!turn.toggle_hold(&player, 2));
    }

    #[test]
    fn hold_rejects_out_of_range_index() {
        let mut rng = rng();
        let mut turn = TurnEngine::new();
        let mut player = PlayerState::new();
        turn.roll(&mut player, &mut rng);
        assert!(!turn.toggle_hold(&player, DICE_COUNT));
    }

    #[test]
    fn score_requires_a_roll() {
        let mut turn = TurnEngine::new();
        let mut player = PlayerState::new();
        assert_eq!(turn.score(&mut player), None);
        assert_eq!(player.attempts, 0);
    }

    #[test]
    fn score_banks_and_resets() {
        let mut rng = rng();
        let mut turn = TurnEngine::new();
        let mut player = PlayerState::new();

        turn.roll(&mut player, &mut rng);
        turn.toggle_hold(&player, 0);
        let expected = player.dice.total();

        let sum = turn.score(&mut player).unwrap();
        assert_eq!(sum, expected);
        assert_eq!(player.score, expected);
        assert_eq!(player.attempts, 1);
        assert_eq!(player.roll_count, 0);
        assert_eq!(turn.holds().held_count(), 0);
    }

    #[test]
    fn first_roll_clears_stale_holds() {
        let mut rng = rng();
        let mut turn = TurnEngine::new();
        let mut player = PlayerState::new();

        turn.roll(&mut player, &mut rng);
        turn.toggle_hold(&player, 1);
        turn.score(&mut player);

        // Next turn starts with a clean mask even if a frontend skipped
        // TurnEngine::reset.
        turn.roll(&mut player, &mut rng);
        assert_eq!(turn.holds().held_count(), 0);
    }
}
