//! Dice primitives: single-die rolls, the five-die set, and the hold mask.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Number of dice each player rolls.
pub const DICE_COUNT: usize = 5;

/// Number of faces on each die.
pub const DIE_SIDES: u8 = 6;

/// Roll a single die: uniform in `1..=DIE_SIDES`.
pub fn roll_die(rng: &mut StdRng) -> u8 {
    rng.random_range(1..=DIE_SIDES)
}

/// An ordered set of exactly five die values, each in 1..=6.
///
/// A fresh set shows all ones (the face a frontend displays before the
/// first roll of a game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSet {
    values: [u8; DICE_COUNT],
}

impl DiceSet {
    /// Create a fresh set with all dice showing 1.
    pub fn new() -> Self {
        Self {
            values: [1; DICE_COUNT],
        }
    }

    /// Create a set from explicit values. Values outside 1..=6 are
    /// clamped into range.
    pub fn from_values(values: [u8; DICE_COUNT]) -> Self {
        Self {
            values: values.map(|v| v.clamp(1, DIE_SIDES)),
        }
    }

    /// The five die values in order.
    pub fn values(&self) -> [u8; DICE_COUNT] {
        self.values
    }

    /// Iterate over the die values in order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.values.iter().copied()
    }

    /// Sum of all five dice.
    pub fn total(&self) -> u32 {
        self.values.iter().map(|&v| u32::from(v)).sum()
    }

    /// Roll all five dice fresh.
    pub fn roll_all(&mut self, rng: &mut StdRng) {
        for value in &mut self.values {
            *value = roll_die(rng);
        }
    }

    /// Re-roll every die for which `should_reroll(index, value)` returns
    /// true; the rest keep their values.
    pub fn reroll_where<F>(&mut self, rng: &mut StdRng, mut should_reroll: F)
    where
        F: FnMut(usize, u8) -> bool,
    {
        for (i, value) in self.values.iter_mut().enumerate() {
            if should_reroll(i, *value) {
                *value = roll_die(rng);
            }
        }
    }
}

impl Default for DiceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DiceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}

/// Which of the five dice the human currently holds.
///
/// Held dice keep their values across a re-roll. The mask is only
/// meaningful during the human's active turn and is cleared at the start
/// and end of every turn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldMask {
    held: [bool; DICE_COUNT],
}

impl HoldMask {
    /// Create an empty mask (no dice held).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mask from explicit flags.
    pub fn from_flags(held: [bool; DICE_COUNT]) -> Self {
        Self { held }
    }

    /// Flip the hold state of one die. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.held.get_mut(index) {
            *flag = !*flag;
        }
    }

    /// Whether the die at `index` is held. Out-of-range indices report
    /// not held.
    pub fn is_held(&self, index: usize) -> bool {
        self.held.get(index).copied().unwrap_or(false)
    }

    /// Whether every die is held.
    pub fn all_held(&self) -> bool {
        self.held.iter().all(|&h| h)
    }

    /// Number of held dice.
    pub fn held_count(&self) -> usize {
        self.held.iter().filter(|&&h| h).count()
    }

    /// Release all dice.
    pub fn clear(&mut self) {
        self.held = [false; DICE_COUNT];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn fresh_set_shows_all_ones() {
        let dice = DiceSet::new();
        assert_eq!(dice.values(), [1; DICE_COUNT]);
        assert_eq!(dice.total(), 5);
    }

    #[test]
    fn from_values_clamps_out_of_range() {
        let dice = DiceSet::from_values([0, 7, 3, 200, 6]);
        assert_eq!(dice.values(), [1, 6, 3, 6, 6]);
    }

    #[test]
    fn roll_all_produces_valid_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut dice = DiceSet::new();
        for _ in 0..100 {
            dice.roll_all(&mut rng);
            for value in dice.iter() {
                assert!((1..=DIE_SIDES).contains(&value));
            }
        }
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        let mut d1 = DiceSet::new();
        let mut d2 = DiceSet::new();
        d1.roll_all(&mut rng1);
        d2.roll_all(&mut rng2);
        assert_eq!(d1, d2);
    }

    #[test]
    fn reroll_where_keeps_excluded_dice() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut dice = DiceSet::from_values([1, 2, 3, 4, 5]);
        dice.reroll_where(&mut rng, |i, _| i >= 3);
        let values = dice.values();
        assert_eq!(&values[..3], &[1, 2, 3]);
        assert!((1..=DIE_SIDES).contains(&values[3]));
        assert!((1..=DIE_SIDES).contains(&values[4]));
    }

    #[test]
    fn total_sums_faces() {
        let dice = DiceSet::from_values([6, 6, 6, 6, 6]);
        assert_eq!(dice.total(), 30);
        let dice = DiceSet::from_values([1, 2, 3, 4, 5]);
        assert_eq!(dice.total(), 15);
    }

    #[test]
    fn display() {
        let dice = DiceSet::from_values([3, 5, 2, 1, 6]);
        assert_eq!(dice.to_string(), "[3, 5, 2, 1, 6] = 17");
    }

    #[test]
    fn hold_mask_toggle_and_query() {
        let mut holds = HoldMask::new();
        assert_eq!(holds.held_count(), 0);
        holds.toggle(0);
        holds.toggle(3);
        assert!(holds.is_held(0));
        assert!(!holds.is_held(1));
        assert!(holds.is_held(3));
        assert_eq!(holds.held_count(), 2);
        holds.toggle(0);
        assert!(!holds.is_held(0));
    }

    #[test]
    fn hold_mask_out_of_range_ignored() {
        let mut holds = HoldMask::new();
        holds.toggle(DICE_COUNT);
        assert_eq!(holds.held_count(), 0);
        assert!(!holds.is_held(DICE_COUNT));
    }

    #[test]
    fn hold_mask_all_held_and_clear() {
        let mut holds = HoldMask::from_flags([true; DICE_COUNT]);
        assert!(holds.all_held());
        holds.clear();
        assert!(!holds.all_held());
        assert_eq!(holds.held_count(), 0);
    }
}
