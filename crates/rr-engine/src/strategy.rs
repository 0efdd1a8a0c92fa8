//! Computer re-roll policies.
//!
//! The computer never holds dice interactively. Each roll it decides
//! which dice to keep and re-rolls the rest, using one of two policies:
//! a coin-flip baseline, or an adaptive threshold driven by the score
//! gap to the human.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::dice::{DICE_COUNT, DiceSet, HoldMask};

/// Which re-roll policy the computer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Keep each die with probability 1/2, decided fresh every roll.
    #[default]
    Baseline,
    /// Keep dice at or above a threshold derived from the score gap;
    /// see [`keep_threshold`].
    Adaptive,
}

impl Strategy {
    /// Map the frontend's advanced-strategy switch to a policy.
    pub fn from_advanced_flag(advanced: bool) -> Self {
        if advanced { Self::Adaptive } else { Self::Baseline }
    }

    /// Parse a strategy name ("baseline" or "adaptive").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "baseline" => Some(Self::Baseline),
            "adaptive" => Some(Self::Adaptive),
            _ => None,
        }
    }

    /// Decide which dice to keep for one roll.
    ///
    /// `difference` is the human score minus the computer score at the
    /// time of the roll; the baseline policy ignores it.
    pub fn plan_keeps(self, dice: &DiceSet, difference: i64, rng: &mut StdRng) -> HoldMask {
        let mut flags = [false; DICE_COUNT];
        match self {
            Self::Baseline => {
                for flag in &mut flags {
                    *flag = rng.random_bool(0.5);
                }
            }
            Self::Adaptive => {
                let threshold = keep_threshold(difference);
                for (flag, value) in flags.iter_mut().zip(dice.iter()) {
                    *flag = value >= threshold;
                }
            }
        }
        HoldMask::from_flags(flags)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Baseline => write!(f, "baseline"),
            Self::Adaptive => write!(f, "adaptive"),
        }
    }
}

/// Keep threshold for the adaptive policy.
///
/// Far behind (gap over 10) the computer keeps only 5s and 6s; moderately
/// behind it keeps 4 and up; tied or ahead it keeps 3 and up.
pub fn keep_threshold(difference: i64) -> u8 {
    if difference > 10 {
        5
    } else if difference > 0 {
        4
    } else {
        3
    }
}
