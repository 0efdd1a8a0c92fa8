//! The session controller: orchestrates the human turn, the computer's
//! reply, win checks, and the tie-break phase for one full game.
//!
//! A frontend drives the session with discrete commands and reads back
//! state and events. The cycle is strict: the human's turn ends (via
//! [`GameSession::score_human`] or the forced third roll), the win check
//! runs, and only if the game is still open does the computer play its
//! complete turn before the verdict is re-checked and dispatched. The
//! computer's move can flip an inconclusive state to conclusive, never
//! the reverse, so the later verdict is the definitive one.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::dice::{DiceSet, HoldMask};
use crate::event::{EventLog, GameEvent};
use crate::player::{PlayerState, Side};
use crate::tiebreak::ShootoutRound;
use crate::turn::{MAX_ROLLS, TurnEngine};
use crate::win::{self, WinReason, WinVerdict};

/// Which stage of its lifecycle the game is in.
///
/// Transitions are one-directional except `TieBreak`, which repeats
/// until a shootout round produces a strict winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal turn cycles.
    Playing,
    /// Repeated shootout rounds until one side rolls strictly higher.
    TieBreak,
    /// A verdict has been reached.
    Finished,
}

/// One full game of Rollrace.
///
/// Owns both players' state, the turn engine, the phase, the seeded RNG,
/// and the event log. Commands arriving in the wrong phase or outside
/// their budget are silently ignored; the `can_*` predicates let a
/// frontend gate its controls the same way.
pub struct GameSession {
    config: GameConfig,
    human: PlayerState,
    computer: PlayerState,
    turn: TurnEngine,
    phase: GamePhase,
    verdict: WinVerdict,
    rng: StdRng,
    events: EventLog,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("phase", &self.phase)
            .field("human", &self.human)
            .field("computer", &self.computer)
            .field("events", &self.events.len())
            .finish()
    }
}

impl GameSession {
    /// Start a game with the given configuration. A zero target score
    /// falls back to the default.
    pub fn new(config: GameConfig) -> Self {
        // Re-apply the target default so hand-built configs are normalized.
        let config = config.with_target_score(config.target_score);
        let rng = StdRng::seed_from_u64(config.seed);
        let events = EventLog::new(config.max_events);
        Self {
            config,
            human: PlayerState::new(),
            computer: PlayerState::new(),
            turn: TurnEngine::new(),
            phase: GamePhase::Playing,
            verdict: WinVerdict::Undecided,
            rng,
            events,
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The target score for this game.
    pub fn target_score(&self) -> u32 {
        self.config.target_score
    }

    /// The human's state.
    pub fn human(&self) -> &PlayerState {
        &self.human
    }

    /// The computer's state.
    pub fn computer(&self) -> &PlayerState {
        &self.computer
    }

    /// The state of the given side.
    pub fn player(&self, side: Side) -> &PlayerState {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    /// The human's current hold mask.
    pub fn holds(&self) -> &HoldMask {
        self.turn.holds()
    }

    /// The current phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The current verdict (`Undecided` until the game finishes).
    pub fn verdict(&self) -> WinVerdict {
        self.verdict
    }

    /// The accumulated events.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Remove and return all accumulated events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Whether the human may roll right now.
    pub fn can_roll(&self) -> bool {
        self.phase == GamePhase::Playing && self.turn.can_roll(&self.human)
    }

    /// Whether the human may score right now.
    pub fn can_score(&self) -> bool {
        self.phase == GamePhase::Playing && self.turn.can_score(&self.human)
    }

    /// Whether the human may toggle holds right now.
    pub fn can_hold(&self) -> bool {
        self.phase == GamePhase::Playing && self.turn.can_hold(&self.human)
    }

    /// Advance the human's turn by one roll. The third roll forces the
    /// turn to score. Ignored outside the `Playing` phase or when no
    /// roll is allowed.
    pub fn roll_human(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if !self.turn.roll(&mut self.human, &mut self.rng) {
            return;
        }
        self.events.push(GameEvent::DiceUpdated {
            side: Side::Human,
            dice: self.human.dice,
        });
        if self.human.roll_count == MAX_ROLLS {
            self.score_human();
        }
    }

    /// Toggle the hold state of one human die. Ignored outside the hold
    /// window.
    pub fn toggle_hold(&mut self, index: usize) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.turn.toggle_hold(&self.human, index);
    }

    /// End the human's turn and bank the dice, then run the computer's
    /// turn (if the game is still open) and dispatch the verdict.
    /// Ignored outside the `Playing` phase or before the first roll.
    pub fn score_human(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if self.turn.score(&mut self.human).is_none() {
            return;
        }
        self.events.push(GameEvent::ScoreUpdated {
            side: Side::Human,
            score: self.human.score,
            attempts: self.human.attempts,
        });

        let mut verdict = self.check_win();
        if !verdict.is_game_over() {
            self.run_computer_turn();
            // The computer's bank may flip the verdict; the later check
            // is definitive.
            verdict = self.check_win();
        }
        self.dispatch(verdict);
    }

    /// Roll one tie-break shootout round. Both sums are added to the
    /// cumulative scores; a strict winner ends the game, equal sums
    /// leave the phase unchanged. Ignored outside the `TieBreak` phase.
    pub fn roll_tie_break(&mut self) {
        if self.phase != GamePhase::TieBreak {
            return;
        }
        let round = ShootoutRound::roll(&mut self.rng);
        self.human.dice = round.human;
        self.computer.dice = round.computer;
        self.human.score += round.human_sum();
        self.computer.score += round.computer_sum();

        self.events.push(GameEvent::DiceUpdated {
            side: Side::Human,
            dice: round.human,
        });
        self.events.push(GameEvent::DiceUpdated {
            side: Side::Computer,
            dice: round.computer,
        });
        self.events.push(GameEvent::TieBreakRolled {
            human_sum: round.human_sum(),
            computer_sum: round.computer_sum(),
        });
        self.events.push(GameEvent::ScoreUpdated {
            side: Side::Human,
            score: self.human.score,
            attempts: self.human.attempts,
        });
        self.events.push(GameEvent::ScoreUpdated {
            side: Side::Computer,
            score: self.computer.score,
            attempts: self.computer.attempts,
        });

        if let Some(side) = round.winner() {
            self.finish(WinVerdict::Win {
                side,
                reason: WinReason::TieBreak,
            });
        }
    }

    /// Discard all per-game state and start over with the same
    /// configuration. The RNG keeps its stream; cumulative win tallies
    /// are the frontend's to keep or reset.
    pub fn new_game(&mut self) {
        self.human = PlayerState::new();
        self.computer = PlayerState::new();
        self.turn.reset();
        self.phase = GamePhase::Playing;
        self.verdict = WinVerdict::Undecided;
        self.events.clear();
    }

    /// Evaluate the win condition for the current state.
    fn check_win(&self) -> WinVerdict {
        win::evaluate(
            self.human.score,
            self.computer.score,
            self.human.attempts,
            self.computer.attempts,
            self.config.target_score,
        )
    }

    /// Single dispatch point for a verdict.
    fn dispatch(&mut self, verdict: WinVerdict) {
        match verdict {
            WinVerdict::Undecided => self.begin_cycle(),
            WinVerdict::Tie => {
                self.phase = GamePhase::TieBreak;
                self.events.push(GameEvent::TieBreakEntered);
            }
            decided @ WinVerdict::Win { .. } => self.finish(decided),
        }
    }

    /// The computer's complete turn: one fresh roll, then policy-driven
    /// re-rolls until the budget is spent, then bank. Intermediate dice
    /// are emitted for display.
    fn run_computer_turn(&mut self) {
        self.computer.dice.roll_all(&mut self.rng);
        self.computer.roll_count = 1;
        self.events.push(GameEvent::DiceUpdated {
            side: Side::Computer,
            dice: self.computer.dice,
        });

        while self.computer.roll_count < MAX_ROLLS {
            // The gap is re-derived every roll rather than cached.
            let difference = i64::from(self.human.score) - i64::from(self.computer.score);
            let keeps = self
                .config
                .strategy
                .plan_keeps(&self.computer.dice, difference, &mut self.rng);
            self.computer
                .dice
                .reroll_where(&mut self.rng, |i, _| !keeps.is_held(i));
            self.computer.roll_count += 1;
            self.events.push(GameEvent::DiceUpdated {
                side: Side::Computer,
                dice: self.computer.dice,
            });
        }

        self.computer.bank();
        self.computer.reset_turn();
        self.events.push(GameEvent::ScoreUpdated {
            side: Side::Computer,
            score: self.computer.score,
            attempts: self.computer.attempts,
        });
    }

    /// Start the next turn cycle: the human leads, all per-turn state
    /// cleared.
    fn begin_cycle(&mut self) {
        self.human.reset_turn();
        self.computer.reset_turn();
        self.turn.reset();
    }

    /// Record a terminal verdict and clear the per-game roll state.
    /// Final scores and attempts stay readable until
    /// [`GameSession::new_game`].
    fn finish(&mut self, verdict: WinVerdict) {
        self.phase = GamePhase::Finished;
        self.verdict = verdict;
        self.events.push(GameEvent::GameOver { verdict });
        self.human.dice = DiceSet::new();
        self.computer.dice = DiceSet::new();
        self.human.reset_turn();
        self.computer.reset_turn();
        self.turn.reset();
    }
}
