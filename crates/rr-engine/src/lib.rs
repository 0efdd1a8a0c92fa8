//! Turn-resolution and win-condition engine for Rollrace.
//!
//! Two players (one human-driven, one computer-driven) race to a target
//! score by rolling five dice up to three times per turn. This crate
//! provides the dice primitives, the human turn state machine with
//! hold/re-roll semantics, the computer's re-roll policies, the win
//! evaluator with its attempt-count fairness rule, the tie-break
//! shootout, and the session controller that orchestrates a full game
//! and emits events for a frontend to render.
//!
//! The engine is synchronous and single-writer: a frontend dispatches one
//! command at a time ([`GameSession::roll_human`], [`GameSession::score_human`],
//! ...) and reads back state and [`GameEvent`]s. Invalid commands are
//! silent no-ops rather than errors; all randomness flows through a
//! seeded RNG from [`GameConfig`].

pub mod config;
pub mod dice;
pub mod event;
pub mod player;
pub mod session;
pub mod strategy;
pub mod tiebreak;
pub mod turn;
pub mod win;

pub use config::{DEFAULT_TARGET_SCORE, GameConfig};
pub use dice::{DICE_COUNT, DIE_SIDES, DiceSet, HoldMask, roll_die};
pub use event::{EventLog, GameEvent};
pub use player::{PlayerState, Side};
pub use session::{GamePhase, GameSession};
pub use strategy::{Strategy, keep_threshold};
pub use tiebreak::ShootoutRound;
pub use turn::{MAX_ROLLS, TurnEngine};
pub use win::{WinReason, WinVerdict, evaluate};
