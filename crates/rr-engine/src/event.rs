//! Game events and the event log a frontend consumes.

use serde::{Deserialize, Serialize};

use crate::dice::DiceSet;
use crate::player::Side;
use crate::win::WinVerdict;

/// Something observable that happened during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A side's dice changed (including the computer's intermediate
    /// rolls, for display or animation).
    DiceUpdated {
        /// Whose dice changed.
        side: Side,
        /// The dice after the change.
        dice: DiceSet,
    },
    /// A side's cumulative score changed (a banked turn or a tie-break
    /// round).
    ScoreUpdated {
        /// Whose score changed.
        side: Side,
        /// The cumulative score after the change.
        score: u32,
        /// The attempt count (unchanged by tie-break rounds).
        attempts: u32,
    },
    /// Scores and attempts came out exactly level; the shootout begins.
    TieBreakEntered,
    /// One shootout round was rolled.
    TieBreakRolled {
        /// The human's sum this round.
        human_sum: u32,
        /// The computer's sum this round.
        computer_sum: u32,
    },
    /// The game ended.
    GameOver {
        /// The final verdict (a win or, transiently, a tie).
        verdict: WinVerdict,
    },
}

impl GameEvent {
    /// Whether this event concerns the given side. Game-wide events
    /// (tie-break, game over) concern both.
    pub fn involves(&self, side: Side) -> bool {
        match self {
            Self::DiceUpdated { side: s, .. } | Self::ScoreUpdated { side: s, .. } => *s == side,
            Self::TieBreakEntered | Self::TieBreakRolled { .. } | Self::GameOver { .. } => true,
        }
    }
}

/// Accumulates events during a game for a frontend to drain and render.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds
    /// its capacity.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// All recorded events in order.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// All events involving the given side.
    pub fn events_for_side(&self, side: Side) -> Vec<&GameEvent> {
        self.events.iter().filter(|e| e.involves(side)).collect()
    }

    /// Remove and return all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dice_event(side: Side) -> GameEvent {
        GameEvent::DiceUpdated {
            side,
            dice: DiceSet::new(),
        }
    }

    #[test]
    fn push_and_query() {
        let mut log = EventLog::new(0);
        log.push(dice_event(Side::Human));
        log.push(GameEvent::ScoreUpdated {
            side: Side::Computer,
            score: 17,
            attempts: 1,
        });
        assert_eq!(log.len(), 2);
        assert_eq!(log.events_for_side(Side::Human).len(), 1);
        assert_eq!(log.events_for_side(Side::Computer).len(), 1);
    }

    #[test]
    fn game_wide_events_involve_both_sides() {
        let mut log = EventLog::new(0);
        log.push(GameEvent::TieBreakEntered);
        log.push(GameEvent::TieBreakRolled {
            human_sum: 15,
            computer_sum: 15,
        });
        assert_eq!(log.events_for_side(Side::Human).len(), 2);
        assert_eq!(log.events_for_side(Side::Computer).len(), 2);
    }

    #[test]
    fn max_events_trims_oldest() {
        let mut log = EventLog::new(2);
        log.push(dice_event(Side::Human));
        log.push(dice_event(Side::Computer));
        log.push(GameEvent::TieBreakEntered);
        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[0], dice_event(Side::Computer));
        assert_eq!(log.events()[1], GameEvent::TieBreakEntered);
    }

    #[test]
    fn drain_empties_the_log() {
        let mut log = EventLog::new(0);
        log.push(dice_event(Side::Human));
        log.push(dice_event(Side::Human));
        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn clear() {
        let mut log = EventLog::new(0);
        log.push(GameEvent::TieBreakEntered);
        assert!(!log.is_empty());
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
    }
}
