//! Command parsing for the interactive play loop.

use thiserror::Error;

use rr_engine::DICE_COUNT;

/// A parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// Roll (or re-roll) the dice.
    Roll,
    /// Toggle the hold on one die (0-based index).
    Hold(usize),
    /// Bank the current dice and end the turn.
    Score,
    /// Roll one tie-break shootout round.
    Shootout,
    /// Show the current standings.
    Status,
    /// Start a new game.
    New,
    /// Show the command help.
    Help,
    /// Leave the table.
    Quit,
}

/// Errors from parsing player input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplError {
    /// The command word was not recognized.
    #[error("unknown command '{0}', try 'help'")]
    UnknownCommand(String),
    /// `hold` without a usable die number.
    #[error("hold needs a die number from 1 to {DICE_COUNT}")]
    InvalidDie,
}

/// Parse one line of player input. Commands are case-insensitive and
/// most have a single-letter shorthand.
pub fn parse(input: &str) -> Result<ReplCommand, ReplError> {
    let mut parts = input.split_whitespace();
    let cmd = parts.next().unwrap_or_default().to_lowercase();

    match cmd.as_str() {
        "roll" | "r" => Ok(ReplCommand::Roll),
        "hold" | "h" => {
            let die: usize = parts
                .next()
                .and_then(|s| s.parse().ok())
                .ok_or(ReplError::InvalidDie)?;
            if (1..=DICE_COUNT).contains(&die) {
                Ok(ReplCommand::Hold(die - 1))
            } else {
                Err(ReplError::InvalidDie)
            }
        }
        "score" | "s" => Ok(ReplCommand::Score),
        "shootout" | "tiebreak" => Ok(ReplCommand::Shootout),
        "status" => Ok(ReplCommand::Status),
        "new" => Ok(ReplCommand::New),
        "help" | "?" => Ok(ReplCommand::Help),
        "quit" | "q" | "exit" => Ok(ReplCommand::Quit),
        other => Err(ReplError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse("roll"), Ok(ReplCommand::Roll));
        assert_eq!(parse("r"), Ok(ReplCommand::Roll));
        assert_eq!(parse("score"), Ok(ReplCommand::Score));
        assert_eq!(parse("shootout"), Ok(ReplCommand::Shootout));
        assert_eq!(parse("tiebreak"), Ok(ReplCommand::Shootout));
        assert_eq!(parse("status"), Ok(ReplCommand::Status));
        assert_eq!(parse("new"), Ok(ReplCommand::New));
        assert_eq!(parse("help"), Ok(ReplCommand::Help));
        assert_eq!(parse("quit"), Ok(ReplCommand::Quit));
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(parse("  ROLL  "), Ok(ReplCommand::Roll));
        assert_eq!(parse("Hold 3"), Ok(ReplCommand::Hold(2)));
    }

    #[test]
    fn hold_uses_one_based_dice() {
        assert_eq!(parse("hold 1"), Ok(ReplCommand::Hold(0)));
        assert_eq!(parse("hold 5"), Ok(ReplCommand::Hold(4)));
    }

    #[test]
    fn hold_rejects_bad_dice() {
        assert_eq!(parse("hold"), Err(ReplError::InvalidDie));
        assert_eq!(parse("hold 0"), Err(ReplError::InvalidDie));
        assert_eq!(parse("hold 6"), Err(ReplError::InvalidDie));
        assert_eq!(parse("hold six"), Err(ReplError::InvalidDie));
    }

    #[test]
    fn unknown_command_is_reported() {
        assert_eq!(
            parse("frobnicate"),
            Err(ReplError::UnknownCommand("frobnicate".to_string()))
        );
    }
}
