//! Interactive play against the computer.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use rr_engine::{GameConfig, GameEvent, GamePhase, GameSession, Side, Strategy};

use crate::repl::{self, ReplCommand};

/// Cumulative win counters across games at this table.
#[derive(Debug, Default)]
struct Tally {
    human: u32,
    computer: u32,
}

pub fn run(target: u32, advanced: bool, seed: Option<u64>) -> Result<(), String> {
    let seed = seed.unwrap_or_else(rand::random);
    let config = GameConfig::default()
        .with_target_score(target)
        .with_strategy(Strategy::from_advanced_flag(advanced))
        .with_seed(seed);
    let mut session = GameSession::new(config);
    let mut tally = Tally::default();

    println!(
        "  {} {}",
        "Rollrace".bold(),
        format!(
            "(target={}, strategy={}, seed={seed})",
            session.target_score(),
            session.config().strategy
        )
        .dimmed()
    );
    println!("  First to {} wins. Type 'help' for commands.", session.target_score());
    print_status(&session, &tally);
    prompt()?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| format!("failed to read input: {e}"))?;
        if line.trim().is_empty() {
            prompt()?;
            continue;
        }
        match repl::parse(&line) {
            Ok(ReplCommand::Quit) => break,
            Ok(command) => apply(&mut session, command, &mut tally),
            Err(e) => println!("  {}", e.to_string().yellow()),
        }
        prompt()?;
    }

    println!(
        "  Final tally: H:{} / C:{}. Goodbye!",
        tally.human, tally.computer
    );
    Ok(())
}

fn prompt() -> Result<(), String> {
    print!("> ");
    io::stdout()
        .flush()
        .map_err(|e| format!("failed to flush stdout: {e}"))
}

fn apply(session: &mut GameSession, command: ReplCommand, tally: &mut Tally) {
    match command {
        ReplCommand::Roll => {
            if session.phase() == GamePhase::TieBreak {
                println!("  {}", "tie-break in progress, use 'shootout'".yellow());
            } else if !session.can_roll() {
                println!("  {}", roll_hint(session).yellow());
            } else {
                session.roll_human();
                render_events(session, tally);
                if session.phase() == GamePhase::Playing && session.human().roll_count > 0 {
                    println!(
                        "  your dice: {}   (rolls used {}/3)",
                        dice_line(session),
                        session.human().roll_count
                    );
                }
            }
        }
        ReplCommand::Hold(index) => {
            if !session.can_hold() {
                println!(
                    "  {}",
                    "dice can only be held between the first and last roll".yellow()
                );
            } else {
                session.toggle_hold(index);
                println!("  your dice: {}   (brackets = held)", dice_line(session));
            }
        }
        ReplCommand::Score => {
            if !session.can_score() {
                println!("  {}", "roll at least once before scoring".yellow());
            } else {
                session.score_human();
                render_events(session, tally);
            }
        }
        ReplCommand::Shootout => {
            if session.phase() != GamePhase::TieBreak {
                println!("  {}", "no tie-break in progress".yellow());
            } else {
                session.roll_tie_break();
                render_events(session, tally);
            }
        }
        ReplCommand::Status => print_status(session, tally),
        ReplCommand::New => {
            session.new_game();
            println!("  New game: first to {}.", session.target_score());
        }
        ReplCommand::Help => print_help(),
        ReplCommand::Quit => unreachable!("quit is handled by the loop"),
    }
}

/// Why the roll button would be greyed out right now.
fn roll_hint(session: &GameSession) -> &'static str {
    if session.phase() == GamePhase::Finished {
        "the game is over, type 'new' for another"
    } else if session.holds().all_held() {
        "every die is held, release one or type 'score'"
    } else {
        "no rolls left this turn, type 'score'"
    }
}

fn render_events(session: &mut GameSession, tally: &mut Tally) {
    let target = session.target_score();
    for event in session.drain_events() {
        match event {
            GameEvent::DiceUpdated { side: Side::Computer, dice } => {
                println!("  computer rolls: {dice}");
            }
            // The human's own dice are echoed with hold markers instead.
            GameEvent::DiceUpdated { side: Side::Human, .. } => {}
            GameEvent::ScoreUpdated {
                side,
                score,
                attempts,
            } => {
                let name = match side {
                    Side::Human => "you",
                    Side::Computer => "computer",
                };
                println!("  {name}: score {score}, attempts {attempts}");
            }
            GameEvent::TieBreakEntered => {
                println!(
                    "  {}",
                    "Tie-break! Same score, same attempts: single-roll shootout. Type 'shootout'."
                        .bold()
                );
            }
            GameEvent::TieBreakRolled {
                human_sum,
                computer_sum,
            } => {
                println!("  shootout round: you {human_sum} vs computer {computer_sum}");
            }
            GameEvent::GameOver { verdict } => {
                match verdict.winner() {
                    Some(Side::Human) => tally.human += 1,
                    Some(Side::Computer) => tally.computer += 1,
                    None => {}
                }
                if let Some(message) = verdict.message(target) {
                    let banner = if verdict.winner() == Some(Side::Human) {
                        message.green().bold()
                    } else {
                        message.red().bold()
                    };
                    println!("  {banner}");
                }
                println!(
                    "  Total wins: H:{} / C:{}. Type 'new' for another game.",
                    tally.human, tally.computer
                );
            }
        }
    }
}

/// The human's dice with held dice bracketed.
fn dice_line(session: &GameSession) -> String {
    let values = session.human().dice.values();
    let parts: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if session.holds().is_held(i) {
                format!("[{v}]")
            } else {
                format!(" {v} ")
            }
        })
        .collect();
    parts.join(" ")
}

fn print_status(session: &GameSession, tally: &Tally) {
    let phase = match session.phase() {
        GamePhase::Playing => "playing",
        GamePhase::TieBreak => "tie-break",
        GamePhase::Finished => "finished",
    };
    println!(
        "  Target: {}  |  phase: {phase}  |  total wins H:{} / C:{}",
        session.target_score(),
        tally.human,
        tally.computer
    );
    println!(
        "  You:      score {}, attempts {}, rolls used {}/3",
        session.human().score,
        session.human().attempts,
        session.human().roll_count
    );
    println!(
        "  Computer: score {}, attempts {}",
        session.computer().score,
        session.computer().attempts
    );
    println!("  your dice:     {}   (brackets = held)", dice_line(session));
    println!("  computer dice: {}", session.computer().dice);
}

fn print_help() {
    println!(
        "\
  Commands:
    roll | r            Roll, or re-roll the unheld dice (3 rolls per turn)
    hold <1-5> | h <n>  Toggle a hold between the first and last roll
    score | s           Bank the dice and end your turn
    shootout            Roll a tie-break round (when the game is tied)
    status              Show scores, attempts, and dice
    new                 Start a new game (win tally carries on)
    help | ?            Show this help
    quit | q            Leave the table"
    );
}
