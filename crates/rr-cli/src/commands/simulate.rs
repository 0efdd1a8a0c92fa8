//! Autoplay batches of games and summarize the outcomes per strategy.

use std::fs;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use rr_engine::{GameConfig, GamePhase, GameSession, Side, Strategy, WinReason, WinVerdict};

use super::autoplay_human_turn;

/// Aggregated outcomes for one strategy.
#[derive(Debug, Serialize)]
struct StrategyReport {
    strategy: String,
    games: u32,
    human_wins: u32,
    computer_wins: u32,
    tie_breaks: u32,
    avg_human_attempts: f64,
    avg_winning_score: f64,
}

/// The full simulation report.
#[derive(Debug, Serialize)]
struct SimulationReport {
    target: u32,
    seed: u64,
    games_per_strategy: u32,
    strategies: Vec<StrategyReport>,
}

pub fn run(
    games: u32,
    target: u32,
    strategy_arg: &str,
    seed: u64,
    json: bool,
    output: Option<&Path>,
) -> Result<(), String> {
    if games == 0 {
        return Err("games must be at least 1".into());
    }

    let strategies = parse_strategies(strategy_arg)?;
    let target = GameConfig::default().with_target_score(target).target_score;

    let reports: Vec<StrategyReport> = strategies
        .iter()
        .map(|&strategy| simulate_strategy(strategy, games, target, seed))
        .collect();

    let report = SimulationReport {
        target,
        seed,
        games_per_strategy: games,
        strategies: reports,
    };

    if json || output.is_some() {
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("failed to serialize report: {e}"))?;
        match output {
            Some(path) => {
                fs::write(path, rendered)
                    .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
                println!("Report written to {}", path.display());
            }
            None => println!("{rendered}"),
        }
        return Ok(());
    }

    print_table(&report);
    Ok(())
}

fn parse_strategies(arg: &str) -> Result<Vec<Strategy>, String> {
    match arg.trim().to_lowercase().as_str() {
        "both" => Ok(vec![Strategy::Baseline, Strategy::Adaptive]),
        other => Strategy::parse(other)
            .map(|s| vec![s])
            .ok_or_else(|| format!("unknown strategy '{other}', use: baseline, adaptive, both")),
    }
}

/// Play `games` full games with the given computer strategy; the human
/// side is driven by the adaptive keep policy throughout.
fn simulate_strategy(strategy: Strategy, games: u32, target: u32, seed: u64) -> StrategyReport {
    let mut human_wins = 0u32;
    let mut computer_wins = 0u32;
    let mut tie_breaks = 0u32;
    let mut total_attempts = 0u64;
    let mut total_winning_score = 0u64;

    for game in 0..games {
        let config = GameConfig::default()
            .with_target_score(target)
            .with_strategy(strategy)
            .with_seed(seed.wrapping_add(u64::from(game)));
        let mut session = GameSession::new(config);

        while session.phase() == GamePhase::Playing {
            autoplay_human_turn(&mut session);
        }
        while session.phase() == GamePhase::TieBreak {
            session.roll_tie_break();
        }

        if let WinVerdict::Win { side, reason } = session.verdict() {
            match side {
                Side::Human => human_wins += 1,
                Side::Computer => computer_wins += 1,
            }
            if reason == WinReason::TieBreak {
                tie_breaks += 1;
            }
            total_winning_score += u64::from(session.player(side).score);
        }
        total_attempts += u64::from(session.human().attempts);
    }

    StrategyReport {
        strategy: strategy.to_string(),
        games,
        human_wins,
        computer_wins,
        tie_breaks,
        avg_human_attempts: total_attempts as f64 / f64::from(games),
        avg_winning_score: total_winning_score as f64 / f64::from(games),
    }
}

fn print_table(report: &SimulationReport) {
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!(
            "({} games/strategy, target={}, seed={})",
            report.games_per_strategy, report.target, report.seed
        )
        .dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Strategy",
        "Human wins",
        "Computer wins",
        "Tie-breaks",
        "Avg attempts",
        "Avg winning score",
    ]);
    for entry in &report.strategies {
        table.add_row(vec![
            entry.strategy.clone(),
            entry.human_wins.to_string(),
            entry.computer_wins.to_string(),
            entry.tie_breaks.to_string(),
            format!("{:.1}", entry.avg_human_attempts),
            format!("{:.1}", entry.avg_winning_score),
        ]);
    }
    println!("{table}");
}
