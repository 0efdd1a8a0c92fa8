//! CLI frontend for the Rollrace dice game.

mod commands;
mod repl;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rr",
    about = "Rollrace — a two-player dice race to a target score",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the computer
    Play {
        /// Target score; 0 falls back to the default of 101
        #[arg(short, long, default_value = "101")]
        target: u32,

        /// Use the adaptive computer strategy instead of the 50/50 baseline
        #[arg(short, long)]
        advanced: bool,

        /// RNG seed for a reproducible game (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Autoplay batches of games and summarize the outcomes
    Simulate {
        /// Number of games per strategy
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Target score; 0 falls back to the default of 101
        #[arg(short, long, default_value = "101")]
        target: u32,

        /// Computer strategy to simulate: baseline, adaptive, or both
        #[arg(long, default_value = "both")]
        strategy: String,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Print a JSON report instead of a table
        #[arg(long)]
        json: bool,

        /// Write the JSON report to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            target,
            advanced,
            seed,
        } => commands::play::run(target, advanced, seed),
        Commands::Simulate {
            games,
            target,
            strategy,
            seed,
            json,
            output,
        } => commands::simulate::run(games, target, &strategy, seed, json, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
