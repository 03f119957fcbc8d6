//! Othello-MC: a Monte Carlo playout estimator for Othello.
//!
//! ## Usage
//!
//! - `othello-mc` - Show a demo
//! - `othello-mc serve` - Answer estimate requests over stdin/stdout
//! - `othello-mc run` - Perform one warm-up + measured estimate

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use othello_mc::board::coord;
use othello_mc::constants::{RUN_MS, WARMUP_MS};
use othello_mc::position::Position;
use othello_mc::runner::run_playouts;
use othello_mc::service::{EstimateService, format_stats};

/// Othello-MC: a Monte Carlo playout estimator for Othello
#[derive(Parser)]
#[command(name = "othello-mc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer estimate requests line by line over stdin/stdout
    Serve,
    /// Perform a single warm-up + measured estimate and print the result
    Run {
        /// Measured run budget in milliseconds
        #[arg(long, default_value_t = RUN_MS)]
        budget_ms: u64,
        /// Warm-up budget in milliseconds
        #[arg(long, default_value_t = WARMUP_MS)]
        warmup_ms: u64,
        /// Seed for the playout RNG (randomly seeded when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the opening position and a short sample estimate
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => {
            let mut service = EstimateService::new();
            service.run(io::stdin().lock(), io::stdout())?;
        }
        Some(Commands::Run {
            budget_ms,
            warmup_ms,
            seed,
        }) => {
            let mut service = EstimateService::with_budgets(
                Duration::from_millis(warmup_ms),
                Duration::from_millis(budget_ms),
            );
            if let Some(seed) = seed {
                service = service.with_seed(seed);
            }
            println!("{}", service.estimate());
        }
        Some(Commands::Demo) | None => run_demo(),
    }

    Ok(())
}

fn run_demo() {
    println!("Othello-MC: Monte Carlo playout estimator\n");

    let opening = Position::initial();
    println!("{}", opening.board());

    let moves: Vec<String> = opening.legal_moves().iter().map(|&m| coord(m)).collect();
    println!("Opening moves for Black: {}", moves.join(" "));

    println!("Running 1000 playouts...");
    let mut rng = fastrand::Rng::new();
    let stats = run_playouts(1000, &mut rng);
    println!("{}", format_stats(&stats));
}
