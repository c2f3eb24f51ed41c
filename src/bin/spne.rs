//! SPNE CLI - subgame-perfect equilibria of Tic-Tac-Toe positions
//!
//! Builds the full game tree from a starting board, then folds it by
//! backward induction into the equilibrium line of play.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spne")]
#[command(version, about = "Subgame-perfect equilibria of Tic-Tac-Toe positions", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a position and print the equilibrium play
    Solve(spne::cli::commands::solve::SolveArgs),

    /// Report statistics about the game tree of a position
    Tree(spne::cli::commands::tree::TreeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Solve(args) => spne::cli::commands::solve::execute(args),
        Commands::Tree(args) => spne::cli::commands::tree::execute(args),
    }
}
