//! Solve command - compute the subgame-perfect equilibrium of a position

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use crate::{
    cli::{config::GameArgs, output::create_spinner},
    render::{TreeStyle, UNLIMITED_LEVELS, format_board, render_tree},
    solver::{EquilibriumSummary, equilibrium_terminal_state, solve},
    tictactoe::{GameTree, build},
};

#[derive(Parser, Debug)]
#[command(about = "Compute the subgame-perfect equilibrium from a starting board")]
pub struct SolveArgs {
    #[command(flatten)]
    pub game: GameArgs,

    /// Levels of game tree to print
    #[arg(long, default_value_t = 0)]
    pub gt: usize,

    /// Print the equilibrium as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Disable coloured tree output
    #[arg(long)]
    pub no_color: bool,

    /// Check game tree invariants before solving
    #[arg(long)]
    pub verify: bool,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let config = args.game.config()?;
    let start = args.game.board()?;
    let player = args.game.player;
    debug!("Whose turn: player {} {}", player.index(), player);
    debug!("Game tree max display level: {}", args.gt);

    start
        .validate_start(player)
        .context("cannot build a game tree from this board")?;

    if !args.json {
        print!("{}", format_board(&start));
    }

    let spinner = create_spinner("Building game tree...", !args.game.no_progress);
    let free = start.free_squares();
    debug!("Free squares: {free:?}");
    let tree = build(start, &free, player, &config);
    spinner.finish_and_clear();

    if args.verify {
        verify_tree(&tree)?;
    }

    let style = TreeStyle::new(args.gt).with_color(!args.no_color);
    if !args.json && args.gt > 0 {
        print!("{}", render_tree(&tree.root, style));
    }

    let spinner = create_spinner("Solving...", !args.game.no_progress);
    let started = Instant::now();
    let spne = solve(&tree.root, player);
    let elapsed = started.elapsed();
    spinner.finish_and_clear();

    let summary = EquilibriumSummary::new(&spne, player, tree.completed_games);
    debug!("SPNE has {} levels", summary.depth);
    debug!("Time to find SPNE: {:.6} seconds", elapsed.as_secs_f64());

    if args.json {
        println!("{}", summary.to_json()?);
        return Ok(());
    }

    println!("SPNE:");
    print!(
        "{}",
        render_tree(&spne, TreeStyle { max_level: UNLIMITED_LEVELS, ..style })
    );
    print!("{}", format_board(&equilibrium_terminal_state(&spne)));

    Ok(())
}

/// Check the structural invariants of a built tree.
pub fn verify_tree(tree: &GameTree) -> Result<()> {
    tree.root
        .verify()
        .context("game tree failed invariant check")?;
    debug!("Game tree invariants hold");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        Error,
        config::GameConfig,
        tictactoe::{Board, Player},
    };

    #[test]
    fn verify_tree_reports_invariant_violation_with_context() {
        let start = Board::from_string("xx.oo....").unwrap();
        let mut tree = build(start, &start.free_squares(), Player::X, &GameConfig::default());
        assert!(verify_tree(&tree).is_ok());

        tree.root.children[1].children.truncate(1);
        let err = verify_tree(&tree).unwrap_err();
        assert_eq!(err.to_string(), "game tree failed invariant check");
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InvariantViolation { path, .. }) if path == "root/MR"
        ));
    }
}
