//! Tree command - statistics about the game tree below a position

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    cli::{
        config::GameArgs,
        output::{create_spinner, format_number, print_kv, print_section, print_subsection},
    },
    render::format_board,
    tictactoe::GameTree,
};

#[derive(Parser, Debug)]
#[command(about = "Report game tree statistics for a starting board")]
pub struct TreeArgs {
    #[command(flatten)]
    pub game: GameArgs,
}

pub fn execute(args: TreeArgs) -> Result<()> {
    let config = args.game.config()?;
    let start = args.game.board()?;

    let spinner = create_spinner("Building game tree...", !args.game.no_progress);
    let tree = GameTree::from_start(start, args.game.player, &config);
    spinner.finish_and_clear();
    let tree = tree.context("cannot build a game tree from this board")?;
    let stats = tree.stats();

    print_section("Game Tree Statistics");
    print!("{}", format_board(&start));
    print_kv("To move", &tree.first_mover.to_string());
    print_kv("Shaping policy", &config.policy.to_string());
    print_kv("Completed games", &format_number(stats.completed_games));
    print_kv("Positions", &format_number(stats.positions));
    print_kv("Longest game", &format!("{} moves", stats.max_depth()));

    print_subsection("Terminal outcomes");
    print_kv("x wins", &format_number(stats.x_wins));
    print_kv("o wins", &format_number(stats.o_wins));
    print_kv("Draws", &format_number(stats.draws));

    print_subsection("Positions by depth");
    for (depth, count) in stats.positions_by_depth.iter().enumerate() {
        if *count > 0 {
            print_kv(&format!("Depth {depth}"), &format_number(*count));
        }
    }

    Ok(())
}
