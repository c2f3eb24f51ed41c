//! Shared argument types for CLI commands

use anyhow::{Context, Result};
use clap::Args;
use log::debug;

use crate::{
    config::{GameConfig, Payoffs},
    shaping::ShapingPolicy,
    tictactoe::{Board, Player},
};

/// Starting position and payoff configuration shared by every command
#[derive(Args, Debug, Clone)]
pub struct GameArgs {
    /// Starting board from top-left to bottom-right, e.g. "xxo..ox.."
    pub starting_state: String,

    /// Player whose turn it is (x or o)
    pub player: Player,

    /// Payoff for a win
    #[arg(short, long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub win: f64,

    /// Payoff for a loss
    #[arg(short, long, default_value_t = -1.0, allow_negative_numbers = true)]
    pub lose: f64,

    /// Payoff for a tie
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub tie: f64,

    /// Utility shaping policy (default, longest, shortest)
    #[arg(short, long, default_value_t = ShapingPolicy::Default)]
    pub goal: ShapingPolicy,

    /// Hide the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

impl GameArgs {
    /// Validate the payoff flags into a [`GameConfig`].
    pub fn config(&self) -> Result<GameConfig> {
        let payoffs = Payoffs::new(self.win, self.lose, self.tie)?;
        let config = GameConfig::new(payoffs).with_policy(self.goal);
        debug!("Payoffs: {payoffs:?}, shaping policy: {}", self.goal);
        Ok(config)
    }

    /// Parse the starting board; validity for play is checked when the tree
    /// is built.
    pub fn board(&self) -> Result<Board> {
        Board::from_string(&self.starting_state)
            .with_context(|| format!("invalid starting state '{}'", self.starting_state))
    }
}
