//! Subgame-perfect equilibria of Tic-Tac-Toe positions
//!
//! This crate provides:
//! - Tic-Tac-Toe board representation and winner detection
//! - Exhaustive game tree construction with depth-shaped payoffs
//! - Pluggable utility shaping policies (`default`, `longest`, `shortest`)
//! - Backward-induction solving into the equilibrium line of play
//! - Text rendering of boards and trees, and the `spne` CLI

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod shaping;
pub mod solver;
pub mod tictactoe;

pub use config::{GameConfig, Payoffs};
pub use error::{Error, Result};
pub use shaping::{MAX_DEPTH, ShapingPolicy};
pub use solver::{EquilibriumMove, EquilibriumSummary, equilibrium_terminal_state, solve};
pub use tictactoe::{Board, GameTree, Player, Position, Square, build};
