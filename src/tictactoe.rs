//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game_tree;
pub mod lines;
pub mod validation;

pub use board::{Board, Cell, Player, Square};
pub use game_tree::{GameTree, Payoff, Position, TreeStats, build, build_subgame};
pub use lines::{WINNING_LINES, winner};
