//! Backward induction over a built game tree
//!
//! Folding proceeds bottom-up: at every decision point the player on move
//! keeps the continuation with the highest payoff for themselves. The result
//! is a single path through the tree, the subgame-perfect equilibrium play.

use serde::Serialize;

use crate::tictactoe::{Board, Player, Position, Square};

/// Fold `node` into its equilibrium path with `mover` choosing among its
/// children.
///
/// Each node of the returned path keeps the board of the node it was folded
/// from and carries the payoff of the leaf reached under equilibrium play.
/// Among children with equal payoff for `mover`, the first in enumeration
/// order is kept, so the result is fully deterministic.
pub fn solve(node: &Position, mover: Player) -> Position {
    let best = node
        .children
        .iter()
        .map(|child| solve(child, mover.opponent()))
        .reduce(|best, candidate| {
            if candidate.payoff[mover] > best.payoff[mover] {
                candidate
            } else {
                best
            }
        });

    let Some(best) = best else {
        return node.clone();
    };

    Position {
        move_label: node.move_label,
        mover: node.mover,
        state: node.state,
        payoff: best.payoff,
        children: vec![best],
    }
}

/// Board at the end of an equilibrium path
pub fn equilibrium_terminal_state(path: &Position) -> Board {
    let mut node = path;
    while let Some(next) = node.children.first() {
        node = next;
    }
    node.state
}

/// Moves along an equilibrium path, in order of play
pub fn equilibrium_moves(path: &Position) -> Vec<EquilibriumMove> {
    let mut moves = Vec::new();
    let mut node = path;
    while let Some(next) = node.children.first() {
        if let Some(square) = next.move_label {
            moves.push(EquilibriumMove {
                square,
                player: next.mover,
            });
        }
        node = next;
    }
    moves
}

/// One move of the equilibrium play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EquilibriumMove {
    pub square: Square,
    pub player: Player,
}

/// Serializable outcome of a solved game.
#[derive(Debug, Clone, Serialize)]
pub struct EquilibriumSummary {
    pub start: String,
    pub first_mover: Player,
    pub moves: Vec<EquilibriumMove>,
    /// Equilibrium payoff as `[x, o]`
    pub payoff: [f64; 2],
    pub final_board: String,
    pub winner: Option<Player>,
    pub depth: usize,
    pub completed_games: usize,
}

impl EquilibriumSummary {
    pub fn new(path: &Position, first_mover: Player, completed_games: usize) -> Self {
        let moves = equilibrium_moves(path);
        let final_board = equilibrium_terminal_state(path);
        Self {
            start: path.state.encode(),
            first_mover,
            depth: moves.len(),
            moves,
            payoff: path.payoff.0,
            final_board: final_board.encode(),
            winner: final_board.winner(),
            completed_games,
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
