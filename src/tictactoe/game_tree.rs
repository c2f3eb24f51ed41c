//! Game tree construction
//!
//! The tree enumerates every move sequence reachable from a starting board.
//! Each position carries a payoff vector: terminal positions get the shaped
//! win/lose/tie values for the ply at which the game ended, internal
//! positions hold the shaped tie value until the solver folds them.

use std::{fmt, ops::Index};

use log::debug;
use serde::{Deserialize, Serialize};

use super::{Board, Cell, Player, Square};
use crate::config::GameConfig;

/// Per-player shaped utility, indexed by [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payoff(pub [f64; 2]);

impl Payoff {
    /// The same value for both players
    pub fn splat(value: f64) -> Self {
        Payoff([value, value])
    }

    pub fn set(&mut self, player: Player, value: f64) {
        self.0[player.index()] = value;
    }
}

impl Index<Player> for Payoff {
    type Output = f64;

    fn index(&self, player: Player) -> &f64 {
        &self.0[player.index()]
    }
}

impl fmt::Display for Payoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0[0], self.0[1])
    }
}

/// A node of the game tree: one reachable board configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    /// Square played to reach this position; `None` for the root.
    pub move_label: Option<Square>,
    /// Player who moved into this position. At the root this is the
    /// opponent of the first mover.
    pub mover: Player,
    pub state: Board,
    pub payoff: Payoff,
    /// Continuations in the order the free squares were enumerated.
    pub children: Vec<Position>,
}

impl Position {
    /// Root of a tree in which `first_mover` plays next.
    pub fn root(state: Board, first_mover: Player, config: &GameConfig) -> Self {
        Position {
            move_label: None,
            mover: first_mover.opponent(),
            state,
            payoff: Payoff::splat(config.payoffs.tie),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of moves on the longest path below this position
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Number of positions in this subtree, including itself
    pub fn count_positions(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Position::count_positions)
            .sum::<usize>()
    }

    /// Check the structural invariants of the subtree rooted here.
    ///
    /// Every child must differ from its parent in exactly its `move_label`
    /// square, which must have been empty and now hold the child mover's
    /// mark. Movers alternate, a position is a leaf exactly when it is won
    /// or full, every open position has one child per empty square, and no
    /// path is longer than the number of empty squares at this position.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvariantViolation`] describing the first
    /// offending position, addressed by its move path from this node.
    pub fn verify(&self) -> crate::Result<()> {
        let budget = 9 - self.state.occupied_count();
        self.verify_at("root", 0, budget)
    }

    fn verify_at(&self, path: &str, depth: usize, budget: usize) -> crate::Result<()> {
        let violation = |message: String| crate::Error::InvariantViolation {
            path: path.to_string(),
            message,
        };

        if depth > budget {
            return Err(violation(format!(
                "depth {depth} exceeds the {budget} free squares of the starting board"
            )));
        }

        let terminal = self.state.winner().is_some() || self.state.is_full();
        if self.is_leaf() {
            if !terminal {
                return Err(violation("open position has no continuations".to_string()));
            }
            return Ok(());
        }

        if terminal {
            return Err(violation("won position has continuations".to_string()));
        }

        let free = self.state.free_squares().len();
        if self.children.len() != free {
            return Err(violation(format!(
                "{} continuations for {free} free squares",
                self.children.len()
            )));
        }

        for child in &self.children {
            let label = child.move_label.map_or_else(|| "?".to_string(), |sq| sq.to_string());
            let child_path = format!("{path}/{label}");
            let child_violation = |message: String| crate::Error::InvariantViolation {
                path: child_path.clone(),
                message,
            };

            let Some(square) = child.move_label else {
                return Err(child_violation("non-root position has no move label".to_string()));
            };

            if child.mover != self.mover.opponent() {
                return Err(child_violation(format!("{} moved twice in a row", child.mover)));
            }

            let changed = child.state.changed_squares(&self.state);
            if changed != [square] {
                return Err(child_violation(format!(
                    "expected only {square} to change, found {changed:?}"
                )));
            }

            let placed = child.state.get(square) == child.mover.to_cell();
            if self.state.get(square) != Cell::Empty || !placed {
                return Err(child_violation(format!(
                    "{square} must go from empty to {}",
                    child.mover
                )));
            }

            child.verify_at(&child_path, depth + 1, budget)?;
        }

        Ok(())
    }
}

/// A fully expanded game tree.
#[derive(Debug, Clone)]
pub struct GameTree {
    pub root: Position,
    /// Player on move at the root
    pub first_mover: Player,
    /// Number of move sequences that reached a terminal position
    pub completed_games: usize,
}

impl GameTree {
    /// Validate a starting board and expand every game reachable from it,
    /// enumerating free squares in board order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::AlreadyWon`] if the board already holds a
    /// complete line.
    pub fn from_start(
        start: Board,
        first_mover: Player,
        config: &GameConfig,
    ) -> crate::Result<Self> {
        start.validate_start(first_mover)?;
        let free = start.free_squares();
        debug!("Free squares: {free:?}");
        Ok(build(start, &free, first_mover, config))
    }

    /// Aggregate statistics over the whole tree.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            completed_games: self.completed_games,
            ..TreeStats::default()
        };
        collect_stats(&self.root, 0, &mut stats);
        stats
    }
}

/// Expand the game tree below `start`.
///
/// `free` lists the squares still open to play, in the order children are
/// generated; that order decides ties in the solver.
pub fn build(start: Board, free: &[Square], first_mover: Player, config: &GameConfig) -> GameTree {
    let mut root = Position::root(start, first_mover, config);
    let (children, completed_games) = build_subgame(&start, free, first_mover, 1, config);
    root.children = children;
    debug!("Number of completed games: {completed_games}");

    GameTree {
        root,
        first_mover,
        completed_games,
    }
}

/// Enumerate the continuations of `state` with `mover` to play at ply
/// `depth`, returning them with the number of completed games below.
///
/// An empty `free` list is itself one completed game with no continuations.
pub fn build_subgame(
    state: &Board,
    free: &[Square],
    mover: Player,
    depth: usize,
    config: &GameConfig,
) -> (Vec<Position>, usize) {
    if free.is_empty() {
        return (Vec::new(), 1);
    }

    let mut completed = 0;
    let mut children = Vec::with_capacity(free.len());

    for &square in free {
        let next = state.place(square, mover);
        let mut child = Position {
            move_label: Some(square),
            mover,
            state: next,
            payoff: Payoff::splat(config.shaped_tie(depth)),
            children: Vec::new(),
        };

        if let Some(winner) = next.winner() {
            let (own, other) = if winner == mover {
                (config.shaped_win(depth), config.shaped_lose(depth))
            } else {
                (config.shaped_lose(depth), config.shaped_win(depth))
            };
            child.payoff.set(mover, own);
            child.payoff.set(mover.opponent(), other);

            // Game over: nothing left to enumerate below this position.
            completed += 1;
        } else {
            let remaining: Vec<Square> = free.iter().copied().filter(|&sq| sq != square).collect();
            let (grandchildren, below) =
                build_subgame(&next, &remaining, mover.opponent(), depth + 1, config);
            child.children = grandchildren;
            completed += below;
        }

        children.push(child);
    }

    (children, completed)
}

/// Summary counts over a game tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub completed_games: usize,
    pub positions: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    /// Positions at each distance from the root
    pub positions_by_depth: [usize; 10],
}

impl TreeStats {
    pub fn leaves(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn max_depth(&self) -> usize {
        self.positions_by_depth
            .iter()
            .rposition(|&count| count > 0)
            .unwrap_or(0)
    }
}

fn collect_stats(position: &Position, depth: usize, stats: &mut TreeStats) {
    stats.positions += 1;
    stats.positions_by_depth[depth] += 1;

    if position.is_leaf() {
        match position.state.winner() {
            Some(Player::X) => stats.x_wins += 1,
            Some(Player::O) => stats.o_wins += 1,
            None => stats.draws += 1,
        }
        return;
    }

    for child in &position.children {
        collect_stats(child, depth + 1, stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Payoffs, shaping::ShapingPolicy};

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn full_board_is_one_completed_game() {
        let start = board("xoxxoooxx");
        let tree = build(start, &[], Player::X, &GameConfig::default());
        assert_eq!(tree.completed_games, 1);
        assert!(tree.root.is_leaf());
        assert_eq!(tree.root.payoff, Payoff::splat(0.0));
    }

    #[test]
    fn children_follow_free_square_order() {
        let start = board("xx.oo....");
        let free = [Square::BR, Square::TR, Square::MR];
        let tree = build(start, &free, Player::X, &GameConfig::default());

        let labels: Vec<_> = tree.root.children.iter().map(|c| c.move_label).collect();
        assert_eq!(labels, vec![Some(Square::BR), Some(Square::TR), Some(Square::MR)]);
        assert_eq!(tree.root.mover, Player::O);
        assert!(tree.root.children.iter().all(|c| c.mover == Player::X));
    }

    #[test]
    fn winning_move_is_pruned_with_win_payoff() {
        let config = GameConfig::new(Payoffs::new(5.0, -2.0, 0.5).unwrap());
        let tree = build(board("xx.oo...."), &[Square::TR], Player::X, &config);

        let win = &tree.root.children[0];
        assert!(win.is_leaf());
        assert_eq!(win.payoff[Player::X], 5.0);
        assert_eq!(win.payoff[Player::O], -2.0);
        assert_eq!(tree.completed_games, 1);
    }

    #[test]
    fn internal_positions_hold_shaped_tie() {
        let config = GameConfig::new(Payoffs::new(1.0, -1.0, 1.0).unwrap())
            .with_policy(ShapingPolicy::Longest);
        let tree = build(board("........."), &[Square::TL, Square::TM], Player::X, &config);

        // Two free squares: each first move leads to exactly one reply.
        assert_eq!(tree.completed_games, 2);
        let first = &tree.root.children[0];
        assert_eq!(first.payoff, Payoff::splat(0.1));
        assert_eq!(first.children[0].payoff, Payoff::splat(0.2));
    }

    #[test]
    fn line_completed_for_opponent_scores_as_loss_for_mover() {
        // o already holds the top row, so any x move ends in o's favour.
        let config = GameConfig::new(Payoffs::new(3.0, -2.0, 0.0).unwrap());
        let start = board("ooo.x....");
        let (children, completed) = build_subgame(&start, &[Square::ML], Player::X, 1, &config);
        assert_eq!(completed, 1);
        assert!(children[0].is_leaf());
        assert_eq!(children[0].payoff[Player::X], -2.0);
        assert_eq!(children[0].payoff[Player::O], 3.0);
    }

    #[test]
    fn stats_count_outcomes() {
        let tree = build(
            board("xx.oo...."),
            &board("xx.oo....").free_squares(),
            Player::X,
            &GameConfig::default(),
        );
        let stats = tree.stats();
        assert_eq!(stats.completed_games, 73);
        assert_eq!(stats.positions, 157);
        assert_eq!(stats.leaves(), 73);
        assert_eq!(stats.positions_by_depth[0], 1);
        assert_eq!(stats.positions_by_depth[1], 5);
        assert!(stats.max_depth() <= 5);
    }

    #[test]
    fn verify_accepts_built_tree() {
        let start = board("x...o....");
        let tree = build(start, &start.free_squares(), Player::X, &GameConfig::default());
        assert!(tree.root.verify().is_ok());
    }

    #[test]
    fn verify_rejects_tampered_child() {
        let start = board("xx.oo....");
        let mut tree = build(start, &start.free_squares(), Player::X, &GameConfig::default());
        tree.root.children[0].state.cells[8] = Cell::O;

        let err = tree.root.verify().unwrap_err();
        assert!(matches!(err, crate::Error::InvariantViolation { ref path, .. } if path == "root/TR"));
    }

    #[test]
    fn verify_rejects_continuation_after_win() {
        let start = board("xx.oo....");
        let mut tree = build(start, &start.free_squares(), Player::X, &GameConfig::default());
        let filler = tree.root.children[1].clone();
        tree.root.children[0].children.push(filler);

        assert!(matches!(
            tree.root.verify(),
            Err(crate::Error::InvariantViolation { ref path, .. }) if path == "root/TR"
        ));
    }

    #[test]
    fn verify_rejects_truncated_subtree() {
        let start = board("x...o....");
        let mut tree = build(start, &start.free_squares(), Player::X, &GameConfig::default());
        tree.root.children[0].children.clear();

        let err = tree.root.verify().unwrap_err();
        assert!(matches!(err, crate::Error::InvariantViolation { ref path, .. } if path == "root/TM"));
    }

    #[test]
    fn verify_rejects_missing_sibling() {
        let start = board("x...o....");
        let mut tree = build(start, &start.free_squares(), Player::X, &GameConfig::default());
        tree.root.children[2].children.pop();

        let err = tree.root.verify().unwrap_err();
        assert!(matches!(err, crate::Error::InvariantViolation { ref path, .. } if path == "root/ML"));
    }
}
