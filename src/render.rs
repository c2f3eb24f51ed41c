//! Text rendering of boards and game trees

use std::fmt::Write;

use colored::Colorize;

use crate::{
    solver::solve,
    tictactoe::{Board, Player, Position},
};

/// Level limit large enough to print any tic-tac-toe tree in full
pub const UNLIMITED_LEVELS: usize = 1000;

/// Render a board as three rows separated by dividers:
///
/// ```text
///  x | x | .
/// -----------
///  o | o | .
/// -----------
///  . | . | .
/// ```
pub fn format_board(board: &Board) -> String {
    let rows: Vec<String> = board
        .cells
        .chunks(3)
        .map(|row| {
            let marks: Vec<String> = row.iter().map(|c| c.to_char().to_string()).collect();
            format!(" {} \n", marks.join(" | "))
        })
        .collect();
    rows.join("-----------\n")
}

/// Options for [`render_tree`]
#[derive(Debug, Clone, Copy)]
pub struct TreeStyle {
    /// Deepest level printed; 0 prints nothing
    pub max_level: usize,
    /// Colour move labels by the player who made them
    pub color: bool,
}

impl TreeStyle {
    pub fn new(max_level: usize) -> Self {
        Self {
            max_level,
            color: true,
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Render a game tree (or an equilibrium path) one move per line.
///
/// Each line is indented three spaces per level and shows the move's
/// square. Lines at the level limit, and leaves, end with the equilibrium
/// payoff of the subtree below them.
pub fn render_tree(root: &Position, style: TreeStyle) -> String {
    let mut out = String::new();
    if style.max_level > 0 {
        render_node(root, 0, style, &mut out);
    }
    out
}

fn render_node(node: &Position, level: usize, style: TreeStyle, out: &mut String) {
    if let Some(square) = node.move_label {
        let line = format!("{}|__{}", "   ".repeat(level), square);
        if style.color {
            let _ = write!(out, "{}", colorize(&line, node.mover));
        } else {
            out.push_str(&line);
        }
    }

    if level < style.max_level && !node.is_leaf() {
        out.push('\n');
        for child in &node.children {
            render_node(child, level + 1, style, out);
        }
    } else {
        let payoff = solve(node, node.mover.opponent()).payoff;
        let _ = writeln!(out, " {payoff}");
    }
}

fn colorize(text: &str, player: Player) -> colored::ColoredString {
    match player {
        Player::X => text.red(),
        Player::O => text.blue(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::GameConfig, tictactoe::build};

    fn tree_for(s: &str) -> Position {
        tree_with_mover(s, Player::X)
    }

    fn tree_with_mover(s: &str, mover: Player) -> Position {
        let start = Board::from_string(s).unwrap();
        build(start, &start.free_squares(), mover, &GameConfig::default()).root
    }

    #[test]
    fn board_has_three_rows() {
        let board = Board::from_string("xx.oo....").unwrap();
        assert_eq!(
            format_board(&board),
            " x | x | . \n-----------\n o | o | . \n-----------\n . | . | . \n"
        );
    }

    #[test]
    fn zero_levels_render_nothing() {
        let root = tree_for("xx.oo....");
        assert!(render_tree(&root, TreeStyle::new(0)).is_empty());
    }

    #[test]
    fn first_level_lists_moves_with_subtree_payoffs() {
        let root = tree_for("xxooo.x..");
        let text = render_tree(&root, TreeStyle::new(1).with_color(false));
        // Root line is empty; one line per free square follows.
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "");
        assert!(lines[1].starts_with("   |__MR "));
        assert!(lines[2].starts_with("   |__BM "));
        assert!(lines[3].starts_with("   |__BR "));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn leaves_show_their_own_payoff() {
        let root = tree_for("xx.oo....");
        let text = render_tree(&root, TreeStyle::new(1).with_color(false));
        assert!(text.contains("   |__TR (1, -1)\n"));
    }

    #[test]
    fn equilibrium_path_prints_every_level_and_one_payoff() {
        let path = solve(&tree_with_mover("xx.o.....", Player::O), Player::O);
        let text = render_tree(&path, TreeStyle::new(UNLIMITED_LEVELS).with_color(false));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "",
                "   |__TR",
                "      |__MM",
                "         |__MR",
                "            |__BM (1, -1)",
            ]
        );
    }

    #[test]
    fn colored_labels_follow_the_mover() {
        colored::control::set_override(true);
        let path = solve(&tree_with_mover("xx.o.....", Player::O), Player::O);
        let text = render_tree(&path, TreeStyle::new(2));
        colored::control::unset_override();

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("\u{1b}[34m   |__TR"), "o is blue: {:?}", lines[1]);
        assert!(lines[2].starts_with("\u{1b}[31m      |__MM"), "x is red: {:?}", lines[2]);
        assert!(text.contains("\u{1b}[0m"));
    }
}
