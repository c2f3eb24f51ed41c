//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// The player holding a complete line, if any.
///
/// Lines are checked rows first, then columns, then diagonals; the first
/// uniform non-empty line decides.
pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Cell::Empty && cells[b] == mark && cells[c] == mark {
            mark.to_player()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_horizontal() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(winner(&cells), Some(Player::X));
    }

    #[test]
    fn test_winner_vertical() {
        let mut cells = [Cell::Empty; 9];
        cells[1] = Cell::O;
        cells[4] = Cell::O;
        cells[7] = Cell::O;

        assert_eq!(winner(&cells), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::X;
        cells[4] = Cell::X;
        cells[6] = Cell::X;

        assert_eq!(winner(&cells), Some(Player::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        // x o x
        // o x o
        // o x o
        let cells = [
            Cell::X,
            Cell::O,
            Cell::X,
            Cell::O,
            Cell::X,
            Cell::O,
            Cell::O,
            Cell::X,
            Cell::O,
        ];
        assert_eq!(winner(&cells), None);
    }

    #[test]
    fn test_empty_line_is_not_a_win() {
        assert_eq!(winner(&[Cell::Empty; 9]), None);
    }
}
