//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'x',
            Cell::O => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'x' | 'X' => Some(Cell::X),
            'o' | 'O' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

/// A player in the game.
///
/// Players are also addressed by index (`x` = 0, `o` = 1) when reading and
/// writing payoff vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    X,
    O,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        self.to_cell().to_char()
    }

    /// Position of this player's component in a payoff vector
    pub fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::X),
            1 => Some(Player::O),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" | "0" => Ok(Player::X),
            "o" | "O" | "1" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayer {
                player: other.to_string(),
                expected: "x/0, o/1".to_string(),
            }),
        }
    }
}

/// A named square of the board, in reading order from top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Square {
    TL,
    TM,
    TR,
    ML,
    MM,
    MR,
    BL,
    BM,
    BR,
}

impl Square {
    pub const ALL: [Square; 9] = [
        Square::TL,
        Square::TM,
        Square::TR,
        Square::ML,
        Square::MM,
        Square::MR,
        Square::BL,
        Square::BM,
        Square::BR,
    ];

    /// Board index (0-8)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Square> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Square::TL => "TL",
            Square::TM => "TM",
            Square::TR => "TR",
            Square::ML => "ML",
            Square::MM => "MM",
            Square::MR => "MR",
            Square::BL => "BL",
            Square::BM => "BM",
            Square::BR => "BR",
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The nine cells of a board.
///
/// Whose turn it is lives outside the board: the game tree tracks the mover
/// per position, and a starting board may be handed to either player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Parse a board from its 9-character representation, top-left to
    /// bottom-right (`.` empty, `x`, `o`; case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns error if the string does not hold exactly 9 cells or any
    /// character is not a valid cell representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use spne::tictactoe::{Board, Cell, Square};
    ///
    /// let board = Board::from_string("xx.oo....").unwrap();
    /// assert_eq!(board.get(Square::TL), Cell::X);
    /// assert_eq!(board.free_squares().len(), 5);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get the cell at a square
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    /// Return a new board with `player`'s mark at `square`
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, square: Square, player: Player) -> Board {
        let mut next = *self;
        next.cells[square.index()] = player.to_cell();
        next
    }

    /// Empty squares in board order
    pub fn free_squares(&self) -> Vec<Square> {
        Square::ALL
            .into_iter()
            .filter(|&sq| self.get(sq) == Cell::Empty)
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Number of marks placed by `player`
    pub fn count(&self, player: Player) -> usize {
        let target = player.to_cell();
        self.cells.iter().filter(|&&c| c == target).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        super::lines::winner(&self.cells)
    }

    /// Squares whose contents differ between two boards
    pub fn changed_squares(&self, other: &Board) -> Vec<Square> {
        Square::ALL
            .into_iter()
            .filter(|&sq| self.get(sq) != other.get(sq))
            .collect()
    }

    /// Compact single-line encoding, e.g. `xx.oo....`
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}
