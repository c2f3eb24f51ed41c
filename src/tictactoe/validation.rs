//! Starting board validation logic

use log::warn;

use super::board::{Board, Player};

impl Board {
    /// Check that a board can start a game with `mover` to play.
    ///
    /// A board that already holds a complete line is rejected. Piece counts
    /// that do not match alternating play are accepted but logged, since the
    /// solver is well defined for any non-terminal board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::AlreadyWon`] if a player already has three in a row.
    pub fn validate_start(&self, mover: Player) -> Result<(), crate::Error> {
        if let Some(winner) = self.winner() {
            return Err(crate::Error::AlreadyWon {
                board: self.encode(),
                winner: winner.to_char(),
            });
        }

        if !self.turn_consistent_with_counts(mover) {
            warn!(
                "piece counts (x={}, o={}) are unusual for {} to move in '{}'",
                self.count(Player::X),
                self.count(Player::O),
                mover,
                self.encode()
            );
        }

        Ok(())
    }

    /// Whether `mover` could be on turn given the piece counts, allowing
    /// either player to have opened the game.
    pub fn turn_consistent_with_counts(&self, mover: Player) -> bool {
        let own = self.count(mover);
        let other = self.count(mover.opponent());
        own == other || other == own + 1
    }
}
