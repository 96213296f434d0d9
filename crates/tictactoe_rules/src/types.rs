//! Core domain types for tic-tac-toe.

use crate::error::MarkError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Mark placed on the board by a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Marker {
    /// Cross, always held by the first player.
    #[display("X")]
    X,
    /// Nought, held by the second player.
    #[display("O")]
    O,
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square holding a marker.
    Occupied(Marker),
}

impl Square {
    /// Returns the marker in this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// A square, once marked, stays marked until [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Places `marker` at `index`, reporting why the move was refused.
    ///
    /// # Errors
    ///
    /// - [`MarkError::OutOfRange`] if `index` is not in `0..9`
    /// - [`MarkError::Occupied`] if the square already holds a marker
    #[instrument(skip(self))]
    pub fn try_set_mark(&mut self, index: usize, marker: Marker) -> Result<(), MarkError> {
        let square = self
            .squares
            .get_mut(index)
            .ok_or(MarkError::OutOfRange(index))?;
        if !square.is_empty() {
            return Err(MarkError::Occupied(index));
        }
        *square = Square::Occupied(marker);
        Ok(())
    }

    /// Places `marker` at `index`.
    ///
    /// Returns `false`, leaving the board untouched, when the index is out of
    /// range or the square is taken.
    pub fn set_mark(&mut self, index: usize, marker: Marker) -> bool {
        match self.try_set_mark(index, marker) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Mark rejected");
                false
            }
        }
    }

    /// Checks if no empty squares remain.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; BOARD_SIZE];
    }

    /// Returns all squares as a read-only snapshot.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(marker) => write!(f, "{}", marker)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
