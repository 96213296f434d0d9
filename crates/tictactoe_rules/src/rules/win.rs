//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Marker};
use tracing::instrument;

/// The eight index triples that win the game.
pub const WIN_COMBINATIONS: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first combination holding three equal markers.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let squares = board.squares();
    WIN_COMBINATIONS.into_iter().find(|&[a, b, c]| {
        !squares[a].is_empty() && squares[a] == squares[b] && squares[a] == squares[c]
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(marker)` if that marker has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Marker> {
    winning_line(board).and_then(|[a, _, _]| board.squares()[a].marker())
}
