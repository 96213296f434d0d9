//! Move rejection reasons.

use derive_more::{Display, Error};

/// Why a marker could not be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MarkError {
    /// The index is not in `0..9`.
    #[display("Square {} is off the board", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The square already holds a marker.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),
}
