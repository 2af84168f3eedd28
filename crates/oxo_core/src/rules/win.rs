//! Win detection for noughts and crosses.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines over board indices 0-8.
///
/// Declared rows first, then columns, then diagonals, each left-to-right /
/// top-to-bottom. [`check_winner`] scans the table in declaration order and
/// stops at the first match, which keeps results deterministic even for
/// boards that could not arise from legal play.
pub const WIN_LINES: [[usize; 3]; 8] = [
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

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in [`WIN_LINES`] whose three
/// squares hold the same mark, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();
    for [a, b, c] in WIN_LINES {
        let sq = squares[a];
        if sq != Square::Blank && sq == squares[b] && sq == squares[c] {
            return match sq {
                Square::Marked(player) => Some(player),
                Square::Blank => None,
            };
        }
    }

    None
}
