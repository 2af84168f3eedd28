//! Classification pipeline for board encodings.

use crate::rules::{check_winner, next_player, validate_turn_parity};
use crate::state::BoardState;
use crate::types::{Board, Player, Tally};
use tracing::{debug, instrument};

/// Classifies a board encoding.
///
/// Total over arbitrary input: every string maps to exactly one
/// [`BoardState`], malformed input included, and the function never panics.
/// Validation runs in order of priority and cost - the cheap shape checks
/// reject first, then the turn-order rules, and only then are the winning
/// lines scanned.
#[instrument]
pub fn classify(encoding: &str) -> BoardState {
    if encoding.is_empty() {
        return BoardState::InvalidGame;
    }
    if encoding.chars().count() != 9 {
        return BoardState::InvalidGame;
    }
    let Some(board) = Board::parse(encoding) else {
        return BoardState::InvalidGame;
    };

    let tally = board.tally();
    if let Err(violation) = validate_turn_parity(&tally) {
        debug!(%violation, "board breaks turn order");
        return BoardState::BrokenRules;
    }

    // A win needs three marks of one symbol; skip the scan until then.
    if tally.crosses < 3 && tally.noughts < 3 {
        return turn_state(&tally);
    }

    if let Some(winner) = check_winner(&board) {
        return match winner {
            Player::Crosses => BoardState::CrossesWin,
            Player::Noughts => BoardState::NoughtsWin,
        };
    }

    if tally.blanks > 0 {
        turn_state(&tally)
    } else {
        BoardState::Draw
    }
}

/// Maps the next player onto its turn classification.
fn turn_state(tally: &Tally) -> BoardState {
    match next_player(tally) {
        Player::Crosses => BoardState::CrossesTurnNext,
        Player::Noughts => BoardState::NoughtsTurnNext,
    }
}
