//! Turn-parity rules.
//!
//! Crosses always moves first, so on any board reachable through legal play
//! the crosses count equals the noughts count or exceeds it by exactly one.

use crate::types::{Player, Tally};
use derive_more::{Display, Error};
use tracing::instrument;

/// Violation of the turn-order rules by a well-formed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum RuleViolation {
    /// Noughts have moved more times than crosses.
    #[display("noughts have moved {noughts} times to crosses' {crosses}")]
    NoughtsAhead {
        /// Number of crosses on the board.
        crosses: usize,
        /// Number of noughts on the board.
        noughts: usize,
    },

    /// Crosses are more than one move ahead of noughts.
    #[display("crosses have moved {crosses} times to noughts' {noughts}")]
    CrossesAhead {
        /// Number of crosses on the board.
        crosses: usize,
        /// Number of noughts on the board.
        noughts: usize,
    },
}

/// Validates the turn-order rules for a tally.
#[instrument]
pub fn validate_turn_parity(tally: &Tally) -> Result<(), RuleViolation> {
    // X goes first, so O can never lead the count.
    if tally.noughts > tally.crosses {
        return Err(RuleViolation::NoughtsAhead {
            crosses: tally.crosses,
            noughts: tally.noughts,
        });
    }

    // X never deviates more than one turn from O.
    if tally.crosses > tally.noughts + 1 {
        return Err(RuleViolation::CrossesAhead {
            crosses: tally.crosses,
            noughts: tally.noughts,
        });
    }

    Ok(())
}

/// Returns the player whose move is next.
///
/// Equal counts mean noughts just moved (or nobody has yet), so crosses is
/// up; otherwise crosses leads by one and noughts is up.
#[instrument]
pub fn next_player(tally: &Tally) -> Player {
    if tally.crosses == tally.noughts {
        Player::Crosses
    } else {
        Player::Noughts
    }
}
