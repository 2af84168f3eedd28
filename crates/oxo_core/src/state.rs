//! Classification results for board encodings.

use serde::{Deserialize, Serialize};

/// Classification of a board encoding.
///
/// `Display` yields the stable interface name of each variant
/// (`"CROSSES_TURN_NEXT"`, `"INVALID_GAME"`, ...), and serde uses the same
/// names. Callers consume one of these seven values for any input; the
/// pipeline never fails.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoardState {
    /// Encoding malformed: wrong length or illegal characters.
    InvalidGame,
    /// Well-formed encoding that breaks the turn-order rules.
    BrokenRules,
    /// Unfinished game, crosses to move next.
    CrossesTurnNext,
    /// Unfinished game, noughts to move next.
    NoughtsTurnNext,
    /// Crosses have three in a row.
    CrossesWin,
    /// Noughts have three in a row.
    NoughtsWin,
    /// Board full, no winner.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_match_interface_contract() {
        assert_eq!(BoardState::InvalidGame.to_string(), "INVALID_GAME");
        assert_eq!(BoardState::BrokenRules.to_string(), "BROKEN_RULES");
        assert_eq!(BoardState::CrossesTurnNext.to_string(), "CROSSES_TURN_NEXT");
        assert_eq!(BoardState::NoughtsTurnNext.to_string(), "NOUGHTS_TURN_NEXT");
        assert_eq!(BoardState::CrossesWin.to_string(), "CROSSES_WIN");
        assert_eq!(BoardState::NoughtsWin.to_string(), "NOUGHTS_WIN");
        assert_eq!(BoardState::Draw.to_string(), "DRAW");
    }
}
