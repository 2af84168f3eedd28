//! Core domain types for board classification.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Crosses (`X`), always moves first.
    Crosses,
    /// Noughts (`O`), always moves second.
    Noughts,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Crosses => Player::Noughts,
            Player::Noughts => Player::Crosses,
        }
    }
}

/// A single square of the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square, encoded as `_`.
    Blank,
    /// Square holding a player's mark.
    Marked(Player),
}

impl Square {
    /// Parses a square from its encoding character.
    ///
    /// `x`/`o` are accepted alongside `X`/`O`; any other character is not
    /// part of the encoding alphabet.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Square::Marked(Player::Crosses)),
            'O' | 'o' => Some(Square::Marked(Player::Noughts)),
            '_' => Some(Square::Blank),
            _ => None,
        }
    }

    /// Returns the canonical (upper-case) encoding character.
    pub fn to_char(self) -> char {
        match self {
            Square::Blank => '_',
            Square::Marked(Player::Crosses) => 'X',
            Square::Marked(Player::Noughts) => 'O',
        }
    }
}

/// 3x3 board parsed from a row-major encoding.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Parses a board from a 9-character encoding.
    ///
    /// Returns `None` when the encoding is not exactly 9 characters long or
    /// contains a character outside `{X, O, _}` (case-insensitive).
    pub fn parse(encoding: &str) -> Option<Self> {
        let mut squares = [Square::Blank; 9];
        let mut len = 0;
        for (i, c) in encoding.chars().enumerate() {
            let slot = squares.get_mut(i)?;
            *slot = Square::from_char(c)?;
            len += 1;
        }
        if len != 9 {
            return None;
        }
        Some(Self { squares })
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Counts the marks and blanks on the board.
    pub fn tally(&self) -> Tally {
        let mut crosses = 0;
        let mut noughts = 0;
        let mut blanks = 0;
        for square in &self.squares {
            match square {
                Square::Marked(Player::Crosses) => crosses += 1,
                Square::Marked(Player::Noughts) => noughts += 1,
                Square::Blank => blanks += 1,
            }
        }
        Tally::new(crosses, noughts, blanks)
    }
}

impl std::fmt::Display for Board {
    /// Writes the canonical upper-case encoding.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            write!(f, "{}", square.to_char())?;
        }
        Ok(())
    }
}

/// Mark counts for a board, consumed by the turn-parity rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new, Serialize, Deserialize)]
pub struct Tally {
    /// Number of `X` marks.
    pub crosses: usize,
    /// Number of `O` marks.
    pub noughts: usize,
    /// Number of blank squares.
    pub blanks: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_parsing_is_case_insensitive() {
        assert_eq!(Square::from_char('X'), Some(Square::Marked(Player::Crosses)));
        assert_eq!(Square::from_char('x'), Some(Square::Marked(Player::Crosses)));
        assert_eq!(Square::from_char('O'), Some(Square::Marked(Player::Noughts)));
        assert_eq!(Square::from_char('o'), Some(Square::Marked(Player::Noughts)));
        assert_eq!(Square::from_char('_'), Some(Square::Blank));
    }

    #[test]
    fn test_square_rejects_foreign_characters() {
        for c in ['0', ' ', '-', 'é', 'b'] {
            assert_eq!(Square::from_char(c), None);
        }
    }

    #[test]
    fn test_parse_rejects_wrong_lengths() {
        assert_eq!(Board::parse(""), None);
        assert_eq!(Board::parse("XOX"), None);
        assert_eq!(Board::parse("XOXOOXXOXO"), None);
    }

    #[test]
    fn test_parse_rejects_foreign_characters() {
        assert_eq!(Board::parse("XOX_0_XOX"), None);
    }

    #[test]
    fn test_display_normalizes_case() {
        let board = Board::parse("xoxxoooxx").unwrap();
        assert_eq!(board.to_string(), "XOXXOOOXX");
    }

    #[test]
    fn test_tally_counts_marks_and_blanks() {
        let tally = Board::parse("XXO___O__").unwrap().tally();
        assert_eq!(tally, Tally::new(2, 2, 5));
    }

    #[test]
    fn test_opponent_round_trips() {
        assert_eq!(Player::Crosses.opponent(), Player::Noughts);
        assert_eq!(Player::Noughts.opponent().opponent(), Player::Noughts);
    }
}
