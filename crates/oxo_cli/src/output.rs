//! Output formatting for classification results.
//!
//! The classifier itself never renders anything; this layer decides how a
//! result reaches stdout.

use oxo_core::BoardState;
use serde::Serialize;

/// One classified board, as emitted in `--json` mode.
#[derive(Debug, Serialize)]
pub struct Record<'a> {
    /// The board encoding exactly as supplied.
    pub board: &'a str,
    /// Its classification.
    pub state: BoardState,
}

/// Renders an encoding as a 3-line text grid, row-major.
///
/// Total over arbitrary input: characters are chunked into rows of three
/// and at most three rows are kept, so malformed encodings still render for
/// inspection.
pub fn grid(encoding: &str) -> String {
    let chars: Vec<char> = encoding.chars().collect();
    chars
        .chunks(3)
        .take(3)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_renders_three_rows() {
        assert_eq!(grid("XXXOXOO__"), "XXX\nOXO\nO__");
    }

    #[test]
    fn test_grid_survives_short_input() {
        assert_eq!(grid("XOX"), "XOX");
        assert_eq!(grid("XOXO"), "XOX\nO");
        assert_eq!(grid(""), "");
    }

    #[test]
    fn test_grid_truncates_overlong_input() {
        assert_eq!(grid("XOXOOXXOXO"), "XOX\nOOX\nXOX");
    }

    #[test]
    fn test_json_record_uses_interface_names() {
        let record = Record {
            board: "XXXOXOO__",
            state: BoardState::CrossesWin,
        };
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"board":"XXXOXOO__","state":"CROSSES_WIN"}"#
        );
    }
}
