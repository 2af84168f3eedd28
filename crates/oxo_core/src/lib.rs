//! Noughts-and-crosses board classification.
//!
//! Classifies the state of a tic-tac-toe board supplied as a flat textual
//! encoding: nine characters of `X`, `O`, and `_` (case-insensitive),
//! row-major from the top-left square to the bottom-right.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Tally`]
//! - **Rules**: win detection over [`WIN_LINES`], turn-parity validation
//! - **Pipeline**: [`classify`] - a pure total function from any input
//!   string to one of the seven [`BoardState`] values
//!
//! # Example
//!
//! ```
//! use oxo_core::{classify, BoardState};
//!
//! assert_eq!(classify("XXXOXOO__"), BoardState::CrossesWin);
//! assert_eq!(classify("_________"), BoardState::CrossesTurnNext);
//! assert_eq!(classify("not a board"), BoardState::InvalidGame);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod classify;
mod rules;
mod state;
mod types;

// Crate-level exports - classification pipeline
pub use classify::classify;

// Crate-level exports - rules
pub use rules::{RuleViolation, WIN_LINES, check_winner, next_player, validate_turn_parity};

// Crate-level exports - classification result
pub use state::BoardState;

// Crate-level exports - domain types
pub use types::{Board, Player, Square, Tally};
