//! Game rules for board classification.
//!
//! This module contains pure functions for evaluating a parsed board
//! according to noughts-and-crosses rules. Rules are separated from board
//! storage so the pipeline can compose them in validation order.

pub mod turns;
pub mod win;

pub use turns::{RuleViolation, next_player, validate_turn_parity};
pub use win::{WIN_LINES, check_winner};
