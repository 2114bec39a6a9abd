//! Command implementations for knightpath

pub mod dispatch;
pub mod distances;
pub mod moves;
pub mod path;

use knightpath_core::error::{KnightError, Result};
use knightpath_core::format::OutputFormat;
use knightpath_core::graph::SearchLimits;
use knightpath_core::Square;

/// Settings shared by every command, resolved from flags and config
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub format: OutputFormat,
    pub quiet: bool,
    pub limits: SearchLimits,
}

/// Reject squares that are well formed but off the board
pub(crate) fn ensure_on_board(square: Square) -> Result<()> {
    if square.is_on_board() {
        Ok(())
    } else {
        Err(KnightError::OffBoard {
            square: square.to_string(),
        })
    }
}

/// `c2 (2, 1)` for on-board squares, `(x, y)` otherwise
pub(crate) fn square_label(square: Square) -> String {
    match square.algebraic() {
        Some(name) => format!("{} {}", name, square),
        None => square.to_string(),
    }
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
