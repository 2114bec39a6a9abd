use knightpath_core::error::{KnightError, Result};
use knightpath_core::{bail_usage, Square};

/// Parse a square from `x,y` or algebraic notation
pub fn parse_square(s: &str) -> std::result::Result<Square, String> {
    s.parse::<Square>().map_err(|e| e.to_string())
}

/// Parse a positive node budget
pub fn parse_max_nodes(s: &str) -> Result<usize> {
    let value: usize = s
        .trim()
        .parse()
        .map_err(|_| KnightError::invalid_value("--max-nodes", s))?;
    if value == 0 {
        bail_usage!("--max-nodes must be at least 1");
    }
    Ok(value)
}
