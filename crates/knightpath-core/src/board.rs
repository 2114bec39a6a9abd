//! Board coordinates and knight move generation
//!
//! Squares are `(x, y)` pairs on an 8x8 board with both coordinates in
//! `0..=7`. In algebraic notation the file letter `a..h` maps to `x` and the
//! rank digit `1..8` maps to `y`, so `a1` is `(0, 0)` and `h8` is `(7, 7)`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KnightError;

/// Number of files and ranks on the board
pub const BOARD_SIZE: i32 = 8;

/// Knight offsets in canonical enumeration order.
///
/// Search tie-breaking depends on this order, so it must not change.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

/// A board coordinate.
///
/// Any pair of integers can be represented so that off-board input can be
/// expressed and rejected; use [`Square::is_on_board`] to check bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    pub const fn new(x: i32, y: i32) -> Self {
        Square { x, y }
    }

    /// Whether both coordinates fall within `0..BOARD_SIZE`
    pub fn is_on_board(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }

    /// Algebraic name of the square (`"d4"`), or `None` when off the board
    pub fn algebraic(&self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let file = (b'a' + self.x as u8) as char;
        Some(format!("{}{}", file, self.y + 1))
    }

    /// The square `(dx, dy)` away, or `None` if a coordinate overflows
    fn offset(&self, dx: i32, dy: i32) -> Option<Self> {
        Some(Square::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl From<(i32, i32)> for Square {
    fn from((x, y): (i32, i32)) -> Self {
        Square::new(x, y)
    }
}

impl From<Square> for (i32, i32) {
    fn from(square: Square) -> Self {
        (square.x, square.y)
    }
}

impl TryFrom<&[i32]> for Square {
    type Error = KnightError;

    fn try_from(coords: &[i32]) -> Result<Self, Self::Error> {
        match coords {
            [x, y] => Ok(Square::new(*x, *y)),
            _ => Err(KnightError::invalid_square(
                &format!("{:?}", coords),
                format!("expected 2 coordinates, got {}", coords.len()),
            )),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl FromStr for Square {
    type Err = KnightError;

    /// Parse `"x,y"`, `"(x, y)"` or algebraic `"a1"`.
    ///
    /// Off-board values that are well formed (`"9,9"`) parse successfully;
    /// bounds are a separate concern.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(KnightError::invalid_square(s, "empty input"));
        }

        if trimmed.contains(',') {
            let inner = trimmed
                .strip_prefix('(')
                .and_then(|rest| rest.strip_suffix(')'))
                .unwrap_or(trimmed);
            let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
            if parts.len() != 2 {
                return Err(KnightError::invalid_square(
                    s,
                    format!("expected 2 coordinates, got {}", parts.len()),
                ));
            }
            let x = parts[0]
                .parse::<i32>()
                .map_err(|e| KnightError::invalid_square(s, e))?;
            let y = parts[1]
                .parse::<i32>()
                .map_err(|e| KnightError::invalid_square(s, e))?;
            return Ok(Square::new(x, y));
        }

        parse_algebraic(s, trimmed)
    }
}

fn parse_algebraic(original: &str, trimmed: &str) -> Result<Square, KnightError> {
    let mut chars = trimmed.chars();
    let file = chars
        .next()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| ('a'..='h').contains(c))
        .ok_or_else(|| KnightError::invalid_square(original, "file must be a-h"))?;
    let rank: i32 = chars
        .as_str()
        .parse()
        .map_err(|_| KnightError::invalid_square(original, "rank must be 1-8"))?;
    if !(1..=BOARD_SIZE).contains(&rank) {
        return Err(KnightError::invalid_square(original, "rank must be 1-8"));
    }
    Ok(Square::new(file as i32 - 'a' as i32, rank - 1))
}

/// Legal knight destinations from `square`, in canonical offset order.
///
/// The input itself is not bounds-checked; only destinations are filtered.
pub fn knight_moves(square: Square) -> Vec<Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| square.offset(dx, dy))
        .filter(Square::is_on_board)
        .collect()
}

/// Knight moves from a raw coordinate slice.
///
/// Anything other than exactly two coordinates is a dead end and yields no
/// moves.
pub fn knight_moves_from_coords(coords: &[i32]) -> Vec<Square> {
    match Square::try_from(coords) {
        Ok(square) => knight_moves(square),
        Err(_) => Vec::new(),
    }
}

/// Whether `to` is reachable from `from` by a single knight move
pub fn is_knight_move(from: Square, to: Square) -> bool {
    let dx = (i64::from(to.x) - i64::from(from.x)).abs();
    let dy = (i64::from(to.y) - i64::from(from.y)).abs();
    (dx == 1 && dy == 2) || (dx == 2 && dy == 1)
}
