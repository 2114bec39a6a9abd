//! Knight-move board as a graph provider

use crate::board::{knight_moves, Square};
use crate::error::Result;
use crate::graph::bfs::find_path_with_limits;
use crate::graph::types::SearchLimits;
use crate::graph::{find_path, GraphProvider};

/// The 8x8 board where edges are legal knight moves.
///
/// Neighbors are generated on every lookup; no edge set is stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KnightBoard;

impl GraphProvider for KnightBoard {
    type Node = Square;

    fn neighbors(&self, node: &Square) -> Vec<Square> {
        knight_moves(*node)
    }

    fn contains(&self, node: &Square) -> bool {
        node.is_on_board()
    }
}

/// Shortest knight path from `source` to `target`, both squares included.
///
/// Off-board endpoints are invalid input and yield `None`; any two on-board
/// squares are connected.
pub fn shortest_path(source: Square, target: Square) -> Option<Vec<Square>> {
    find_path(&KnightBoard, &source, &target).map(|path| path.into_nodes())
}

/// [`shortest_path`] bounded by `limits`
pub fn shortest_path_with_limits(
    source: Square,
    target: Square,
    limits: &SearchLimits,
) -> Result<Option<Vec<Square>>> {
    Ok(find_path_with_limits(&KnightBoard, &source, &target, limits)?
        .map(|path| path.into_nodes()))
}
