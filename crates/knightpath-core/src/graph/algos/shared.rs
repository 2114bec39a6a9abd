use std::fmt::Debug;

use crate::error::KnightError;
use crate::graph::types::SearchLimits;

/// Check limits and return false if discovering another node is not allowed
pub fn check_limits(discovered: usize, limits: &SearchLimits) -> bool {
    match limits.max_nodes {
        Some(max) => discovered < max,
        None => true,
    }
}

/// Build the error for a search that ran out of node budget
pub fn budget_exceeded<N: Debug>(source: &N, limits: &SearchLimits) -> KnightError {
    let max_nodes = limits.max_nodes.unwrap_or(usize::MAX);
    tracing::warn!(source = ?source, max_nodes, "search exceeded node budget");
    KnightError::BudgetExceeded {
        source_node: format!("{:?}", source),
        max_nodes,
    }
}
