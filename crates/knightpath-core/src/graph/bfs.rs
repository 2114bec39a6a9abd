mod path;

use crate::error::Result;
use crate::graph::algos::shared::{budget_exceeded, check_limits};
use crate::graph::types::{SearchLimits, SearchPath};
use crate::graph::GraphProvider;
use std::collections::{HashSet, VecDeque};

pub use path::{reconstruct_path, SearchNode, SearchTree};

/// Find the shortest path from `source` to `target`.
///
/// Returns `None` when either endpoint is not part of the graph or when
/// `target` cannot be reached. Among several shortest paths, the one found
/// depends only on the provider's neighbor order.
pub fn find_path<G: GraphProvider>(
    graph: &G,
    source: &G::Node,
    target: &G::Node,
) -> Option<SearchPath<G::Node>> {
    // Without a node budget the search cannot fail
    find_path_with_limits(graph, source, target, &SearchLimits::UNLIMITED)
        .ok()
        .flatten()
}

/// Path search bounded by `limits`
#[tracing::instrument(level = "debug", skip(graph, limits), fields(max_nodes = ?limits.max_nodes))]
pub fn find_path_with_limits<G: GraphProvider>(
    graph: &G,
    source: &G::Node,
    target: &G::Node,
    limits: &SearchLimits,
) -> Result<Option<SearchPath<G::Node>>> {
    if !graph.contains(source) || !graph.contains(target) {
        tracing::debug!("endpoint is not part of the graph");
        return Ok(None);
    }

    let mut tree = SearchTree::new(source.clone());
    let mut visited: HashSet<G::Node> = HashSet::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited.insert(source.clone());
    queue.push_back(0);

    while let Some(handle) = queue.pop_front() {
        let Some(current) = tree.get(handle).map(|n| n.value.clone()) else {
            continue;
        };
        tracing::trace!(node = ?current, "visit");

        if current == *target {
            let path = SearchPath::new(reconstruct_path(&tree, handle));
            tracing::debug!(
                move_count = path.move_count,
                explored = tree.len(),
                "path found"
            );
            return Ok(Some(path));
        }

        for neighbor in graph.neighbors(&current) {
            // Mark on enqueue so a node reached twice in one level keeps its first parent
            if visited.contains(&neighbor) {
                continue;
            }
            if !check_limits(visited.len(), limits) {
                return Err(budget_exceeded(source, limits));
            }
            visited.insert(neighbor.clone());
            let child = tree.push_child(handle, neighbor);
            queue.push_back(child);
        }
    }

    tracing::debug!(explored = tree.len(), "target unreachable");
    Ok(None)
}
