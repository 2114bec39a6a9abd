use crate::error::Result;
use crate::graph::algos::shared::{budget_exceeded, check_limits};
use crate::graph::types::{Distances, SearchLimits};
use crate::graph::GraphProvider;
use std::collections::VecDeque;

/// State tracked during a distance traversal
struct BfsState<N: Eq + std::hash::Hash> {
    distances: Distances<N>,
    queue: VecDeque<(N, usize)>,
}

impl<N: Clone + Eq + std::hash::Hash> BfsState<N> {
    fn new(source: &N) -> Self {
        let mut queue = VecDeque::new();
        queue.push_back((source.clone(), 0));
        Self {
            distances: Distances::new(source.clone()),
            queue,
        }
    }
}

/// Shortest hop counts from `source` to every node reachable from it.
///
/// Returns `None` if `source` is not part of the graph. Unreachable nodes are
/// simply absent from the result.
pub fn shortest_distances<G: GraphProvider>(
    graph: &G,
    source: &G::Node,
) -> Option<Distances<G::Node>> {
    // Without a node budget the search cannot fail
    shortest_distances_with_limits(graph, source, &SearchLimits::UNLIMITED)
        .ok()
        .flatten()
}

/// Distance traversal bounded by `limits`.
///
/// Fails with `BudgetExceeded` rather than returning a partial map when the
/// graph holds more reachable nodes than `limits.max_nodes` allows.
#[tracing::instrument(level = "debug", skip(graph, limits), fields(max_nodes = ?limits.max_nodes))]
pub fn shortest_distances_with_limits<G: GraphProvider>(
    graph: &G,
    source: &G::Node,
    limits: &SearchLimits,
) -> Result<Option<Distances<G::Node>>> {
    if !graph.contains(source) {
        tracing::debug!("source is not part of the graph");
        return Ok(None);
    }

    let mut state = BfsState::new(source);

    while let Some((current, distance)) = state.queue.pop_front() {
        tracing::trace!(node = ?current, distance, "visit");

        for neighbor in graph.neighbors(&current) {
            if state.distances.contains(&neighbor) {
                continue;
            }
            if !check_limits(state.distances.len(), limits) {
                return Err(budget_exceeded(source, limits));
            }
            state.distances.record(neighbor.clone(), distance + 1);
            state.queue.push_back((neighbor, distance + 1));
        }
    }

    tracing::debug!(
        reached = state.distances.len(),
        max_distance = state.distances.max_distance(),
        "distance traversal complete"
    );
    Ok(Some(state.distances))
}
