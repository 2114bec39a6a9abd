use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// Bounds applied to a single search
///
/// A search never returns partial results: when a limit is hit the search
/// reports an error instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of distinct nodes the search may discover, source included
    pub max_nodes: Option<usize>,
}

impl SearchLimits {
    pub const UNLIMITED: SearchLimits = SearchLimits { max_nodes: None };

    pub fn with_max_nodes(max_nodes: usize) -> Self {
        SearchLimits {
            max_nodes: Some(max_nodes),
        }
    }
}

/// Shortest hop counts from a source, in discovery order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distances<N: Eq + Hash> {
    distances: HashMap<N, usize>,
    order: Vec<N>,
}

impl<N: Clone + Eq + Hash> Distances<N> {
    pub(crate) fn new(source: N) -> Self {
        let mut distances = HashMap::new();
        distances.insert(source.clone(), 0);
        Distances {
            distances,
            order: vec![source],
        }
    }

    /// Record a distance for a node seen for the first time.
    /// Returns false if the node already had one.
    pub(crate) fn record(&mut self, node: N, distance: usize) -> bool {
        if self.distances.contains_key(&node) {
            return false;
        }
        self.distances.insert(node.clone(), distance);
        self.order.push(node);
        true
    }

    /// The node the search started from
    pub fn source(&self) -> &N {
        &self.order[0]
    }

    pub fn get(&self, node: &N) -> Option<usize> {
        self.distances.get(node).copied()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.distances.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Distance of the farthest reachable node
    pub fn max_distance(&self) -> usize {
        self.distances.values().copied().max().unwrap_or(0)
    }

    /// `(node, distance)` pairs in the order nodes were discovered
    pub fn iter(&self) -> impl Iterator<Item = (&N, usize)> + '_ {
        self.order
            .iter()
            .map(move |node| (node, self.distances[node]))
    }

    pub fn into_map(self) -> HashMap<N, usize> {
        self.distances
    }
}

/// A shortest path, source first and target last
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchPath<N> {
    pub nodes: Vec<N>,
    pub move_count: usize,
}

impl<N> SearchPath<N> {
    pub(crate) fn new(nodes: Vec<N>) -> Self {
        let move_count = nodes.len().saturating_sub(1);
        SearchPath { nodes, move_count }
    }

    pub fn source(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn target(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Number of nodes on the path (one more than the move count)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }
}
