//! Explicit adjacency-list graphs

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{KnightError, Result};
use crate::graph::GraphProvider;

/// A fixed graph backed by per-node neighbor lists
///
/// Every node referenced as a neighbor must have its own entry (possibly
/// empty); construction rejects graphs that break this, so the search engine
/// never looks up an undefined neighbor list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyGraph<N: Eq + Hash> {
    adjacency: HashMap<N, Vec<N>>,
}

impl<N: Clone + Eq + Hash + Debug> AdjacencyGraph<N> {
    /// Build a graph from `(node, neighbors)` entries.
    ///
    /// A node listed twice keeps its last neighbor list.
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, Vec<N>)>,
    {
        let adjacency: HashMap<N, Vec<N>> = entries.into_iter().collect();

        for (node, neighbors) in &adjacency {
            if let Some(missing) = neighbors.iter().find(|n| !adjacency.contains_key(*n)) {
                return Err(KnightError::DanglingNeighbor {
                    node: format!("{:?}", node),
                    neighbor: format!("{:?}", missing),
                });
            }
        }

        Ok(AdjacencyGraph { adjacency })
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }
}

impl AdjacencyGraph<String> {
    /// Parse a label graph from a JSON object of `"node": ["neighbor", ...]`
    pub fn from_json_str(content: &str) -> Result<Self> {
        let entries: BTreeMap<String, Vec<String>> = serde_json::from_str(content)?;
        Self::new(entries)
    }

    /// Parse a label graph from a TOML table of `node = ["neighbor", ...]`
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let entries: BTreeMap<String, Vec<String>> = toml::from_str(content)?;
        Self::new(entries)
    }
}

impl<N: Clone + Eq + Hash + Debug> GraphProvider for AdjacencyGraph<N> {
    type Node = N;

    fn neighbors(&self, node: &N) -> Vec<N> {
        match self.adjacency.get(node) {
            Some(neighbors) => neighbors.clone(),
            None => {
                tracing::warn!(node = ?node, "neighbor lookup for node outside graph");
                Vec::new()
            }
        }
    }

    fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(entries: &[(&str, &[&str])]) -> Vec<(String, Vec<String>)> {
        entries
            .iter()
            .map(|(node, neighbors)| {
                (
                    node.to_string(),
                    neighbors.iter().map(|n| n.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_neighbors_preserve_order() {
        let graph = AdjacencyGraph::new(labels(&[
            ("A", &["C", "B"]),
            ("B", &[]),
            ("C", &["B"]),
        ]))
        .unwrap();

        assert_eq!(graph.neighbors(&"A".to_string()), vec!["C", "B"]);
        assert!(graph.neighbors(&"B".to_string()).is_empty());
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_dangling_neighbor_rejected() {
        let err = AdjacencyGraph::new(labels(&[("A", &["B"])])).unwrap_err();
        match err {
            KnightError::DanglingNeighbor { node, neighbor } => {
                assert_eq!(node, "\"A\"");
                assert_eq!(neighbor, "\"B\"");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_contains() {
        let graph = AdjacencyGraph::new(vec![(1u32, vec![2]), (2, vec![])]).unwrap();
        assert!(graph.contains(&1));
        assert!(!graph.contains(&3));
        assert!(graph.neighbors(&3).is_empty());
    }

    #[test]
    fn test_from_json() {
        let graph = AdjacencyGraph::from_json_str(r#"{"A": ["B"], "B": []}"#).unwrap();
        assert_eq!(graph.neighbors(&"A".to_string()), vec!["B"]);
    }

    #[test]
    fn test_from_toml() {
        let graph = AdjacencyGraph::from_toml_str("A = [\"B\", \"C\"]\nB = []\nC = [\"A\"]\n")
            .unwrap();
        assert_eq!(graph.neighbors(&"A".to_string()), vec!["B", "C"]);
        assert_eq!(graph.neighbors(&"C".to_string()), vec!["A"]);
    }

    #[test]
    fn test_from_json_wrong_shape() {
        let err = AdjacencyGraph::from_json_str(r#"{"A": "B"}"#).unwrap_err();
        assert!(matches!(err, KnightError::Json(_)));
    }
}
