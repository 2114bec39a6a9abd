use std::fmt::Debug;
use std::hash::Hash;

/// Trait for providing graph adjacency to the search engine
pub trait GraphProvider {
    /// Node identity; equality is by value
    type Node: Clone + Eq + Hash + Debug;

    /// Neighbors of `node`, always in the same order for the same node
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;

    /// Whether `node` belongs to this graph
    fn contains(&self, node: &Self::Node) -> bool;
}

