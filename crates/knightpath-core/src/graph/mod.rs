//! Graph traversal and path-finding operations
//!
//! Provides breadth-first search over pluggable graph sources:
//! - Distance mode for shortest hop counts from a source
//! - Path mode for the shortest node sequence between two nodes
//! - Explicit adjacency lists and an on-demand knight-move board as providers

pub mod adjacency;
pub mod algos;
pub mod bfs;
pub mod knight;
pub mod traversal;
pub mod types;

pub use adjacency::AdjacencyGraph;
pub use algos::{shortest_distances, shortest_distances_with_limits};
pub use bfs::{find_path, find_path_with_limits};
pub use knight::{shortest_path, shortest_path_with_limits, KnightBoard};
pub use traversal::GraphProvider;
pub use types::{Distances, SearchLimits, SearchPath};
