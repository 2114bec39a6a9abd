//! Graph algorithm implementations
//!
//! - `bfs`: Breadth-first distance computation from a single source
//! - `shared`: Limit handling used by every search mode

pub mod bfs;
pub mod shared;

pub use bfs::{shortest_distances, shortest_distances_with_limits};
pub use shared::{budget_exceeded, check_limits};
