//! Knightpath Core Library
//!
//! Breadth-first search over explicit adjacency-list graphs and over the
//! implicit graph of knight moves on an 8x8 board.

pub mod board;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;

pub use board::{knight_moves, Square};
pub use graph::{shortest_distances, shortest_path};
