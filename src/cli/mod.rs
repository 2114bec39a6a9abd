//! CLI argument parsing for knightpath
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --max-nodes

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use knightpath_core::Square;
pub use output::{FormatArg, OutputFormat};
use parse::{parse_max_nodes, parse_square};

/// Knightpath - breadth-first shortest paths for graphs and knight moves
#[derive(Parser, Debug)]
#[command(name = "knightpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the config file setting, then human)
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug details and timings to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "KNIGHTPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum number of nodes a single search may discover
    #[arg(long, global = true, value_parser = parse_max_nodes)]
    pub max_nodes: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the legal knight moves from a square
    Moves {
        /// Square as `x,y` (0-7) or algebraic (`a1`)
        #[arg(value_parser = parse_square, allow_hyphen_values = true)]
        square: Square,
    },

    /// Find the shortest knight path between two squares
    Path {
        /// Starting square
        #[arg(value_parser = parse_square, allow_hyphen_values = true)]
        from: Square,

        /// Destination square
        #[arg(value_parser = parse_square, allow_hyphen_values = true)]
        to: Square,
    },

    /// Compute shortest distances from a node of an adjacency-list graph
    Distances {
        /// Source node label
        source: String,

        /// Graph file (.json, otherwise TOML); uses the built-in sample graph if omitted
        #[arg(long)]
        graph: Option<PathBuf>,
    },
}
