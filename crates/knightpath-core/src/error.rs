//! Error types and exit codes for knightpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including "no path found")
//! - 2: Usage error (bad flags, malformed or off-board squares)
//! - 3: Data error (unreadable or invalid graph/config files, unknown nodes)
//!
//! The unlimited search entry points never fail: an invalid source or an
//! unreachable target is reported as `None`. The `*_with_limits` variants
//! add one engine error, `BudgetExceeded`. Everything else here covers input,
//! files and output around the engine.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad graph or config file (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur around a search
#[derive(Error, Debug)]
pub enum KnightError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid square: {input} ({reason})")]
    InvalidSquare { input: String, reason: String },

    #[error("square {square} is off the 8x8 board")]
    OffBoard { square: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("node not found in graph: {node}")]
    UnknownNode { node: String },

    #[error("node {node} lists neighbor {neighbor}, which has no adjacency entry")]
    DanglingNeighbor { node: String, neighbor: String },

    #[error("invalid graph in {path:?}: {reason}")]
    InvalidGraph { path: PathBuf, reason: String },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("no path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("search from {source_node} exceeded the node budget of {max_nodes}")]
    BudgetExceeded { source_node: String, max_nodes: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl KnightError {
    /// Create an error for a square string that does not parse
    pub fn invalid_square(input: &str, reason: impl std::fmt::Display) -> Self {
        KnightError::InvalidSquare {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        KnightError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a graph file that could not be used
    pub fn invalid_graph(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        KnightError::InvalidGraph {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a search that came back empty
    pub fn no_path(from: impl std::fmt::Display, to: impl std::fmt::Display) -> Self {
        KnightError::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            KnightError::UnknownFormat(_)
            | KnightError::UsageError(_)
            | KnightError::InvalidSquare { .. }
            | KnightError::OffBoard { .. }
            | KnightError::InvalidValue { .. } => ExitCode::Usage,

            KnightError::UnknownNode { .. }
            | KnightError::DanglingNeighbor { .. }
            | KnightError::InvalidGraph { .. }
            | KnightError::InvalidConfig { .. } => ExitCode::Data,

            KnightError::NoPath { .. }
            | KnightError::BudgetExceeded { .. }
            | KnightError::Io(_)
            | KnightError::Json(_)
            | KnightError::Toml(_)
            | KnightError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            KnightError::UnknownFormat(_) => "unknown_format",
            KnightError::UsageError(_) => "usage_error",
            KnightError::InvalidSquare { .. } => "invalid_square",
            KnightError::OffBoard { .. } => "off_board",
            KnightError::InvalidValue { .. } => "invalid_value",
            KnightError::UnknownNode { .. } => "unknown_node",
            KnightError::DanglingNeighbor { .. } => "dangling_neighbor",
            KnightError::InvalidGraph { .. } => "invalid_graph",
            KnightError::InvalidConfig { .. } => "invalid_config",
            KnightError::NoPath { .. } => "no_path",
            KnightError::BudgetExceeded { .. } => "budget_exceeded",
            KnightError::Io(_) => "io_error",
            KnightError::Json(_) => "json_error",
            KnightError::Toml(_) => "toml_error",
            KnightError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for knightpath operations
pub type Result<T> = std::result::Result<T, KnightError>;
