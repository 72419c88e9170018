//! Error types for graphwalk.
//!
//! The traversal engine itself is total: an unknown start node simply yields a
//! single visit. Errors only arise at the edges of the library, when text is
//! parsed into node ids, edges or strategies, when a strict duplicate policy
//! refuses an edge, or when configuration cannot be loaded.

use thiserror::Error;

use crate::graph::NodeId;

/// Library error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Text that should name a node is not a non-negative integer.
    #[error("Invalid node id '{0}': expected a non-negative integer")]
    InvalidNode(String),

    /// Text that should describe an edge is malformed.
    #[error("Invalid edge '{0}': expected '<u>-<v>' or '<u>,<v>'")]
    InvalidEdge(String),

    /// Strategy name not recognised.
    #[error("Unknown strategy '{0}': expected one of recursive-dfs, iterative-dfs, bfs")]
    UnknownStrategy(String),

    /// Edge already present and the store rejects duplicates.
    #[error("Edge {0}-{1} already exists")]
    DuplicateEdge(NodeId, NodeId),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(err.to_string())
    }
}

/// Result type alias for graphwalk operations.
pub type Result<T> = std::result::Result<T, Error>;
