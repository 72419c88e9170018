//! Value types shared by the graph store and the traversal engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Identifier of a graph vertex.
///
/// Ids are chosen by the caller; the store never allocates them.
pub type NodeId = u64;

/// Traversal strategy selected for a run.
///
/// The two depth-first variants produce the same visitation order and differ
/// only in frontier discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Depth-first pre-order, expressed with an explicit frame stack.
    #[default]
    RecursiveDfs,
    /// Depth-first with a LIFO frontier and reverse-order pushes.
    IterativeDfs,
    /// Breadth-first with a FIFO frontier, marking nodes at enqueue time.
    Bfs,
}

impl Strategy {
    /// Every strategy, in display order.
    pub const ALL: [Strategy; 3] = [Strategy::RecursiveDfs, Strategy::IterativeDfs, Strategy::Bfs];

    /// Canonical kebab-case name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::RecursiveDfs => "recursive-dfs",
            Strategy::IterativeDfs => "iterative-dfs",
            Strategy::Bfs => "bfs",
        }
    }

    /// Human readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Strategy::RecursiveDfs => "Recursive DFS",
            Strategy::IterativeDfs => "Iterative DFS",
            Strategy::Bfs => "BFS",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "recursive-dfs" | "rdfs" | "dfs" | "recursive" => Ok(Strategy::RecursiveDfs),
            "iterative-dfs" | "idfs" | "iterative" => Ok(Strategy::IterativeDfs),
            "bfs" | "breadth-first" => Ok(Strategy::Bfs),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

/// One observable step of a traversal.
///
/// An `EdgeTraversed { from, to }` is always immediately followed by the
/// `NodeVisited(to)` it leads to. The start node is visited without a
/// preceding edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraversalEvent {
    /// Node became the current node of the traversal.
    NodeVisited {
        /// Visited node.
        node: NodeId,
    },
    /// Edge placed on the traversal path.
    EdgeTraversed {
        /// Already-visited endpoint.
        from: NodeId,
        /// Endpoint about to be visited.
        to: NodeId,
    },
}

impl TraversalEvent {
    /// Returns the visited node, if this is a visit event.
    #[must_use]
    pub fn visited_node(&self) -> Option<NodeId> {
        match *self {
            TraversalEvent::NodeVisited { node } => Some(node),
            TraversalEvent::EdgeTraversed { .. } => None,
        }
    }

    /// Returns the edge endpoints, if this is an edge event.
    #[must_use]
    pub fn edge(&self) -> Option<(NodeId, NodeId)> {
        match *self {
            TraversalEvent::EdgeTraversed { from, to } => Some((from, to)),
            TraversalEvent::NodeVisited { .. } => None,
        }
    }
}

impl fmt::Display for TraversalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalEvent::NodeVisited { node } => write!(f, "visit {node}"),
            TraversalEvent::EdgeTraversed { from, to } => write!(f, "edge {from}-{to}"),
        }
    }
}

/// Parses a node id.
pub fn parse_node(text: &str) -> Result<NodeId> {
    text.trim()
        .parse()
        .map_err(|_| Error::InvalidNode(text.to_string()))
}

/// Parses an edge written as `u-v` or `u,v`.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::graph::parse_edge;
///
/// assert_eq!(parse_edge("0-1").unwrap(), (0, 1));
/// assert_eq!(parse_edge(" 4 , 2 ").unwrap(), (4, 2));
/// assert!(parse_edge("3").is_err());
/// ```
pub fn parse_edge(text: &str) -> Result<(NodeId, NodeId)> {
    let (u, v) = text
        .split_once(|c: char| c == '-' || c == ',')
        .ok_or_else(|| Error::InvalidEdge(text.to_string()))?;
    let u = u.trim().parse().map_err(|_| Error::InvalidEdge(text.to_string()))?;
    let v = v.trim().parse().map_err(|_| Error::InvalidEdge(text.to_string()))?;
    Ok((u, v))
}
