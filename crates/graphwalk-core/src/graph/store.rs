//! In-memory undirected adjacency store.
//!
//! Every logical edge `{u, v}` is indexed in both directions so traversal can
//! read a node's neighbors in O(1). Neighbor order is insertion order and is
//! what breaks ties between equally eligible neighbors during traversal.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::types::NodeId;

/// What [`GraphStore::add_edge`] does with an unordered pair that is already
/// present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateEdgePolicy {
    /// Record a parallel edge. Traversal re-offers the neighbor and the
    /// visited check skips it.
    #[default]
    AllowParallel,
    /// Leave the store unchanged and report nothing recorded.
    Ignore,
    /// Return [`Error::DuplicateEdge`].
    Reject,
}

/// Undirected graph as a map from node to ordered neighbor list.
///
/// Nodes exist only through edges: an id that was never an endpoint has no
/// entry and [`GraphStore::neighbors_of`] returns an empty slice for it.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::graph::GraphStore;
///
/// let mut store = GraphStore::new();
/// store.add_edge(0, 1).unwrap();
/// store.add_edge(0, 2).unwrap();
///
/// assert_eq!(store.neighbors_of(0), &[1, 2]);
/// assert_eq!(store.neighbors_of(1), &[0]);
/// assert!(store.neighbors_of(42).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Neighbor lists keyed by node, in first-seen node order.
    adjacency: IndexMap<NodeId, Vec<NodeId>>,
    /// Logical edges in insertion order, as passed to `add_edge`.
    edges: Vec<(NodeId, NodeId)>,
    duplicate_policy: DuplicateEdgePolicy,
}

impl GraphStore {
    /// Creates an empty store that allows parallel edges.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given duplicate-edge policy.
    #[must_use]
    pub fn with_policy(duplicate_policy: DuplicateEdgePolicy) -> Self {
        Self {
            duplicate_policy,
            ..Self::default()
        }
    }

    /// Creates a store pre-populated with `edges`, in order.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        let mut store = Self::new();
        for (u, v) in edges {
            store.add_edge(u, v)?;
        }
        Ok(store)
    }

    /// Returns the duplicate-edge policy in effect.
    #[must_use]
    pub fn duplicate_policy(&self) -> DuplicateEdgePolicy {
        self.duplicate_policy
    }

    // ── Mutation ───────────────────────────────────────────────────────

    /// Adds the undirected edge `{u, v}`.
    ///
    /// Appends `v` to `u`'s neighbors and `u` to `v`'s neighbors, creating
    /// either entry on first use. A self-loop is recorded once. Returns
    /// `true` when the adjacency changed.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateEdge` if the pair is already present and the
    /// policy is [`DuplicateEdgePolicy::Reject`].
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> Result<bool> {
        if self.has_edge(u, v) {
            match self.duplicate_policy {
                DuplicateEdgePolicy::AllowParallel => {}
                DuplicateEdgePolicy::Ignore => {
                    tracing::debug!(u, v, "duplicate edge ignored");
                    return Ok(false);
                }
                DuplicateEdgePolicy::Reject => return Err(Error::DuplicateEdge(u, v)),
            }
        }

        self.adjacency.entry(u).or_default().push(v);
        if u != v {
            self.adjacency.entry(v).or_default().push(u);
        }
        self.edges.push((u, v));

        tracing::debug!(u, v, edges = self.edges.len(), "edge added");
        Ok(true)
    }

    /// Discards all nodes and edges.
    ///
    /// The duplicate policy is kept.
    pub fn reset(&mut self) {
        self.adjacency.clear();
        self.edges.clear();
        tracing::debug!("graph reset");
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Returns the neighbors of `node` in insertion order.
    ///
    /// Unknown nodes have no neighbors.
    #[must_use]
    pub fn neighbors_of(&self, node: NodeId) -> &[NodeId] {
        self.adjacency.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if `node` is an endpoint of at least one edge.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Returns true if `{u, v}` has been recorded.
    #[must_use]
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.neighbors_of(u).contains(&v)
    }

    /// Returns the number of adjacency entries of `node`.
    ///
    /// Parallel edges count individually; a self-loop counts once.
    #[must_use]
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors_of(node).len()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of logical edges, parallel edges included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no edge has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterates over nodes in the order they first appeared.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterates over logical edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.edges.iter().copied()
    }
}
