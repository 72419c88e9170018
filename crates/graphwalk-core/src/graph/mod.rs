//! Undirected graph store and traversal engine.
//!
//! Build a [`GraphStore`] with [`GraphStore::add_edge`], then pull
//! [`TraversalEvent`]s from [`TraversalEngine::run`] one at a time.
//!
//! # Example
//!
//! ```rust
//! use graphwalk_core::graph::{GraphStore, Strategy, TraversalEngine, TraversalEvent};
//!
//! let mut store = GraphStore::new();
//! store.add_edge(0, 1).unwrap();
//! store.add_edge(1, 2).unwrap();
//!
//! let engine = TraversalEngine::new(&store);
//! let mut run = engine.run(Strategy::Bfs, 0);
//!
//! assert_eq!(run.next(), Some(TraversalEvent::NodeVisited { node: 0 }));
//! assert_eq!(run.next(), Some(TraversalEvent::EdgeTraversed { from: 0, to: 1 }));
//! assert_eq!(run.next(), Some(TraversalEvent::NodeVisited { node: 1 }));
//! // Dropping `run` here cancels the rest of the traversal.
//! ```

mod store;
pub mod traversal;
mod types;
mod visited;

#[cfg(test)]
mod store_tests;

pub use store::{DuplicateEdgePolicy, GraphStore};
pub use traversal::{Traversal, TraversalEngine, TraversalOptions};
pub use types::{parse_edge, parse_node, NodeId, Strategy, TraversalEvent};
