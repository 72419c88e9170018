//! # graphwalk core
//!
//! Undirected graph store and traversal engine that turns DFS/BFS into a
//! lazy stream of visualization events.
//!
//! A front end builds a [`GraphStore`] edge by edge, asks the
//! [`TraversalEngine`] for a run and pulls [`TraversalEvent`]s at its own
//! pace, one per animation tick or key press. The engine does no I/O and
//! keeps no timers; abandoning the iterator cancels the run.
//!
//! ## Quick Start
//!
//! ```rust
//! use graphwalk_core::{GraphStore, Strategy, TraversalEngine};
//!
//! fn main() -> graphwalk_core::Result<()> {
//!     let mut store = GraphStore::new();
//!     for (u, v) in [(0, 1), (0, 2), (1, 3), (1, 4), (2, 3), (2, 5), (3, 4)] {
//!         store.add_edge(u, v)?;
//!     }
//!
//!     let engine = TraversalEngine::new(&store);
//!     assert_eq!(engine.visitation_order(Strategy::RecursiveDfs, 0), vec![0, 1, 3, 2, 5, 4]);
//!     assert_eq!(engine.visitation_order(Strategy::IterativeDfs, 0), vec![0, 1, 3, 2, 5, 4]);
//!     assert_eq!(engine.visitation_order(Strategy::Bfs, 0), vec![0, 1, 2, 3, 4, 5]);
//!
//!     for event in engine.run(Strategy::Bfs, 0).take(3) {
//!         println!("{event}");
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(
    test,
    allow(
        clippy::cast_possible_truncation,
        clippy::doc_markdown,
        clippy::uninlined_format_args
    )
)]

pub mod config;
pub mod error;
pub mod graph;

pub use config::{GraphwalkConfig, OutputFormat};
pub use error::{Error, Result};
pub use graph::{
    parse_edge, parse_node, DuplicateEdgePolicy, GraphStore, NodeId, Strategy, Traversal,
    TraversalEngine, TraversalEvent, TraversalOptions,
};

/// Edges of the reference graph used by the demo mode and the test suite:
/// 0–1, 0–2, 1–3, 1–4, 2–3, 2–5, 3–4.
pub const REFERENCE_EDGES: [(NodeId, NodeId); 7] =
    [(0, 1), (0, 2), (1, 3), (1, 4), (2, 3), (2, 5), (3, 4)];

/// Formats a visitation order space-separated, the headless output contract.
///
/// ```rust
/// assert_eq!(graphwalk_core::format_order(&[0, 1, 3]), "0 1 3");
/// ```
#[must_use]
pub fn format_order(order: &[NodeId]) -> String {
    order
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
