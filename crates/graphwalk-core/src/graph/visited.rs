//! Per-run visited set.
//!
//! A fresh record is created by every traversal and dropped with it, so no
//! visited state can leak from one run into the next.

use rustc_hash::FxHashSet;

use super::types::NodeId;

/// Nodes already discovered during one traversal run.
#[derive(Debug, Default)]
pub(crate) struct VisitationRecord {
    seen: FxHashSet<NodeId>,
}

impl VisitationRecord {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns `true` iff `node` was not yet visited, marking it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, node: NodeId) -> bool {
        self.seen.insert(node)
    }

    #[inline]
    pub(crate) fn is_visited(&self, node: NodeId) -> bool {
        self.seen.contains(&node)
    }

    pub(crate) fn len(&self) -> usize {
        self.seen.len()
    }
}
