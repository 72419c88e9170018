//! Lazy graph traversal (recursive DFS, iterative DFS, BFS).
//!
//! [`TraversalEngine::run`] returns a [`Traversal`], an iterator that computes
//! one step of the chosen strategy each time the consumer asks for an event.
//! Dropping the iterator cancels the run; nothing else needs tearing down.
//!
//! # Edge events
//!
//! Every non-start node is announced by `EdgeTraversed { from, to }` followed
//! immediately by `NodeVisited { node: to }`, where `from` is the node whose
//! expansion produced the frontier entry that was consumed. Iterative DFS
//! therefore emits its edges at pop time, from the parent carried on the
//! stack; that parent is always the most recently visited neighbor, which is
//! exactly the node recursive DFS descends from, so both depth-first variants
//! emit identical sequences. [`TraversalOptions::iterative_edge_events`] turns
//! iterative DFS edge events off.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::store::GraphStore;
use super::types::{NodeId, Strategy, TraversalEvent};
use super::visited::VisitationRecord;

/// Per-engine traversal switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Emit `EdgeTraversed` events from iterative DFS.
    pub iterative_edge_events: bool,
}

impl Default for TraversalOptions {
    fn default() -> Self {
        Self {
            iterative_edge_events: true,
        }
    }
}

/// Runs traversals over a borrowed [`GraphStore`].
///
/// The store stays borrowed for as long as any [`Traversal`] produced here is
/// alive, so it cannot be mutated mid-run.
///
/// # Example
///
/// ```rust
/// use graphwalk_core::graph::{GraphStore, Strategy, TraversalEngine};
///
/// let store = GraphStore::from_edges([(0, 1), (0, 2), (1, 3)]).unwrap();
/// let engine = TraversalEngine::new(&store);
///
/// assert_eq!(engine.visitation_order(Strategy::RecursiveDfs, 0), vec![0, 1, 3, 2]);
/// assert_eq!(engine.visitation_order(Strategy::Bfs, 0), vec![0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TraversalEngine<'g> {
    graph: &'g GraphStore,
    options: TraversalOptions,
}

impl<'g> TraversalEngine<'g> {
    /// Creates an engine with default options.
    #[must_use]
    pub fn new(graph: &'g GraphStore) -> Self {
        Self::with_options(graph, TraversalOptions::default())
    }

    /// Creates an engine with explicit options.
    #[must_use]
    pub fn with_options(graph: &'g GraphStore, options: TraversalOptions) -> Self {
        Self { graph, options }
    }

    /// Returns the options in effect.
    #[must_use]
    pub fn options(&self) -> TraversalOptions {
        self.options
    }

    /// Starts a traversal from `start`.
    ///
    /// Nothing is computed until the first event is requested. A start node
    /// with no recorded edges yields exactly one `NodeVisited`.
    #[must_use]
    pub fn run(&self, strategy: Strategy, start: NodeId) -> Traversal<'g> {
        Traversal::new(self.graph, strategy, start, self.edge_events(strategy))
    }

    /// Runs a traversal to completion and returns the visited nodes in order.
    #[must_use]
    pub fn visitation_order(&self, strategy: Strategy, start: NodeId) -> Vec<NodeId> {
        self.run(strategy, start).nodes().collect()
    }

    fn edge_events(&self, strategy: Strategy) -> bool {
        match strategy {
            Strategy::IterativeDfs => self.options.iterative_edge_events,
            Strategy::RecursiveDfs | Strategy::Bfs => true,
        }
    }
}

/// Stack frame of the depth-first pre-order walk: a node and the index of
/// the next neighbor to consider.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: NodeId,
    next: usize,
}

/// Frontier entry carrying the node that discovered it.
#[derive(Debug, Clone, Copy)]
struct Discovery {
    parent: Option<NodeId>,
    node: NodeId,
}

#[derive(Debug)]
enum Frontier {
    Recursive {
        seed: Option<NodeId>,
        stack: Vec<Frame>,
    },
    Iterative(Vec<Discovery>),
    Breadth(VecDeque<Discovery>),
}

/// Lazy event sequence of one traversal run.
///
/// Not restartable: call [`TraversalEngine::run`] again for a fresh run.
#[derive(Debug)]
pub struct Traversal<'g> {
    graph: &'g GraphStore,
    strategy: Strategy,
    start: NodeId,
    visited: VisitationRecord,
    frontier: Frontier,
    /// Visit that completes an already-returned edge event.
    pending: Option<TraversalEvent>,
    edge_events: bool,
    emitted: usize,
    finished: bool,
}

impl<'g> Traversal<'g> {
    fn new(graph: &'g GraphStore, strategy: Strategy, start: NodeId, edge_events: bool) -> Self {
        let mut visited = VisitationRecord::new();
        let seed = Discovery {
            parent: None,
            node: start,
        };
        let frontier = match strategy {
            Strategy::RecursiveDfs => Frontier::Recursive {
                seed: Some(start),
                stack: Vec::new(),
            },
            Strategy::IterativeDfs => Frontier::Iterative(vec![seed]),
            Strategy::Bfs => {
                // BFS marks on enqueue, the start included.
                visited.try_visit(start);
                Frontier::Breadth(VecDeque::from([seed]))
            }
        };

        tracing::debug!(%strategy, start, "traversal started");

        Self {
            graph,
            strategy,
            start,
            visited,
            frontier,
            pending: None,
            edge_events,
            emitted: 0,
            finished: false,
        }
    }

    /// Strategy driving this run.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Node the run started from.
    #[must_use]
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Number of `NodeVisited` events returned so far.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.emitted
    }

    /// Returns true after `next` has returned `None` once.
    ///
    /// The last event does not flip it: iterative DFS may still hold stale
    /// stack entries at that point, and only the next pull discards them.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Adapts the run to yield only visited node ids.
    pub fn nodes(self) -> impl Iterator<Item = NodeId> + 'g {
        self.filter_map(|event| event.visited_node())
    }

    /// Advances the frontier by one discovery.
    fn step(&mut self) -> Option<Discovery> {
        let graph = self.graph;
        let visited = &mut self.visited;

        match &mut self.frontier {
            Frontier::Recursive { seed, stack } => {
                if let Some(start) = seed.take() {
                    visited.try_visit(start);
                    stack.push(Frame {
                        node: start,
                        next: 0,
                    });
                    return Some(Discovery {
                        parent: None,
                        node: start,
                    });
                }

                while let Some(frame) = stack.last_mut() {
                    let current = frame.node;
                    match graph.neighbors_of(current).get(frame.next) {
                        Some(&neighbor) => {
                            frame.next += 1;
                            if visited.try_visit(neighbor) {
                                stack.push(Frame {
                                    node: neighbor,
                                    next: 0,
                                });
                                return Some(Discovery {
                                    parent: Some(current),
                                    node: neighbor,
                                });
                            }
                        }
                        None => {
                            stack.pop();
                        }
                    }
                }
                None
            }
            Frontier::Iterative(stack) => {
                while let Some(entry) = stack.pop() {
                    if !visited.try_visit(entry.node) {
                        continue;
                    }
                    for &neighbor in graph.neighbors_of(entry.node).iter().rev() {
                        stack.push(Discovery {
                            parent: Some(entry.node),
                            node: neighbor,
                        });
                    }
                    return Some(entry);
                }
                None
            }
            Frontier::Breadth(queue) => {
                let entry = queue.pop_front()?;
                for &neighbor in graph.neighbors_of(entry.node) {
                    if visited.try_visit(neighbor) {
                        queue.push_back(Discovery {
                            parent: Some(entry.node),
                            node: neighbor,
                        });
                    }
                }
                Some(entry)
            }
        }
    }
}

impl Iterator for Traversal<'_> {
    type Item = TraversalEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.take() {
            self.emitted += 1;
            tracing::trace!(%event, "traversal event");
            return Some(event);
        }

        let Some(entry) = self.step() else {
            if !self.finished {
                self.finished = true;
                tracing::debug!(
                    strategy = %self.strategy,
                    start = self.start,
                    visited = self.emitted,
                    discovered = self.visited.len(),
                    "traversal exhausted"
                );
            }
            return None;
        };

        let visit = TraversalEvent::NodeVisited { node: entry.node };
        let event = match entry.parent {
            Some(from) if self.edge_events => {
                debug_assert!(self.visited.is_visited(from));
                self.pending = Some(visit);
                TraversalEvent::EdgeTraversed { from, to: entry.node }
            }
            _ => {
                self.emitted += 1;
                visit
            }
        };
        tracing::trace!(%event, "traversal event");
        Some(event)
    }
}

impl FusedIterator for Traversal<'_> {}
