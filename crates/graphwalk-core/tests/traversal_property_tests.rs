//! Property-based tests for the traversal engine.
//!
//! Random undirected multigraphs (self-loops and parallel edges included) are
//! checked against a naive reachability/distance reference so future changes
//! to frontier handling cannot silently change what a run visits.

use std::collections::{HashMap, HashSet, VecDeque};

use graphwalk_core::{GraphStore, NodeId, Strategy, TraversalEngine, TraversalEvent};
use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq},
    proptest,
    test_runner::Config as ProptestConfig,
};

const MAX_NODE: NodeId = 24;
const PROP_CASES: u32 = 256;

fn edge_list_strategy() -> impl proptest::strategy::Strategy<Value = Vec<(NodeId, NodeId)>> {
    vec((0..MAX_NODE, 0..MAX_NODE), 0..60)
}

fn build_store(edges: &[(NodeId, NodeId)]) -> GraphStore {
    GraphStore::from_edges(edges.iter().copied()).expect("parallel edges allowed")
}

/// Hop distance from `start` to every reachable node, by plain BFS.
fn reference_distances(store: &GraphStore, start: NodeId) -> HashMap<NodeId, usize> {
    let mut dist = HashMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(node) = queue.pop_front() {
        let d = dist[&node];
        for &next in store.neighbors_of(node) {
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

/// Plain call-stack recursion, the depth-first order both DFS variants must reproduce.
fn reference_dfs_events(store: &GraphStore, start: NodeId) -> Vec<TraversalEvent> {
    fn descend(
        store: &GraphStore,
        node: NodeId,
        seen: &mut HashSet<NodeId>,
        events: &mut Vec<TraversalEvent>,
    ) {
        events.push(TraversalEvent::NodeVisited { node });
        for &next in store.neighbors_of(node) {
            if seen.insert(next) {
                events.push(TraversalEvent::EdgeTraversed { from: node, to: next });
                descend(store, next, seen, events);
            }
        }
    }

    let mut seen = HashSet::from([start]);
    let mut events = Vec::new();
    descend(store, start, &mut seen, &mut events);
    events
}

fn visits(events: &[TraversalEvent]) -> Vec<NodeId> {
    events.iter().filter_map(TraversalEvent::visited_node).collect()
}

fn prop_config() -> ProptestConfig {
    ProptestConfig {
        cases: PROP_CASES,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(prop_config())]

    #[test]
    fn test_each_strategy_visits_exactly_the_component(
        edges in edge_list_strategy(),
        start in 0..MAX_NODE,
    ) {
        let store = build_store(&edges);
        let engine = TraversalEngine::new(&store);
        let component: HashSet<NodeId> = reference_distances(&store, start).into_keys().collect();

        for strategy in Strategy::ALL {
            let order = engine.visitation_order(strategy, start);
            let unique: HashSet<NodeId> = order.iter().copied().collect();
            prop_assert_eq!(unique.len(), order.len(), "{} repeated a node", strategy);
            prop_assert_eq!(&unique, &component, "{} visited the wrong set", strategy);
            prop_assert_eq!(order.first().copied(), Some(start));
        }
    }

    #[test]
    fn test_depth_first_variants_match_call_stack_recursion(
        edges in edge_list_strategy(),
        start in 0..MAX_NODE,
    ) {
        let store = build_store(&edges);
        let engine = TraversalEngine::new(&store);

        let expected = reference_dfs_events(&store, start);
        let recursive: Vec<_> = engine.run(Strategy::RecursiveDfs, start).collect();
        let iterative: Vec<_> = engine.run(Strategy::IterativeDfs, start).collect();
        prop_assert_eq!(&recursive, &expected);
        prop_assert_eq!(&iterative, &expected);
    }

    #[test]
    fn test_dfs_descends_into_first_neighbor(
        edges in edge_list_strategy(),
        start in 0..MAX_NODE,
    ) {
        let store = build_store(&edges);
        let engine = TraversalEngine::new(&store);
        let first = store.neighbors_of(start).iter().copied().find(|&n| n != start);

        if let Some(first) = first {
            for strategy in [Strategy::RecursiveDfs, Strategy::IterativeDfs] {
                let order = engine.visitation_order(strategy, start);
                prop_assert_eq!(order.get(1).copied(), Some(first), "{}", strategy);
            }
        }
    }

    #[test]
    fn test_bfs_emits_by_nondecreasing_distance(
        edges in edge_list_strategy(),
        start in 0..MAX_NODE,
    ) {
        let store = build_store(&edges);
        let dist = reference_distances(&store, start);
        let order = TraversalEngine::new(&store).visitation_order(Strategy::Bfs, start);

        for pair in order.windows(2) {
            prop_assert!(dist[&pair[0]] <= dist[&pair[1]], "layer order broken at {:?}", pair);
        }
    }

    #[test]
    fn test_events_are_causal(
        edges in edge_list_strategy(),
        start in 0..MAX_NODE,
    ) {
        let store = build_store(&edges);
        let engine = TraversalEngine::new(&store);

        for strategy in Strategy::ALL {
            let events: Vec<_> = engine.run(strategy, start).collect();
            let mut seen = HashSet::new();
            let mut iter = events.iter().peekable();
            while let Some(event) = iter.next() {
                match *event {
                    TraversalEvent::EdgeTraversed { from, to } => {
                        prop_assert!(seen.contains(&from), "{}: edge from unvisited {}", strategy, from);
                        prop_assert!(store.has_edge(from, to));
                        prop_assert_eq!(iter.peek().map(|next| **next), Some(TraversalEvent::NodeVisited { node: to }));
                    }
                    TraversalEvent::NodeVisited { node } => {
                        prop_assert!(seen.insert(node));
                    }
                }
            }
            // One edge per visited node except the start: a spanning tree.
            let edge_count = events.iter().filter(|e| e.edge().is_some()).count();
            prop_assert_eq!(edge_count + 1, visits(&events).len());
        }
    }

    #[test]
    fn test_runs_are_idempotent(
        edges in edge_list_strategy(),
        start in 0..MAX_NODE,
    ) {
        let store = build_store(&edges);
        let engine = TraversalEngine::new(&store);

        for strategy in Strategy::ALL {
            let first: Vec<_> = engine.run(strategy, start).collect();
            let second: Vec<_> = engine.run(strategy, start).collect();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn test_prefix_of_run_matches_full_run(
        edges in edge_list_strategy(),
        start in 0..MAX_NODE,
        take in 0usize..20,
    ) {
        let store = build_store(&edges);
        let engine = TraversalEngine::new(&store);

        for strategy in Strategy::ALL {
            let full: Vec<_> = engine.run(strategy, start).collect();
            let prefix: Vec<_> = engine.run(strategy, start).take(take).collect();
            prop_assert_eq!(&prefix[..], &full[..take.min(full.len())]);
        }
    }
}

#[test]
fn test_isolated_start_yields_single_visit() {
    let store = build_store(&[(1, 2)]);
    let engine = TraversalEngine::new(&store);
    for strategy in Strategy::ALL {
        let events: Vec<_> = engine.run(strategy, 7).collect();
        assert_eq!(events, vec![TraversalEvent::NodeVisited { node: 7 }]);
    }
}
