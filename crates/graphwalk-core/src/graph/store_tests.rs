//! Tests for GraphStore.

use super::store::{DuplicateEdgePolicy, GraphStore};
use crate::error::Error;

fn build_test_graph() -> GraphStore {
    let mut store = GraphStore::new();
    store.add_edge(1, 2).unwrap();
    store.add_edge(1, 3).unwrap();
    store.add_edge(2, 3).unwrap();
    store
}

#[test]
fn test_new_store_is_empty() {
    let store = GraphStore::new();
    assert!(store.is_empty());
    assert_eq!(store.node_count(), 0);
    assert_eq!(store.edge_count(), 0);
    assert_eq!(store.duplicate_policy(), DuplicateEdgePolicy::AllowParallel);
}

#[test]
fn test_add_edge_is_undirected() {
    let mut store = GraphStore::new();
    assert!(store.add_edge(1, 2).unwrap());

    assert_eq!(store.neighbors_of(1), &[2]);
    assert_eq!(store.neighbors_of(2), &[1]);
    assert!(store.has_edge(1, 2));
    assert!(store.has_edge(2, 1));
}

#[test]
fn test_neighbors_keep_insertion_order() {
    let store = build_test_graph();
    assert_eq!(store.neighbors_of(1), &[2, 3]);
    assert_eq!(store.neighbors_of(2), &[1, 3]);
    assert_eq!(store.neighbors_of(3), &[1, 2]);
}

#[test]
fn test_neighbors_of_unknown_node_is_empty() {
    let store = build_test_graph();
    assert!(store.neighbors_of(999).is_empty());
    assert!(!store.contains_node(999));
    assert_eq!(store.degree(999), 0);
}

#[test]
fn test_counts() {
    let store = build_test_graph();
    assert_eq!(store.node_count(), 3);
    assert_eq!(store.edge_count(), 3);
    assert_eq!(store.degree(1), 2);
}

#[test]
fn test_nodes_in_first_seen_order() {
    let mut store = GraphStore::new();
    store.add_edge(5, 3).unwrap();
    store.add_edge(3, 9).unwrap();
    store.add_edge(1, 5).unwrap();

    let nodes: Vec<u64> = store.nodes().collect();
    assert_eq!(nodes, vec![5, 3, 9, 1]);
}

#[test]
fn test_edges_in_insertion_order() {
    let store = build_test_graph();
    let edges: Vec<(u64, u64)> = store.edges().collect();
    assert_eq!(edges, vec![(1, 2), (1, 3), (2, 3)]);
}

#[test]
fn test_self_loop_recorded_once() {
    let mut store = GraphStore::new();
    assert!(store.add_edge(4, 4).unwrap());

    assert_eq!(store.neighbors_of(4), &[4]);
    assert_eq!(store.node_count(), 1);
    assert_eq!(store.edge_count(), 1);
}

#[test]
fn test_parallel_edges_allowed_by_default() {
    let mut store = GraphStore::new();
    store.add_edge(1, 2).unwrap();
    assert!(store.add_edge(2, 1).unwrap());

    assert_eq!(store.neighbors_of(1), &[2, 2]);
    assert_eq!(store.neighbors_of(2), &[1, 1]);
    assert_eq!(store.edge_count(), 2);
}

#[test]
fn test_ignore_policy_is_silent_noop() {
    let mut store = GraphStore::with_policy(DuplicateEdgePolicy::Ignore);
    assert!(store.add_edge(1, 2).unwrap());
    assert!(!store.add_edge(2, 1).unwrap());
    assert!(!store.add_edge(1, 2).unwrap());

    assert_eq!(store.neighbors_of(1), &[2]);
    assert_eq!(store.edge_count(), 1);
}

#[test]
fn test_reject_policy_errors_on_duplicate() {
    let mut store = GraphStore::with_policy(DuplicateEdgePolicy::Reject);
    store.add_edge(1, 2).unwrap();

    let result = store.add_edge(2, 1);
    assert!(matches!(result, Err(Error::DuplicateEdge(2, 1))));
    assert_eq!(store.edge_count(), 1);
}

#[test]
fn test_reset_clears_everything() {
    let mut store = build_test_graph();
    store.reset();

    assert!(store.is_empty());
    assert_eq!(store.node_count(), 0);
    assert!(store.neighbors_of(1).is_empty());

    // Store is usable again after reset.
    store.add_edge(7, 8).unwrap();
    assert_eq!(store.neighbors_of(7), &[8]);
}

#[test]
fn test_reset_keeps_policy() {
    let mut store = GraphStore::with_policy(DuplicateEdgePolicy::Reject);
    store.add_edge(1, 2).unwrap();
    store.reset();
    assert_eq!(store.duplicate_policy(), DuplicateEdgePolicy::Reject);
}

#[test]
fn test_from_edges() {
    let store = GraphStore::from_edges([(0, 1), (0, 2)]).unwrap();
    assert_eq!(store.neighbors_of(0), &[1, 2]);
    assert_eq!(store.edge_count(), 2);
}
