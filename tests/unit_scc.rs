// tests/unit_scc.rs
//! Kosaraju components over built graphs.

mod common;

use std::collections::{HashSet, VecDeque};

use citegraph_core::graph::{strongly_connected_components, CitationGraph, GraphBuilder};

fn reachable_from(g: &CitationGraph, start: usize) -> HashSet<usize> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(u) = queue.pop_front() {
        for e in g.neighbors(u) {
            if seen.insert(e.target) {
                queue.push_back(e.target);
            }
        }
    }
    seen
}

#[test]
fn test_components_partition_nodes() {
    let g = GraphBuilder::new(0.1, 2).build(&common::corpus());
    let comps = strongly_connected_components(&g);

    let mut seen = HashSet::new();
    for c in &comps {
        assert!(!c.is_empty());
        for &n in c {
            assert!(seen.insert(n), "node {n} appears twice");
        }
    }
    assert_eq!(seen.len(), g.node_count());
}

#[test]
fn test_mutual_reachability() {
    let g = GraphBuilder::new(0.1, 2).build(&common::corpus());
    let comps = strongly_connected_components(&g);
    let reach: Vec<HashSet<usize>> = g.node_ids().map(|n| reachable_from(&g, n)).collect();

    let component_of = |n: usize| comps.iter().position(|c| c.contains(&n)).unwrap();
    for u in g.node_ids() {
        for v in g.node_ids() {
            let mutual = reach[u].contains(&v) && reach[v].contains(&u);
            assert_eq!(
                mutual,
                component_of(u) == component_of(v),
                "nodes {u} and {v}"
            );
        }
    }
}

#[test]
fn test_abc_components() {
    let g = GraphBuilder::new(0.2, 5).build(&common::abc());
    let mut comps = strongly_connected_components(&g);
    for c in &mut comps {
        c.sort_unstable();
    }
    // A and B clear the threshold in both directions, C has no edges.
    assert!(comps.contains(&vec![0, 1]));
    assert!(comps.contains(&vec![2]));
    assert_eq!(comps.len(), 2);
}

#[test]
fn test_empty_graph_has_no_components() {
    let g = GraphBuilder::new(0.35, 5).build(&[]);
    assert!(strongly_connected_components(&g).is_empty());
}
