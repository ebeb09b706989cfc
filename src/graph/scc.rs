// src/graph/scc.rs
//! Strongly connected components via Kosaraju's two-pass algorithm.
//!
//! Both depth-first passes use an explicit stack, so deep citation chains
//! cannot exhaust the call stack. Neighbors are visited in adjacency order,
//! which reproduces the visit order of the recursive formulation.

use tracing::debug;

use super::store::CitationGraph;
use crate::types::NodeId;

/// Returns the components in the order their roots are met during the second
/// pass. Every node appears in exactly one component.
#[must_use]
pub fn strongly_connected_components(graph: &CitationGraph) -> Vec<Vec<NodeId>> {
    let n = graph.node_count();
    let forward = successors(graph);

    let mut state = DfsState::new(n);
    for node in graph.node_ids() {
        if !state.is_visited(node) {
            state.walk(node, &forward);
        }
    }
    let finish_order = std::mem::take(&mut state.finished);

    let reversed = transpose(graph);
    let mut state = DfsState::new(n);
    let mut components = Vec::new();
    for &node in finish_order.iter().rev() {
        if !state.is_visited(node) {
            state.walk(node, &reversed);
            components.push(std::mem::take(&mut state.discovered));
        }
    }

    debug!(nodes = n, components = components.len(), "kosaraju finished");
    components
}

/// Reverses every edge. Weights are dropped since only direction matters here.
#[must_use]
pub fn transpose(graph: &CitationGraph) -> Vec<Vec<NodeId>> {
    let n = graph.node_count();
    let mut reversed = vec![Vec::new(); n];
    for (source, edge) in graph.edges() {
        if let Some(list) = reversed.get_mut(edge.target) {
            list.push(source);
        }
    }
    reversed
}

/// Sorts components by size, largest first. Equal sizes keep their order.
#[must_use]
pub fn largest_first(components: &[Vec<NodeId>]) -> Vec<&[NodeId]> {
    let mut ordered: Vec<&[NodeId]> = components.iter().map(Vec::as_slice).collect();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));
    ordered
}

fn successors(graph: &CitationGraph) -> Vec<Vec<NodeId>> {
    graph
        .node_ids()
        .map(|u| {
            graph
                .neighbors(u)
                .iter()
                .map(|e| e.target)
                .filter(|&v| graph.contains(v))
                .collect()
        })
        .collect()
}

struct DfsState {
    visited: Vec<bool>,
    /// Nodes in discovery order since the last `take`.
    discovered: Vec<NodeId>,
    /// Nodes in post-order finish order.
    finished: Vec<NodeId>,
}

impl DfsState {
    fn new(n: usize) -> Self {
        Self {
            visited: vec![false; n],
            discovered: Vec::new(),
            finished: Vec::new(),
        }
    }

    fn is_visited(&self, node: NodeId) -> bool {
        self.visited.get(node).copied().unwrap_or(true)
    }

    fn mark(&mut self, node: NodeId) {
        if let Some(v) = self.visited.get_mut(node) {
            *v = true;
        }
        self.discovered.push(node);
    }

    fn walk(&mut self, root: NodeId, adjacency: &[Vec<NodeId>]) {
        self.mark(root);
        // Each frame is (node, index of the next neighbor to try).
        let mut stack = vec![(root, 0usize)];

        while let Some(frame) = stack.last_mut() {
            let (node, next) = *frame;
            match adjacency.get(node).and_then(|list| list.get(next)) {
                Some(&neighbor) => {
                    frame.1 += 1;
                    if !self.is_visited(neighbor) {
                        self.mark(neighbor);
                        stack.push((neighbor, 0));
                    }
                }
                None => {
                    self.finished.push(node);
                    stack.pop();
                }
            }
        }
    }
}
