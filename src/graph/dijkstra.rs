// src/graph/dijkstra.rs
//! Single-source shortest paths over non-negative edge weights.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use super::store::CitationGraph;
use crate::error::{CitegraphError, Result};
use crate::types::NodeId;

/// Queue entry ordered so that `BinaryHeap` pops the smallest distance first.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    distance: f64,
    node: NodeId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior; node id breaks ties deterministically.
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Result of a Dijkstra run from one source.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    pub source: NodeId,
    /// Indexed by node id; `f64::INFINITY` when unreachable.
    pub distances: Vec<f64>,
    pub predecessors: Vec<Option<NodeId>>,
    /// Nodes in the order they were settled.
    pub settle_order: Vec<NodeId>,
}

impl ShortestPaths {
    /// Distance to `target`; infinite when unreachable or unknown.
    #[must_use]
    pub fn distance(&self, target: NodeId) -> f64 {
        self.distances.get(target).copied().unwrap_or(f64::INFINITY)
    }

    #[must_use]
    pub fn is_reachable(&self, target: NodeId) -> bool {
        self.distance(target).is_finite()
    }

    /// Path from the source to `target`, or `None` when there is no path.
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        self.is_reachable(target)
            .then(|| reconstruct_path(&self.predecessors, target))
    }
}

/// Runs Dijkstra from `source`.
///
/// Stale queue entries are skipped when popped instead of being removed.
///
/// # Errors
/// Returns `UnknownNode` if `source` is not in the graph (always the case for an empty graph).
pub fn shortest_paths(graph: &CitationGraph, source: NodeId) -> Result<ShortestPaths> {
    if !graph.contains(source) {
        return Err(CitegraphError::UnknownNode(source));
    }

    let n = graph.node_count();
    let mut distances = vec![f64::INFINITY; n];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut settle_order = Vec::new();
    let mut queue = BinaryHeap::new();

    if let Some(d) = distances.get_mut(source) {
        *d = 0.0;
    }
    queue.push(QueueEntry {
        distance: 0.0,
        node: source,
    });

    while let Some(QueueEntry { distance, node }) = queue.pop() {
        if distance > distances.get(node).copied().unwrap_or(f64::INFINITY) {
            continue;
        }
        if let Some(done) = settled.get_mut(node) {
            if !*done {
                *done = true;
                settle_order.push(node);
            }
        }
        for edge in graph.neighbors(node) {
            relax(
                edge.target,
                node,
                distance + edge.weight,
                &mut distances,
                &mut predecessors,
                &mut queue,
            );
        }
    }

    debug!(source, settled = settle_order.len(), "dijkstra finished");
    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
        settle_order,
    })
}

fn relax(
    target: NodeId,
    via: NodeId,
    candidate: f64,
    distances: &mut [f64],
    predecessors: &mut [Option<NodeId>],
    queue: &mut BinaryHeap<QueueEntry>,
) {
    // Edges to ids outside the node set are ignored.
    let Some(current) = distances.get_mut(target) else {
        return;
    };
    if candidate < *current {
        *current = candidate;
        if let Some(pred) = predecessors.get_mut(target) {
            *pred = Some(via);
        }
        queue.push(QueueEntry {
            distance: candidate,
            node: target,
        });
    }
}

/// Walks predecessor links back from `target` and returns the source-first path.
///
/// Yields `[target]` when `target` has no predecessor; callers must check
/// reachability before treating the result as a path.
#[must_use]
pub fn reconstruct_path(predecessors: &[Option<NodeId>], target: NodeId) -> Vec<NodeId> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(Some(prev)) = predecessors.get(current) {
        // A well-formed predecessor map is acyclic; guard against a corrupt one.
        if path.len() > predecessors.len() {
            break;
        }
        path.push(*prev);
        current = *prev;
    }
    path.reverse();
    path
}
