// src/graph/queries.rs
use serde::Serialize;

use super::store::{CitationGraph, Edge};
use crate::error::{CitegraphError, Result};
use crate::text;
use crate::types::NodeId;

/// Nodes whose normalized title contains the normalized `fragment`, in id order.
#[must_use]
pub fn find_by_title(graph: &CitationGraph, fragment: &str, limit: usize) -> Vec<(NodeId, String)> {
    let needle = text::normalize(fragment);
    if needle.is_empty() {
        return Vec::new();
    }
    graph
        .node_ids()
        .filter(|&id| text::normalize(graph.title(id)).contains(&needle))
        .take(limit)
        .map(|id| (id, graph.title(id).to_string()))
        .collect()
}

/// Edges pointing at `node` as `(source, weight)`, in source order.
#[must_use]
pub fn incoming(graph: &CitationGraph, node: NodeId) -> Vec<(NodeId, f64)> {
    graph
        .edges()
        .filter(|(_, edge)| edge.target == node)
        .map(|(source, edge)| (source, edge.weight))
        .collect()
}

/// The immediate neighborhood of one node.
#[derive(Debug, Clone, Serialize)]
pub struct EgoGraph {
    pub center: NodeId,
    pub outgoing: Vec<Edge>,
    pub incoming: Vec<(NodeId, f64)>,
}

/// # Errors
/// Returns `UnknownNode` if `center` is not in the graph.
pub fn ego_graph(graph: &CitationGraph, center: NodeId) -> Result<EgoGraph> {
    if !graph.contains(center) {
        return Err(CitegraphError::UnknownNode(center));
    }
    Ok(EgoGraph {
        center,
        outgoing: graph.neighbors(center).to_vec(),
        incoming: incoming(graph, center),
    })
}

/// Resolves a node selector: a numeric id, otherwise the first title match.
///
/// # Errors
/// Returns `UnknownNode` for an out-of-range id and `NodeNotFound` when no title matches.
pub fn resolve_node(graph: &CitationGraph, selector: &str) -> Result<NodeId> {
    if let Ok(id) = selector.trim().parse::<NodeId>() {
        return if graph.contains(id) {
            Ok(id)
        } else {
            Err(CitegraphError::UnknownNode(id))
        };
    }
    find_by_title(graph, selector, 1)
        .first()
        .map(|(id, _)| *id)
        .ok_or_else(|| CitegraphError::NodeNotFound(selector.to_string()))
}
