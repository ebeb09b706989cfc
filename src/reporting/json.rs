// src/reporting/json.rs
//! Machine-readable path, component and ego-graph reports.

use serde::Serialize;

use crate::graph::queries::EgoGraph;
use crate::graph::{largest_first, CitationGraph, ShortestPaths};
use crate::types::NodeId;

#[derive(Debug, Serialize)]
struct PathStep<'a> {
    id: NodeId,
    title: &'a str,
}

#[derive(Debug, Serialize)]
struct PathReport<'a> {
    source: NodeId,
    target: NodeId,
    reachable: bool,
    /// `None` serializes as `null` for unreachable targets.
    distance: Option<f64>,
    path: Vec<PathStep<'a>>,
}

#[derive(Debug, Serialize)]
struct ComponentReport<'a> {
    size: usize,
    members: Vec<PathStep<'a>>,
}

/// # Errors
/// Returns the serializer error.
pub fn format_path(
    graph: &CitationGraph,
    target: NodeId,
    paths: &ShortestPaths,
) -> serde_json::Result<String> {
    let path = paths.path_to(target).unwrap_or_default();
    let report = PathReport {
        source: paths.source,
        target,
        reachable: paths.is_reachable(target),
        distance: paths.is_reachable(target).then(|| paths.distance(target)),
        path: steps(graph, &path),
    };
    serde_json::to_string_pretty(&report)
}

/// The ego graph as-is: outgoing edges, then incoming `[source, weight]` pairs.
///
/// # Errors
/// Returns the serializer error.
pub fn format_ego(ego: &EgoGraph) -> serde_json::Result<String> {
    serde_json::to_string_pretty(ego)
}

/// Components largest first.
///
/// # Errors
/// Returns the serializer error.
pub fn format_components(
    graph: &CitationGraph,
    components: &[Vec<NodeId>],
) -> serde_json::Result<String> {
    let reports: Vec<ComponentReport> = largest_first(components)
        .into_iter()
        .map(|c| ComponentReport {
            size: c.len(),
            members: steps(graph, c),
        })
        .collect();
    serde_json::to_string_pretty(&reports)
}

fn steps<'a>(graph: &'a CitationGraph, ids: &[NodeId]) -> Vec<PathStep<'a>> {
    ids.iter()
        .map(|&id| PathStep {
            id,
            title: graph.title(id),
        })
        .collect()
}
