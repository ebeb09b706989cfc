// src/reporting/console.rs
//! Human-readable views of the citation graph.
//!
//! Every view renders into a `String` so callers decide where it goes.

use std::fmt::Write;

use colored::Colorize;

use crate::config::GraphConfig;
use crate::graph::queries::EgoGraph;
use crate::graph::{largest_first, CitationGraph, ShortestPaths};
use crate::types::NodeId;

/// Truncates to `max` characters on a char boundary.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[must_use]
pub fn render_summary(graph: &CitationGraph, config: &GraphConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} nodes | {} edges | threshold {:.2} | max out-degree {}",
        "CITATION GRAPH".cyan().bold(),
        graph.node_count(),
        graph.edge_count(),
        config.similarity_threshold,
        config.max_out_degree,
    );
    out
}

/// Adjacency list of the first `max_nodes` nodes, `max_neighbors` edges each.
#[must_use]
pub fn render_adjacency(graph: &CitationGraph, max_nodes: usize, max_neighbors: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "Adjacency list (excerpt):".bold());

    for u in graph.node_ids().take(max_nodes) {
        let _ = writeln!(out, "[{u:>3}] {}", truncate(graph.title(u), 90));
        let edges = graph.neighbors(u);
        if edges.is_empty() {
            let _ = writeln!(out, "     {}", "(no outgoing edges)".dimmed());
            continue;
        }
        for edge in edges.iter().take(max_neighbors) {
            let _ = writeln!(
                out,
                "     └─→ [{:>3}] {}  (weight={:.3})",
                edge.target,
                truncate(graph.title(edge.target), 70),
                edge.weight
            );
        }
        if edges.len() > max_neighbors {
            let more = format!("… {} more edges from this node", edges.len() - max_neighbors);
            let _ = writeln!(out, "     {}", more.dimmed());
        }
    }
    out
}

#[must_use]
pub fn render_edges(graph: &CitationGraph, max_edges: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", "Edges (excerpt):".bold());

    for (source, edge) in graph.edges().take(max_edges) {
        let _ = writeln!(
            out,
            "[{source:>3}] → [{:>3}]  w={:.3}  |  {} → {}",
            edge.target,
            edge.weight,
            truncate(graph.title(source), 42),
            truncate(graph.title(edge.target), 42)
        );
    }

    let total = graph.edge_count();
    if total > max_edges {
        let _ = writeln!(out, "{}", format!("… ({} more edges)", total - max_edges).dimmed());
    }
    out
}

#[must_use]
pub fn render_ego(graph: &CitationGraph, ego: &EgoGraph, max_neighbors: usize) -> String {
    let mut out = String::new();
    let center = ego.center;
    let _ = writeln!(
        out,
        "\n{} [{center}] {}",
        "Neighborhood of".bold(),
        graph.title(center)
    );

    let _ = writeln!(out, "  → Outgoing:");
    let outgoing: Vec<(NodeId, f64)> = ego.outgoing.iter().map(|e| (e.target, e.weight)).collect();
    write_ego_side(&mut out, graph, &outgoing, max_neighbors, |other| {
        format!("[{center}] → [{other}]")
    });

    let _ = writeln!(out, "  ← Incoming:");
    write_ego_side(&mut out, graph, &ego.incoming, max_neighbors, |other| {
        format!("[{other}] → [{center}]")
    });
    out
}

fn write_ego_side(
    out: &mut String,
    graph: &CitationGraph,
    edges: &[(NodeId, f64)],
    max_neighbors: usize,
    arrow: impl Fn(NodeId) -> String,
) {
    if edges.is_empty() {
        let _ = writeln!(out, "     {}", "(none)".dimmed());
        return;
    }
    for &(other, weight) in edges.iter().take(max_neighbors) {
        let _ = writeln!(
            out,
            "     {} (w={weight:.3})  {}",
            arrow(other),
            truncate(graph.title(other), 70)
        );
    }
    if edges.len() > max_neighbors {
        let _ = writeln!(out, "     … {} more", edges.len() - max_neighbors);
    }
}

#[must_use]
pub fn render_path(graph: &CitationGraph, target: NodeId, paths: &ShortestPaths) -> String {
    let mut out = String::new();
    let source = paths.source;
    let _ = writeln!(out, "\n{}", "Shortest path between:".bold());
    let _ = writeln!(out, "   FROM [{source}]: {}", truncate(graph.title(source), 90));
    let _ = writeln!(out, "   TO   [{target}]: {}", truncate(graph.title(target), 90));

    let Some(path) = paths.path_to(target) else {
        let _ = writeln!(out, "   → {}", "no directed path (∞)".yellow());
        return out;
    };

    let _ = writeln!(out, "   → Total distance = {:.4}", paths.distance(target));
    let ids: Vec<String> = path.iter().map(ToString::to_string).collect();
    let _ = writeln!(out, "   → Path (ids): {}", ids.join(" -> "));
    let _ = writeln!(out, "   → Path (titles):");
    for id in &path {
        let _ = writeln!(out, "      • {}", truncate(graph.title(*id), 120));
    }
    out
}

/// Lists the `top` largest components, previewing `preview` titles each.
#[must_use]
pub fn render_components(
    graph: &CitationGraph,
    components: &[Vec<NodeId>],
    top: usize,
    preview: usize,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "\n{} {}",
        "Strongly connected components:".bold(),
        components.len()
    );

    for (rank, component) in largest_first(components).into_iter().take(top).enumerate() {
        let _ = writeln!(out, "   • SCC #{} (size={}):", rank + 1, component.len());
        for id in component.iter().take(preview) {
            let _ = writeln!(out, "      - {}", truncate(graph.title(*id), 120));
        }
        if component.len() > preview {
            let _ = writeln!(out, "      ...");
        }
    }
    out
}

#[must_use]
pub fn render_matches(fragment: &str, hits: &[(NodeId, String)]) -> String {
    let mut out = String::new();
    if hits.is_empty() {
        let _ = writeln!(out, "No titles match '{}'.", fragment.yellow());
        return out;
    }
    for (id, title) in hits {
        let _ = writeln!(out, "[{id:>3}] {}", truncate(title, 120));
    }
    out
}

pub fn print_summary(graph: &CitationGraph, config: &GraphConfig) {
    print!("{}", render_summary(graph, config));
}

pub fn print_adjacency(graph: &CitationGraph, max_nodes: usize, max_neighbors: usize) {
    print!("{}", render_adjacency(graph, max_nodes, max_neighbors));
}

pub fn print_edges(graph: &CitationGraph, max_edges: usize) {
    print!("{}", render_edges(graph, max_edges));
}

pub fn print_ego(graph: &CitationGraph, ego: &EgoGraph, max_neighbors: usize) {
    print!("{}", render_ego(graph, ego, max_neighbors));
}

pub fn print_path(graph: &CitationGraph, target: NodeId, paths: &ShortestPaths) {
    print!("{}", render_path(graph, target, paths));
}

pub fn print_components(
    graph: &CitationGraph,
    components: &[Vec<NodeId>],
    top: usize,
    preview: usize,
) {
    print!("{}", render_components(graph, components, top, preview));
}

pub fn print_matches(fragment: &str, hits: &[(NodeId, String)]) {
    print!("{}", render_matches(fragment, hits));
}
