// tests/unit_reporting.rs
//! Console and JSON views.

mod common;

use citegraph_core::graph::{queries, shortest_paths, strongly_connected_components, GraphBuilder};
use citegraph_core::reporting;

fn no_color() {
    colored::control::set_override(false);
}

#[test]
fn test_adjacency_marks_isolated_nodes() {
    no_color();
    let g = GraphBuilder::new(0.2, 5).build(&common::abc());
    let out = reporting::render_adjacency(&g, 10, 10);
    assert!(out.contains("[  0] generative ai in education"));
    assert!(out.contains("└─→ [  1]"));
    assert!(out.contains("(weight=0.300)"));
    assert!(out.contains("(no outgoing edges)"));
}

#[test]
fn test_edge_listing_is_capped() {
    no_color();
    let g = GraphBuilder::new(0.0, 9).build(&common::corpus());
    let total = g.edge_count();
    let out = reporting::render_edges(&g, 4);
    assert_eq!(out.lines().filter(|l| l.starts_with('[')).count(), 4);
    assert!(out.contains(&format!("… ({} more edges)", total - 4)));
}

#[test]
fn test_path_report() {
    no_color();
    let g = GraphBuilder::new(0.2, 5).build(&common::abc());
    let sp = shortest_paths(&g, 0).unwrap();

    let found = reporting::render_path(&g, 1, &sp);
    assert!(found.contains("Total distance = 0.3000"));
    assert!(found.contains("Path (ids): 0 -> 1"));

    let missing = reporting::render_path(&g, 2, &sp);
    assert!(missing.contains("no directed path (∞)"));
}

#[test]
fn test_components_largest_first() {
    no_color();
    let g = GraphBuilder::new(0.2, 5).build(&common::abc());
    let comps = strongly_connected_components(&g);
    let out = reporting::render_components(&g, &comps, 1, 5);
    assert!(out.contains("Strongly connected components: 2"));
    assert!(out.contains("SCC #1 (size=2)"));
    assert!(!out.contains("SCC #2"));
}

#[test]
fn test_component_views_reorder_by_size() {
    no_color();
    let g = GraphBuilder::new(0.2, 5).build(&common::abc());
    let comps = vec![vec![2], vec![0, 1]];

    let out = reporting::render_components(&g, &comps, 1, 5);
    assert!(out.contains("SCC #1 (size=2)"));
    assert!(!out.contains("unrelated topic about birds"));

    let listed: serde_json::Value =
        serde_json::from_str(&reporting::format_components(&g, &comps).unwrap()).unwrap();
    assert_eq!(listed[0]["size"], 2);
    assert_eq!(listed[1]["members"][0]["id"], 2);
}

#[test]
fn test_ego_json_shape() {
    let g = GraphBuilder::new(0.2, 5).build(&common::abc());
    let ego = queries::ego_graph(&g, 0).unwrap();
    let json: serde_json::Value =
        serde_json::from_str(&reporting::format_ego(&ego).unwrap()).unwrap();
    assert_eq!(json["center"], 0);
    assert_eq!(json["outgoing"][0]["target"], 1);
    assert_eq!(json["incoming"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_ego_lists_both_directions() {
    no_color();
    let g = GraphBuilder::new(0.2, 5).build(&common::abc());
    let ego = queries::ego_graph(&g, 1).unwrap();
    let out = reporting::render_ego(&g, &ego, 12);
    assert!(out.contains("[1] → [0]"));
    assert!(out.contains("[0] → [1]"));
}

#[test]
fn test_json_reports_parse() {
    let g = GraphBuilder::new(0.2, 5).build(&common::abc());
    let sp = shortest_paths(&g, 0).unwrap();

    let path: serde_json::Value =
        serde_json::from_str(&reporting::format_path(&g, 2, &sp).unwrap()).unwrap();
    assert_eq!(path["reachable"], false);
    assert!(path["distance"].is_null());

    let comps = strongly_connected_components(&g);
    let listed: serde_json::Value =
        serde_json::from_str(&reporting::format_components(&g, &comps).unwrap()).unwrap();
    assert_eq!(listed[0]["size"], 2);
    assert_eq!(listed[1]["members"][0]["title"], "unrelated topic about birds");
}

#[test]
fn test_truncate_respects_char_boundaries() {
    assert_eq!(reporting::truncate("Educación", 6), "Educac");
    assert_eq!(reporting::truncate("ñandú", 10), "ñandú");
}
