// src/cli/handlers.rs
use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::Config;
use crate::graph::{
    queries, shortest_paths, strongly_connected_components, CitationGraph, GraphBuilder,
};
use crate::ingest;
use crate::reporting;

/// Resolved configuration plus the graph built from it.
pub struct Session {
    pub config: Config,
    pub graph: CitationGraph,
}

/// Loads config, applies CLI overrides, reads the corpus and builds the graph.
///
/// Precedence is file, then `CITEGRAPH_INPUT`, then flags; validation runs on
/// the merged result.
///
/// # Errors
/// Returns error if the config is invalid or the input cannot be loaded.
pub fn open_session(cli: &Cli) -> Result<Session> {
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(input) = &cli.input {
        config.input.clone_from(input);
    }
    if let Some(t) = cli.threshold {
        config.graph.similarity_threshold = t;
    }
    if let Some(k) = cli.max_out_degree {
        config.graph.max_out_degree = k;
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid config: {e}"))?;

    let articles = ingest::load_articles(&config.input)
        .with_context(|| format!("loading articles from {}", config.input.display()))?;
    let graph = GraphBuilder::from_config(&config.graph).build(&articles);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph ready"
    );
    Ok(Session { config, graph })
}

/// Handles the run command: summary, listings, neighborhood of node 0,
/// the configured sample path query and the SCC report.
///
/// # Errors
/// Returns error if the path query or serialization fails.
pub fn handle_run(session: &Session) -> Result<()> {
    handle_build(session);

    let (graph, report) = (&session.graph, &session.config.report);
    if let Ok(ego) = queries::ego_graph(graph, 0) {
        reporting::print_ego(graph, &ego, report.ego_neighbors);
    }

    let query = &session.config.query;
    let from = queries::find_by_title(graph, &query.source, 1);
    let to = queries::find_by_title(graph, &query.target, 1);
    match (from.first(), to.first()) {
        (Some(&(s, _)), Some(&(t, _))) => {
            let paths = shortest_paths(graph, s)?;
            reporting::print_path(graph, t, &paths);
        }
        _ => println!(
            "\n{} no titles match '{}' / '{}' (set [query] in citegraph.toml)",
            "Shortest path:".bold(),
            query.source,
            query.target
        ),
    }

    handle_scc(session, None, OutputFormat::Text)?;
    println!("\n{}", "Done: graph built, shortest path and SCC computed.".green());
    Ok(())
}

pub fn handle_build(session: &Session) {
    let (graph, report) = (&session.graph, &session.config.report);
    reporting::print_summary(graph, &session.config.graph);
    reporting::print_adjacency(graph, report.max_nodes, report.max_neighbors);
    reporting::print_edges(graph, report.max_edges);
}

pub fn handle_find(session: &Session, fragment: &str, limit: usize) {
    let hits = queries::find_by_title(&session.graph, fragment, limit);
    reporting::print_matches(fragment, &hits);
}

/// # Errors
/// Returns error if the selector does not resolve to a node or serialization fails.
pub fn handle_ego(session: &Session, selector: &str, format: OutputFormat) -> Result<()> {
    let graph = &session.graph;
    let center = queries::resolve_node(graph, selector)?;
    let ego = queries::ego_graph(graph, center)?;

    match format {
        OutputFormat::Text => {
            reporting::print_ego(graph, &ego, session.config.report.ego_neighbors);
        }
        OutputFormat::Json => println!("{}", reporting::format_ego(&ego)?),
    }
    Ok(())
}

/// # Errors
/// Returns error if either selector does not resolve or serialization fails.
pub fn handle_path(session: &Session, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let graph = &session.graph;
    let source = queries::resolve_node(graph, from)?;
    let target = queries::resolve_node(graph, to)?;
    let paths = shortest_paths(graph, source)?;

    match format {
        OutputFormat::Text => reporting::print_path(graph, target, &paths),
        OutputFormat::Json => println!("{}", reporting::format_path(graph, target, &paths)?),
    }
    Ok(())
}

/// # Errors
/// Returns error if serialization fails.
pub fn handle_scc(session: &Session, top: Option<usize>, format: OutputFormat) -> Result<()> {
    let graph = &session.graph;
    let components = strongly_connected_components(graph);
    let report = &session.config.report;

    match format {
        OutputFormat::Text => reporting::print_components(
            graph,
            &components,
            top.unwrap_or(report.top_components),
            report.component_preview,
        ),
        OutputFormat::Json => println!("{}", reporting::format_components(graph, &components)?),
    }
    Ok(())
}
