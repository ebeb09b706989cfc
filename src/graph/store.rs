// src/graph/store.rs
//! The citation graph: article nodes plus weighted adjacency lists.

use serde::Serialize;

use crate::types::{Article, NodeId};

/// Outgoing edge stored in a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge {
    pub target: NodeId,
    /// `1 - similarity`, so closer articles are cheaper to traverse.
    pub weight: f64,
}

/// Directed weighted graph over articles.
///
/// Node ids are dense positions (`0..n`). The graph is only mutated while
/// [`GraphBuilder`](super::GraphBuilder) assembles it; consumers receive an
/// immutable value.
#[derive(Debug, Clone, Default)]
pub struct CitationGraph {
    nodes: Vec<Article>,
    adjacency: Vec<Vec<Edge>>,
}

impl CitationGraph {
    #[must_use]
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
            adjacency: Vec::with_capacity(n),
        }
    }

    /// Inserts or overwrites the metadata stored at `id`.
    pub(crate) fn add_node(&mut self, id: NodeId, article: Article) {
        if id >= self.nodes.len() {
            self.nodes.resize_with(id + 1, Article::default);
        }
        if id >= self.adjacency.len() {
            self.adjacency.resize_with(id + 1, Vec::new);
        }
        if let Some(slot) = self.nodes.get_mut(id) {
            *slot = article;
        }
    }

    /// Appends `source -> target`. Duplicates and unknown targets are not checked.
    pub(crate) fn add_edge(&mut self, source: NodeId, target: NodeId, weight: f64) {
        if source >= self.adjacency.len() {
            self.adjacency.resize_with(source + 1, Vec::new);
        }
        if let Some(list) = self.adjacency.get_mut(source) {
            list.push(Edge { target, weight });
        }
    }

    /// Outgoing edges of `u` in inference order; empty when `u` has none.
    #[must_use]
    pub fn neighbors(&self, u: NodeId) -> &[Edge] {
        self.adjacency.get(u).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Node ids in construction order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        0..self.nodes.len()
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Article> {
        self.nodes.get(id)
    }

    /// Title of `id`, or `""` for an unknown node.
    #[must_use]
    pub fn title(&self, id: NodeId) -> &str {
        self.node(id).map_or("", |a| a.title.as_str())
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id < self.nodes.len()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All edges as `(source, edge)` pairs, grouped by source in node order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, &Edge)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, list)| list.iter().map(move |edge| (source, edge)))
    }
}
