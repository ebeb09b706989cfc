// src/graph/builder.rs
//! Graph construction: similarity-inferred edges with density control.
//!
//! Every ordered pair is scored, so construction is O(n²) in the number of
//! articles. That is fine for corpora of a few hundred records.

use tracing::{debug, warn};

use super::store::CitationGraph;
use crate::config::GraphConfig;
use crate::similarity::{self, ArticleFeatures};
use crate::types::{Article, NodeId};

/// Builds a [`CitationGraph`] from a batch of articles.
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    similarity_threshold: f64,
    max_out_degree: usize,
}

impl GraphBuilder {
    #[must_use]
    pub fn new(similarity_threshold: f64, max_out_degree: usize) -> Self {
        Self {
            similarity_threshold,
            max_out_degree,
        }
    }

    #[must_use]
    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(config.similarity_threshold, config.max_out_degree)
    }

    /// Creates one node per article (id = position) and adds `i -> j` for the
    /// top `max_out_degree` candidates whose similarity clears the threshold.
    #[must_use]
    pub fn build(&self, articles: &[Article]) -> CitationGraph {
        let mut graph = CitationGraph::with_capacity(articles.len());

        for (id, article) in articles.iter().enumerate() {
            if article.title.trim().is_empty() {
                warn!(node = id, "article has an empty title");
            }
            graph.add_node(id, article.clone());
        }

        let features: Vec<ArticleFeatures> = articles.iter().map(ArticleFeatures::extract).collect();

        for (source, source_features) in features.iter().enumerate() {
            for (target, sim) in self.candidates(source, source_features, &features) {
                graph.add_edge(source, target, 1.0 - sim);
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            threshold = self.similarity_threshold,
            max_out_degree = self.max_out_degree,
            "citation graph built"
        );
        graph
    }

    /// Candidates for `source`, best first. The sort is stable, so equal
    /// scores keep ascending target order and the lower id wins at the cut.
    fn candidates(
        &self,
        source: NodeId,
        source_features: &ArticleFeatures,
        all: &[ArticleFeatures],
    ) -> Vec<(NodeId, f64)> {
        let mut found: Vec<(NodeId, f64)> = all
            .iter()
            .enumerate()
            .filter(|(target, _)| *target != source)
            .map(|(target, f)| (target, similarity::score_features(source_features, f)))
            .filter(|(_, sim)| *sim >= self.similarity_threshold)
            .collect();

        found.sort_by(|a, b| b.1.total_cmp(&a.1));
        found.truncate(self.max_out_degree);
        found
    }
}
