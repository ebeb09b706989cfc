// src/config/types.rs
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Edge inference settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Minimum combined similarity for a candidate edge. Default: 0.35
    #[serde(default = "default_threshold")]
    pub similarity_threshold: f64,
    /// Maximum outgoing edges kept per article. Default: 5
    #[serde(default = "default_max_out_degree")]
    pub max_out_degree: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: default_threshold(),
            max_out_degree: default_max_out_degree(),
        }
    }
}

/// Console listing limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub max_nodes: usize,
    pub max_neighbors: usize,
    pub max_edges: usize,
    pub ego_neighbors: usize,
    pub top_components: usize,
    pub component_preview: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_nodes: 15,
            max_neighbors: 8,
            max_edges: 80,
            ego_neighbors: 12,
            top_components: 3,
            component_preview: 5,
        }
    }
}

/// Title fragments used by the `run` pipeline's sample shortest-path query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub source: String,
    pub target: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            source: "artificial intelligence".to_string(),
            target: "education".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            graph: GraphConfig::default(),
            report: ReportConfig::default(),
            query: QueryConfig::default(),
        }
    }
}

const fn default_threshold() -> f64 { 0.35 }
const fn default_max_out_degree() -> usize { 5 }

fn default_input() -> PathBuf {
    PathBuf::from("salidas").join("unificado_ai_generativa.csv")
}
