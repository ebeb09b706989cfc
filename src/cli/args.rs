// src/cli/args.rs
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "citegraph",
    version,
    about = "Citation graph analysis over a unified bibliographic corpus"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Config file (default: ./citegraph.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Unified records CSV, overriding the config
    #[arg(long, short, global = true, value_name = "CSV")]
    pub input: Option<PathBuf>,
    /// Minimum similarity for an inferred edge
    #[arg(long, global = true)]
    pub threshold: Option<f64>,
    /// Maximum outgoing edges per article
    #[arg(long, global = true)]
    pub max_out_degree: Option<usize>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the graph and run every analysis (default)
    Run,
    /// Build the graph and list adjacency and edges
    Build,
    /// Find articles by title fragment
    Find {
        fragment: String,
        #[arg(long, short, default_value = "5")]
        limit: usize,
    },
    /// Show outgoing and incoming edges of one article
    Ego {
        /// Node id or title fragment
        node: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Shortest path between two articles
    Path {
        /// Node id or title fragment
        from: String,
        /// Node id or title fragment
        to: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Strongly connected components, largest first
    Scc {
        /// How many components to list
        #[arg(long)]
        top: Option<usize>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
