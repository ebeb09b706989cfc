// src/graph/mod.rs
pub mod builder;
pub mod dijkstra;
pub mod queries;
pub mod scc;
pub mod store;

pub use builder::GraphBuilder;
pub use dijkstra::{reconstruct_path, shortest_paths, ShortestPaths};
pub use scc::{largest_first, strongly_connected_components};
pub use store::{CitationGraph, Edge};
