pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod graph;
pub mod ingest;
pub mod logging;
pub mod reporting;
pub mod similarity;
pub mod text;
pub mod types;

pub use error::{CitegraphError, Result};
pub use types::{Article, NodeId};
