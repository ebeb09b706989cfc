// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::types::NodeId;

#[derive(Debug, Error)]
pub enum CitegraphError {
    #[error("unified records not found at {}", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("I/O error: {source} (path: {})", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("node {0} is not part of the graph")]
    UnknownNode(NodeId),

    #[error("no article matches '{0}'")]
    NodeNotFound(String),
}

pub type Result<T> = std::result::Result<T, CitegraphError>;

// Allow `?` on std::io::Error by converting to CitegraphError::Io with unknown path.
impl From<std::io::Error> for CitegraphError {
    fn from(source: std::io::Error) -> Self {
        CitegraphError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
