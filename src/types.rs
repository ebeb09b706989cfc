// src/types.rs
use serde::{Deserialize, Serialize};

/// Position of an article in the input sequence. Stable for the life of a graph.
pub type NodeId = usize;

/// One row of the unified bibliographic corpus.
///
/// Every field defaults to the empty string, so a record with missing
/// columns or blank cells is still a valid article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    pub title: String,
    pub authors: String,
    pub keywords: String,
    pub year: String,
    pub doi: String,
    pub url: String,
}

impl Article {
    /// Creates an article with the three fields that drive similarity.
    #[must_use]
    pub fn new(title: &str, authors: &str, keywords: &str) -> Self {
        Self {
            title: title.to_string(),
            authors: authors.to_string(),
            keywords: keywords.to_string(),
            ..Self::default()
        }
    }
}
