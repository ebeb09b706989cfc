// src/similarity.rs
//! Combined title/author/keyword similarity between two articles.

use std::collections::HashSet;

use crate::text;
use crate::types::Article;

pub const TITLE_WEIGHT: f64 = 0.5;
pub const AUTHOR_WEIGHT: f64 = 0.3;
pub const KEYWORD_WEIGHT: f64 = 0.2;

/// Jaccard similarity of two sets. Two empty sets score 0, not 1.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::implicit_hasher)]
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let inter = a.intersection(b).count();
    let union = a.len() + b.len() - inter;
    if union == 0 {
        return 0.0;
    }
    inter as f64 / union as f64
}

/// Normalized token sets of one article, computed once and reused across comparisons.
#[derive(Debug, Clone, Default)]
pub struct ArticleFeatures {
    pub title_tokens: HashSet<String>,
    pub authors: HashSet<String>,
    pub keywords: HashSet<String>,
}

impl ArticleFeatures {
    #[must_use]
    pub fn extract(article: &Article) -> Self {
        Self {
            title_tokens: text::tokenize(&text::normalize(&article.title)),
            authors: text::split_authors(&article.authors).into_iter().collect(),
            keywords: text::split_keywords(&article.keywords).into_iter().collect(),
        }
    }
}

/// Per-field Jaccard scores before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimilarityBreakdown {
    pub title: f64,
    pub authors: f64,
    pub keywords: f64,
}

impl SimilarityBreakdown {
    #[must_use]
    pub fn between(a: &ArticleFeatures, b: &ArticleFeatures) -> Self {
        Self {
            title: jaccard(&a.title_tokens, &b.title_tokens),
            authors: jaccard(&a.authors, &b.authors),
            keywords: jaccard(&a.keywords, &b.keywords),
        }
    }

    /// Weighted sum; always within `[0, 1]` since the weights sum to 1.
    #[must_use]
    pub fn combined(&self) -> f64 {
        TITLE_WEIGHT * self.title + AUTHOR_WEIGHT * self.authors + KEYWORD_WEIGHT * self.keywords
    }
}

#[must_use]
pub fn breakdown(a: &Article, b: &Article) -> SimilarityBreakdown {
    SimilarityBreakdown::between(&ArticleFeatures::extract(a), &ArticleFeatures::extract(b))
}

/// Similarity score in `[0, 1]` between two articles.
#[must_use]
pub fn score(a: &Article, b: &Article) -> f64 {
    breakdown(a, b).combined()
}

/// Same as [`score`] over pre-extracted features.
#[must_use]
pub fn score_features(a: &ArticleFeatures, b: &ArticleFeatures) -> f64 {
    SimilarityBreakdown::between(a, b).combined()
}
