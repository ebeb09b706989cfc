// src/ingest.rs
//! Loads the unified article table produced by the record-merging step.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{CitegraphError, Result};
use crate::types::Article;

/// Reads articles from a headered CSV file, in file order.
///
/// # Errors
/// Returns `InputNotFound` if the file does not exist, `Io` if it cannot be
/// opened and `Csv` if it cannot be decoded.
pub fn load_articles(path: &Path) -> Result<Vec<Article>> {
    if !path.is_file() {
        return Err(CitegraphError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| CitegraphError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let articles = read_articles(file)?;
    info!(path = %path.display(), records = articles.len(), "loaded unified records");
    Ok(articles)
}

/// Reads articles from any CSV source. Missing columns and short rows become empty strings.
///
/// # Errors
/// Returns `Csv` on malformed input (bad UTF-8, unreadable header).
pub fn read_articles<R: Read>(reader: R) -> Result<Vec<Article>> {
    let mut csv = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut articles = Vec::new();
    for (row, record) in csv.deserialize::<Article>().enumerate() {
        let article = record?;
        debug!(row, title = %article.title, "record");
        articles.push(article);
    }
    Ok(articles)
}
