// src/config/mod.rs
pub mod types;

pub use self::types::{Config, GraphConfig, QueryConfig, ReportConfig};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CitegraphError, Result};

pub const CONFIG_FILE: &str = "citegraph.toml";
pub const INPUT_ENV: &str = "CITEGRAPH_INPUT";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path`, or `citegraph.toml` in the working directory when `path` is `None`.
    ///
    /// A missing default file yields the defaults; an explicitly requested file must exist.
    /// `CITEGRAPH_INPUT` overrides the configured input path. The result is not
    /// validated here; callers apply their own overrides first, then call [`Config::validate`].
    ///
    /// # Errors
    /// Returns `Config` if the file is unreadable or malformed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let explicit = path.is_some();
        let path = path.map_or_else(|| PathBuf::from(CONFIG_FILE), Path::to_path_buf);

        let mut config = if path.is_file() {
            let content = fs::read_to_string(&path).map_err(|e| config_error(&path, e))?;
            debug!(path = %path.display(), "loading config");
            Self::parse_toml(&content).map_err(|e| config_error(&path, e))?
        } else if explicit {
            return Err(config_error(&path, "file not found"));
        } else {
            Self::new()
        };

        if let Ok(input) = std::env::var(INPUT_ENV) {
            if !input.is_empty() {
                config.input = PathBuf::from(input);
            }
        }

        Ok(config)
    }

    /// Parses a TOML document; absent keys take their defaults.
    ///
    /// # Errors
    /// Returns the TOML decode error.
    pub fn parse_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns a message if the similarity threshold is outside `[0, 1]`.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let t = self.graph.similarity_threshold;
        if !(0.0..=1.0).contains(&t) {
            return Err(format!("similarity_threshold must be within [0, 1], got {t}"));
        }
        Ok(())
    }
}

fn config_error(path: &Path, message: impl ToString) -> CitegraphError {
    CitegraphError::Config {
        path: path.to_path_buf(),
        message: message.to_string(),
    }
}
