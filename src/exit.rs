// src/exit.rs
//! Standardized process exit codes for `citegraph`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::CitegraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CitegraphExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (e.g. IO, malformed CSV, config).
    Error = 1,
    /// The unified records file does not exist.
    InputNotFound = 2,
    /// A node selector did not resolve to an article.
    InvalidQuery = 3,
}

impl CitegraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps a failed run onto an exit code, looking through `anyhow` context layers.
    #[must_use]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<CitegraphError>() {
            Some(CitegraphError::InputNotFound { .. }) => Self::InputNotFound,
            Some(CitegraphError::NodeNotFound(_) | CitegraphError::UnknownNode(_)) => {
                Self::InvalidQuery
            }
            _ => Self::Error,
        }
    }
}

impl Termination for CitegraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
