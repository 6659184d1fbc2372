//! Error types for scan operations.
//!
//! Only an invalid scan root is fatal. Every per-entry failure (unreadable
//! directory, unreadable file, non-UTF-8 content) is absorbed by the walker
//! or the pipeline as "no contribution" and never surfaces here.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The scan root does not exist.
    #[error("scan root does not exist: {0}")]
    RootNotFound(PathBuf),

    /// The scan root exists but is not a directory.
    #[error("scan root is not a directory: {0}")]
    RootNotDirectory(PathBuf),
}
