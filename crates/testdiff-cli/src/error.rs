//! Error types for locating and loading result documents

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loading operations
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while locating or loading result documents
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read a results file
    #[error("failed to read results file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not valid JSON
    #[error("invalid JSON in {}: {source}", path.display())]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to scan a results directory
    #[error("failed to read results directory {}: {source}", dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory contains no local results file
    #[error("no local results found in {}", dir.display())]
    NoLocalResults { dir: PathBuf },

    /// Directory contains no GitHub results file
    #[error("no GitHub results found in {}", dir.display())]
    NoGithubResults { dir: PathBuf },
}
