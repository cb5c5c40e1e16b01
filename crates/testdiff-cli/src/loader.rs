//! JSON result-document loading

use crate::error::{LoadError, LoadResult};
use std::fs;
use std::path::Path;
use testdiff_core::ResultDocument;
use tracing::debug;

/// Load a result document from a JSON file
///
/// The file must be valid JSON; missing fields inside it are filled with
/// defaults by the document model, never rejected here.
pub fn load_document(path: impl AsRef<Path>) -> LoadResult<ResultDocument> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading result document");

    let content = fs::read_to_string(path).map_err(|e| LoadError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| LoadError::ParseJson {
        path: path.to_path_buf(),
        source: e,
    })
}
