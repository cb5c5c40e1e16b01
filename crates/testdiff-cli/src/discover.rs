//! Results-directory discovery
//!
//! CI scripts drop timestamped files like `test-results-local-<stamp>.json`
//! and `test-results-github-<stamp>.json` into a shared results directory.
//! Discovery scans that directory (non-recursively) and treats the
//! lexicographically last name in each group as the latest run, which holds
//! for the sortable timestamps the scripts embed.

use crate::error::{LoadError, LoadResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Find the latest local/github result pair in a directory
///
/// A file belongs to the local group if its name contains `local` and ends
/// in `.json`, the github group likewise. Errors if either group is empty.
pub fn find_result_pair(dir: impl AsRef<Path>) -> LoadResult<(PathBuf, PathBuf)> {
    let dir = dir.as_ref();

    let local = latest_match(dir, "local")?.ok_or_else(|| LoadError::NoLocalResults {
        dir: dir.to_path_buf(),
    })?;
    let github = latest_match(dir, "github")?.ok_or_else(|| LoadError::NoGithubResults {
        dir: dir.to_path_buf(),
    })?;

    debug!(
        local = %local.display(),
        github = %github.display(),
        "discovered result pair"
    );
    Ok((local, github))
}

fn latest_match(dir: &Path, marker: &str) -> LoadResult<Option<PathBuf>> {
    let mut matches: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| LoadError::ReadDir {
            dir: dir.to_path_buf(),
            source: e,
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && name_matches(path, marker))
        .collect();

    matches.sort();
    Ok(matches.pop())
}

fn name_matches(path: &Path, marker: &str) -> bool {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) => name.ends_with(".json") && name.contains(marker),
        None => false,
    }
}
