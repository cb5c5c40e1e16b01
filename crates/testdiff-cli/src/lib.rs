//! Loading and discovery support for the testdiff binaries
//!
//! This crate holds the file-facing half of the tool: reading result
//! documents from JSON files and discovering the latest local/github pair
//! in a results directory. The binaries wire these into the comparison
//! engine and renderers.

mod discover;
mod error;
mod loader;

pub use discover::find_result_pair;
pub use error::{LoadError, LoadResult};
pub use loader::load_document;
