//! Result-document model for parsed test-result files
//!
//! Both input documents (the local containerized run and the GitHub Actions
//! run) share this shape. Every field is optional in the source JSON and is
//! defaulted to zero/empty at parse time, so the comparison engine never has
//! to handle missing data.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A parsed test-result document from one environment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultDocument {
    /// Opaque identifier of the run that produced this document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,

    /// Environment the tests ran in
    #[serde(default)]
    pub environment: Environment,

    /// Aggregate counts over all suites, as reported by the run itself
    #[serde(default)]
    pub summary: Summary,

    /// Per-suite counts keyed by suite name; document order is preserved
    #[serde(default)]
    pub results: IndexMap<String, SuiteResult>,
}

/// Environment description of a test run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Environment kind, e.g. "docker" or "github-actions"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub env_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
}

/// Aggregate test counts for a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub total: u64,

    #[serde(default)]
    pub passed: u64,

    #[serde(default)]
    pub failed: u64,

    /// Pass rate in percent as computed by the producer; never re-derived
    /// from `passed`/`total` here
    #[serde(default)]
    pub pass_rate: f64,
}

/// Counts for a single test suite
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteResult {
    #[serde(default)]
    pub passed: u64,

    #[serde(default)]
    pub failed: u64,
}
