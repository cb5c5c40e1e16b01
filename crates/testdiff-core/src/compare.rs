//! Comparison engine over two result documents
//!
//! All functions here are pure: both documents are borrowed, nothing is
//! mutated, and every computation is total over zero-filled inputs. A suite
//! missing on one side is compared against zero counts, and a run reporting
//! `total == 0` short-circuits the accuracy metrics to an all-zero record
//! instead of dividing by zero.

use crate::document::{Environment, ResultDocument, Summary, SuiteResult};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// Environment fields of both runs with per-field match flags
///
/// A field absent on both sides counts as a match; equality over
/// `Option<String>` gives exactly that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentComparison {
    pub local_type: Option<String>,
    pub github_type: Option<String>,
    pub os_match: bool,
    pub version_match: bool,
    pub arch_match: bool,
}

/// Aggregate counts of both runs with signed differences
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryComparison {
    pub local_total: u64,
    pub github_total: u64,
    pub local_passed: u64,
    pub github_passed: u64,
    pub local_failed: u64,
    pub github_failed: u64,
    /// Difference of the self-reported pass rates, in percentage points
    pub pass_rate_diff: f64,
    /// Local total minus GitHub total
    pub total_diff: i64,
}

/// A suite whose passed or failed count differs between the two runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteDiscrepancy {
    pub suite: String,
    pub local_passed: u64,
    pub github_passed: u64,
    pub local_failed: u64,
    pub github_failed: u64,
    pub pass_diff: i64,
    pub fail_diff: i64,
}

/// Similarity metrics between the two runs
///
/// Pass rates here are re-derived from `passed`/`total`, independent of the
/// documents' own `pass_rate` fields used by [`compare_summaries`]. The two
/// can disagree when a producer computed its rate differently; that
/// divergence is deliberate and is surfaced, not reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccuracyMetrics {
    pub local_pass_rate: f64,
    pub github_pass_rate: f64,
    /// min/max ratio of the two pass rates, in [0, 100]
    pub congruence: f64,
    /// Average of congruence and test-count similarity, in [0, 100]
    pub accuracy_score: f64,
    pub count_difference: u64,
    pub pass_rate_difference: f64,
}

/// Complete comparison report over two result documents
///
/// Computed fresh by [`generate_report`] on every invocation and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    /// Generation time (UTC)
    pub timestamp: DateTime<Utc>,
    pub local_run_id: Option<String>,
    pub github_run_id: Option<String>,
    pub environment_comparison: EnvironmentComparison,
    pub summary_comparison: SummaryComparison,
    pub discrepancies: Vec<SuiteDiscrepancy>,
    pub accuracy_metrics: AccuracyMetrics,
}

/// Overall verdict derived from the accuracy score
///
/// Shared by the text and HTML renderers so both present the same verdict
/// for the same report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assessment {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Assessment {
    /// Classify an accuracy score: >= 95 excellent, >= 85 good, >= 70 fair.
    pub fn from_score(score: f64) -> Self {
        if score >= 95.0 {
            Assessment::Excellent
        } else if score >= 85.0 {
            Assessment::Good
        } else if score >= 70.0 {
            Assessment::Fair
        } else {
            Assessment::Poor
        }
    }

    /// Short uppercase name, e.g. for the HTML banner
    pub fn name(self) -> &'static str {
        match self {
            Assessment::Excellent => "EXCELLENT",
            Assessment::Good => "GOOD",
            Assessment::Fair => "FAIR",
            Assessment::Poor => "POOR",
        }
    }

    /// One-line human-readable verdict
    pub fn label(self) -> &'static str {
        match self {
            Assessment::Excellent => "EXCELLENT - Results are highly consistent",
            Assessment::Good => "GOOD - Minor discrepancies detected",
            Assessment::Fair => "FAIR - Moderate discrepancies detected",
            Assessment::Poor => "POOR - Significant discrepancies detected",
        }
    }

    /// Display color for HTML output
    pub fn color(self) -> &'static str {
        match self {
            Assessment::Excellent => "#28a745",
            Assessment::Good => "#ffc107",
            Assessment::Fair => "#fd7e14",
            Assessment::Poor => "#dc3545",
        }
    }
}

/// Compare the environment blocks of both documents
pub fn compare_environments(local: &Environment, github: &Environment) -> EnvironmentComparison {
    EnvironmentComparison {
        local_type: local.env_type.clone(),
        github_type: github.env_type.clone(),
        os_match: local.os_name == github.os_name,
        version_match: local.os_version == github.os_version,
        arch_match: local.architecture == github.architecture,
    }
}

/// Compare the aggregate summaries of both documents
///
/// `pass_rate_diff` uses the rates the documents report about themselves,
/// at full precision; renderers format it.
pub fn compare_summaries(local: &Summary, github: &Summary) -> SummaryComparison {
    SummaryComparison {
        local_total: local.total,
        github_total: github.total,
        local_passed: local.passed,
        github_passed: github.passed,
        local_failed: local.failed,
        github_failed: github.failed,
        pass_rate_diff: local.pass_rate - github.pass_rate,
        total_diff: local.total as i64 - github.total as i64,
    }
}

/// Find every suite whose counts differ between the two runs
///
/// The suite universe is the union of suite names from both documents; a
/// suite present on only one side is compared against zero counts. Suites
/// with identical counts are omitted, so an empty result means the runs
/// agree suite-by-suite. Output order follows the local document, then any
/// suites only GitHub reported; renderers that want alphabetical order sort
/// downstream.
pub fn find_suite_discrepancies(
    local: &IndexMap<String, SuiteResult>,
    github: &IndexMap<String, SuiteResult>,
) -> Vec<SuiteDiscrepancy> {
    let union = local
        .keys()
        .chain(github.keys().filter(|name| !local.contains_key(*name)));

    let mut discrepancies = Vec::new();
    for suite in union {
        let l = local.get(suite).copied().unwrap_or_default();
        let g = github.get(suite).copied().unwrap_or_default();

        if l.passed != g.passed || l.failed != g.failed {
            discrepancies.push(SuiteDiscrepancy {
                suite: suite.clone(),
                local_passed: l.passed,
                github_passed: g.passed,
                local_failed: l.failed,
                github_failed: g.failed,
                pass_diff: l.passed as i64 - g.passed as i64,
                fail_diff: l.failed as i64 - g.failed as i64,
            });
        }
    }

    discrepancies
}

/// Derive similarity metrics from the two summaries
///
/// If either run reports zero total tests every ratio is meaningless and an
/// all-zero record is returned. Otherwise congruence is the min/max ratio of
/// the re-derived pass rates (100 when both rates are zero), and the accuracy
/// score averages congruence with test-count similarity. Percentages are
/// computed at full precision and rounded to two decimals at the end.
pub fn calculate_accuracy_metrics(local: &Summary, github: &Summary) -> AccuracyMetrics {
    if local.total == 0 || github.total == 0 {
        return AccuracyMetrics {
            local_pass_rate: 0.0,
            github_pass_rate: 0.0,
            congruence: 0.0,
            accuracy_score: 0.0,
            count_difference: 0,
            pass_rate_difference: 0.0,
        };
    }

    let local_rate = local.passed as f64 / local.total as f64 * 100.0;
    let github_rate = github.passed as f64 / github.total as f64 * 100.0;

    let max_rate = local_rate.max(github_rate);
    let min_rate = local_rate.min(github_rate);
    let congruence = if max_rate > 0.0 {
        min_rate / max_rate * 100.0
    } else {
        100.0
    };

    let count_difference = local.total.abs_diff(github.total);
    let count_diff_pct =
        count_difference as f64 / local.total.max(github.total) as f64 * 100.0;
    let accuracy_score = (congruence + (100.0 - count_diff_pct)) / 2.0;

    AccuracyMetrics {
        local_pass_rate: round2(local_rate),
        github_pass_rate: round2(github_rate),
        congruence: round2(congruence),
        accuracy_score: round2(accuracy_score),
        count_difference,
        pass_rate_difference: round2((local_rate - github_rate).abs()),
    }
}

/// Build the complete comparison report
///
/// The sole entry point the renderers and the CLI depend on. Total over any
/// pair of (possibly empty) documents.
pub fn generate_report(local: &ResultDocument, github: &ResultDocument) -> ComparisonReport {
    let discrepancies = find_suite_discrepancies(&local.results, &github.results);
    debug!(
        local_suites = local.results.len(),
        github_suites = github.results.len(),
        discrepancies = discrepancies.len(),
        "generated comparison report"
    );

    ComparisonReport {
        timestamp: Utc::now(),
        local_run_id: local.run_id.clone(),
        github_run_id: github.run_id.clone(),
        environment_comparison: compare_environments(&local.environment, &github.environment),
        summary_comparison: compare_summaries(&local.summary, &github.summary),
        discrepancies,
        accuracy_metrics: calculate_accuracy_metrics(&local.summary, &github.summary),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
