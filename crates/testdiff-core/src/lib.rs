//! Core types and comparison engine for testdiff
//!
//! This crate provides the result-document model (ResultDocument, Summary,
//! SuiteResult) and the pure comparison functions that turn a local document
//! and a GitHub Actions document into a ComparisonReport.

mod compare;
mod document;

pub use compare::{
    calculate_accuracy_metrics, compare_environments, compare_summaries,
    find_suite_discrepancies, generate_report, AccuracyMetrics, Assessment, ComparisonReport,
    EnvironmentComparison, SuiteDiscrepancy, SummaryComparison,
};
pub use document::{Environment, ResultDocument, SuiteResult, Summary};
