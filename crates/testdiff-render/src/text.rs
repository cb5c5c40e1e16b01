//! Plain-text report renderer
//!
//! Sectioned report with 60-column rules, aligned labels, YES/NO match
//! markers, and signed diffs. Discrepancies are sorted by suite name so the
//! output is stable across runs.

use testdiff_core::{Assessment, ComparisonReport, SuiteDiscrepancy};

pub fn render_text(report: &ComparisonReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=".repeat(60));
    lines.push("Test Results Comparison Report".to_string());
    lines.push("=".repeat(60));
    lines.push(String::new());

    let env = &report.environment_comparison;
    lines.push("ENVIRONMENT COMPARISON".to_string());
    lines.push("-".repeat(60));
    lines.push(field(
        "Local Environment:",
        env.local_type.as_deref().unwrap_or("unknown"),
    ));
    lines.push(field(
        "GitHub Environment:",
        env.github_type.as_deref().unwrap_or("unknown"),
    ));
    lines.push(field("OS Match:", yes_no(env.os_match)));
    lines.push(field("Version Match:", yes_no(env.version_match)));
    lines.push(field("Architecture Match:", yes_no(env.arch_match)));
    lines.push(String::new());

    let summary = &report.summary_comparison;
    lines.push("TEST SUMMARY COMPARISON".to_string());
    lines.push("-".repeat(60));
    lines.push(field("Local Total Tests:", summary.local_total));
    lines.push(field("GitHub Total Tests:", summary.github_total));
    lines.push(field(
        "Test Count Difference:",
        format!("{:+}", summary.total_diff),
    ));
    lines.push(String::new());
    lines.push(field("Local Passed:", summary.local_passed));
    lines.push(field("GitHub Passed:", summary.github_passed));
    lines.push(field("Local Failed:", summary.local_failed));
    lines.push(field("GitHub Failed:", summary.github_failed));
    lines.push(field(
        "Pass Rate Difference:",
        format!("{:+.2}%", summary.pass_rate_diff),
    ));
    lines.push(String::new());

    let metrics = &report.accuracy_metrics;
    lines.push("ACCURACY METRICS".to_string());
    lines.push("-".repeat(60));
    lines.push(field(
        "Local Pass Rate:",
        format!("{:.2}%", metrics.local_pass_rate),
    ));
    lines.push(field(
        "GitHub Pass Rate:",
        format!("{:.2}%", metrics.github_pass_rate),
    ));
    lines.push(field("Congruence:", format!("{:.2}%", metrics.congruence)));
    lines.push(field(
        "Accuracy Score:",
        format!("{:.2}%", metrics.accuracy_score),
    ));
    lines.push(field(
        "Pass Rate Difference:",
        format!("{:.2}%", metrics.pass_rate_difference),
    ));
    lines.push(String::new());

    lines.push("DISCREPANCIES".to_string());
    lines.push("-".repeat(60));
    let mut discrepancies: Vec<&SuiteDiscrepancy> = report.discrepancies.iter().collect();
    discrepancies.sort_by(|a, b| a.suite.cmp(&b.suite));
    if discrepancies.is_empty() {
        lines.push("No discrepancies found - results are consistent!".to_string());
        lines.push(String::new());
    } else {
        lines.push(format!(
            "Found {} suite(s) with discrepancies:",
            discrepancies.len()
        ));
        lines.push(String::new());
        for d in discrepancies {
            lines.push(format!("  Suite: {}", d.suite));
            lines.push(format!(
                "    Local:  {} passed, {} failed",
                d.local_passed, d.local_failed
            ));
            lines.push(format!(
                "    GitHub: {} passed, {} failed",
                d.github_passed, d.github_failed
            ));
            lines.push(format!(
                "    Diff:   {:+} passed, {:+} failed",
                d.pass_diff, d.fail_diff
            ));
            lines.push(String::new());
        }
    }

    lines.push("OVERALL ASSESSMENT".to_string());
    lines.push("-".repeat(60));
    lines.push(
        Assessment::from_score(metrics.accuracy_score)
            .label()
            .to_string(),
    );
    lines.push(String::new());

    lines.join("\n")
}

fn field(label: &str, value: impl std::fmt::Display) -> String {
    format!("{:<23}{}", label, value)
}

fn yes_no(matched: bool) -> &'static str {
    if matched {
        "YES"
    } else {
        "NO"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use testdiff_core::{generate_report, ResultDocument};

    fn document(json: &str) -> ResultDocument {
        serde_json::from_str(json).unwrap()
    }

    fn sample_report() -> ComparisonReport {
        let local = document(
            r#"{
                "run_id": "local-7",
                "environment": {"type": "docker", "os_name": "ubuntu", "os_version": "22.04", "architecture": "x86_64"},
                "summary": {"total": 100, "passed": 95, "failed": 5, "pass_rate": 95.0},
                "results": {"unit": {"passed": 50, "failed": 0}, "integration": {"passed": 45, "failed": 5}}
            }"#,
        );
        let github = document(
            r#"{
                "run_id": "gh-1234",
                "environment": {"type": "github-actions", "os_name": "ubuntu", "os_version": "24.04", "architecture": "x86_64"},
                "summary": {"total": 100, "passed": 90, "failed": 10, "pass_rate": 90.0},
                "results": {"unit": {"passed": 48, "failed": 2}, "integration": {"passed": 45, "failed": 5}}
            }"#,
        );
        generate_report(&local, &github)
    }

    #[test]
    fn test_sections_present() {
        let text = render_text(&sample_report());
        assert!(text.contains("ENVIRONMENT COMPARISON"));
        assert!(text.contains("TEST SUMMARY COMPARISON"));
        assert!(text.contains("ACCURACY METRICS"));
        assert!(text.contains("DISCREPANCIES"));
        assert!(text.contains("OVERALL ASSESSMENT"));
    }

    #[test]
    fn test_match_markers_and_diffs() {
        let text = render_text(&sample_report());
        assert!(text.contains("OS Match:              YES"));
        assert!(text.contains("Version Match:         NO"));
        assert!(text.contains("Test Count Difference: +0"));
        assert!(text.contains("Pass Rate Difference:  +5.00%"));
    }

    #[test]
    fn test_metrics_use_two_decimals() {
        let text = render_text(&sample_report());
        assert!(text.contains("Local Pass Rate:       95.00%"));
        assert!(text.contains("Congruence:            94.74%"));
        assert!(text.contains("Accuracy Score:        97.37%"));
    }

    #[test]
    fn test_discrepancy_block() {
        let text = render_text(&sample_report());
        assert!(text.contains("Found 1 suite(s) with discrepancies:"));
        assert!(text.contains("  Suite: unit"));
        assert!(text.contains("    Local:  50 passed, 0 failed"));
        assert!(text.contains("    GitHub: 48 passed, 2 failed"));
        assert!(text.contains("    Diff:   +2 passed, -2 failed"));
    }

    #[test]
    fn test_discrepancies_sorted_by_suite_name() {
        let local = document(
            r#"{"summary": {"total": 10, "passed": 10, "failed": 0, "pass_rate": 100.0},
                "results": {"zeta": {"passed": 5, "failed": 0}, "alpha": {"passed": 5, "failed": 0}}}"#,
        );
        let github = document(
            r#"{"summary": {"total": 10, "passed": 8, "failed": 2, "pass_rate": 80.0},
                "results": {"zeta": {"passed": 4, "failed": 1}, "alpha": {"passed": 4, "failed": 1}}}"#,
        );

        let text = render_text(&generate_report(&local, &github));
        let alpha = text.find("Suite: alpha").unwrap();
        let zeta = text.find("Suite: zeta").unwrap();
        assert!(alpha < zeta);
    }

    #[test]
    fn test_no_discrepancies_message() {
        let doc = document(
            r#"{"summary": {"total": 10, "passed": 10, "failed": 0, "pass_rate": 100.0},
                "results": {"unit": {"passed": 10, "failed": 0}}}"#,
        );
        let text = render_text(&generate_report(&doc, &doc.clone()));
        assert!(text.contains("No discrepancies found - results are consistent!"));
        assert!(!text.contains("Suite:"));
    }

    #[test]
    fn test_absent_environment_renders_unknown() {
        let text = render_text(&generate_report(
            &ResultDocument::default(),
            &ResultDocument::default(),
        ));
        assert!(text.contains("Local Environment:     unknown"));
        assert!(text.contains("GitHub Environment:    unknown"));
    }

    #[test]
    fn test_assessment_line() {
        let text = render_text(&sample_report());
        assert!(text.contains("EXCELLENT - Results are highly consistent"));
    }
}
