//! HTML report renderer
//!
//! Renders a standalone page through minijinja from an embedded template.
//! Numbers are formatted before they reach the template, so the template
//! itself carries no formatting logic, and auto-escaping keeps suite names
//! from the input documents inert in the output.

use crate::error::RenderResult;
use minijinja::{AutoEscape, Environment};
use serde_json::json;
use testdiff_core::{Assessment, ComparisonReport, SuiteDiscrepancy};

const TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <title>Test Results Comparison</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 20px; background: #f5f5f5; }
        .container { max-width: 1200px; margin: 0 auto; background: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        h1 { color: #333; border-bottom: 3px solid #007bff; padding-bottom: 10px; }
        h2 { color: #555; margin-top: 30px; border-bottom: 1px solid #ddd; padding-bottom: 5px; }
        .metric { display: inline-block; margin: 10px 20px; padding: 15px; background: #f8f9fa; border-radius: 5px; min-width: 150px; }
        .metric-label { font-size: 12px; color: #666; text-transform: uppercase; }
        .metric-value { font-size: 24px; font-weight: bold; color: #007bff; }
        .assessment { padding: 20px; color: white; border-radius: 5px; text-align: center; font-size: 24px; font-weight: bold; margin: 20px 0; }
        table { width: 100%; border-collapse: collapse; margin: 20px 0; }
        th { background: #007bff; color: white; padding: 12px; text-align: left; }
        td { padding: 10px; border-bottom: 1px solid #ddd; }
        tr:hover { background: #f8f9fa; }
        .pass { color: #28a745; font-weight: bold; }
        .fail { color: #dc3545; font-weight: bold; }
        .match { color: #28a745; }
        .nomatch { color: #dc3545; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Test Results Comparison</h1>
        <p>Generated: {{ generated }}</p>

        <div class="assessment" style="background: {{ assessment_color }}">{{ assessment }}</div>

        <h2>Environment Comparison</h2>
        <table>
            <tr><th>Aspect</th><th>Local Docker</th><th>GitHub Actions</th><th>Status</th></tr>
            <tr>
                <td>Environment Type</td>
                <td>{{ local_type }}</td>
                <td>{{ github_type }}</td>
                <td>-</td>
            </tr>
            <tr>
                <td>OS Match</td>
                <td>-</td>
                <td>-</td>
                <td class="{% if os_match %}match{% else %}nomatch{% endif %}">{% if os_match %}YES{% else %}NO{% endif %}</td>
            </tr>
            <tr>
                <td>Version Match</td>
                <td>-</td>
                <td>-</td>
                <td class="{% if version_match %}match{% else %}nomatch{% endif %}">{% if version_match %}YES{% else %}NO{% endif %}</td>
            </tr>
            <tr>
                <td>Architecture Match</td>
                <td>-</td>
                <td>-</td>
                <td class="{% if arch_match %}match{% else %}nomatch{% endif %}">{% if arch_match %}YES{% else %}NO{% endif %}</td>
            </tr>
        </table>

        <h2>Test Summary</h2>
        <div class="metric">
            <div class="metric-label">Local Total</div>
            <div class="metric-value">{{ local_total }}</div>
        </div>
        <div class="metric">
            <div class="metric-label">Local Passed</div>
            <div class="metric-value pass">{{ local_passed }}</div>
        </div>
        <div class="metric">
            <div class="metric-label">Local Failed</div>
            <div class="metric-value fail">{{ local_failed }}</div>
        </div>
        <div class="metric">
            <div class="metric-label">GitHub Total</div>
            <div class="metric-value">{{ github_total }}</div>
        </div>
        <div class="metric">
            <div class="metric-label">GitHub Passed</div>
            <div class="metric-value pass">{{ github_passed }}</div>
        </div>
        <div class="metric">
            <div class="metric-label">GitHub Failed</div>
            <div class="metric-value fail">{{ github_failed }}</div>
        </div>

        <h2>Accuracy Metrics</h2>
        <div class="metric">
            <div class="metric-label">Local Pass Rate</div>
            <div class="metric-value">{{ local_pass_rate }}%</div>
        </div>
        <div class="metric">
            <div class="metric-label">GitHub Pass Rate</div>
            <div class="metric-value">{{ github_pass_rate }}%</div>
        </div>
        <div class="metric">
            <div class="metric-label">Congruence</div>
            <div class="metric-value">{{ congruence }}%</div>
        </div>
        <div class="metric">
            <div class="metric-label">Accuracy Score</div>
            <div class="metric-value">{{ accuracy_score }}%</div>
        </div>

        <h2>Discrepancies</h2>
        {% if discrepancies %}
        <table>
            <tr><th>Test Suite</th><th>Local</th><th>GitHub</th><th>Difference</th></tr>
            {% for d in discrepancies %}
            <tr>
                <td>{{ d.suite }}</td>
                <td>{{ d.local }}</td>
                <td>{{ d.github }}</td>
                <td>{{ d.diff }}</td>
            </tr>
            {% endfor %}
        </table>
        {% else %}
        <p>No discrepancies found - results are consistent!</p>
        {% endif %}
    </div>
</body>
</html>
"##;

pub fn render_html(report: &ComparisonReport) -> RenderResult<String> {
    let assessment = Assessment::from_score(report.accuracy_metrics.accuracy_score);

    let mut discrepancies: Vec<&SuiteDiscrepancy> = report.discrepancies.iter().collect();
    discrepancies.sort_by(|a, b| a.suite.cmp(&b.suite));
    let rows: Vec<serde_json::Value> = discrepancies
        .iter()
        .map(|d| {
            json!({
                "suite": d.suite,
                "local": format!("{} pass, {} fail", d.local_passed, d.local_failed),
                "github": format!("{} pass, {} fail", d.github_passed, d.github_failed),
                "diff": format!("{:+} pass, {:+} fail", d.pass_diff, d.fail_diff),
            })
        })
        .collect();

    let env_cmp = &report.environment_comparison;
    let summary = &report.summary_comparison;
    let metrics = &report.accuracy_metrics;
    let context = json!({
        "generated": report.timestamp.to_rfc3339(),
        "assessment": assessment.name(),
        "assessment_color": assessment.color(),
        "local_type": env_cmp.local_type.as_deref().unwrap_or("unknown"),
        "github_type": env_cmp.github_type.as_deref().unwrap_or("unknown"),
        "os_match": env_cmp.os_match,
        "version_match": env_cmp.version_match,
        "arch_match": env_cmp.arch_match,
        "local_total": summary.local_total,
        "github_total": summary.github_total,
        "local_passed": summary.local_passed,
        "github_passed": summary.github_passed,
        "local_failed": summary.local_failed,
        "github_failed": summary.github_failed,
        "local_pass_rate": format!("{:.2}", metrics.local_pass_rate),
        "github_pass_rate": format!("{:.2}", metrics.github_pass_rate),
        "congruence": format!("{:.2}", metrics.congruence),
        "accuracy_score": format!("{:.2}", metrics.accuracy_score),
        "discrepancies": rows,
    });

    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    let tmpl = env.template_from_str(TEMPLATE)?;
    Ok(tmpl.render(context)?)
}
