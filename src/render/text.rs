//! Plain text report.

use super::{heading, timestamp, Report, ReportOptions};

/// Render a report as plain text, one issue per line.
pub fn to_text(report: &Report, options: &ReportOptions) -> String {
    let mut lines = vec![heading(report, options)];

    if let Some(ref source) = report.source {
        lines.push(format!("文档: {}", source));
    }
    lines.push(format!("时间: {}", timestamp(report, options)));
    lines.push(format!("问题数量: {}", report.issue_count()));

    if options.include_summary {
        for (category, count) in report.summary() {
            lines.push(format!("  {}: {}", category, count));
        }
    }

    lines.push(String::new());
    for (i, issue) in report.issues.iter().enumerate() {
        lines.push(format!(
            "{}. [{}] {} - {}；{}",
            i + 1,
            issue.category(),
            issue.location(),
            issue.description(),
            issue.suggestion()
        ));
    }

    lines.join("\n").trim_end().to_string()
}
