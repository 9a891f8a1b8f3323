//! Standalone HTML report, rendered from an embedded `tera` template.

use super::{heading, timestamp, Report, ReportOptions};
use crate::engine::Pass;
use crate::error::{Error, Result};
use serde::Serialize;
use tera::{Context, Tera};

const REPORT_TEMPLATE: &str = include_str!("../../templates/report.html");

/// Template name; the `.html` suffix turns on autoescaping.
const REPORT_NAME: &str = "report.html";

#[derive(Serialize)]
struct SummaryEntry {
    label: &'static str,
    count: usize,
}

#[derive(Serialize)]
struct IssueRow<'a> {
    category: &'static str,
    location: String,
    description: &'a str,
    suggestion: &'a str,
}

/// Render a report as a complete HTML page.
pub fn to_html(report: &Report, options: &ReportOptions) -> Result<String> {
    let mut tera = Tera::default();
    tera.add_raw_template(REPORT_NAME, REPORT_TEMPLATE)
        .map_err(render_error)?;

    let (time_label, count_label, success_message) = match report.pass {
        Pass::Check => ("检查时间", "发现问题数量", "恭喜！未发现格式问题。"),
        Pass::Repair => ("修复时间", "修复问题数量", "文档无需修复。"),
    };

    let summary: Vec<SummaryEntry> = if options.include_summary {
        report
            .summary()
            .into_iter()
            .map(|(category, count)| SummaryEntry {
                label: category.label(),
                count,
            })
            .collect()
    } else {
        Vec::new()
    };

    let issues: Vec<IssueRow<'_>> = report
        .issues
        .iter()
        .map(|issue| IssueRow {
            category: issue.category().label(),
            location: issue.location().to_string(),
            description: issue.description(),
            suggestion: issue.suggestion(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("title", &heading(report, options));
    if let Some(ref source) = report.source {
        context.insert("source", source);
    }
    context.insert("time_label", time_label);
    context.insert("timestamp", &timestamp(report, options));
    context.insert("count_label", count_label);
    context.insert("issue_count", &report.issue_count());
    context.insert("summary", &summary);
    context.insert("issues", &issues);
    if report.is_empty() {
        context.insert("success_message", success_message);
    }
    context.insert("version", env!("CARGO_PKG_VERSION"));

    tera.render(REPORT_NAME, &context).map_err(render_error)
}

fn render_error(e: tera::Error) -> Error {
    Error::Render(format!("HTML template error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{Issue, IssueCategory, Location};

    #[test]
    fn test_text_is_escaped() {
        let report = Report::new(
            Pass::Check,
            vec![Issue::new(
                IssueCategory::TitleFormat,
                Location::Paragraph(1),
                "<b>标题</b> & 副标题",
                "x",
            )],
        )
        .with_source("<script>.json");
        let html = to_html(&report, &ReportOptions::default()).unwrap();

        assert!(html.contains("&lt;script&gt;.json"));
        assert!(html.contains("&lt;b&gt;标题&lt;"));
        assert!(html.contains("&amp; 副标题"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_empty_report_banner() {
        let report = Report::new(Pass::Check, Vec::new());
        let html = to_html(&report, &ReportOptions::default()).unwrap();
        assert!(html.contains("<title>论文格式检查报告</title>"));
        assert!(html.contains("发现问题数量: 0"));
        assert!(html.contains("恭喜！未发现格式问题。"));
        assert!(!html.contains("文档:"));
    }

    #[test]
    fn test_rows_in_order() {
        let report = Report::new(
            Pass::Repair,
            vec![
                Issue::new(IssueCategory::Margin, Location::Document, "已修复上边距", "x"),
                Issue::new(IssueCategory::PageNumber, Location::Document, "已添加页码", "y"),
            ],
        )
        .with_source("paper.json");
        let html = to_html(&report, &ReportOptions::default().with_summary(false)).unwrap();

        let first = html.find("已修复上边距").unwrap();
        let second = html.find("已添加页码").unwrap();
        assert!(first < second);
        assert!(html.contains("<p>文档: paper.json</p>"));
        assert!(html.contains("修复问题数量: 2"));
        assert!(html.contains("<td class=\"issue-type\">页边距</td>"));
        assert!(!html.contains("<p>页边距: 1</p>"));
        assert!(!html.contains("恭喜"));
    }
}
