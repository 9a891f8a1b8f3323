//! Report exporters.
//!
//! Exporters take a [`Report`] and render it without reordering or
//! filtering issues.

mod html;
mod json;
mod options;
mod report;
mod text;

pub use html::to_html;
pub use json::{to_json, JsonFormat};
pub use options::ReportOptions;
pub use report::Report;
pub use text::to_text;

use crate::engine::Pass;
use std::fmt::Write;

/// Heading for a report, from the options or the pass kind.
fn heading(report: &Report, options: &ReportOptions) -> String {
    match (&options.title, report.pass) {
        (Some(title), _) => title.clone(),
        (None, Pass::Check) => "论文格式检查报告".to_string(),
        (None, Pass::Repair) => "论文格式修复报告".to_string(),
    }
}

/// Formatted report timestamp; falls back to RFC 3339 on a bad format string.
fn timestamp(report: &Report, options: &ReportOptions) -> String {
    let mut out = String::new();
    if write!(out, "{}", report.generated_at.format(&options.timestamp_format)).is_err() {
        return report.generated_at.to_rfc3339();
    }
    out
}
