//! Report: the issues of one pass together with when they were produced.

use crate::engine::Pass;
use crate::issue::{Issue, IssueCategory};
use chrono::{DateTime, Local};
use serde::Serialize;

/// Issues from one check or repair pass, ready for export.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Which pass produced the issues
    pub pass: Pass,

    /// Name of the checked document, if known
    pub source: Option<String>,

    /// When the report was created
    pub generated_at: DateTime<Local>,

    /// Issues in emission order
    pub issues: Vec<Issue>,
}

impl Report {
    /// Create a report stamped with the current local time.
    pub fn new(pass: Pass, issues: Vec<Issue>) -> Self {
        Self {
            pass,
            source: None,
            generated_at: Local::now(),
            issues,
        }
    }

    /// Set the source document name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Override the timestamp.
    pub fn with_generated_at(mut self, generated_at: DateTime<Local>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Number of issues.
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    /// Check if the report has no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issue counts per category, in category order, omitting zero counts.
    pub fn summary(&self) -> Vec<(IssueCategory, usize)> {
        IssueCategory::ALL
            .iter()
            .map(|&c| (c, self.issues.iter().filter(|i| i.category() == c).count()))
            .filter(|&(_, n)| n > 0)
            .collect()
    }
}
