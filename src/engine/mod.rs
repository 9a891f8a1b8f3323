//! Checklist and repair engines.
//!
//! Both engines walk the document in the same order: section properties,
//! top-level paragraphs (title, then body), tables, figure captions. The
//! checklist reports violations without touching the document; repair
//! corrects them in place and reports each applied fix.
//!
//! # Example
//!
//! ```
//! use paperfmt::engine::{check, fix};
//! use paperfmt::{Document, Paragraph, RuleCatalog};
//!
//! let rules = RuleCatalog::standard();
//! let mut doc = Document::new();
//! doc.add_paragraph(Paragraph::with_text("论文标题"));
//!
//! let before = check(&doc, &rules);
//! assert!(!before.is_empty());
//!
//! fix(&mut doc, &rules);
//! assert!(check(&doc, &rules).is_empty());
//! ```

mod check;
mod classify;
pub mod observer;
mod repair;

pub use check::{check, check_with_observer};
pub use classify::{classify, Classified, Role};
pub use observer::{CompositeObserver, LogObserver, NullObserver, Pass, PassObserver};
pub use repair::{fix, fix_with_observer, preview_fix};

use crate::issue::{Issue, IssueCategory, Location};
use crate::model::{Measure, TextRun};
use crate::rules::RuleCatalog;

/// Ordered, append-only issue collection for one pass.
pub(crate) struct IssueLog<'o> {
    pass: Pass,
    issues: Vec<Issue>,
    observer: &'o mut dyn PassObserver,
}

impl<'o> IssueLog<'o> {
    pub(crate) fn start(pass: Pass, observer: &'o mut dyn PassObserver) -> Self {
        observer.pass_started(pass);
        Self {
            pass,
            issues: Vec::new(),
            observer,
        }
    }

    pub(crate) fn classified(&mut self, entry: &Classified) {
        self.observer.paragraph_classified(entry.location(), entry.role);
    }

    pub(crate) fn push(
        &mut self,
        category: IssueCategory,
        location: Location,
        description: impl Into<String>,
        suggestion: impl Into<String>,
    ) {
        let issue = Issue::new(category, location, description, suggestion);
        self.observer.issue_recorded(self.pass, &issue);
        self.issues.push(issue);
    }

    pub(crate) fn unreadable(&mut self, location: Location, attribute: &str, raw: &str) {
        self.observer.value_unreadable(location, attribute, raw);
    }

    pub(crate) fn finish(self) -> Vec<Issue> {
        self.observer.pass_finished(self.pass, self.issues.len());
        self.issues
    }
}

/// Outcome of comparing a stored measure against a floor.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Reading {
    /// No value stored
    Missing,
    /// Stored text is not a number
    Unreadable(String),
    /// Parsed but below the floor
    Below,
    /// Parsed and at or above the floor
    Sufficient,
}

pub(crate) fn read_at_least(value: Option<&Measure>, floor: f64) -> Reading {
    match value.map(Measure::value) {
        None => Reading::Missing,
        Some(Err(e)) => Reading::Unreadable(e.raw),
        Some(Ok(v)) if v < floor => Reading::Below,
        Some(Ok(_)) => Reading::Sufficient,
    }
}

// Run predicates shared by check and repair. Inherited sizes and families
// never match.

pub(crate) fn title_size_short(run: &TextRun, rules: &RuleCatalog) -> bool {
    run.font_size().is_some_and(|s| s < rules.title_min_size)
}

pub(crate) fn title_family_wrong(run: &TextRun, rules: &RuleCatalog) -> bool {
    run.font_family().is_some_and(|f| !rules.is_title_family(f))
}

pub(crate) fn body_size_excess(run: &TextRun, rules: &RuleCatalog) -> bool {
    run.font_size().is_some_and(|s| s > rules.body_size_limit())
}

pub(crate) fn body_family_wrong(run: &TextRun, rules: &RuleCatalog) -> bool {
    run.font_family().is_some_and(|f| !rules.is_body_family(f))
}
