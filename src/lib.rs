//! # paperfmt
//!
//! Format compliance checking and repair for academic papers.
//!
//! The library inspects a paper's document model and reports where it
//! deviates from a fixed formatting standard: title and body fonts,
//! first-line indent, line spacing, page margins, page numbering, table
//! header alignment, and figure caption alignment. It can also apply the
//! corresponding corrections in place.
//!
//! ## Quick Start
//!
//! ```no_run
//! use paperfmt::{check_file, render};
//!
//! fn main() -> paperfmt::Result<()> {
//!     let issues = check_file("paper.json")?;
//!
//!     let report = render::Report::new(paperfmt::Pass::Check, issues);
//!     let html = render::to_html(&report, &render::ReportOptions::default())?;
//!     std::fs::write("report.html", html)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Checklist engine**: read-only, deterministic, ordered issue list
//! - **Repair engine**: mirrors the checklist and reports every applied fix
//! - **Single rule catalog**: check and repair share every threshold
//! - **Pluggable observers**: pass events go to a caller-supplied sink
//! - **Reports**: HTML, plain text, and JSON exporters

pub mod engine;
pub mod error;
pub mod issue;
pub mod model;
pub mod render;
pub mod rules;
pub mod store;

// Re-export commonly used types
pub use engine::{
    check, check_with_observer, fix, fix_with_observer, preview_fix, LogObserver, NullObserver,
    Pass, PassObserver,
};
pub use error::{Error, Result};
pub use issue::{Issue, IssueCategory, Location};
pub use model::{
    Alignment, Document, LineRule, MarginSide, Measure, Paragraph, Section, Table, TableCell,
    TableRow, TextRun,
};
pub use render::{JsonFormat, Report, ReportOptions};
pub use rules::RuleCatalog;
pub use store::{DocumentStore, JsonStore, StoreRegistry};

use std::path::Path;

/// Load a document, choosing the store by file extension.
///
/// # Example
///
/// ```no_run
/// use paperfmt::load_document;
///
/// let doc = load_document("paper.json").unwrap();
/// println!("Paragraphs: {}", doc.paragraphs.len());
/// ```
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Document> {
    StoreRegistry::with_defaults().load(path.as_ref())
}

/// Save a document, choosing the store by file extension.
pub fn save_document<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    StoreRegistry::with_defaults().save(doc, path.as_ref())
}

/// Load a document and check it against the standard rules.
///
/// # Example
///
/// ```no_run
/// use paperfmt::check_file;
///
/// for issue in check_file("paper.json").unwrap() {
///     println!("{}", issue);
/// }
/// ```
pub fn check_file<P: AsRef<Path>>(path: P) -> Result<Vec<Issue>> {
    let doc = load_document(path)?;
    Ok(check(&doc, &RuleCatalog::standard()))
}

/// Load a document, repair it, and save the result to `output`.
///
/// `output` may be the same path as `input`. Returns the applied fixes.
///
/// # Example
///
/// ```no_run
/// use paperfmt::fix_file;
///
/// let fixes = fix_file("paper.json", "paper_fixed.json").unwrap();
/// println!("Applied {} fixes", fixes.len());
/// ```
pub fn fix_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<Vec<Issue>> {
    let registry = StoreRegistry::with_defaults();
    let mut doc = registry.load(input.as_ref())?;
    let issues = fix(&mut doc, &RuleCatalog::standard());
    registry.save(&doc, output.as_ref())?;
    Ok(issues)
}
