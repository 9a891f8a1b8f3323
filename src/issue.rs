//! Formatting issues reported by the engines.

use serde::{Serialize, Serializer};
use std::fmt;

/// Kind of formatting issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueCategory {
    /// Title paragraph formatting
    TitleFormat,
    /// Body run fonts
    BodyFormat,
    /// Body paragraph indent and spacing
    ParagraphFormat,
    /// Table header alignment and cell fonts
    TableFormat,
    /// Figure caption alignment
    FigureFormat,
    /// Page margins
    Margin,
    /// Page numbering
    PageNumber,
}

impl IssueCategory {
    /// All categories in declaration order.
    pub const ALL: [IssueCategory; 7] = [
        IssueCategory::TitleFormat,
        IssueCategory::BodyFormat,
        IssueCategory::ParagraphFormat,
        IssueCategory::TableFormat,
        IssueCategory::FigureFormat,
        IssueCategory::Margin,
        IssueCategory::PageNumber,
    ];

    /// Display name shown in reports.
    pub fn label(self) -> &'static str {
        match self {
            IssueCategory::TitleFormat => "标题格式",
            IssueCategory::BodyFormat => "正文格式",
            IssueCategory::ParagraphFormat => "段落格式",
            IssueCategory::TableFormat => "表格格式",
            IssueCategory::FigureFormat => "图片格式",
            IssueCategory::Margin => "页边距",
            IssueCategory::PageNumber => "页码",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where in the document an issue was found.
///
/// Paragraph and table numbers are 1-based. Paragraph numbers count every
/// top-level paragraph, blank ones included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Section (page) properties
    Document,
    /// A top-level paragraph
    Paragraph(usize),
    /// A table as a whole
    Table(usize),
    /// One row of a table
    TableRow {
        /// Table number
        table: usize,
        /// Row number
        row: usize,
    },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Document => f.write_str("文档属性"),
            Location::Paragraph(n) => write!(f, "第{}段落", n),
            Location::Table(n) => write!(f, "表格{}", n),
            Location::TableRow { table, row } => write!(f, "表格{}，第{}行", table, row),
        }
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A single formatting issue, either a violation found by the checklist
/// or a fix applied by repair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    category: IssueCategory,
    location: Location,
    description: String,
    suggestion: String,
}

impl Issue {
    /// Create a new issue.
    pub fn new(
        category: IssueCategory,
        location: Location,
        description: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            category,
            location,
            description: description.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Issue category.
    pub fn category(&self) -> IssueCategory {
        self.category
    }

    /// Issue location.
    pub fn location(&self) -> Location {
        self.location
    }

    /// What is wrong, or what was changed.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// How to fix it, or the value that was applied.
    pub fn suggestion(&self) -> &str {
        &self.suggestion
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} ({})",
            self.category, self.location, self.description, self.suggestion
        )
    }
}
