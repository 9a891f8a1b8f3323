//! Document-level types.

use super::{Measure, Paragraph, Table};
use serde::{Deserialize, Serialize};

/// An in-memory word-processing document.
///
/// Top-level paragraphs and tables are independent sequences; a table is
/// not a paragraph and does not take a paragraph position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Top-level paragraphs in document order
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    /// Tables in document order
    #[serde(default)]
    pub tables: Vec<Table>,

    /// Section (page) properties
    #[serde(default)]
    pub section: Section,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a table to the document.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Check if the document has no content.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }

    /// Get plain text content of the top-level paragraphs.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Section properties: page margins and page numbering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Margin block; `None` when the document defines no margins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margins: Option<PageMargins>,

    /// Page numbering block; `None` when page numbers are off
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_numbering: Option<PageNumbering>,
}

impl Section {
    /// Stored margin for one side, if the block and the side are present.
    pub fn margin(&self, side: MarginSide) -> Option<&Measure> {
        self.margins.as_ref().and_then(|m| m.get(side))
    }

    /// Set one margin, creating the margin block if needed.
    pub fn set_margin(&mut self, side: MarginSide, value: Measure) {
        self.margins
            .get_or_insert_with(PageMargins::default)
            .set(side, value);
    }

    /// Whether page numbering is enabled.
    pub fn has_page_numbering(&self) -> bool {
        self.page_numbering.is_some()
    }

    /// Enable page numbering starting at `start`.
    pub fn set_page_numbering_start(&mut self, start: u32) {
        self.page_numbering
            .get_or_insert_with(PageNumbering::default)
            .start = Some(start);
    }
}

/// Page margins in twips. Each side may be unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMargins {
    /// Top margin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Measure>,
    /// Bottom margin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Measure>,
    /// Left margin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Measure>,
    /// Right margin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Measure>,
}

impl PageMargins {
    /// Get the margin for a side.
    pub fn get(&self, side: MarginSide) -> Option<&Measure> {
        match side {
            MarginSide::Top => self.top.as_ref(),
            MarginSide::Bottom => self.bottom.as_ref(),
            MarginSide::Left => self.left.as_ref(),
            MarginSide::Right => self.right.as_ref(),
        }
    }

    /// Set the margin for a side.
    pub fn set(&mut self, side: MarginSide, value: Measure) {
        let slot = match side {
            MarginSide::Top => &mut self.top,
            MarginSide::Bottom => &mut self.bottom,
            MarginSide::Left => &mut self.left,
            MarginSide::Right => &mut self.right,
        };
        *slot = Some(value);
    }
}

/// One side of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarginSide {
    /// Top edge
    Top,
    /// Bottom edge
    Bottom,
    /// Left edge
    Left,
    /// Right edge
    Right,
}

impl MarginSide {
    /// All sides in checking order.
    pub const ALL: [MarginSide; 4] = [
        MarginSide::Top,
        MarginSide::Bottom,
        MarginSide::Left,
        MarginSide::Right,
    ];

    /// Chinese name of the side, as used in issue text.
    pub fn label(self) -> &'static str {
        match self {
            MarginSide::Top => "上",
            MarginSide::Bottom => "下",
            MarginSide::Left => "左",
            MarginSide::Right => "右",
        }
    }
}

/// Page numbering settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageNumbering {
    /// First page number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
}
