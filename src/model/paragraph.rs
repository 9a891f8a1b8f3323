//! Paragraph and run-level types.

use super::Measure;
use serde::{Deserialize, Serialize};

/// A paragraph of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    #[serde(default)]
    pub runs: Vec<TextRun>,

    /// Paragraph style
    #[serde(default)]
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single unstyled run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_run(TextRun::new(text));
        p
    }

    /// Add a run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Set alignment and return self.
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    /// Concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Text with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> String {
        self.plain_text().trim().to_string()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_blank(&self) -> bool {
        self.plain_text().trim().is_empty()
    }

    /// Paragraph alignment.
    pub fn alignment(&self) -> Alignment {
        self.style.alignment
    }

    /// Set the paragraph alignment.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.style.alignment = alignment;
    }

    /// Stored first-line indent, if any.
    pub fn first_line_indent(&self) -> Option<&Measure> {
        self.style
            .indentation
            .as_ref()
            .and_then(|ind| ind.first_line.as_ref())
    }

    /// Set the first-line indent, creating the indentation block if needed.
    pub fn set_first_line_indent(&mut self, value: Measure) {
        self.style
            .indentation
            .get_or_insert_with(Indentation::default)
            .first_line = Some(value);
    }

    /// Stored line spacing value, if any.
    pub fn line_spacing(&self) -> Option<&Measure> {
        self.style.spacing.as_ref().and_then(|s| s.line.as_ref())
    }

    /// Set line spacing and its rule, creating the spacing block if needed.
    pub fn set_line_spacing(&mut self, value: Measure, rule: LineRule) {
        let spacing = self.style.spacing.get_or_insert_with(Spacing::default);
        spacing.line = Some(value);
        spacing.line_rule = Some(rule);
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Text alignment
    #[serde(default)]
    pub alignment: Alignment,

    /// Indentation block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indentation: Option<Indentation>,

    /// Spacing block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// No explicit alignment
    #[default]
    Unset,
    /// Left alignment
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

/// Indentation block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Indentation {
    /// First-line indent in twips
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_line: Option<Measure>,
}

/// Spacing block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    /// Line spacing value; 240 means single spacing under [`LineRule::Auto`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<Measure>,

    /// How `line` is interpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_rule: Option<LineRule>,
}

/// Interpretation of a line spacing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRule {
    /// Multiple of single spacing, in 240ths
    Auto,
    /// Exact height in twips
    Exact,
    /// Minimum height in twips
    AtLeast,
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    #[serde(default)]
    pub text: String,

    /// Text styling
    #[serde(default)]
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new run with inherited styling.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Set the font family and return self.
    pub fn font(mut self, family: impl Into<String>) -> Self {
        self.style.font_family = Some(family.into());
        self
    }

    /// Set the font size and return self.
    pub fn size(mut self, points: f32) -> Self {
        self.style.font_size = Some(points);
        self
    }

    /// Set bold and return self.
    pub fn bold(mut self, bold: bool) -> Self {
        self.style.bold = bold;
        self
    }

    /// Explicit font family, treating blank names as inherited.
    pub fn font_family(&self) -> Option<&str> {
        self.style
            .font_family
            .as_deref()
            .filter(|f| !f.trim().is_empty())
    }

    /// Explicit font size in points.
    pub fn font_size(&self) -> Option<f32> {
        self.style.font_size
    }

    /// Whether the run is bold.
    pub fn is_bold(&self) -> bool {
        self.style.bold
    }

    /// Set the font family.
    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.style.font_family = Some(family.into());
    }

    /// Set the font size in points.
    pub fn set_font_size(&mut self, points: f32) {
        self.style.font_size = Some(points);
    }

    /// Set the bold flag.
    pub fn set_bold(&mut self, bold: bool) {
        self.style.bold = bold;
    }
}

/// Run styling. `None` means inherited from the paragraph or document style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font family
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,

    /// Font size in points
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    /// Bold text
    #[serde(default)]
    pub bold: bool,
}
