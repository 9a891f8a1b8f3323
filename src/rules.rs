//! The fixed formatting rules for papers.
//!
//! Both the checklist and the repair engine read every threshold from a
//! [`RuleCatalog`], so a property written by repair always passes the
//! corresponding check.

use crate::model::{LineRule, MarginSide, Measure};
use serde::Serialize;

/// Twips per centimeter (1 cm = 567 twips, rounded).
pub const TWIPS_PER_CM: f64 = 567.0;

/// Formatting thresholds for title, body, tables, captions, and page setup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleCatalog {
    /// Substring the title font family must contain
    pub title_font_family: &'static str,
    /// Smallest acceptable title size in points
    pub title_min_size: f32,
    /// Customary name of the title size
    pub title_size_name: &'static str,

    /// Substring the body font family must contain
    pub body_font_family: &'static str,
    /// Nominal body size in points
    pub body_max_size: f32,
    /// Points a body run may exceed `body_max_size` by
    pub body_size_tolerance: f32,
    /// Customary name of the body size
    pub body_size_name: &'static str,

    /// Required line spacing in 240ths of a line
    pub line_spacing: i64,
    /// Line spacing rule written by repair
    pub line_rule: LineRule,
    /// Smallest acceptable line spacing
    pub line_spacing_floor: f64,
    /// Human-readable spacing multiple
    pub line_spacing_multiple: f32,

    /// Required first-line indent in twips
    pub first_line_indent: i64,
    /// Fraction of the required indent that is still accepted
    pub indent_floor_ratio: f64,
    /// Human-readable indent in characters
    pub indent_chars: u32,

    /// Required top margin in cm
    pub margin_top_cm: f64,
    /// Required bottom margin in cm
    pub margin_bottom_cm: f64,
    /// Required left margin in cm
    pub margin_left_cm: f64,
    /// Required right margin in cm
    pub margin_right_cm: f64,
    /// Fraction of a required margin that is still accepted
    pub margin_floor_ratio: f64,

    /// First page number written by repair
    pub page_numbering_start: u32,

    /// Glyph a figure caption starts with
    pub figure_marker: char,
    /// Glyph separating a caption label from its text
    pub caption_separator: char,
}

impl RuleCatalog {
    /// The standard rules for academic papers.
    pub fn standard() -> Self {
        Self {
            title_font_family: "黑体",
            title_min_size: 16.0,
            title_size_name: "三号",

            body_font_family: "宋体",
            body_max_size: 12.0,
            body_size_tolerance: 2.0,
            body_size_name: "小四号",

            line_spacing: 360,
            line_rule: LineRule::Auto,
            line_spacing_floor: 360.0,
            line_spacing_multiple: 1.5,

            first_line_indent: 420,
            indent_floor_ratio: 0.8,
            indent_chars: 2,

            margin_top_cm: 2.5,
            margin_bottom_cm: 2.5,
            margin_left_cm: 3.0,
            margin_right_cm: 3.0,
            margin_floor_ratio: 0.9,

            page_numbering_start: 1,

            figure_marker: '图',
            caption_separator: '：',
        }
    }

    /// Whether a title font family is acceptable.
    pub fn is_title_family(&self, family: &str) -> bool {
        family.contains(self.title_font_family)
    }

    /// Whether a body font family is acceptable.
    pub fn is_body_family(&self, family: &str) -> bool {
        family.contains(self.body_font_family)
    }

    /// Largest body or table run size that passes.
    pub fn body_size_limit(&self) -> f32 {
        self.body_max_size + self.body_size_tolerance
    }

    /// Smallest first-line indent that passes, in twips.
    pub fn indent_floor(&self) -> f64 {
        self.first_line_indent as f64 * self.indent_floor_ratio
    }

    /// Required first-line indent as a stored measure.
    pub fn indent_measure(&self) -> Measure {
        Measure::twips(self.first_line_indent)
    }

    /// Required line spacing as a stored measure.
    pub fn spacing_measure(&self) -> Measure {
        Measure::twips(self.line_spacing)
    }

    /// Required margin for a side in cm.
    pub fn margin_cm(&self, side: MarginSide) -> f64 {
        match side {
            MarginSide::Top => self.margin_top_cm,
            MarginSide::Bottom => self.margin_bottom_cm,
            MarginSide::Left => self.margin_left_cm,
            MarginSide::Right => self.margin_right_cm,
        }
    }

    /// Required margin for a side in twips, truncated to a whole twip.
    pub fn margin_twips(&self, side: MarginSide) -> i64 {
        (self.margin_cm(side) * TWIPS_PER_CM) as i64
    }

    /// Smallest margin for a side that passes, in twips.
    pub fn margin_floor(&self, side: MarginSide) -> f64 {
        self.margin_cm(side) * TWIPS_PER_CM * self.margin_floor_ratio
    }

    /// Whether trimmed paragraph text is a figure caption.
    pub fn is_caption(&self, text: &str) -> bool {
        text.starts_with(self.figure_marker) && text.contains(self.caption_separator)
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
