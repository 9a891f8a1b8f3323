//! Document model types.
//!
//! This module defines the in-memory tree the engines walk: a section with
//! page properties, top-level paragraphs made of runs, and tables whose
//! cells hold paragraphs of their own. Attributes that may be inherited
//! from a style are `Option`s; `None` never stands for a numeric zero.

mod document;
mod measure;
mod paragraph;
mod table;

pub use document::{Document, MarginSide, PageMargins, PageNumbering, Section};
pub use measure::{Measure, MeasureParseError};
pub use paragraph::{
    Alignment, Indentation, LineRule, Paragraph, ParagraphStyle, Spacing, TextRun, TextStyle,
};
pub use table::{Table, TableCell, TableRow};
