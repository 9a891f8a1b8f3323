//! Title/body classification of top-level paragraphs.

use crate::issue::Location;
use crate::model::Paragraph;

/// Role of a non-blank top-level paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The first non-blank paragraph
    Title,
    /// A later non-blank paragraph; the number counts body paragraphs from 1
    Body(usize),
}

/// A paragraph position together with its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    /// Zero-based position in the document's paragraph list
    pub index: usize,
    /// Assigned role
    pub role: Role,
}

impl Classified {
    /// Location label of the paragraph.
    pub fn location(&self) -> Location {
        Location::Paragraph(self.index + 1)
    }
}

/// Label every non-blank paragraph as title or body, in document order.
///
/// Blank paragraphs are omitted. At most one entry is the title.
pub fn classify(paragraphs: &[Paragraph]) -> Vec<Classified> {
    paragraphs
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_blank())
        .enumerate()
        .map(|(ordinal, (index, _))| Classified {
            index,
            role: if ordinal == 0 {
                Role::Title
            } else {
                Role::Body(ordinal)
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_paragraphs_are_skipped() {
        let paragraphs = vec![
            Paragraph::with_text("  "),
            Paragraph::with_text("论文标题"),
            Paragraph::new(),
            Paragraph::with_text("第一段"),
            Paragraph::with_text("第二段"),
        ];

        let classified = classify(&paragraphs);
        assert_eq!(
            classified,
            vec![
                Classified { index: 1, role: Role::Title },
                Classified { index: 3, role: Role::Body(1) },
                Classified { index: 4, role: Role::Body(2) },
            ]
        );
        assert_eq!(classified[0].location(), Location::Paragraph(2));
    }

    #[test]
    fn test_empty_document() {
        assert!(classify(&[]).is_empty());
        assert!(classify(&[Paragraph::new()]).is_empty());
    }
}
