//! Repair engine: corrects violations in place and reports each fix.
//!
//! Traversal mirrors the checklist. Most corrections are conditional on the
//! matching check failing, so a second pass finds nothing to do. Three
//! corrections are written on every pass regardless of the current value:
//! the title font family, the body first-line indent, and the body line
//! spacing. Each of those is reported every time it is written.

use super::{
    body_family_wrong, body_size_excess, classify, read_at_least, title_size_short, IssueLog,
    LogObserver, Pass, PassObserver, Reading, Role,
};
use crate::issue::{Issue, IssueCategory, Location};
use crate::model::{Alignment, Document, MarginSide, Measure, Paragraph, Section, Table};
use crate::rules::RuleCatalog;

/// Repair a document in place, logging progress through the `log` facade.
pub fn fix(doc: &mut Document, rules: &RuleCatalog) -> Vec<Issue> {
    fix_with_observer(doc, rules, &mut LogObserver)
}

/// Repair a clone of `doc`, leaving the original untouched.
///
/// Returns the repaired document and the fixes that were applied.
pub fn preview_fix(doc: &Document, rules: &RuleCatalog) -> (Document, Vec<Issue>) {
    let mut preview = doc.clone();
    let issues = fix(&mut preview, rules);
    (preview, issues)
}

/// Repair a document in place, reporting progress to `observer`.
pub fn fix_with_observer(
    doc: &mut Document,
    rules: &RuleCatalog,
    observer: &mut dyn PassObserver,
) -> Vec<Issue> {
    let mut repair = Repair {
        rules,
        log: IssueLog::start(Pass::Repair, observer),
    };

    repair.section(&mut doc.section);

    for entry in classify(&doc.paragraphs) {
        repair.log.classified(&entry);
        let paragraph = &mut doc.paragraphs[entry.index];
        match entry.role {
            Role::Title => repair.title(paragraph, entry.location()),
            Role::Body(_) => repair.body(paragraph, entry.location()),
        }
    }

    for (i, table) in doc.tables.iter_mut().enumerate() {
        repair.table(table, i + 1);
    }

    for (i, paragraph) in doc.paragraphs.iter_mut().enumerate() {
        repair.caption(paragraph, Location::Paragraph(i + 1));
    }

    repair.log.finish()
}

struct Repair<'r, 'o> {
    rules: &'r RuleCatalog,
    log: IssueLog<'o>,
}

impl Repair<'_, '_> {
    fn section(&mut self, section: &mut Section) {
        let rules = self.rules;

        for side in MarginSide::ALL {
            let reading = read_at_least(section.margin(side), rules.margin_floor(side));
            if reading == Reading::Sufficient {
                continue;
            }
            section.set_margin(side, Measure::twips(rules.margin_twips(side)));
            self.log.push(
                IssueCategory::Margin,
                Location::Document,
                format!("已修复{}边距", side.label()),
                format!("已设置为{:.1}厘米", rules.margin_cm(side)),
            );
        }

        if !section.has_page_numbering() {
            section.set_page_numbering_start(rules.page_numbering_start);
            self.log.push(
                IssueCategory::PageNumber,
                Location::Document,
                "已添加页码",
                format!("已设置页码从{}开始", rules.page_numbering_start),
            );
        }
    }

    fn title(&mut self, paragraph: &mut Paragraph, location: Location) {
        let rules = self.rules;
        let category = IssueCategory::TitleFormat;

        if paragraph.alignment() != Alignment::Center {
            paragraph.set_alignment(Alignment::Center);
            self.log
                .push(category, location, "已修复标题对齐方式", "已设置为居中对齐");
        }

        for run in &mut paragraph.runs {
            if title_size_short(run, rules) {
                run.set_font_size(rules.title_min_size);
                self.log.push(
                    category,
                    location,
                    "已修复标题字号",
                    format!(
                        "已设置为{}字（{}磅）",
                        rules.title_size_name, rules.title_min_size
                    ),
                );
            }

            run.set_font_family(rules.title_font_family);
            self.log.push(
                category,
                location,
                "已修复标题字体",
                format!("已设置为{}", rules.title_font_family),
            );

            if !run.is_bold() {
                run.set_bold(true);
                self.log
                    .push(category, location, "已修复标题加粗", "已设置为加粗");
            }
        }
    }

    fn body(&mut self, paragraph: &mut Paragraph, location: Location) {
        let rules = self.rules;
        let category = IssueCategory::ParagraphFormat;

        paragraph.set_first_line_indent(rules.indent_measure());
        self.log.push(
            category,
            location,
            "已修复段落首行缩进",
            format!("已设置为{}字符缩进", rules.indent_chars),
        );

        paragraph.set_line_spacing(rules.spacing_measure(), rules.line_rule);
        self.log.push(
            category,
            location,
            "已修复段落行距",
            format!("已设置为{}倍行距", rules.line_spacing_multiple),
        );

        for run in &mut paragraph.runs {
            if body_size_excess(run, rules) {
                run.set_font_size(rules.body_max_size);
                self.log.push(
                    IssueCategory::BodyFormat,
                    location,
                    "已修复正文字号",
                    format!(
                        "已设置为{}字（{}磅）",
                        rules.body_size_name, rules.body_max_size
                    ),
                );
            }

            if body_family_wrong(run, rules) {
                run.set_font_family(rules.body_font_family);
                self.log.push(
                    IssueCategory::BodyFormat,
                    location,
                    "已修复正文字体",
                    format!("已设置为{}", rules.body_font_family),
                );
            }
        }
    }

    fn table(&mut self, table: &mut Table, number: usize) {
        let rules = self.rules;

        if let Some(header) = table.rows.first_mut() {
            for paragraph in header.cells.iter_mut().flat_map(|c| &mut c.paragraphs) {
                if paragraph.alignment() != Alignment::Center {
                    paragraph.set_alignment(Alignment::Center);
                    self.log.push(
                        IssueCategory::TableFormat,
                        Location::Table(number),
                        "已修复表格标题对齐方式",
                        "已设置为居中对齐",
                    );
                }
            }
        }

        for (r, row) in table.rows.iter_mut().enumerate() {
            let runs = row
                .cells
                .iter_mut()
                .flat_map(|c| &mut c.paragraphs)
                .flat_map(|p| &mut p.runs);
            for run in runs {
                if body_size_excess(run, rules) {
                    run.set_font_size(rules.body_max_size);
                    self.log.push(
                        IssueCategory::TableFormat,
                        Location::TableRow {
                            table: number,
                            row: r + 1,
                        },
                        "已修复表格内容字号",
                        format!(
                            "已设置为{}字（{}磅）",
                            rules.body_size_name, rules.body_max_size
                        ),
                    );
                }
            }
        }
    }

    fn caption(&mut self, paragraph: &mut Paragraph, location: Location) {
        if self.rules.is_caption(&paragraph.trimmed_text())
            && paragraph.alignment() != Alignment::Center
        {
            paragraph.set_alignment(Alignment::Center);
            self.log.push(
                IssueCategory::FigureFormat,
                location,
                "已修复图片标题对齐方式",
                "已设置为居中对齐",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{check_with_observer, NullObserver};
    use crate::model::{LineRule, TextRun};

    fn run_fix(doc: &mut Document) -> Vec<Issue> {
        fix_with_observer(doc, &RuleCatalog::standard(), &mut NullObserver)
    }

    #[test]
    fn test_margins_fixed_only_where_failing() {
        let rules = RuleCatalog::standard();
        let mut doc = Document::new();
        doc.section.set_margin(MarginSide::Top, Measure::twips(1500));
        doc.section.set_margin(MarginSide::Left, Measure::from_raw("?"));
        doc.section.set_page_numbering_start(3);

        let issues = run_fix(&mut doc);
        let descriptions: Vec<_> = issues.iter().map(|i| i.description()).collect();
        assert_eq!(descriptions, vec!["已修复下边距", "已修复左边距", "已修复右边距"]);

        assert_eq!(doc.section.margin(MarginSide::Top), Some(&Measure::twips(1500)));
        assert_eq!(
            doc.section.margin(MarginSide::Left),
            Some(&Measure::twips(rules.margin_twips(MarginSide::Left)))
        );
        assert_eq!(doc.section.page_numbering.as_ref().and_then(|p| p.start), Some(3));
    }

    #[test]
    fn test_title_family_rewritten_every_pass() {
        let mut doc = Document::new();
        let mut title = Paragraph::new().align(Alignment::Center);
        title.add_run(TextRun::new("标题").font("黑体").size(18.0).bold(true));
        doc.add_paragraph(title);

        let issues = run_fix(&mut doc);
        let title_issues: Vec<_> = issues
            .iter()
            .filter(|i| i.category() == IssueCategory::TitleFormat)
            .map(|i| i.description())
            .collect();
        assert_eq!(title_issues, vec!["已修复标题字体"]);
        assert_eq!(doc.paragraphs[0].runs[0].font_size(), Some(18.0));
    }

    #[test]
    fn test_title_inherited_size_left_unset() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("标题"));

        run_fix(&mut doc);
        let run = &doc.paragraphs[0].runs[0];
        assert_eq!(run.font_size(), None);
        assert_eq!(run.font_family(), Some("黑体"));
        assert!(run.is_bold());
        assert_eq!(doc.paragraphs[0].alignment(), Alignment::Center);
    }

    #[test]
    fn test_body_blocks_created() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("标题"));
        let mut body = Paragraph::new();
        body.add_run(TextRun::new("正文").font("Times New Roman").size(16.0));
        body.add_run(TextRun::new("继承"));
        doc.add_paragraph(body);

        run_fix(&mut doc);
        let body = &doc.paragraphs[1];
        assert_eq!(body.first_line_indent(), Some(&Measure::twips(420)));
        assert_eq!(body.line_spacing(), Some(&Measure::twips(360)));
        assert_eq!(
            body.style.spacing.as_ref().and_then(|s| s.line_rule),
            Some(LineRule::Auto)
        );
        assert_eq!(body.runs[0].font_family(), Some("宋体"));
        assert_eq!(body.runs[0].font_size(), Some(12.0));
        assert_eq!(body.runs[1].font_family(), None);
        assert_eq!(body.runs[1].font_size(), None);
    }

    #[test]
    fn test_fixed_document_passes_check() {
        let rules = RuleCatalog::standard();
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text(""));
        doc.add_paragraph(Paragraph::with_text("标题").align(Alignment::Right));
        let mut body = Paragraph::with_text("正文");
        body.set_first_line_indent(Measure::from_raw("bad"));
        doc.add_paragraph(body);
        doc.add_paragraph(Paragraph::with_text("图1：流程"));

        run_fix(&mut doc);
        let issues = check_with_observer(&doc, &rules, &mut NullObserver);
        assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
    }

    #[test]
    fn test_preview_leaves_original() {
        let rules = RuleCatalog::standard();
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("标题"));

        let (preview, issues) = preview_fix(&doc, &rules);
        assert!(!issues.is_empty());
        assert_ne!(preview, doc);
        assert!(doc.section.margins.is_none());
        assert!(preview.section.margins.is_some());
    }
}
