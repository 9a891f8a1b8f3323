//! Checklist engine: reports violations without modifying the document.

use super::{
    body_family_wrong, body_size_excess, classify, read_at_least, title_family_wrong,
    title_size_short, IssueLog, LogObserver, Pass, PassObserver, Reading, Role,
};
use crate::issue::{Issue, IssueCategory, Location};
use crate::model::{Alignment, Document, MarginSide, Paragraph, Section, Table};
use crate::rules::RuleCatalog;

/// Check a document, logging progress through the `log` facade.
pub fn check(doc: &Document, rules: &RuleCatalog) -> Vec<Issue> {
    check_with_observer(doc, rules, &mut LogObserver)
}

/// Check a document, reporting progress to `observer`.
///
/// The result is deterministic: the same document always yields the same
/// issues in the same order.
pub fn check_with_observer(
    doc: &Document,
    rules: &RuleCatalog,
    observer: &mut dyn PassObserver,
) -> Vec<Issue> {
    let mut checklist = Checklist {
        rules,
        log: IssueLog::start(Pass::Check, observer),
    };

    checklist.section(&doc.section);

    for entry in classify(&doc.paragraphs) {
        checklist.log.classified(&entry);
        let paragraph = &doc.paragraphs[entry.index];
        match entry.role {
            Role::Title => checklist.title(paragraph, entry.location()),
            Role::Body(_) => checklist.body(paragraph, entry.location()),
        }
    }

    for (i, table) in doc.tables.iter().enumerate() {
        checklist.table(table, i + 1);
    }

    for (i, paragraph) in doc.paragraphs.iter().enumerate() {
        checklist.caption(paragraph, Location::Paragraph(i + 1));
    }

    checklist.log.finish()
}

struct Checklist<'r, 'o> {
    rules: &'r RuleCatalog,
    log: IssueLog<'o>,
}

impl Checklist<'_, '_> {
    fn section(&mut self, section: &Section) {
        let rules = self.rules;

        if section.margins.is_none() {
            self.log.push(
                IssueCategory::Margin,
                Location::Document,
                "未设置页边距",
                format!(
                    "设置页边距：上下{:.1}厘米，左右{:.1}厘米",
                    rules.margin_top_cm, rules.margin_left_cm
                ),
            );
        } else {
            for side in MarginSide::ALL {
                self.margin(section, side);
            }
        }

        if !section.has_page_numbering() {
            self.log.push(
                IssueCategory::PageNumber,
                Location::Document,
                "未设置页码",
                "在页面底部居中添加页码",
            );
        }
    }

    fn margin(&mut self, section: &Section, side: MarginSide) {
        let cm = self.rules.margin_cm(side);
        match read_at_least(section.margin(side), self.rules.margin_floor(side)) {
            Reading::Sufficient => {}
            Reading::Missing | Reading::Below => self.log.push(
                IssueCategory::Margin,
                Location::Document,
                format!("{}边距不符合要求，当前值小于{:.1}厘米", side.label(), cm),
                format!("将{}边距设置为{:.1}厘米", side.label(), cm),
            ),
            Reading::Unreadable(raw) => {
                self.log.unreadable(Location::Document, "margin", &raw);
                self.log.push(
                    IssueCategory::Margin,
                    Location::Document,
                    format!("无法解析{}边距值", side.label()),
                    "请手动检查页边距设置",
                );
            }
        }
    }

    fn title(&mut self, paragraph: &Paragraph, location: Location) {
        let rules = self.rules;
        let category = IssueCategory::TitleFormat;

        if paragraph.alignment() != Alignment::Center {
            self.log
                .push(category, location, "标题未居中对齐", "将标题设置为居中对齐");
        }

        for run in &paragraph.runs {
            if title_size_short(run, rules) {
                self.log.push(
                    category,
                    location,
                    format!(
                        "标题字号不符合要求，应为{}字（约{}磅）",
                        rules.title_size_name, rules.title_min_size
                    ),
                    format!("将标题字号设置为{}字", rules.title_size_name),
                );
            }

            if title_family_wrong(run, rules) {
                self.log.push(
                    category,
                    location,
                    format!("标题字体不符合要求，应为{}", rules.title_font_family),
                    format!("将标题字体设置为{}", rules.title_font_family),
                );
            }

            if !run.is_bold() {
                self.log
                    .push(category, location, "标题未加粗", "将标题设置为加粗");
            }
        }
    }

    fn body(&mut self, paragraph: &Paragraph, location: Location) {
        let rules = self.rules;
        let category = IssueCategory::ParagraphFormat;
        let indent_hint = format!("设置段落首行缩进为{}字符", rules.indent_chars);
        let spacing_hint = format!("设置段落行距为{}倍", rules.line_spacing_multiple);

        match read_at_least(paragraph.first_line_indent(), rules.indent_floor()) {
            Reading::Sufficient => {}
            Reading::Missing => {
                self.log
                    .push(category, location, "段落未设置首行缩进", indent_hint)
            }
            Reading::Below => self.log.push(
                category,
                location,
                format!("段落首行缩进不足{}字符", rules.indent_chars),
                indent_hint,
            ),
            Reading::Unreadable(raw) => {
                self.log.unreadable(location, "first-line indent", &raw);
                self.log.push(
                    category,
                    location,
                    "无法解析段落缩进值",
                    "请手动检查段落缩进设置",
                );
            }
        }

        match read_at_least(paragraph.line_spacing(), rules.line_spacing_floor) {
            Reading::Sufficient => {}
            Reading::Missing => self
                .log
                .push(category, location, "段落未设置行距", spacing_hint),
            Reading::Below => self.log.push(
                category,
                location,
                format!("段落行距小于{}倍", rules.line_spacing_multiple),
                spacing_hint,
            ),
            Reading::Unreadable(raw) => {
                self.log.unreadable(location, "line spacing", &raw);
                self.log
                    .push(category, location, "无法解析行距值", "请手动检查行距设置");
            }
        }

        for run in &paragraph.runs {
            if body_size_excess(run, rules) {
                self.log.push(
                    IssueCategory::BodyFormat,
                    location,
                    format!(
                        "正文字号过大，应为{}字（约{}磅）",
                        rules.body_size_name, rules.body_max_size
                    ),
                    format!("将正文字号设置为{}字", rules.body_size_name),
                );
            }

            if body_family_wrong(run, rules) {
                self.log.push(
                    IssueCategory::BodyFormat,
                    location,
                    format!("正文字体不符合要求，应为{}", rules.body_font_family),
                    format!("将正文字体设置为{}", rules.body_font_family),
                );
            }
        }
    }

    fn table(&mut self, table: &Table, number: usize) {
        let rules = self.rules;

        if let Some(header) = table.rows.first() {
            for paragraph in header.cells.iter().flat_map(|c| &c.paragraphs) {
                if paragraph.alignment() != Alignment::Center {
                    self.log.push(
                        IssueCategory::TableFormat,
                        Location::Table(number),
                        "表格标题未居中对齐",
                        "将表格标题设置为居中对齐",
                    );
                }
            }
        }

        for (r, row) in table.rows.iter().enumerate() {
            let runs = row
                .cells
                .iter()
                .flat_map(|c| &c.paragraphs)
                .flat_map(|p| &p.runs);
            for run in runs {
                if body_size_excess(run, rules) {
                    self.log.push(
                        IssueCategory::TableFormat,
                        Location::TableRow {
                            table: number,
                            row: r + 1,
                        },
                        "表格内容字号过大",
                        format!("将表格内容字号设置为{}字或更小", rules.body_size_name),
                    );
                }
            }
        }
    }

    fn caption(&mut self, paragraph: &Paragraph, location: Location) {
        if self.rules.is_caption(&paragraph.trimmed_text())
            && paragraph.alignment() != Alignment::Center
        {
            self.log.push(
                IssueCategory::FigureFormat,
                location,
                "图片标题未居中对齐",
                "将图片标题设置为居中对齐",
            );
        }
    }
}
