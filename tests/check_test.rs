//! Integration tests for the checklist engine.

use paperfmt::engine::{check_with_observer, NullObserver, PassObserver, Role};
use paperfmt::model::Spacing;
use paperfmt::{
    check, Alignment, Document, Issue, IssueCategory, LineRule, Location, MarginSide, Measure,
    Paragraph, RuleCatalog, Section, Table, TableCell, TableRow, TextRun,
};

fn compliant_section(rules: &RuleCatalog) -> Section {
    let mut section = Section::default();
    for side in MarginSide::ALL {
        section.set_margin(side, Measure::twips(rules.margin_twips(side)));
    }
    section.set_page_numbering_start(1);
    section
}

fn compliant_title() -> Paragraph {
    let mut p = Paragraph::new().align(Alignment::Center);
    p.add_run(TextRun::new("论文标题").font("黑体").size(16.0).bold(true));
    p
}

fn compliant_body(rules: &RuleCatalog, text: &str) -> Paragraph {
    let mut p = Paragraph::new();
    p.add_run(TextRun::new(text).font("宋体").size(12.0));
    p.set_first_line_indent(rules.indent_measure());
    p.set_line_spacing(rules.spacing_measure(), rules.line_rule);
    p
}

fn quiet_check(doc: &Document) -> Vec<Issue> {
    check_with_observer(doc, &RuleCatalog::standard(), &mut NullObserver)
}

/// A document touching every rule, with a few violations.
fn mixed_document(rules: &RuleCatalog) -> Document {
    let mut doc = Document::new();
    doc.section.set_margin(MarginSide::Top, Measure::twips(900));
    doc.section
        .set_margin(MarginSide::Left, Measure::from_raw("wide"));

    doc.add_paragraph(Paragraph::with_text(""));
    let mut title = Paragraph::new();
    title.add_run(TextRun::new("题目").font("宋体").size(14.0));
    doc.add_paragraph(title);
    doc.add_paragraph(compliant_body(rules, "第一段"));
    doc.add_paragraph(Paragraph::with_text("图1：系统结构"));

    let mut table = Table::new();
    table.add_row(TableRow::from_strings(["名称", "数值"]));
    let mut big = Paragraph::new();
    big.add_run(TextRun::new("42").size(20.0));
    table.add_row(TableRow::new(vec![
        TableCell::text("x"),
        TableCell::with_content(vec![big]),
    ]));
    doc.add_table(table);
    doc
}

#[test]
fn test_check_is_deterministic_and_read_only() {
    let rules = RuleCatalog::standard();
    let doc = mixed_document(&rules);
    let snapshot = doc.clone();

    let first = quiet_check(&doc);
    let second = quiet_check(&doc);

    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(doc, snapshot);
}

#[test]
fn test_traversal_order() {
    let rules = RuleCatalog::standard();
    let issues = quiet_check(&mixed_document(&rules));

    let categories: Vec<_> = issues.iter().map(|i| i.category()).collect();
    assert_eq!(
        categories,
        vec![
            IssueCategory::Margin,
            IssueCategory::Margin,
            IssueCategory::Margin,
            IssueCategory::Margin,
            IssueCategory::PageNumber,
            IssueCategory::TitleFormat,
            IssueCategory::TitleFormat,
            IssueCategory::TitleFormat,
            IssueCategory::TitleFormat,
            IssueCategory::ParagraphFormat,
            IssueCategory::ParagraphFormat,
            IssueCategory::TableFormat,
            IssueCategory::TableFormat,
            IssueCategory::TableFormat,
            IssueCategory::FigureFormat,
        ]
    );

    // Blank paragraph 1 still counts toward numbering.
    assert_eq!(issues[5].location(), Location::Paragraph(2));
    assert_eq!(issues[9].location(), Location::Paragraph(4));
    assert_eq!(issues[13].location(), Location::TableRow { table: 1, row: 2 });
    assert_eq!(issues[14].location(), Location::Paragraph(4));
}

#[test]
fn test_unreadable_value_does_not_stop_pass() {
    let rules = RuleCatalog::standard();
    let issues = quiet_check(&mixed_document(&rules));

    let margin: Vec<_> = issues
        .iter()
        .filter(|i| i.category() == IssueCategory::Margin)
        .map(|i| i.description().to_string())
        .collect();
    assert_eq!(
        margin,
        vec![
            "上边距不符合要求，当前值小于2.5厘米",
            "下边距不符合要求，当前值小于2.5厘米",
            "无法解析左边距值",
            "右边距不符合要求，当前值小于3.0厘米",
        ]
    );
}

#[test]
fn test_scenario_title_only() {
    let rules = RuleCatalog::standard();
    let mut doc = Document::new();
    doc.section = compliant_section(&rules);
    let mut p = Paragraph::new().align(Alignment::Left);
    p.add_run(TextRun::new("探究").font("宋体").size(10.0).bold(false));
    doc.add_paragraph(p);

    let issues = quiet_check(&doc);
    assert_eq!(issues.len(), 4);
    assert!(issues
        .iter()
        .all(|i| i.category() == IssueCategory::TitleFormat));
    assert_eq!(issues[0].description(), "标题未居中对齐");
    assert!(issues[1].description().starts_with("标题字号不符合要求"));
    assert!(issues[2].description().starts_with("标题字体不符合要求"));
    assert_eq!(issues[3].description(), "标题未加粗");
}

#[test]
fn test_scenario_missing_section_blocks() {
    let doc = Document::new();
    let issues = quiet_check(&doc);

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].category(), IssueCategory::Margin);
    assert_eq!(issues[0].description(), "未设置页边距");
    assert_eq!(issues[1].category(), IssueCategory::PageNumber);
    assert_eq!(issues[1].description(), "未设置页码");
}

#[test]
fn test_scenario_single_cell_table() {
    let rules = RuleCatalog::standard();
    let mut doc = Document::new();
    doc.section = compliant_section(&rules);

    let mut cell = Paragraph::new().align(Alignment::Left);
    cell.add_run(TextRun::new("数据").size(18.0));
    let mut table = Table::new();
    table.add_row(TableRow::new(vec![TableCell::with_content(vec![cell])]));
    doc.add_table(table);

    let issues = quiet_check(&doc);
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].description(), "表格标题未居中对齐");
    assert_eq!(issues[0].location(), Location::Table(1));
    assert_eq!(issues[1].description(), "表格内容字号过大");
    assert_eq!(issues[1].location(), Location::TableRow { table: 1, row: 1 });
}

#[test]
fn test_scenario_figure_caption() {
    let rules = RuleCatalog::standard();
    let mut doc = Document::new();
    doc.section = compliant_section(&rules);
    doc.add_paragraph(compliant_title());
    let mut caption = compliant_body(&rules, "图1：示例图");
    caption.set_alignment(Alignment::Left);
    doc.add_paragraph(caption);

    let issues = quiet_check(&doc);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].category(), IssueCategory::FigureFormat);
    assert_eq!(issues[0].location(), Location::Paragraph(2));
}

#[test]
fn test_scenario_body_without_paragraph_properties() {
    let rules = RuleCatalog::standard();
    let mut doc = Document::new();
    doc.section = compliant_section(&rules);
    doc.add_paragraph(compliant_title());
    let mut body = Paragraph::new();
    body.add_run(TextRun::new("正文内容").font("宋体").size(12.0));
    doc.add_paragraph(body);

    let issues = quiet_check(&doc);
    let descriptions: Vec<_> = issues.iter().map(|i| i.description()).collect();
    assert_eq!(descriptions, vec!["段落未设置首行缩进", "段落未设置行距"]);
    assert!(issues
        .iter()
        .all(|i| i.category() == IssueCategory::ParagraphFormat));
}

#[test]
fn test_unreadable_and_unset_line_spacing() {
    let rules = RuleCatalog::standard();
    let mut doc = Document::new();
    doc.section = compliant_section(&rules);
    doc.add_paragraph(compliant_title());

    let mut unreadable = compliant_body(&rules, "正文一");
    unreadable.set_line_spacing(Measure::from_raw("1.5倍"), LineRule::Auto);
    doc.add_paragraph(unreadable);

    let mut rule_only = compliant_body(&rules, "正文二");
    rule_only.style.spacing = Some(Spacing {
        line: None,
        line_rule: Some(LineRule::Auto),
    });
    doc.add_paragraph(rule_only);

    let mut recorder = Recorder::default();
    let issues = check_with_observer(&doc, &rules, &mut recorder);

    assert_eq!(issues.len(), 2);
    assert_eq!(issues[0].category(), IssueCategory::ParagraphFormat);
    assert_eq!(issues[0].location(), Location::Paragraph(2));
    assert_eq!(issues[0].description(), "无法解析行距值");
    assert_eq!(issues[0].suggestion(), "请手动检查行距设置");
    assert_eq!(issues[1].location(), Location::Paragraph(3));
    assert_eq!(issues[1].description(), "段落未设置行距");
    assert_eq!(recorder.unreadable, vec!["1.5倍".to_string()]);
}

#[test]
fn test_inherited_fonts_are_not_flagged() {
    let rules = RuleCatalog::standard();
    let mut doc = Document::new();
    doc.section = compliant_section(&rules);
    let mut title = Paragraph::new().align(Alignment::Center);
    title.add_run(TextRun::new("标题").bold(true));
    doc.add_paragraph(title);
    let mut body = compliant_body(&rules, "");
    body.runs.clear();
    body.add_run(TextRun::new("继承样式"));
    doc.add_paragraph(body);

    assert!(quiet_check(&doc).is_empty());
}

#[test]
fn test_family_match_is_substring() {
    let rules = RuleCatalog::standard();
    let mut doc = Document::new();
    doc.section = compliant_section(&rules);
    let mut title = Paragraph::new().align(Alignment::Center);
    title.add_run(TextRun::new("标题").font("方正黑体简体").bold(true));
    doc.add_paragraph(title);
    let mut body = compliant_body(&rules, "");
    body.runs.clear();
    body.add_run(TextRun::new("正文").font("华文宋体"));
    doc.add_paragraph(body);

    assert!(quiet_check(&doc).is_empty());
}

#[test]
fn test_document_of_blank_paragraphs_has_no_title() {
    let rules = RuleCatalog::standard();
    let mut doc = Document::new();
    doc.section = compliant_section(&rules);
    doc.add_paragraph(Paragraph::with_text("   "));
    doc.add_paragraph(Paragraph::new());

    assert!(quiet_check(&doc).is_empty());
}

#[derive(Default)]
struct Recorder {
    roles: Vec<(Location, Role)>,
    issues: usize,
    unreadable: Vec<String>,
    finished: Option<usize>,
}

impl PassObserver for Recorder {
    fn paragraph_classified(&mut self, location: Location, role: Role) {
        self.roles.push((location, role));
    }

    fn issue_recorded(&mut self, _pass: paperfmt::Pass, _issue: &Issue) {
        self.issues += 1;
    }

    fn value_unreadable(&mut self, _location: Location, _attribute: &str, raw: &str) {
        self.unreadable.push(raw.to_string());
    }

    fn pass_finished(&mut self, _pass: paperfmt::Pass, issue_count: usize) {
        self.finished = Some(issue_count);
    }
}

#[test]
fn test_observer_sees_pass_events() {
    let rules = RuleCatalog::standard();
    let doc = mixed_document(&rules);
    let mut recorder = Recorder::default();

    let issues = check_with_observer(&doc, &rules, &mut recorder);

    assert_eq!(
        recorder.roles,
        vec![
            (Location::Paragraph(2), Role::Title),
            (Location::Paragraph(3), Role::Body(1)),
            (Location::Paragraph(4), Role::Body(2)),
        ]
    );
    assert_eq!(recorder.issues, issues.len());
    assert_eq!(recorder.unreadable, vec!["wide".to_string()]);
    assert_eq!(recorder.finished, Some(issues.len()));
}

#[test]
fn test_check_with_default_observer() {
    let rules = RuleCatalog::standard();
    let doc = mixed_document(&rules);
    assert_eq!(check(&doc, &rules), quiet_check(&doc));
}
