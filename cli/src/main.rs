//! paperfmt CLI - paper format checking and repair tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use paperfmt::render::{self, JsonFormat, Report, ReportOptions};
use paperfmt::{Issue, Pass, RuleCatalog};

#[derive(Parser)]
#[command(name = "paperfmt")]
#[command(author = "paperfmt contributors")]
#[command(version)]
#[command(about = "Check and repair academic paper formatting", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check documents against the formatting rules
    Check {
        /// Input documents
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Output file, or directory when checking several files (stdout if not specified)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Repair a document and save the result
    Fix {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output document (defaults to <stem>_fixed.json)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Directory for the default output document
        #[arg(long, env = "PAPERFMT_OUTPUT_DIR", value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Write an HTML report of the applied fixes
        #[arg(long, value_name = "HTML")]
        report: Option<PathBuf>,
    },

    /// Show what fix would change, optionally saving the repaired copy
    Preview {
        /// Input document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Save the repaired copy here (nothing is saved if not specified)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
    },

    /// Print the formatting rules
    Rules,

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    /// Plain text listing
    Text,
    /// Pretty-printed JSON
    Json,
    /// Standalone HTML page
    Html,
}

impl ReportFormat {
    fn extension(self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Html => "html",
        }
    }

    fn render(self, report: &Report) -> Result<String, Box<dyn std::error::Error>> {
        let options = ReportOptions::default();
        Ok(match self {
            ReportFormat::Text => render::to_text(report, &options),
            ReportFormat::Json => render::to_json(report, JsonFormat::Pretty)?,
            ReportFormat::Html => render::to_html(report, &options)?,
        })
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            inputs,
            format,
            output,
        } => cmd_check(&inputs, format, output.as_deref()),
        Commands::Fix {
            input,
            output,
            output_dir,
            report,
        } => cmd_fix(
            &input,
            output.as_deref(),
            output_dir.as_deref(),
            report.as_deref(),
        ),
        Commands::Preview { input, output } => cmd_preview(&input, output.as_deref()),
        Commands::Rules => cmd_rules(),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn cmd_check(
    inputs: &[PathBuf],
    format: ReportFormat,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    if inputs.len() == 1 {
        let report = Report::new(Pass::Check, paperfmt::check_file(&inputs[0])?)
            .with_source(source_name(&inputs[0]));
        let rendered = format.render(&report)?;

        if let Some(path) = output {
            fs::write(path, &rendered)?;
            println!("{} {}", "Saved to".green(), path.display());
        } else {
            println!("{}", rendered);
        }
        return Ok(());
    }

    if let Some(dir) = output {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut results = Vec::with_capacity(inputs.len());
    for (i, input) in inputs.iter().enumerate() {
        let name = source_name(input);
        pb.set_message(name.clone());
        let issues = paperfmt::check_file(input)?;

        if let Some(dir) = output {
            let path = report_path(dir, i, input, format);
            let report = Report::new(Pass::Check, issues.clone()).with_source(name.clone());
            fs::write(&path, format.render(&report)?)?;
        }

        results.push((name, issues));
        pb.inc(1);
    }
    pb.finish_with_message("Done!");

    println!("\n{}", "Results:".green().bold());
    for (i, (name, issues)) in results.iter().enumerate() {
        let branch = if i + 1 == results.len() { "└─" } else { "├─" };
        let count = if issues.is_empty() {
            "no issues".green()
        } else {
            format!("{} issues", issues.len()).yellow()
        };
        println!("  {} {} ({})", branch.dimmed(), name, count);
    }

    if output.is_none() {
        for (name, issues) in &results {
            println!("\n{}", name.cyan().bold());
            print_issues(issues);
        }
    }

    Ok(())
}

/// Report file for the `index`-th input; the index keeps equal stems apart.
fn report_path(dir: &Path, index: usize, input: &Path, format: ReportFormat) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    dir.join(format!(
        "{:02}_{}_report.{}",
        index + 1,
        stem,
        format.extension()
    ))
}

fn default_fixed_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let file_name = format!("{}_fixed.json", stem);
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

fn cmd_fix(
    input: &Path,
    output: Option<&Path>,
    output_dir: Option<&Path>,
    report: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            if let Some(dir) = output_dir {
                fs::create_dir_all(dir)?;
            }
            default_fixed_path(input, output_dir)
        }
    };

    log::debug!("Fixing {} into {}", input.display(), output_path.display());
    let issues = paperfmt::fix_file(input, &output_path)?;

    print_issues(&issues);
    println!(
        "\n{} {} fixes applied",
        "Done!".green().bold(),
        issues.len()
    );
    println!("{} {}", "Saved to".green(), output_path.display());

    if let Some(path) = report {
        let report = Report::new(Pass::Repair, issues).with_source(source_name(input));
        fs::write(path, render::to_html(&report, &ReportOptions::default())?)?;
        println!("{} {}", "Report saved to".green(), path.display());
    }

    Ok(())
}

fn cmd_preview(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = paperfmt::load_document(input)?;
    let (preview, issues) = paperfmt::preview_fix(&doc, &RuleCatalog::standard());

    println!("{}", "Fix Preview".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    if doc.is_empty() {
        println!("{}", "Document has no paragraphs or tables".yellow());
    }
    println!("{}: {}", "Paragraphs".bold(), doc.paragraphs.len());
    println!("{}: {}", "Tables".bold(), doc.tables.len());
    for (i, table) in doc.tables.iter().enumerate() {
        let branch = if i + 1 == doc.tables.len() { "└─" } else { "├─" };
        let shape = if table.is_empty() {
            "empty".dimmed().to_string()
        } else {
            format!("{} rows × {} columns", table.row_count(), table.column_count())
        };
        println!("  {} 表格{}: {}", branch.dimmed(), i + 1, shape);
    }
    println!();

    print_issues(&issues);

    match output {
        Some(path) => {
            paperfmt::save_document(&preview, path)?;
            println!(
                "\n{} fixes applied to the copy",
                issues.len().to_string().yellow().bold()
            );
            println!("{} {}", "Saved to".green(), path.display());
        }
        None => println!(
            "\n{} fixes would be applied (nothing saved)",
            issues.len().to_string().yellow().bold()
        ),
    }

    Ok(())
}

fn cmd_rules() -> Result<(), Box<dyn std::error::Error>> {
    let rules = RuleCatalog::standard();
    println!("{}", serde_json::to_string_pretty(&rules)?);
    Ok(())
}

fn print_issues(issues: &[Issue]) {
    if issues.is_empty() {
        println!("{}", "No formatting issues found.".green());
        return;
    }

    for (i, issue) in issues.iter().enumerate() {
        println!(
            "{:>3}. {} {} {}",
            i + 1,
            format!("[{}]", issue.category()).yellow(),
            issue.location().to_string().bold(),
            issue.description()
        );
        println!("     {} {}", "→".dimmed(), issue.suggestion().dimmed());
    }
}

fn cmd_version() {
    println!("{} {}", "paperfmt".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Paper format checking and repair tool");
    println!();
    println!("License: MIT");
}
