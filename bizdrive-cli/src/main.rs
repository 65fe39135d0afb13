//! Business drive diagnostic CLI
//!
//! External collaborator of the diagnostic core: loads a respondent's
//! answers from a JSON file, drives the scoring engine, and renders the
//! report as text, JSON, or a standalone HTML document.

#![deny(warnings)]

use anyhow::Context;
use bizdrive_core::catalog::ANSWER_OPTIONS;
use bizdrive_core::{
    build_report, compute_result, render_html, render_json, render_text, AnswerStore, Catalog,
};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bizdrive")]
#[command(about = "Business drive diagnostic: score a six-axis self-assessment and render the report")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the question catalog
    Questions {
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Score an answers file and render the diagnostic report
    Report {
        /// Path to a JSON answers file: an object mapping each axis name to
        /// an array of values by question position (1-4; 0 = unanswered)
        answers: PathBuf,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Output file path (default: stdout; HTML defaults to report.html)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Respondent/company label shown on the report
        #[arg(long)]
        respondent: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Questions { format } => {
            let catalog = Catalog::standard();
            match format {
                OutputFormat::Text => print!("{}", render_catalog_text(&catalog)),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(catalog.axes())?);
                }
                OutputFormat::Html => {
                    anyhow::bail!("HTML format is only available for the report command");
                }
            }
        }
        Commands::Report {
            answers,
            format,
            output,
            respondent,
        } => {
            let catalog = Catalog::standard();
            let store = load_answers(&answers, &catalog)?;
            tracing::info!(
                answered = store.answered_count(),
                total = catalog.question_count(),
                "loaded answers"
            );

            let result = compute_result(&catalog, &store);
            let report = build_report(result, &catalog, respondent.as_deref(), Utc::now());

            let rendered = match format {
                OutputFormat::Text => render_text(&report),
                OutputFormat::Json => render_json(&report),
                OutputFormat::Html => render_html(&report),
            };

            // HTML goes to a file by default; text and JSON to stdout.
            let target = match (&output, format) {
                (Some(path), _) => Some(path.clone()),
                (None, OutputFormat::Html) => Some(PathBuf::from("report.html")),
                (None, _) => None,
            };

            match target {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("failed to write report: {}", path.display()))?;
                    eprintln!("Report written to {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }
    }

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

/// Load an answers file into a validated store.
///
/// The file maps axis names to arrays of values by question position.
/// A value of 0 means "unanswered" and is skipped, so partial progress
/// still scores; anything outside 0..=4 is rejected.
fn load_answers(path: &Path, catalog: &Catalog) -> anyhow::Result<AnswerStore> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file: {}", path.display()))?;
    let parsed: BTreeMap<String, Vec<u8>> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid answers file: {}", path.display()))?;

    let mut store = AnswerStore::new();
    for (axis_name, values) in &parsed {
        for (index, value) in values.iter().enumerate() {
            if *value == 0 {
                continue;
            }
            store
                .record(catalog, axis_name, index + 1, *value)
                .with_context(|| {
                    format!("rejected answer for {} question {}", axis_name, index + 1)
                })?;
        }
    }
    Ok(store)
}

fn render_catalog_text(catalog: &Catalog) -> String {
    let mut output = String::new();
    output.push_str("事業推進力診断 設問一覧\n");
    output.push_str("==============================\n");

    for (i, axis) in catalog.axes().iter().enumerate() {
        output.push_str(&format!(
            "\n軸{}: {} {} ({}問)\n",
            i + 1,
            axis.icon,
            axis.name,
            axis.question_count()
        ));
        for question in &axis.questions {
            output.push_str(&format!("  問{}. {}\n", question.position, question.prompt));
        }
    }

    output.push_str("\n回答の選択肢:\n");
    for (value, label) in ANSWER_OPTIONS {
        output.push_str(&format!("  {} = {}\n", value, label));
    }

    output
}
