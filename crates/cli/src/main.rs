//! `insight-pivot`: batch entry point running the PIVOT pipeline over an
//! interview document or a bare list of texts and writing mart files.
//!
//! Load settings, init tracing, run, report — no network surface, so no
//! router, no graceful-shutdown signal handling, no database wiring.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use insight_config::{load_settings, Domain, Settings};
use insight_engine::{Engine, EngineConfig};

#[derive(Debug, Parser)]
#[command(name = "insight-pivot", version, about = "PIVOT interview mart pipeline")]
struct Cli {
    /// Environment overlay loaded as `config/{env}.yaml` (defaults to `config/default.yaml` only)
    #[arg(long, global = true)]
    env: Option<String>,

    /// Calibration profile applied as a ranking multiplier
    #[arg(long, global = true, value_enum)]
    domain: Option<CliDomain>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliDomain {
    Requirements,
    BizAnalysis,
    HrEvaluation,
    DailyConcerns,
    CustomerVoice,
    Retrospective,
}

impl From<CliDomain> for Domain {
    fn from(value: CliDomain) -> Self {
        match value {
            CliDomain::Requirements => Domain::Requirements,
            CliDomain::BizAnalysis => Domain::BizAnalysis,
            CliDomain::HrEvaluation => Domain::HrEvaluation,
            CliDomain::DailyConcerns => Domain::DailyConcerns,
            CliDomain::CustomerVoice => Domain::CustomerVoice,
            CliDomain::Retrospective => Domain::Retrospective,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a full interview document (title/metadata/Q&A), classify every
    /// utterance, and write one `pivot_insight` record per line.
    Document {
        /// Path to the interview document (UTF-8 Markdown/plain text)
        input: PathBuf,
        /// Destination JSONL mart path
        #[arg(long, default_value = "pivot_insights.jsonl")]
        out: PathBuf,
        /// Identifier stamped onto every record's `source_ref.doc_id`
        #[arg(long)]
        doc_id: String,
        /// Observed-at date (`YYYY-MM-DD`); defaults to today
        #[arg(long)]
        observed_at: Option<String>,
    },
    /// Classify a bare list of already-atomic texts (one per `--text` flag,
    /// no splitting applied) and write the mart.
    Texts {
        #[arg(long = "text", required = true)]
        texts: Vec<String>,
        #[arg(long, default_value = "pivot_insights.jsonl")]
        out: PathBuf,
        #[arg(long)]
        doc_id: String,
        #[arg(long)]
        observed_at: Option<String>,
    },
    /// Re-run the document pipeline and additionally write a period-summary
    /// mart (pivot_distribution, priority matrix, top items per voice).
    Summary {
        input: PathBuf,
        #[arg(long, default_value = "pivot_summary.json")]
        out: PathBuf,
        #[arg(long)]
        period_type: String,
        #[arg(long)]
        period_start: String,
        #[arg(long)]
        period_end: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = match load_settings(cli.env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Warning: failed to load config: {e}. Using defaults.");
            Settings::default()
        }
    };
    if let Some(domain) = cli.domain {
        settings.classifier.domain = Some(domain.into());
    }

    init_tracing(&settings);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting insight-pivot");

    let engine = Engine::new(EngineConfig::new(settings.classifier));

    match cli.command {
        Command::Document { input, out, doc_id, observed_at } => {
            let document = fs::read_to_string(&input)
                .with_context(|| format!("reading interview document {}", input.display()))?;
            let result = engine.process(&document);
            tracing::info!(items = result.items.len(), "classified document");
            engine
                .save_marts(&result, &out, &doc_id, observed_at.as_deref())
                .with_context(|| format!("writing marts to {}", out.display()))?;
            println!("wrote {} insight(s) to {}", result.items.len(), out.display());
        }
        Command::Texts { texts, out, doc_id, observed_at } => {
            let result = engine.process_texts(&texts);
            tracing::info!(items = result.items.len(), "classified text batch");
            engine
                .save_marts(&result, &out, &doc_id, observed_at.as_deref())
                .with_context(|| format!("writing marts to {}", out.display()))?;
            println!("wrote {} insight(s) to {}", result.items.len(), out.display());
        }
        Command::Summary { input, out, period_type, period_start, period_end } => {
            let document = fs::read_to_string(&input)
                .with_context(|| format!("reading interview document {}", input.display()))?;
            let result = engine.process(&document);
            tracing::info!(
                items = result.items.len(),
                total_score = result.total_score,
                "classified document for summary"
            );
            engine
                .save_summary_mart(&result, &out, &period_start, &period_end, &period_type)
                .with_context(|| format!("writing summary mart to {}", out.display()))?;
            println!("wrote summary mart to {}", out.display());
        }
    }

    Ok(())
}

/// Console-only tracing init, JSON-formatted when configured. No
/// OpenTelemetry export — there is no metrics backend for this batch tool
/// to report to.
fn init_tracing(settings: &Settings) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("insight_pivot={}", settings.observability.log_level).into());

    let subscriber = tracing_subscriber::fmt().with_env_filter(env_filter);
    if settings.observability.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
