//! doc-similarity: compare two documents and report how similar they are.

use std::{io, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use doc_similarity::{
    ComparisonConfig, ComparisonRecord, DocumentLoader, Evaluator, PlainTextLoader, ScanParams,
    Strategy,
};
use tracing_subscriber::EnvFilter;

/// Compare two documents with word, lemma and TF-IDF similarity metrics
#[derive(Parser)]
#[command(name = "doc-similarity")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// First document
    file_a: PathBuf,

    /// Second document
    file_b: PathBuf,

    /// Comparison strategy: "Round Robin", "Shortest Job Next" or "Priority Scheduling"
    /// (case and `-`/`_` separators are ignored)
    #[arg(short, long)]
    strategy: Option<String>,

    /// Round Robin chunk length in characters
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Delay per scan unit in milliseconds
    #[arg(long)]
    pace_ms: Option<u64>,

    /// JSON config file with default settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// The comparison record as JSON
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ComparisonConfig::load(path)?,
        None => ComparisonConfig::default(),
    };
    if let Some(chunk_size) = cli.chunk_size {
        config.chunk_size = chunk_size;
    }
    if let Some(pace_ms) = cli.pace_ms {
        config.pace_ms = pace_ms;
    }
    let loader = PlainTextLoader::new();
    let text_a = loader.load(&cli.file_a)?;
    let text_b = loader.load(&cli.file_b)?;

    let params: ScanParams = config.scan_params();
    let evaluator = Evaluator::with_config(&config);
    // lenient names on the command line; anything unparsable gets the fallback result
    let record = match cli.strategy.as_deref().map(|name| (name, name.parse::<Strategy>())) {
        Some((_, Ok(strategy))) => evaluator.evaluate(&text_a, &text_b, strategy, &params),
        Some((name, Err(_))) => evaluator.evaluate_by_name(&text_a, &text_b, name, &params),
        None => evaluator.evaluate(&text_a, &text_b, config.strategy, &params),
    }
    .context("comparison failed")?;

    match cli.format {
        OutputFormat::Text => print!("{}", render_report(&cli, &record)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&record).context("failed to encode record")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn render_report(cli: &Cli, record: &ComparisonRecord) -> String {
    let (words_a, words_b) = record.word_counts();
    let mut out = String::new();
    out.push_str(&format!("Document A: {} ({} words)\n", cli.file_a.display(), words_a));
    out.push_str(&format!("Document B: {} ({} words)\n\n", cli.file_b.display(), words_b));

    out.push_str(&format!("{:<28}{:>12}\n", "Metric", "Value"));
    out.push_str(&format!("{}\n", "-".repeat(40)));
    let rows = [
        ("Jaccard (words)", format!("{:.4}", record.jaccard_word())),
        ("Jaccard (lemmas)", format!("{:.4}", record.jaccard_lemma())),
        ("Cosine (TF-IDF)", format!("{:.4}", record.cosine_tfidf())),
        ("Similar words", record.similar_word_count().to_string()),
        ("Similarity", format!("{:.2}%", record.similarity_percentage())),
        ("Strategy", record.strategy_name().to_string()),
        ("Strategy matches", record.strategy_match_count().to_string()),
        ("Processing time", format!("{:.4}s", record.processing_time_seconds())),
    ];
    for (label, value) in rows {
        out.push_str(&format!("{label:<28}{value:>12}\n"));
    }

    let severity = record.severity();
    out.push_str(&format!("\nResult: {}\n", severity.headline()));
    out.push_str(&format!("Severity: {}\n", severity));
    out.push_str(&format!("{}\n", record.verdict().description));
    out
}
