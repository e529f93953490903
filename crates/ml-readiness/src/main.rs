//! CLI entry point for the ML-readiness analyzer.

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use ml_readiness::config::{
    DEFAULT_MAX_CLASS_CARDINALITY, DEFAULT_MODERATE_NULL_THRESHOLD, DEFAULT_SEVERE_NULL_THRESHOLD,
};
use ml_readiness::{
    Analysis, AnalysisConfig, Pipeline, ReadinessReport, ReportGenerator, ViabilityScore,
    compute_viability_score, loader,
};
use std::path::Path;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Heuristic ML-readiness report for tabular datasets",
    long_about = "Guesses the target column, infers the problem type, scans for data-quality \
                  defects and reduces them to a 0-100 viability score.\n\n\
                  EXAMPLES:\n  \
                  # Auto-detect the target\n  \
                  ml-readiness data.csv\n\n  \
                  # Force a target and save a JSON report\n  \
                  ml-readiness data.csv --target Survived --emit-report -o reports/\n\n  \
                  # Machine-readable output\n  \
                  ml-readiness data.csv --json | jq .final_score"
)]
struct Args {
    /// Path to the CSV file to analyze
    input: String,

    /// Target column to use instead of automatic discovery
    #[arg(short, long)]
    target: Option<String>,

    /// Output directory for --emit-report
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Only show warnings, errors and the final result
    #[arg(short, long)]
    quiet: bool,

    /// Null ratio above which a column is reported as moderately null
    #[arg(long, default_value_t = DEFAULT_MODERATE_NULL_THRESHOLD)]
    moderate_null_threshold: f64,

    /// Null ratio at or above which a column is reported as severely null
    #[arg(long, default_value_t = DEFAULT_SEVERE_NULL_THRESHOLD)]
    severe_null_threshold: f64,

    /// Maximum distinct values for a column to count as classes
    #[arg(long, default_value_t = DEFAULT_MAX_CLASS_CARDINALITY)]
    max_class_cardinality: usize,

    /// Print the full report as JSON instead of the text summary
    ///
    /// Disables all logs so stdout only carries JSON.
    #[arg(long)]
    json: bool,

    /// Write the JSON report to the output directory
    ///
    /// The report is saved as <input_name>_readiness.json
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber.
///
/// Under `--json` no subscriber is installed.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    // .env may set RUST_LOG, so it is read before the filter is built
    dotenv().ok();

    init_logging(&args.log_level, args.quiet, args.json);

    let df = loader::load_csv(&args.input)?;

    let mut config_builder = AnalysisConfig::builder()
        .moderate_null_threshold(args.moderate_null_threshold)
        .severe_null_threshold(args.severe_null_threshold)
        .max_class_cardinality(args.max_class_cardinality);
    if let Some(ref target) = args.target {
        config_builder = config_builder.target_column(target);
    }
    let config = config_builder.build()?;

    let analysis = Pipeline::builder().config(config).build()?.analyze(&df)?;
    let score = compute_viability_score(&analysis.summary);

    let needs_report = args.json || args.emit_report;
    let report = if needs_report {
        Some(ReportGenerator::build_report(&args.input, &df, &analysis, score)?)
    } else {
        None
    };

    if args.emit_report
        && let Some(ref report) = report
    {
        let generator = ReportGenerator::new(&args.output);
        let path = generator.write_report_to_file(report, &extract_file_stem(&args.input))?;
        info!("Readiness report written to {}", path.display());
    }

    match report {
        Some(ref report) if args.json => print_json(report)?,
        _ => print_text(&analysis, &score),
    }

    Ok(())
}

/// Extract the file stem (name without extension) from a path.
fn extract_file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset")
        .to_string()
}

fn print_json(report: &ReadinessReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

/// Human-readable output. Uses `println!` so it is visible at any log level.
fn print_text(analysis: &Analysis, score: &ViabilityScore) {
    println!("\n=== SUMMARY ===");
    for (key, value) in analysis.summary.entries() {
        println!("{}: {}", key, value);
    }

    println!("\n=== ISSUES ===");
    for issue in &analysis.issues {
        println!("- {}", issue);
    }

    println!("\n=== RECOMMENDATIONS ===");
    for recommendation in &analysis.recommendations {
        println!("- {}", recommendation);
    }

    println!("\n=== FINAL SCORE ===");
    println!(
        "Viability score: {}/100  |  Grade: {}",
        score.score, score.grade
    );
}
