//! `chartcheck` binary
//!
//! Checks the charts of one slide deck and exits non-zero when any chart has
//! errors.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use chartcheck::report::{Summary, render_json, render_text};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "chartcheck")]
#[command(version, about = "Validate Chart.js charts embedded in reveal.js presentations")]
struct Args {
    /// Path to the presentation HTML file
    path: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Fail on warnings as well as errors
    #[arg(long)]
    strict: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version go to stdout and are not failures.
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_tracing(args.verbose);

    let Some(path) = args.path.as_deref() else {
        eprintln!("Usage: chartcheck <path-to-html>");
        return ExitCode::from(1);
    };

    match run(path, &args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(path: &Path, args: &Args) -> Result<ExitCode> {
    let html = chartcheck::read_document(path)?;
    tracing::info!(path = %path.display(), bytes = html.len(), "checking presentation");

    let reports = chartcheck::check(&html);
    let summary = Summary::from_reports(&reports);
    let file = path.display().to_string();

    match args.format {
        Format::Text => print!("{}", render_text(&file, &reports)),
        Format::Json => {
            let json = render_json(&file, &reports).context("failed to render JSON report")?;
            println!("{}", json);
        }
    }

    tracing::info!(
        charts = summary.charts,
        errors = summary.errors,
        warnings = summary.warnings,
        "check finished"
    );
    Ok(ExitCode::from(summary.exit_code(args.strict)))
}
