//! funcusage CLI - classifies Apps Script server functions by usage.
//!
//! One-shot cleanup report: reads the function-name lists, scans the two
//! server-side source files for call sites, classifies every name as
//! UI-called, trigger, server-called only, or unused, and writes a JSON and
//! a plaintext report next to the inputs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use funcusage_core::config::{AnalyzerConfig, JSON_REPORT_FILE, TEXT_REPORT_FILE};
use funcusage_core::{analyze, init_structured_logging, write_reports};

#[derive(Parser, Debug)]
#[command(author, version, about = "Function usage analyzer for Apps Script projects")]
struct Cli {
    /// Path to the root of the Apps Script project
    #[arg(default_value = ".")]
    path: PathBuf,
}

fn main() -> Result<()> {
    // Structured logging to stderr; stdout carries the progress report.
    init_structured_logging();

    let cli = Cli::parse();
    let config = AnalyzerConfig::rooted_at(&cli.path);

    // 1. Load, scan, and classify.
    let outcome = analyze::run(&config)
        .with_context(|| format!("Analysis failed for project at {}", cli.path.display()))?;

    println!("Total functions found: {}", outcome.stats.total_functions);
    println!("Functions called from UI: {}", outcome.stats.ui_called_count);
    println!(
        "Functions called from server-side: {}",
        outcome.stats.server_called_count
    );
    println!("Trigger/Entry functions: {}", outcome.stats.trigger_count);
    println!("\nUnused functions: {}", outcome.stats.unused_count);

    // 2. Write both report files, overwriting previous runs.
    write_reports(&outcome.report, &config.json_report, &config.text_report)
        .context("Failed to write the usage reports")?;

    println!("\nReports saved:");
    println!("- {} (detailed)", JSON_REPORT_FILE);
    println!("- {} (human-readable)", TEXT_REPORT_FILE);
    println!("\nDone!");

    // 3. Exit code (CI-friendly): clean project or not.
    std::process::exit(if outcome.stats.unused_count == 0 { 0 } else { 1 });
}
