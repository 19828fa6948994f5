//! End-to-end analysis pipeline.
//!
//! Runs the loader, scanner, and classifier in one pass and assembles the
//! report snapshot. Writing the report files is left to the caller so the
//! pipeline itself stays side-effect free apart from reading the inputs.

use anyhow::{Context, Result};
use tracing::info;

use crate::classify::classify;
use crate::config::AnalyzerConfig;
use crate::loader::{filter_known, read_name_list};
use crate::report::UsageReport;
use crate::scanner::{read_concatenated, scan_calls};

/// Summary counts for the console, in the order they are reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsageStats {
    pub total_functions: usize,
    pub ui_called_count: usize,
    pub server_called_count: usize,
    pub trigger_count: usize,
    pub unused_count: usize,
}

/// Result of one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: UsageReport,
    pub stats: UsageStats,
}

/// Runs the full pipeline against the configured inputs.
///
/// Aborts on the first I/O failure; there is nothing to recover.
pub fn run(config: &AnalyzerConfig) -> Result<AnalysisOutcome> {
    // 1. Load the function-name universe.
    let universe = read_name_list(&config.names_file)
        .context("Failed to read the function-name list")?;

    // 2. Load UI-call candidates and keep only known names.
    let ui_candidates = read_name_list(&config.ui_calls_file)
        .context("Failed to read the UI-call candidate list")?;
    let ui_called = filter_known(&ui_candidates, &universe);

    // 3. Scan the concatenated sources for call sites.
    let all_code = read_concatenated(&config.source_files)
        .context("Failed to read the source files")?;
    let scan = scan_calls(&all_code, &universe);
    let server_called = scan.server_called();

    // 4. Classify every known name.
    let classification = classify(&universe, &ui_called, &server_called, &config.triggers);

    // 5. Assemble the snapshot.
    let stats = UsageStats {
        total_functions: universe.len(),
        ui_called_count: ui_called.len(),
        server_called_count: server_called.len(),
        trigger_count: classification.trigger_functions.len(),
        unused_count: classification.unused.len(),
    };
    let report = UsageReport::new(universe.len(), classification, scan.sorted_graph());

    info!(
        total = stats.total_functions,
        unused = stats.unused_count,
        "analysis complete"
    );

    Ok(AnalysisOutcome { report, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn setup_temp_project() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir()
            .join("funcusage_analyze_test")
            .join(format!("{}_{}", std::process::id(), id));
        if dir.exists() {
            fs::remove_dir_all(&dir).ok();
        }
        fs::create_dir_all(dir.join("src")).unwrap();
        dir
    }

    fn write_inputs(root: &Path, names: &str, ui: &str, code: &str, groups: &str) {
        fs::write(root.join("all_functions_names.txt"), names).unwrap();
        fs::write(root.join("potential_ui_calls.txt"), ui).unwrap();
        fs::write(root.join("src/Code.gs"), code).unwrap();
        fs::write(root.join("src/GroupsAndAccess.gs"), groups).unwrap();
    }

    #[test]
    fn test_end_to_end_scenario() {
        let root = setup_temp_project();
        write_inputs(
            &root,
            "doGet\nhelperA\nhelperB\ndeadFn\n",
            "helperA\n",
            "function doGet() {\n  helperA();\n  helperB();\n}\n",
            "function helperB() {\n}\n",
        );

        let config = AnalyzerConfig::rooted_at(&root);
        let outcome = run(&config).unwrap();

        assert_eq!(outcome.report.ui_called, vec!["helperA"]);
        assert_eq!(outcome.report.trigger_functions, vec!["doGet"]);
        assert_eq!(outcome.report.server_called_only, vec!["helperB"]);
        assert_eq!(outcome.report.unused, vec!["deadFn"]);
        assert_eq!(outcome.stats.total_functions, 4);
        assert_eq!(outcome.stats.ui_called_count, 1);
        assert_eq!(outcome.stats.server_called_count, 2);
        assert_eq!(outcome.stats.trigger_count, 1);
        assert_eq!(outcome.stats.unused_count, 1);

        let graph = &outcome.report.function_call_graph;
        assert_eq!(graph.len(), 1);
        assert_eq!(graph["doGet"], vec!["helperA", "helperB"]);

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_missing_input_aborts() {
        let root = setup_temp_project();
        // No input files at all.
        let config = AnalyzerConfig::rooted_at(&root);
        assert!(run(&config).is_err());
        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_ui_candidates_outside_universe_dropped() {
        let root = setup_temp_project();
        write_inputs(
            &root,
            "realFn\n",
            "realFn\nimaginaryFn\n",
            "function realFn() {\n}\n",
            "",
        );

        let config = AnalyzerConfig::rooted_at(&root);
        let outcome = run(&config).unwrap();
        assert_eq!(outcome.report.ui_called, vec!["realFn"]);
        assert_eq!(outcome.stats.ui_called_count, 1);

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_cross_file_scan_covers_both_sources() {
        let root = setup_temp_project();
        write_inputs(
            &root,
            "mainFn\nsharedHelper\n",
            "",
            "function mainFn() {\n",
            "  sharedHelper();\n}\nfunction sharedHelper() {\n}\n",
        );

        let config = AnalyzerConfig::rooted_at(&root);
        let outcome = run(&config).unwrap();
        // mainFn stays current across the file boundary.
        assert_eq!(outcome.report.function_call_graph["mainFn"], vec!["sharedHelper"]);
        assert_eq!(outcome.report.server_called_only, vec!["sharedHelper"]);

        fs::remove_dir_all(&root).ok();
    }
}
