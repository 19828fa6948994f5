//! Analyzer configuration: fixed paths and the trigger-name set.
//!
//! There is no configuration surface: no flags, no env vars, no config
//! file. The constants below are the production values; they are carried in
//! an [`AnalyzerConfig`] value injected into the pipeline so the scanner and
//! classifier stay testable without touching the real project files.

use std::path::{Path, PathBuf};

/// Newline-delimited list of every known function name.
pub const NAMES_FILE: &str = "all_functions_names.txt";

/// Newline-delimited list of candidate UI-invoked function names.
pub const UI_CALLS_FILE: &str = "potential_ui_calls.txt";

/// Server-side source files to scan, in order.
pub const SOURCE_FILES: &[&str] = &["src/Code.gs", "src/GroupsAndAccess.gs"];

/// Machine-readable report output.
pub const JSON_REPORT_FILE: &str = "function_usage_report.json";

/// Human-readable report output.
pub const TEXT_REPORT_FILE: &str = "function_usage_report.txt";

/// Functions invoked by the hosting platform itself rather than by in-code
/// calls, so call-site scanning can never find them.
pub const TRIGGER_FUNCTIONS: &[&str] = &[
    "doGet",  // web app entry point
    "onOpen", // spreadsheet open trigger
    "onEdit", // edit trigger
    "cronSyncRecent", // time-driven
    "cronAuditAll",
    "scanDriveSnapshot",
    "monitorAndDeleteBlockedFiles",
];

/// Resolved input/output paths and trigger names for one analysis run.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// File listing the full function-name universe
    pub names_file: PathBuf,
    /// File listing candidate UI-called names
    pub ui_calls_file: PathBuf,
    /// Ordered source files to scan for call sites
    pub source_files: Vec<PathBuf>,
    /// Destination for the JSON report
    pub json_report: PathBuf,
    /// Destination for the plaintext report
    pub text_report: PathBuf,
    /// Trigger/entry-point candidate names
    pub triggers: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::rooted_at(Path::new("."))
    }
}

impl AnalyzerConfig {
    /// Production configuration with every fixed relative path resolved
    /// against the given project root.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            names_file: root.join(NAMES_FILE),
            ui_calls_file: root.join(UI_CALLS_FILE),
            source_files: SOURCE_FILES.iter().map(|f| root.join(f)).collect(),
            json_report: root.join(JSON_REPORT_FILE),
            text_report: root.join(TEXT_REPORT_FILE),
            triggers: TRIGGER_FUNCTIONS.iter().map(|t| t.to_string()).collect(),
        }
    }
}
