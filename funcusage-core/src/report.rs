//! Report construction and rendering - JSON and plaintext.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::classify::Classification;
use crate::error::{FuncusageResult, IoResultExt};

const BANNER: &str =
    "================================================================================";

/// Immutable snapshot of one analysis run.
///
/// Field order matches the JSON document layout. The call graph holds only
/// callers with at least one recorded call, keyed in sorted order so repeated
/// runs on unchanged inputs serialize byte-identically.
#[derive(Debug, Clone, Serialize)]
pub struct UsageReport {
    pub total_functions: usize,
    pub ui_called: Vec<String>,
    pub trigger_functions: Vec<String>,
    pub server_called_only: Vec<String>,
    pub unused: Vec<String>,
    pub function_call_graph: BTreeMap<String, Vec<String>>,
}

impl UsageReport {
    /// Assembles the snapshot from the classification and the call graph.
    pub fn new(
        total_functions: usize,
        classification: Classification,
        function_call_graph: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            total_functions,
            ui_called: classification.ui_called,
            trigger_functions: classification.trigger_functions,
            server_called_only: classification.server_called_only,
            unused: classification.unused,
            function_call_graph,
        }
    }

    /// Renders the machine-readable document: 2-space indentation, non-ASCII
    /// characters left unescaped.
    ///
    /// Falls back to a minimal document if serialization fails (should never
    /// happen with string lists and maps).
    pub fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "JSON serialization failed");
            format!("{{\"total_functions\": {}}}", self.total_functions)
        })
    }

    /// Renders the human-readable document: banner lines, summary counts,
    /// then one labeled section per category.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        out.push_str(BANNER);
        out.push('\n');
        out.push_str("FUNCTION USAGE ANALYSIS REPORT\n");
        out.push_str(BANNER);
        out.push_str("\n\n");

        out.push_str(&format!("Total Functions: {}\n", self.total_functions));
        out.push_str(&format!("UI-Called Functions: {}\n", self.ui_called.len()));
        out.push_str(&format!(
            "Trigger/Entry Functions: {}\n",
            self.trigger_functions.len()
        ));
        out.push_str(&format!(
            "Server-Only Called Functions: {}\n",
            self.server_called_only.len()
        ));
        out.push_str(&format!("UNUSED Functions: {}\n\n", self.unused.len()));

        push_section(
            &mut out,
            "UI-CALLED FUNCTIONS (via google.script.run)",
            &self.ui_called,
            false,
        );
        push_section(
            &mut out,
            "TRIGGER/ENTRY POINT FUNCTIONS",
            &self.trigger_functions,
            true,
        );
        push_section(
            &mut out,
            "SERVER-SIDE ONLY FUNCTIONS (Called internally, not from UI)",
            &self.server_called_only,
            true,
        );
        push_section(&mut out, "UNUSED FUNCTIONS (Safe to remove)", &self.unused, true);

        out
    }
}

fn push_section(out: &mut String, title: &str, names: &[String], leading_blank: bool) {
    if leading_blank {
        out.push('\n');
    }
    out.push_str(BANNER);
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(BANNER);
    out.push('\n');
    for name in names {
        out.push_str(&format!("  - {}\n", name));
    }
}

/// Writes both report files, overwriting previous runs.
///
/// No partial-write recovery: a failure on either file aborts the run, and
/// consistency between the two files is not guaranteed.
pub fn write_reports(
    report: &UsageReport,
    json_path: &Path,
    text_path: &Path,
) -> FuncusageResult<()> {
    fs::write(json_path, report.render_json()).with_path(json_path)?;
    fs::write(text_path, report.render_plain()).with_path(text_path)?;
    info!(
        json = %json_path.display(),
        text = %text_path.display(),
        "usage reports written"
    );
    Ok(())
}
