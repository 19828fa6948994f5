//! Line-oriented call-site scanning over concatenated script sources.
//!
//! The scan walks every line of the concatenated source text once, tracking
//! the most recently seen `function name(...)` definition as the current
//! enclosing function, and recording which known names appear as call sites
//! (`name(` as a whole word) inside it. Self-recursive calls are not
//! recorded as usage.
//!
//! Known limitations, preserved as documented behavior rather than fixed:
//! comment detection only checks the trimmed line's leading `//` or `*`, so
//! trailing comments and block-comment bodies without a leading `*` are still
//! scanned, and names inside string literals are indistinguishable from real
//! calls. The current function also persists across file boundaries within
//! the concatenated stream until the next definition line overrides it.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::{FuncusageResult, IoResultExt};

/// Matches a definition line: optional leading whitespace, the `function`
/// keyword, then the defined identifier.
fn definition_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^\s*function\s+([A-Za-z0-9_]+)").expect("Hardcoded regex pattern is valid")
    })
}

/// Caller → callee sets discovered by one scan pass.
#[derive(Debug, Clone, Default)]
pub struct CallScan {
    /// Map from enclosing function name to the set of known names it calls.
    /// Only callers with at least one recorded call have an entry.
    pub calls: HashMap<String, HashSet<String>>,
}

impl CallScan {
    /// Every name that appears as a callee from anywhere.
    pub fn server_called(&self) -> HashSet<String> {
        let mut called = HashSet::new();
        for callees in self.calls.values() {
            called.extend(callees.iter().cloned());
        }
        called
    }

    /// The call graph as caller → sorted callee list, ordered by caller name
    /// for deterministic output.
    pub fn sorted_graph(&self) -> BTreeMap<String, Vec<String>> {
        self.calls
            .iter()
            .map(|(caller, callees)| {
                let mut sorted: Vec<String> = callees.iter().cloned().collect();
                sorted.sort();
                (caller.clone(), sorted)
            })
            .collect()
    }
}

/// Scan state threaded through the line loop: the current enclosing function
/// and the callee sets accumulated so far.
#[derive(Debug, Default)]
struct ScanState {
    current_function: Option<String>,
    calls: HashMap<String, HashSet<String>>,
}

impl ScanState {
    fn step(mut self, line: &str, patterns: &[(String, Regex)]) -> Self {
        // A definition line switches the enclosing function; the rest of the
        // line is then scanned under the new name.
        if let Some(caps) = definition_regex().captures(line) {
            self.current_function = Some(caps[1].to_string());
        }

        let Some(caller) = self.current_function.clone() else {
            return self;
        };

        // Comment heuristic: only the trimmed line's leading characters.
        let trimmed = line.trim();
        if trimmed.starts_with("//") || trimmed.starts_with('*') {
            return self;
        }

        for (name, pattern) in patterns {
            if *name != caller && pattern.is_match(line) {
                self.calls
                    .entry(caller.clone())
                    .or_default()
                    .insert(name.clone());
            }
        }

        self
    }
}

/// Builds one whole-word call-site pattern (`name` followed by optional
/// whitespace and `(`) per universe entry. Entries that cannot form a valid
/// pattern are skipped; they could never match a call site anyway.
fn call_patterns(universe: &[String]) -> Vec<(String, Regex)> {
    universe
        .iter()
        .filter_map(|name| {
            let pattern = format!(r"\b{}\s*\(", regex::escape(name));
            Regex::new(&pattern).ok().map(|re| (name.clone(), re))
        })
        .collect()
}

/// Reads each source file fully and concatenates the contents with a newline
/// separator, in order. Any unreadable file aborts the run.
pub fn read_concatenated(paths: &[PathBuf]) -> FuncusageResult<String> {
    let mut all_code = String::new();
    for path in paths {
        all_code.push_str(&fs::read_to_string(path).with_path(path)?);
        all_code.push('\n');
    }
    Ok(all_code)
}

/// Scans the concatenated source text for call sites of known names.
///
/// Pure function of its inputs: the scan state is an explicit accumulator
/// folded over the lines, not shared mutable state. Calls appearing before
/// the first definition line are attributed to no caller and dropped.
///
/// Complexity is O(lines × names); acceptable at single-script-project
/// scale.
pub fn scan_calls(source: &str, universe: &[String]) -> CallScan {
    let patterns = call_patterns(universe);
    let state = source
        .split('\n')
        .fold(ScanState::default(), |state, line| state.step(line, &patterns));

    debug!(callers = state.calls.len(), "call-site scan complete");
    CallScan { calls: state.calls }
}
