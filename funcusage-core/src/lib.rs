//! funcusage-core: function usage analysis library for Apps Script projects.
//!
//! Classifies every known server-side function into one of four usage
//! categories (UI-called, trigger/entry point, server-called only, or
//! unused) from nothing but text scanning, and renders the result as a JSON
//! and a plaintext report.
//!
//! # Pipeline
//!
//! 1. **Loader** - read the function-name universe and the UI-call candidate
//!    list from newline-delimited text files
//! 2. **Scanner** - walk the concatenated source files line by line, tracking
//!    the enclosing function and recording call sites of known names
//! 3. **Classifier** - pure set arithmetic over the universe, the UI-called
//!    names, the server-called names, and the trigger set
//! 4. **Reporter** - serialize the snapshot to both report formats
//!
//! # Module Organization
//!
//! - [`loader`]: name-list reading and universe filtering
//! - [`scanner`]: line-oriented call-site scanning
//! - [`classify`]: usage-category set arithmetic
//! - [`report`]: report snapshot and rendering
//! - [`analyze`]: the end-to-end pipeline
//! - [`config`]: fixed paths and the trigger set, injected for testability
//! - [`error`]: typed error handling
//! - [`logging`]: structured logging bootstrap

pub mod analyze;
pub mod classify;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod report;
pub mod scanner;

// Explicit re-exports (avoiding glob imports for a clear API surface)

pub use analyze::{run, AnalysisOutcome, UsageStats};
pub use classify::{classify, Classification};
pub use config::{
    AnalyzerConfig, JSON_REPORT_FILE, NAMES_FILE, SOURCE_FILES, TEXT_REPORT_FILE,
    TRIGGER_FUNCTIONS, UI_CALLS_FILE,
};
pub use error::{FuncusageError, FuncusageResult, IoResultExt};
pub use loader::{filter_known, read_name_list};
pub use logging::init_structured_logging;
pub use report::{write_reports, UsageReport};
pub use scanner::{read_concatenated, scan_calls, CallScan};
