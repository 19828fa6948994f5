//! Set classification of known functions into usage categories.

use std::collections::HashSet;

/// The four usage categories, each sorted lexicographically.
///
/// `server_called_only` and `unused` are defined by subtraction, so they are
/// disjoint from the other categories by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Known names invoked from the UI layer
    pub ui_called: Vec<String>,
    /// Known names registered as platform trigger/entry points
    pub trigger_functions: Vec<String>,
    /// Names called from server-side code but neither UI-called nor triggers
    pub server_called_only: Vec<String>,
    /// Known names with no recorded usage at all
    pub unused: Vec<String>,
}

/// Classifies every name in the universe.
///
/// Pure set arithmetic over already-validated inputs:
/// - `actual_triggers` = trigger candidates ∩ universe (unknown candidates
///   are silently dropped)
/// - `used` = ui_called ∪ server_called ∪ actual_triggers
/// - `unused` = universe − used (duplicates in the universe survive)
/// - `server_called_only` = server_called − ui_called − actual_triggers
///
/// `ui_called` must already be filtered to the universe by the loader.
pub fn classify(
    universe: &[String],
    ui_called: &[String],
    server_called: &HashSet<String>,
    trigger_candidates: &[String],
) -> Classification {
    let universe_set: HashSet<&str> = universe.iter().map(String::as_str).collect();
    let ui_set: HashSet<&str> = ui_called.iter().map(String::as_str).collect();

    let mut actual_triggers: Vec<String> = trigger_candidates
        .iter()
        .filter(|t| universe_set.contains(t.as_str()))
        .cloned()
        .collect();
    actual_triggers.sort();
    let trigger_set: HashSet<&str> = actual_triggers.iter().map(String::as_str).collect();

    let used: HashSet<&str> = ui_set
        .iter()
        .copied()
        .chain(server_called.iter().map(String::as_str))
        .chain(trigger_set.iter().copied())
        .collect();

    let mut unused: Vec<String> = universe
        .iter()
        .filter(|name| !used.contains(name.as_str()))
        .cloned()
        .collect();
    unused.sort();

    let mut server_called_only: Vec<String> = server_called
        .iter()
        .filter(|name| !ui_set.contains(name.as_str()) && !trigger_set.contains(name.as_str()))
        .cloned()
        .collect();
    server_called_only.sort();

    let mut ui_sorted = ui_called.to_vec();
    ui_sorted.sort();

    Classification {
        ui_called: ui_sorted,
        trigger_functions: actual_triggers,
        server_called_only,
        unused,
    }
}
