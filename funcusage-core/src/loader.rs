//! Name-list loading from newline-delimited text files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{FuncusageResult, IoResultExt};

/// Reads a newline-delimited name list.
///
/// Returns the ordered sequence of non-empty, whitespace-trimmed lines.
/// Blank lines are dropped; duplicates pass through untouched. A missing or
/// unreadable file aborts the run with an I/O error carrying the path.
pub fn read_name_list(path: &Path) -> FuncusageResult<Vec<String>> {
    let content = fs::read_to_string(path).with_path(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Keeps only candidates present in the known-name universe.
///
/// The candidate list comes from an external extraction step that can invent
/// names; anything not in the universe is silently discarded. Order and
/// duplicates of the surviving candidates are preserved.
pub fn filter_known(candidates: &[String], universe: &[String]) -> Vec<String> {
    let known: HashSet<&str> = universe.iter().map(String::as_str).collect();
    candidates
        .iter()
        .filter(|c| known.contains(c.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir()
            .join("funcusage_loader_test")
            .join(format!("{}_{}", std::process::id(), id));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_trims_and_drops_blanks() {
        let path = temp_file("names.txt", "doGet\n  helperA  \n\n\t\nhelperB\n");
        let names = read_name_list(&path).unwrap();
        assert_eq!(names, vec!["doGet", "helperA", "helperB"]);
        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_read_preserves_order_and_duplicates() {
        let path = temp_file("names.txt", "b\na\nb\n");
        let names = read_name_list(&path).unwrap();
        assert_eq!(names, vec!["b", "a", "b"]);
        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_read_missing_file_fails() {
        let missing = std::env::temp_dir().join("funcusage_loader_test_does_not_exist.txt");
        let err = read_name_list(&missing).unwrap_err();
        assert!(err.to_string().contains("funcusage_loader_test_does_not_exist.txt"));
    }

    #[test]
    fn test_filter_known_discards_unknown_candidates() {
        let universe = vec!["doGet".to_string(), "helperA".to_string()];
        let candidates = vec![
            "helperA".to_string(),
            "notAFunction".to_string(),
            "doGet".to_string(),
        ];
        assert_eq!(filter_known(&candidates, &universe), vec!["helperA", "doGet"]);
    }

    #[test]
    fn test_filter_known_keeps_candidate_duplicates() {
        let universe = vec!["helperA".to_string()];
        let candidates = vec!["helperA".to_string(), "helperA".to_string()];
        assert_eq!(filter_known(&candidates, &universe), vec!["helperA", "helperA"]);
    }
}
