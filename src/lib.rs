//! # locale-keys - translation file key comparison
//!
//! Flattens two JSON translation files into sets of dot-separated key paths
//! and reports which keys exist in one file but not the other.
//!
//! ## Modules
//!
//! - **extractor**: flatten a JSON document into key paths
//! - **compare**: set difference between two key sets
//! - **report**: human-readable report of a comparison
//! - **loader**: read a JSON document from disk
//!
//! ## Quick Start
//!
//! ```rust
//! use locale_keys::{compare_keys, extract_keys};
//! use serde_json::json;
//!
//! let en = json!({"home": {"title": "Home", "tabs": [{"label": "Map"}]}});
//! let es = json!({"home": {"title": "Inicio"}});
//!
//! let diff = compare_keys(&extract_keys(&en), &extract_keys(&es));
//! assert!(diff.only_in_first.contains("home.tabs.label"));
//! ```
//!
//! Array indices never become part of a key path: every element of an array
//! is flattened under the array's own key, so `{"a": [{"x": 1}, {"y": 2}]}`
//! yields `a`, `a.x` and `a.y`.

use std::io::stdout;
use std::path::Path;
use tracing::{debug, info};

pub mod compare;
pub mod error;
pub mod extractor;
pub mod loader;
pub mod report;
pub mod types;

// Re-export commonly used types for convenience
pub use compare::compare_keys;
pub use error::{KeysError, Result};
pub use extractor::{extract_keys, KeyExtractor};
pub use loader::load_document;
pub use report::ReportWriter;
pub use types::{ComparePaths, ExtractConfig, KeyDiff, KeySet};

/// Main entry point: compare the keys of two JSON files and print the report to stdout
pub fn compare_json_keys<P: AsRef<Path>, Q: AsRef<Path>>(first: P, second: Q) -> Result<KeyDiff> {
    let paths = ComparePaths::new(first.as_ref(), second.as_ref());
    compare_files(&paths, &ExtractConfig::default(), ReportWriter::new(stdout().lock()))
}

/// Load both files, compare their key sets and write the report to `writer`.
///
/// Both documents are fully loaded before any comparison happens, so a
/// missing or malformed file aborts without writing anything.
pub fn compare_files<W: std::io::Write>(
    paths: &ComparePaths,
    config: &ExtractConfig,
    mut writer: ReportWriter<W>,
) -> Result<KeyDiff> {
    let first = load_document(&paths.first)?;
    let second = load_document(&paths.second)?;

    let extractor = KeyExtractor::new(config.clone());
    let first_keys = extractor.extract(&first);
    let second_keys = extractor.extract(&second);
    debug!(
        first = first_keys.len(),
        second = second_keys.len(),
        "extracted key paths"
    );

    let diff = compare_keys(&first_keys, &second_keys);
    info!(
        matched = diff.is_match(),
        only_in_first = diff.only_in_first.len(),
        only_in_second = diff.only_in_second.len(),
        "compared key sets"
    );

    writer.write_diff(&diff)?;
    Ok(diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_pair(first: &str, second: &str) -> (tempfile::TempDir, ComparePaths) {
        let dir = tempfile::tempdir().unwrap();
        let paths = ComparePaths::new(dir.path().join("first.json"), dir.path().join("second.json"));
        fs::write(&paths.first, first).unwrap();
        fs::write(&paths.second, second).unwrap();
        (dir, paths)
    }

    fn run(paths: &ComparePaths) -> (Result<KeyDiff>, String) {
        let mut buffer = Vec::new();
        let result = compare_files(paths, &ExtractConfig::default(), ReportWriter::new(&mut buffer));
        (result, String::from_utf8(buffer).unwrap())
    }

    #[test]
    fn test_compare_matching_files() {
        let (_dir, paths) = write_pair(r#"{"a": {"b": 1}}"#, r#"{"a": {"b": 2}}"#);
        let (result, output) = run(&paths);

        assert!(result.unwrap().is_match());
        assert!(output.starts_with("✅"));
    }

    #[test]
    fn test_compare_mismatched_files() {
        let (_dir, paths) = write_pair(r#"{"a": 1}"#, r#"{"b": 1}"#);
        let (result, output) = run(&paths);

        let diff = result.unwrap();
        assert!(!diff.is_match());
        assert!(output.contains("Keys only in first file:\n  a\n"));
        assert!(output.contains("Keys only in second file:\n  b\n"));
    }

    #[test]
    fn test_compare_json_keys_array_flattening() {
        let (_dir, paths) = write_pair(r#"{"a": [{"x": 1}, {"y": 2}]}"#, r#"{"a": [{"x": 1}]}"#);
        let diff = compare_json_keys(&paths.first, &paths.second).unwrap();

        assert_eq!(diff.only_in_first.iter().collect::<Vec<_>>(), vec!["a.y"]);
        assert!(diff.only_in_second.is_empty());
    }

    #[test]
    fn test_malformed_second_file_writes_nothing() {
        let (_dir, paths) = write_pair(r#"{"a": 1}"#, "not json");
        let (result, output) = run(&paths);

        assert!(matches!(result, Err(KeysError::Parse { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_missing_file_writes_nothing() {
        let (dir, mut paths) = write_pair("{}", "{}");
        paths.first = dir.path().join("nope.json");
        let (result, output) = run(&paths);

        assert!(matches!(result, Err(KeysError::Io { .. })));
        assert!(output.is_empty());
    }
}
