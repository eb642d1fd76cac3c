use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A set of key paths extracted from one document.
///
/// Backed by a `BTreeSet`, so iteration is always in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeySet(BTreeSet<String>);

impl KeySet {
    pub fn new() -> Self {
        KeySet(BTreeSet::new())
    }

    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.0.insert(key.into())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Keys present in `self` but not in `other`
    pub fn difference(&self, other: &KeySet) -> KeySet {
        KeySet(self.0.difference(&other.0).cloned().collect())
    }
}

impl<S: Into<String>> FromIterator<S> for KeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        KeySet(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for KeySet {
    type Item = String;
    type IntoIter = std::collections::btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Result of comparing two key sets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDiff {
    /// Keys present only in the first document
    pub only_in_first: KeySet,

    /// Keys present only in the second document
    pub only_in_second: KeySet,
}

impl KeyDiff {
    /// True when both documents have exactly the same keys
    pub fn is_match(&self) -> bool {
        self.only_in_first.is_empty() && self.only_in_second.is_empty()
    }
}

/// Configuration for key extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Separator placed between a parent path and a child key
    pub separator: String,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            separator: String::from("."),
        }
    }
}

/// The two documents to compare
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparePaths {
    pub first: PathBuf,
    pub second: PathBuf,
}

impl ComparePaths {
    pub fn new(first: impl Into<PathBuf>, second: impl Into<PathBuf>) -> Self {
        ComparePaths {
            first: first.into(),
            second: second.into(),
        }
    }

    /// `<locales_dir>/<locale>/translations.json` for each locale
    pub fn from_locales<P: AsRef<Path>>(locales_dir: P, first: &str, second: &str) -> Self {
        let dir = locales_dir.as_ref();
        ComparePaths::new(
            dir.join(first).join(TRANSLATIONS_FILE),
            dir.join(second).join(TRANSLATIONS_FILE),
        )
    }
}

/// File name of a locale's translations inside its directory
pub const TRANSLATIONS_FILE: &str = "translations.json";
