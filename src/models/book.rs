//! Book title and catalog entry types

use serde::Serialize;
use std::fmt;

/// Case-folded book title.
///
/// Two titles that differ only in letter case are the same catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Title(String);

impl Title {
    pub fn new(raw: &str) -> Self {
        Title(fold(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap a string that is already case-folded
    pub(crate) fn from_folded(folded: String) -> Self {
        Title(folded)
    }
}

/// Lowercase one character at a time, so folding a prefix always yields a
/// prefix of the folded title
pub(crate) fn fold(raw: &str) -> String {
    raw.chars().flat_map(char::to_lowercase).collect()
}

impl From<&str> for Title {
    fn from(raw: &str) -> Self {
        Title::new(raw)
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Copy counts for one title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub total: u32,
    pub available: u32,
}

/// Search hit: a title and how many copies are on the shelf
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookAvailability {
    pub title: Title,
    pub available: u32,
}
