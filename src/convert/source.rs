//! hOCR source discovery and ordering.

use crate::error::Result;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of hOCR sources.
pub const HOCR_EXTENSION: &str = "hocr";

/// How sources are ordered before conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceOrder {
    /// Sort by the numbers embedded in each file name
    #[default]
    Natural,
    /// Keep the order the sources were given in
    Explicit,
}

/// Sort key derived from a source file name.
///
/// Every run of ASCII digits in the name is read as its own integer, and
/// keys compare those integers in sequence before falling back to the name
/// itself. `page_2_of_10` therefore sorts before `page_10_of_10`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceKey {
    numbers: Vec<u64>,
    name: String,
}

impl SourceKey {
    /// Build the key for a file name.
    pub fn new(name: &str) -> Self {
        let numbers = name
            .split(|c: char| !c.is_ascii_digit())
            .filter(|group| !group.is_empty())
            .map(|group| group.parse::<u64>().unwrap_or(u64::MAX))
            .collect();

        Self {
            numbers,
            name: name.to_string(),
        }
    }

    /// Build the key for a path, using its file name.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        Self::new(&name)
    }

    /// Numbers embedded in the name, in order of appearance.
    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }
}

impl Ord for SourceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.numbers
            .cmp(&other.numbers)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for SourceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Check if a path names an hOCR file.
///
/// The extension must be exactly `hocr`; `.HOCR` is not accepted.
pub fn is_hocr_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == HOCR_EXTENSION)
}

/// List the regular `.hocr` files directly inside `dir`, sorted by name.
pub fn discover_sources<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && is_hocr_path(&path) {
            sources.push(path);
        }
    }

    sources.sort();
    Ok(sources)
}

/// Order sources in place.
pub fn order_sources(sources: &mut [PathBuf], order: SourceOrder) {
    if order == SourceOrder::Natural {
        sources.sort_by_cached_key(|path| SourceKey::from_path(path));
    }
}
