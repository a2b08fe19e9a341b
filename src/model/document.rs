//! Document-level types.

use super::{Character, Page};
use serde::{Deserialize, Serialize};

/// Schema version written into every container.
pub const EOCR_VERSION: u32 = 3;

/// A flat, character-level OCR document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Schema version
    pub version: u32,

    /// Digest of the source file the OCR was produced from
    pub md5: Vec<u8>,

    /// Every character of every page, in reading order
    pub characters: Vec<Character>,

    /// Pages, each owning a contiguous range of `characters`
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            version: EOCR_VERSION,
            md5: Vec::new(),
            characters: Vec::new(),
            pages: Vec::new(),
        }
    }

    /// Create a new empty document for the given source digest.
    pub fn with_md5(md5: impl Into<Vec<u8>>) -> Self {
        Self {
            md5: md5.into(),
            ..Self::new()
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get the number of characters in the document.
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    /// Get a page by index (0-indexed).
    pub fn get_page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get the source digest as lowercase hex.
    pub fn md5_hex(&self) -> String {
        crate::checksum::to_hex(&self.md5)
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.characters.iter().map(Character::as_char).collect()
    }

    /// Get plain text content of one page (0-indexed).
    pub fn page_text(&self, index: usize) -> Option<String> {
        let page = self.pages.get(index)?;
        Some(
            self.characters_in_range(page.range.start, page.range.end)
                .iter()
                .map(Character::as_char)
                .collect(),
        )
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
