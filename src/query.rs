//! Character index and range lookups on a finished document.
//!
//! Downstream consumers get text spans back as absolute character indices
//! `[start, end)`; these lookups map them onto pages and glyph geometry.
//! Page ranges are half-open and all page numbers are 0-based, so an index
//! on a boundary shared by two pages belongs to the later one.

use crate::error::{Error, Result};
use crate::model::{BoundingBox, Character, Document};
use serde::{Deserialize, Serialize};

/// Pages owning the two ends of a character span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpan {
    /// Page owning the span's first character
    pub start: Option<usize>,
    /// Page owning the span's last character
    pub end: Option<usize>,
}

impl PageSpan {
    /// Both ends were found.
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Check if the span crosses a page break.
    pub fn crosses_pages(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if s != e)
    }
}

/// A character of a span with its index and owning page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedCharacter {
    /// Absolute index in the document
    pub index: u64,
    /// Owning page (0-based)
    pub page: usize,
    /// The character
    pub character: char,
    pub bounding_box: BoundingBox,
    pub error: u32,
}

impl Document {
    fn find_page(&self, index: u64) -> Option<usize> {
        self.pages.iter().position(|page| page.range.contains(index))
    }

    /// Find the page owning character `position`.
    pub fn page_for_position(&self, position: u64) -> Result<usize> {
        self.find_page(position)
            .ok_or(Error::PositionNotFound(position))
    }

    /// Find the pages owning the ends of the span `[start, end)`.
    ///
    /// The end page is the owner of the span's last character, `end - 1`.
    /// An empty span reports the owner of `start` for both ends.
    pub fn pages_for_range(&self, start: u64, end: u64) -> PageSpan {
        let last = if end > start { end - 1 } else { start };
        PageSpan {
            start: self.find_page(start),
            end: self.find_page(last),
        }
    }

    /// Characters of the span `[start, end)`, clamped to the document.
    pub fn characters_in_range(&self, start: u64, end: u64) -> &[Character] {
        let len = self.characters.len();
        let start = usize::try_from(start).unwrap_or(usize::MAX).min(len);
        let end = usize::try_from(end).unwrap_or(usize::MAX).min(len);
        if start >= end {
            return &[];
        }
        &self.characters[start..end]
    }

    /// Every character of the span `[start, end)` with its page.
    ///
    /// Fails with [`Error::PositionNotFound`] on the first index that no
    /// page owns, including indices past the end of the document. An empty
    /// span yields no characters.
    pub fn span_characters(&self, start: u64, end: u64) -> Result<Vec<LocatedCharacter>> {
        let mut located = Vec::new();

        for index in start..end {
            let page = self.page_for_position(index)?;
            let c = usize::try_from(index)
                .ok()
                .and_then(|i| self.characters.get(i))
                .ok_or(Error::PositionNotFound(index))?;
            located.push(LocatedCharacter {
                index,
                page,
                character: c.as_char(),
                bounding_box: c.bounding_box,
                error: c.error,
            });
        }

        Ok(located)
    }
}
