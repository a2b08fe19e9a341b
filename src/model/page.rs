//! Page-level types.

use serde::{Deserialize, Serialize};

/// Resolution recorded on every page when the source does not supply one.
pub const DEFAULT_DPI: u32 = 300;

/// A window `[start, end)` over the document's character sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRange {
    pub start: u64,
    pub end: u64,
}

impl CharacterRange {
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    /// Number of characters in the range.
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the range owns `index`.
    ///
    /// Ranges are half-open, so an index on a boundary shared by two
    /// adjacent pages belongs to the later page only.
    pub fn contains(&self, index: u64) -> bool {
        self.start <= index && index < self.end
    }
}

/// A single page of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Characters owned by this page
    pub range: CharacterRange,

    /// Page width in pixels (right edge of the page box)
    pub width: u32,

    /// Page height in pixels (bottom edge of the page box)
    pub height: u32,

    /// Horizontal resolution
    pub dpi_x: u32,

    /// Vertical resolution
    pub dpi_y: u32,
}

impl Page {
    /// Create a new page at the default resolution.
    pub fn new(range: CharacterRange, width: u32, height: u32) -> Self {
        Self {
            range,
            width,
            height,
            dpi_x: DEFAULT_DPI,
            dpi_y: DEFAULT_DPI,
        }
    }

    /// Set the page resolution.
    pub fn with_dpi(mut self, dpi_x: u32, dpi_y: u32) -> Self {
        self.dpi_x = dpi_x;
        self.dpi_y = dpi_y;
        self
    }

    /// Get page dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of characters on the page.
    pub fn character_count(&self) -> u64 {
        self.range.len()
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}
