//! Character-level types.

use serde::{Deserialize, Serialize};

/// Code point used for every synthesized whitespace character.
pub const SPACE: u32 = ' ' as u32;

/// A rectangle in source-pixel coordinates.
///
/// `(x1, y1)` is the top-left corner, `(x2, y2)` the bottom-right one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl BoundingBox {
    /// Create a bounding box from left, top, right and bottom.
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn left(&self) -> u32 {
        self.x1
    }

    pub fn top(&self) -> u32 {
        self.y1
    }

    pub fn right(&self) -> u32 {
        self.x2
    }

    pub fn bottom(&self) -> u32 {
        self.y2
    }

    /// Horizontal extent (zero when the box is inverted).
    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    /// Vertical extent (zero when the box is inverted).
    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }

    /// Check if this is the all-zero box used for unreadable geometry.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// A single character of the flat document sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unicode scalar value
    pub unicode: u32,

    /// Pixel box of the glyph (or of the gap, for synthesized spaces)
    pub bounding_box: BoundingBox,

    /// Recognition error 0-100, higher is less confident
    pub error: u32,
}

impl Character {
    /// Create a character from a `char`.
    pub fn new(c: char, bounding_box: BoundingBox, error: u32) -> Self {
        Self {
            unicode: c as u32,
            bounding_box,
            error,
        }
    }

    /// Create a synthesized space. Synthesized characters carry no error.
    pub fn space(bounding_box: BoundingBox) -> Self {
        Self {
            unicode: SPACE,
            bounding_box,
            error: 0,
        }
    }

    /// Get the character, or U+FFFD if the stored value is not a scalar value.
    pub fn as_char(&self) -> char {
        char::from_u32(self.unicode).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    pub fn is_space(&self) -> bool {
        self.unicode == SPACE
    }
}
