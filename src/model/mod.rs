//! Document model types for eOCR content representation.
//!
//! The model is the flat, character-granularity form of an OCR result:
//! one ordered sequence of characters, and pages that each own a
//! contiguous window of that sequence.

mod character;
mod document;
mod page;

pub use character::{BoundingBox, Character, SPACE};
pub use document::{Document, EOCR_VERSION};
pub use page::{CharacterRange, Page, DEFAULT_DPI};
