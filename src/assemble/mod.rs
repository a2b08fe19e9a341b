//! Assembly of the flat character document from hOCR pages.

mod builder;
pub mod synth;

pub use builder::DocumentBuilder;
pub use synth::{line_space, paragraph_space, word_characters, word_space};
