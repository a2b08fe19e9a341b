//! hOCR input: markup reading and geometry extraction.

pub mod geometry;
mod reader;

pub use geometry::{confidence_to_error, parse_bbox, parse_confidence};
pub use reader::{
    parse_hocr, parse_hocr_with_options, read_hocr_file, HocrLine, HocrPage, HocrParagraph,
    HocrWord, ReadOptions,
};
