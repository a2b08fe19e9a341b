//! # hocr2eocr
//!
//! Convert word-level hOCR into character-level eOCR containers.
//!
//! hOCR describes OCR output as pages, paragraphs, lines and words, each
//! word with a bounding box and a confidence. eOCR is flat: one ordered
//! sequence of characters, each with its own box and error value, and
//! pages that each own a contiguous range of that sequence. The document
//! is stored in a framed, gzip-compressed and SHA-1 checked container.
//!
//! ## Quick Start
//!
//! ```no_run
//! use hocr2eocr::{checksum, container, convert_dir};
//!
//! fn main() -> hocr2eocr::Result<()> {
//!     let md5 = checksum::md5_file("scan.pdf")?;
//!     let doc = convert_dir("out/scan", md5)?;
//!     container::write_file("scan.eocr", &doc)?;
//!
//!     // Map an extracted span back onto its page
//!     let page = doc.page_for_position(120)?;
//!     println!("character 120 is on page {}", page);
//!     Ok(())
//! }
//! ```
//!
//! ## Layout rules
//!
//! - A word's box is split into equal-width character cells; the last
//!   character absorbs the rounding remainder
//! - Spaces are synthesized between words (spanning the visual gap) and at
//!   the end of every line and paragraph (zero width, at the right edge)
//! - Errors are `100 - x_wconf`, 100 when the word has no confidence, and
//!   0 for synthesized spaces

pub mod assemble;
pub mod checksum;
pub mod container;
pub mod convert;
pub mod detect;
pub mod error;
pub mod hocr;
pub mod model;
pub mod query;
pub mod render;

// Re-export commonly used types
pub use assemble::DocumentBuilder;
pub use convert::{ConvertOptions, Converter, SourceKey, SourceOrder, SourceReport};
pub use detect::{detect_container_from_bytes, detect_container_from_path, is_eocr, ContainerFormat};
pub use error::{Error, Result};
pub use hocr::{HocrLine, HocrPage, HocrParagraph, HocrWord, ReadOptions};
pub use model::{
    BoundingBox, Character, CharacterRange, Document, Page, DEFAULT_DPI, EOCR_VERSION,
};
pub use query::{LocatedCharacter, PageSpan};
pub use render::JsonFormat;

use std::path::{Path, PathBuf};

/// Convert every `.hocr` file in a folder.
///
/// Files are ordered by the numbers in their names.
///
/// # Arguments
///
/// * `dir` - Folder containing `.hocr` files
/// * `md5` - Digest of the original source file
///
/// # Example
///
/// ```no_run
/// use hocr2eocr::convert_dir;
///
/// let doc = convert_dir("out/scan", vec![0u8; 16]).unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn convert_dir<P: AsRef<Path>>(dir: P, md5: impl Into<Vec<u8>>) -> Result<Document> {
    let options = ConvertOptions::new()
        .with_md5(md5)
        .with_source_dir(dir.as_ref());
    Converter::new(options).run()
}

/// Convert hOCR markup held in memory.
///
/// # Example
///
/// ```
/// use hocr2eocr::convert_str;
///
/// let hocr = r#"<div class="ocr_page" title="bbox 0 0 100 50">
///   <p class="ocr_par" title="bbox 0 0 90 12">
///     <span class="ocr_line" title="bbox 0 0 80 11">
///       <span class="ocrx_word" title="bbox 0 0 20 10; x_wconf 90">Hi</span>
///     </span>
///   </p>
/// </div>"#;
///
/// let doc = convert_str(hocr, vec![1u8; 16]).unwrap();
/// assert_eq!(doc.plain_text(), "Hi  ");
/// ```
pub fn convert_str(markup: &str, md5: impl Into<Vec<u8>>) -> Result<Document> {
    let md5 = md5.into();
    if md5.is_empty() {
        return Err(Error::Configuration(
            "source file md5 must be provided".into(),
        ));
    }

    let mut builder = DocumentBuilder::new(md5);
    builder.push_pages(&hocr::parse_hocr(markup));
    Ok(builder.finish())
}

/// Convert a folder of `.hocr` files straight into a container file.
///
/// # Example
///
/// ```no_run
/// use hocr2eocr::{checksum, convert_dir_to_file};
///
/// let md5 = checksum::md5_file("scan.pdf").unwrap();
/// convert_dir_to_file("out/scan", md5, "scan.eocr").unwrap();
/// ```
pub fn convert_dir_to_file<P, Q>(dir: P, md5: impl Into<Vec<u8>>, output: Q) -> Result<Document>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let doc = convert_dir(dir, md5)?;
    container::write_file(output, &doc)?;
    Ok(doc)
}

/// Builder for converting hOCR sources.
///
/// # Example
///
/// ```no_run
/// use hocr2eocr::Hocr2Eocr;
///
/// Hocr2Eocr::new()
///     .with_source_md5_of("scan.pdf")?
///     .with_source_dir("out/scan")
///     .sequential()
///     .convert()?
///     .write("scan.eocr")?;
/// # Ok::<(), hocr2eocr::Error>(())
/// ```
pub struct Hocr2Eocr {
    options: ConvertOptions,
}

impl Hocr2Eocr {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Set the source file digest.
    pub fn with_md5(mut self, md5: impl Into<Vec<u8>>) -> Self {
        self.options = self.options.with_md5(md5);
        self
    }

    /// Set the source file digest by hashing the source file.
    pub fn with_source_md5_of<P: AsRef<Path>>(mut self, source: P) -> Result<Self> {
        self.options = self.options.with_md5(checksum::md5_file(source)?);
        Ok(self)
    }

    /// Scan a folder for `.hocr` sources.
    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options = self.options.with_source_dir(dir);
        self
    }

    /// Add explicitly listed sources.
    pub fn with_sources<I, P>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.options = self.options.with_sources(sources);
        self
    }

    /// Set source ordering.
    pub fn with_order(mut self, order: SourceOrder) -> Self {
        self.options = self.options.with_order(order);
        self
    }

    /// Set the page resolution.
    pub fn with_dpi(mut self, dpi_x: u32, dpi_y: u32) -> Self {
        self.options = self.options.with_dpi(dpi_x, dpi_y);
        self
    }

    /// Disable parallel reading.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Run the conversion.
    pub fn convert(self) -> Result<EocrResult> {
        let document = Converter::new(self.options).run()?;
        Ok(EocrResult { document })
    }
}

impl Default for Hocr2Eocr {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a conversion.
pub struct EocrResult {
    /// The converted document
    pub document: Document,
}

impl EocrResult {
    /// Encode into container bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        container::encode(&self.document)
    }

    /// Write the container to a file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        container::write_file(path, &self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take the document.
    pub fn into_document(self) -> Document {
        self.document
    }
}
