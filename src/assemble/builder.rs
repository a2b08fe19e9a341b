//! Document assembly.

use super::synth::{line_space, paragraph_space, word_characters, word_space};
use crate::hocr::{confidence_to_error, HocrLine, HocrPage, HocrParagraph, HocrWord};
use crate::model::{Character, CharacterRange, Document, Page, DEFAULT_DPI};

/// Builds a [`Document`] one hOCR page at a time.
///
/// The builder owns the document for the whole run. Every pushed page
/// appends its characters to the same flat sequence, so character indices
/// are cumulative across all pages and all sources. Call [`finish`] to take
/// the document out.
///
/// [`finish`]: DocumentBuilder::finish
#[derive(Debug)]
pub struct DocumentBuilder {
    document: Document,
    dpi: (u32, u32),
}

impl DocumentBuilder {
    /// Create a builder for a document with the given source digest.
    pub fn new(md5: impl Into<Vec<u8>>) -> Self {
        Self {
            document: Document::with_md5(md5),
            dpi: (DEFAULT_DPI, DEFAULT_DPI),
        }
    }

    /// Set the resolution recorded on pages.
    pub fn with_dpi(mut self, dpi_x: u32, dpi_y: u32) -> Self {
        self.dpi = (dpi_x, dpi_y);
        self
    }

    /// Number of characters assembled so far.
    pub fn character_count(&self) -> usize {
        self.document.characters.len()
    }

    /// Number of pages closed so far.
    pub fn page_count(&self) -> usize {
        self.document.pages.len()
    }

    fn position(&self) -> u64 {
        self.document.characters.len() as u64
    }

    /// Append a page: its paragraphs, lines and words, then close it.
    pub fn push_page(&mut self, page: &HocrPage) -> &Page {
        let start = self.position();

        for paragraph in &page.paragraphs {
            self.push_paragraph(paragraph);
        }

        let closed = Page::new(
            CharacterRange::new(start, self.position()),
            page.bbox.right(),
            page.bbox.bottom(),
        )
        .with_dpi(self.dpi.0, self.dpi.1);

        log::trace!(
            "closed page {} with characters {}..{}",
            self.document.pages.len(),
            closed.range.start,
            closed.range.end
        );

        self.document.pages.push(closed);
        &self.document.pages[self.document.pages.len() - 1]
    }

    /// Append several pages in order.
    pub fn push_pages<'a, I>(&mut self, pages: I)
    where
        I: IntoIterator<Item = &'a HocrPage>,
    {
        for page in pages {
            self.push_page(page);
        }
    }

    fn push_paragraph(&mut self, paragraph: &HocrParagraph) {
        for line in &paragraph.lines {
            self.push_line(line);
        }
        self.push_character(paragraph_space(paragraph.bbox));
    }

    fn push_line(&mut self, line: &HocrLine) {
        let mut words = line.words.iter().peekable();
        while let Some(word) = words.next() {
            self.push_word(word);
            if let Some(next) = words.peek() {
                self.push_character(word_space(word.bbox, next.bbox));
            }
        }
        self.push_character(line_space(line.bbox));
    }

    /// Append the characters of a single word.
    pub fn push_word(&mut self, word: &HocrWord) {
        let error = confidence_to_error(word.confidence);
        self.document
            .characters
            .extend(word_characters(&word.text, word.bbox, error));
    }

    fn push_character(&mut self, character: Character) {
        self.document.characters.push(character);
    }

    /// Take the finished document.
    pub fn finish(self) -> Document {
        self.document
    }
}
