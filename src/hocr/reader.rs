//! hOCR markup reader.
//!
//! Turns hOCR (HTML or XHTML) into a typed page → paragraph → line → word
//! tree. Selection follows the hOCR class conventions and searches all
//! descendants at every level, so wrapper elements such as `ocr_carea`
//! blocks between a page and its paragraphs are transparent.

use super::geometry::{parse_bbox, parse_confidence};
use crate::error::Result;
use crate::model::BoundingBox;
use scraper::{ElementRef, Html, Selector};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Options for reading hOCR markup.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Also treat `ocr_header`, `ocr_textfloat` and `ocr_caption` spans as lines
    pub extended_line_classes: bool,
}

impl ReadOptions {
    /// Create new read options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Also accept the Tesseract line variants as lines.
    pub fn all_line_classes(mut self) -> Self {
        self.extended_line_classes = true;
        self
    }

    /// Enable or disable the extra line classes.
    pub fn with_extended_line_classes(mut self, enabled: bool) -> Self {
        self.extended_line_classes = enabled;
        self
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            extended_line_classes: false,
        }
    }
}

/// An `ocr_page` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HocrPage {
    pub bbox: BoundingBox,
    pub paragraphs: Vec<HocrParagraph>,
}

/// An `ocr_par` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HocrParagraph {
    pub bbox: BoundingBox,
    pub lines: Vec<HocrLine>,
}

/// An `ocr_line` element (or one of its variants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HocrLine {
    pub bbox: BoundingBox,
    pub words: Vec<HocrWord>,
}

/// An `ocrx_word` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HocrWord {
    pub text: String,
    pub bbox: BoundingBox,
    /// Recognition confidence 0-100 (0 when the markup has none)
    pub confidence: u32,
}

impl HocrWord {
    pub fn new(text: impl Into<String>, bbox: BoundingBox, confidence: u32) -> Self {
        Self {
            text: text.into(),
            bbox,
            confidence,
        }
    }
}

impl HocrPage {
    /// Total number of words on the page.
    pub fn word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .flat_map(|p| &p.lines)
            .map(|l| l.words.len())
            .sum()
    }
}

struct Selectors {
    page: Selector,
    paragraph: Selector,
    line: Selector,
    extended_line: Selector,
    word: Selector,
}

fn selectors() -> &'static Selectors {
    static SELECTORS: OnceLock<Selectors> = OnceLock::new();
    SELECTORS.get_or_init(|| {
        let parse = |css: &str| Selector::parse(css).expect("valid hOCR selector");
        Selectors {
            page: parse("div.ocr_page"),
            paragraph: parse("p.ocr_par"),
            line: parse("span.ocr_line"),
            extended_line: parse(
                "span.ocr_line, span.ocr_header, span.ocr_textfloat, span.ocr_caption",
            ),
            word: parse("span.ocrx_word"),
        }
    })
}

fn title<'a>(element: &ElementRef<'a>) -> Option<&'a str> {
    element.value().attr("title")
}

/// Parse hOCR markup into pages.
///
/// Malformed markup never fails: the HTML parser recovers what it can and
/// elements with unreadable geometry get a zero box.
pub fn parse_hocr(markup: &str) -> Vec<HocrPage> {
    parse_hocr_with_options(markup, &ReadOptions::default())
}

/// Parse hOCR markup into pages with custom options.
pub fn parse_hocr_with_options(markup: &str, options: &ReadOptions) -> Vec<HocrPage> {
    let html = Html::parse_document(markup);
    let sel = selectors();
    let line_sel = if options.extended_line_classes {
        &sel.extended_line
    } else {
        &sel.line
    };

    html.select(&sel.page)
        .map(|page| HocrPage {
            bbox: parse_bbox(title(&page)),
            paragraphs: page
                .select(&sel.paragraph)
                .map(|par| HocrParagraph {
                    bbox: parse_bbox(title(&par)),
                    lines: par
                        .select(line_sel)
                        .map(|line| HocrLine {
                            bbox: parse_bbox(title(&line)),
                            words: read_words(&line, &sel.word),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

fn read_words(line: &ElementRef<'_>, word_sel: &Selector) -> Vec<HocrWord> {
    line.select(word_sel)
        .filter_map(|word| {
            let text: String = word.text().collect();
            if text.is_empty() {
                log::debug!("skipping word without text: {:?}", title(&word));
                return None;
            }
            Some(HocrWord {
                text,
                bbox: parse_bbox(title(&word)),
                confidence: parse_confidence(title(&word)),
            })
        })
        .collect()
}

/// Read and parse an hOCR file.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_hocr_file<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<Vec<HocrPage>> {
    let data = fs::read(path)?;
    let markup = String::from_utf8_lossy(&data);
    Ok(parse_hocr_with_options(&markup, options))
}
