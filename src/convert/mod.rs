//! Conversion runs over one or more hOCR sources.
//!
//! A run checks its configuration, orders the sources, reads each one and
//! feeds its pages to a single [`DocumentBuilder`], so the resulting
//! document is cumulative across every source.
//!
//! # Example
//!
//! ```no_run
//! use hocr2eocr::convert::{ConvertOptions, Converter};
//!
//! fn main() -> hocr2eocr::Result<()> {
//!     let md5 = hocr2eocr::checksum::md5_file("scan.pdf")?;
//!     let options = ConvertOptions::new()
//!         .with_md5(md5)
//!         .with_source_dir("out/scan");
//!     let document = Converter::new(options).run()?;
//!     println!("{} pages", document.page_count());
//!     Ok(())
//! }
//! ```

mod source;

pub use source::{
    discover_sources, is_hocr_path, order_sources, SourceKey, SourceOrder, HOCR_EXTENSION,
};

use crate::assemble::DocumentBuilder;
use crate::error::{Error, Result};
use crate::hocr::{read_hocr_file, HocrPage, ReadOptions};
use crate::model::{Document, DEFAULT_DPI};
use std::path::{Path, PathBuf};

/// Options for a conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Digest of the original source file
    pub md5: Vec<u8>,

    /// Folder scanned for `.hocr` files
    pub source_dir: Option<PathBuf>,

    /// Explicitly listed hOCR files
    pub sources: Vec<PathBuf>,

    /// Source ordering
    pub order: SourceOrder,

    /// Whether to read sources in parallel
    pub parallel: bool,

    /// Resolution recorded on every page
    pub dpi: (u32, u32),

    /// hOCR reading options
    pub read: ReadOptions,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source file digest.
    pub fn with_md5(mut self, md5: impl Into<Vec<u8>>) -> Self {
        self.md5 = md5.into();
        self
    }

    /// Scan a folder for `.hocr` sources.
    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = Some(dir.into());
        self
    }

    /// Add explicitly listed sources.
    pub fn with_sources<I, P>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.sources.extend(sources.into_iter().map(Into::into));
        self
    }

    /// Set source ordering.
    pub fn with_order(mut self, order: SourceOrder) -> Self {
        self.order = order;
        self
    }

    /// Enable or disable parallel reading.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel reading.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the page resolution.
    pub fn with_dpi(mut self, dpi_x: u32, dpi_y: u32) -> Self {
        self.dpi = (dpi_x, dpi_y);
        self
    }

    /// Set hOCR reading options.
    pub fn with_read_options(mut self, read: ReadOptions) -> Self {
        self.read = read;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            md5: Vec::new(),
            source_dir: None,
            sources: Vec::new(),
            order: SourceOrder::Natural,
            parallel: cfg!(feature = "parallel"),
            dpi: (DEFAULT_DPI, DEFAULT_DPI),
            read: ReadOptions::default(),
        }
    }
}

/// Progress report emitted after each source has been assembled.
#[derive(Debug, Clone)]
pub struct SourceReport<'a> {
    /// The source that was just converted
    pub path: &'a Path,
    /// 0-based position of the source in the run
    pub index: usize,
    /// Number of sources in the run
    pub total: usize,
    /// Pages in the document so far
    pub page_count: usize,
    /// Characters in the document so far
    pub character_count: usize,
}

/// Drives a conversion run.
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Get the options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Check that the run is fully configured.
    pub fn validate(&self) -> Result<()> {
        if self.options.source_dir.is_none() && self.options.sources.is_empty() {
            return Err(Error::Configuration("hOCR source folder is not set".into()));
        }
        if self.options.md5.is_empty() {
            return Err(Error::Configuration(
                "source file md5 must be provided".into(),
            ));
        }
        Ok(())
    }

    /// Collect and order the run's sources.
    pub fn sources(&self) -> Result<Vec<PathBuf>> {
        let mut sources = match self.options.source_dir {
            Some(ref dir) => discover_sources(dir)?,
            None => Vec::new(),
        };
        sources.extend(self.options.sources.iter().cloned());
        order_sources(&mut sources, self.options.order);
        Ok(sources)
    }

    /// Run the conversion.
    pub fn run(&self) -> Result<Document> {
        self.run_with_progress(|_| {})
    }

    /// Run the conversion, calling `progress` after each source.
    pub fn run_with_progress<F>(&self, mut progress: F) -> Result<Document>
    where
        F: FnMut(&SourceReport<'_>),
    {
        self.validate()?;

        let sources = self.sources()?;
        if sources.is_empty() {
            log::warn!("no .hocr sources found, the document will be empty");
        }

        let (dpi_x, dpi_y) = self.options.dpi;
        let mut builder = DocumentBuilder::new(self.options.md5.clone()).with_dpi(dpi_x, dpi_y);

        let mut append = |builder: &mut DocumentBuilder, index: usize, pages: &[HocrPage]| {
            builder.push_pages(pages);
            let path = &sources[index];
            log::info!(
                "{} converted! (document now contains {} page(s) and {} character(s))",
                path.display(),
                builder.page_count(),
                builder.character_count()
            );
            progress(&SourceReport {
                path: path.as_path(),
                index,
                total: sources.len(),
                page_count: builder.page_count(),
                character_count: builder.character_count(),
            });
        };

        if self.options.parallel {
            // Parsed in any order, appended strictly in source order.
            for (index, pages) in self.read_all(&sources)?.iter().enumerate() {
                append(&mut builder, index, pages);
            }
        } else {
            for (index, path) in sources.iter().enumerate() {
                let pages = read_hocr_file(path, &self.options.read)?;
                append(&mut builder, index, &pages);
            }
        }

        Ok(builder.finish())
    }

    #[cfg(feature = "parallel")]
    fn read_all(&self, sources: &[PathBuf]) -> Result<Vec<Vec<HocrPage>>> {
        use rayon::prelude::*;

        sources
            .par_iter()
            .map(|path| read_hocr_file(path, &self.options.read))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn read_all(&self, sources: &[PathBuf]) -> Result<Vec<Vec<HocrPage>>> {
        sources
            .iter()
            .map(|path| read_hocr_file(path, &self.options.read))
            .collect()
    }
}
