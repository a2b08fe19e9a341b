//! Error types for hocr2eocr library.

use std::io;
use thiserror::Error;

/// Result type alias for hocr2eocr operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during conversion, encoding and lookup.
///
/// Malformed per-element geometry is not represented here: an unreadable
/// `bbox` or `x_wconf` degrades to a zero box or zero confidence and the
/// conversion carries on.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Required setup is missing before a conversion run.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The data is not recognized as an eOCR container.
    #[error("Unknown file format: not a valid eOCR container")]
    UnknownFormat,

    /// The container digest does not match its payload.
    #[error("Container corrupted: digest {actual} does not match header digest {expected}")]
    ContainerCorrupted {
        /// Digest stored in the container (hex)
        expected: String,
        /// Digest computed over the payload (hex)
        actual: String,
    },

    /// The compressed payload could not be decompressed or decoded.
    #[error("Payload decoding error: {0}")]
    Decode(String),

    /// No page owns the given character index.
    #[error("Could not find a page with character position {0}")]
    PositionNotFound(u64),

    /// A user supplied checksum is not valid hex.
    #[error("Invalid checksum: {0}")]
    InvalidChecksum(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::PositionNotFound(42);
        assert_eq!(
            err.to_string(),
            "Could not find a page with character position 42"
        );

        let err = Error::Configuration("source_hash must be provided".into());
        assert_eq!(
            err.to_string(),
            "Configuration error: source_hash must be provided"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
