//! eOCR container detection and validation.

use crate::container::{DIGEST_LEN, EOCR_HEADER, HEADER_LEN, PAYLOAD_OFFSET};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Container framing information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerFormat {
    /// SHA-1 digest stored after the header
    pub digest: [u8; DIGEST_LEN],
    /// Length of the compressed payload in bytes
    pub payload_len: u64,
}

impl std::fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "eOCR (sha1 {}, {} byte payload)",
            crate::checksum::to_hex(&self.digest),
            self.payload_len
        )
    }
}

/// Detect the container framing from a file path.
///
/// Only the header and digest are read; the payload is not verified.
///
/// # Example
/// ```no_run
/// use hocr2eocr::detect::detect_container_from_path;
///
/// let format = detect_container_from_path("document.eocr").unwrap();
/// println!("{}", format);
/// ```
pub fn detect_container_from_path<P: AsRef<Path>>(path: P) -> Result<ContainerFormat> {
    let file = File::open(path)?;
    let file_len = file.metadata()?.len();
    let mut reader = BufReader::new(file);
    let mut head = [0u8; PAYLOAD_OFFSET];
    reader.read_exact(&mut head).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => Error::UnknownFormat,
        _ => Error::Io(e),
    })?;

    let mut format = detect_container_from_bytes(&head)?;
    format.payload_len = file_len.saturating_sub(PAYLOAD_OFFSET as u64);
    Ok(format)
}

/// Detect the container framing from bytes.
///
/// # Returns
/// * `Ok(ContainerFormat)` if the data starts with the eOCR header and a digest
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_container_from_bytes(data: &[u8]) -> Result<ContainerFormat> {
    if data.len() < PAYLOAD_OFFSET {
        return Err(Error::UnknownFormat);
    }

    if !data.starts_with(EOCR_HEADER) {
        return Err(Error::UnknownFormat);
    }

    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&data[HEADER_LEN..PAYLOAD_OFFSET]);

    Ok(ContainerFormat {
        digest,
        payload_len: (data.len() - PAYLOAD_OFFSET) as u64,
    })
}

/// Check if a file looks like an eOCR container.
pub fn is_eocr<P: AsRef<Path>>(path: P) -> bool {
    detect_container_from_path(path).is_ok()
}

/// Check if bytes look like an eOCR container.
pub fn is_eocr_bytes(data: &[u8]) -> bool {
    detect_container_from_bytes(data).is_ok()
}
