//! eOCR container encoding and decoding.
//!
//! ```text
//! offset  length    content
//! 0       10        header "eocr     \n"
//! 10      20        SHA-1 of the bytes that follow
//! 30      variable  gzip-compressed document payload
//! ```
//!
//! Encoding is deterministic: the gzip stream carries no timestamp or file
//! name, so the same document always produces the same bytes.

mod payload;
pub mod wire;

pub use payload::{decode_document, encode_document};

use crate::checksum::to_hex;
use crate::detect::detect_container_from_bytes;
use crate::error::{Error, Result};
use crate::model::Document;
use flate2::read::GzDecoder;
use flate2::{Compression, GzBuilder};
use sha1::{Digest, Sha1};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

/// Fixed container header.
pub const EOCR_HEADER: &[u8; HEADER_LEN] = b"eocr     \n";
/// Length of the header.
pub const HEADER_LEN: usize = 10;
/// Length of the SHA-1 digest following the header.
pub const DIGEST_LEN: usize = 20;
/// Offset of the compressed payload.
pub const PAYLOAD_OFFSET: usize = HEADER_LEN + DIGEST_LEN;

/// SHA-1 digest of `data`.
pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&Sha1::digest(data));
    out
}

/// Encode a document into container bytes.
pub fn encode(doc: &Document) -> Result<Vec<u8>> {
    let payload = encode_document(doc);

    let mut encoder = GzBuilder::new()
        .mtime(0)
        .write(Vec::new(), Compression::default());
    encoder.write_all(&payload)?;
    let body = encoder.finish()?;

    let mut out = Vec::with_capacity(PAYLOAD_OFFSET + body.len());
    out.extend_from_slice(EOCR_HEADER);
    out.extend_from_slice(&digest(&body));
    out.extend_from_slice(&body);

    log::debug!(
        "encoded {} characters / {} pages: payload {} bytes, container {} bytes",
        doc.characters.len(),
        doc.pages.len(),
        payload.len(),
        out.len()
    );

    Ok(out)
}

/// Decode container bytes into a document, verifying the digest first.
pub fn decode(data: &[u8]) -> Result<Document> {
    let format = detect_container_from_bytes(data)?;
    let body = &data[PAYLOAD_OFFSET..];

    let actual = digest(body);
    if actual != format.digest {
        return Err(Error::ContainerCorrupted {
            expected: to_hex(&format.digest),
            actual: to_hex(&actual),
        });
    }

    let mut payload = Vec::new();
    GzDecoder::new(body)
        .read_to_end(&mut payload)
        .map_err(|e| Error::Decode(format!("gzip: {}", e)))?;

    decode_document(&payload)
}

/// Encode a document and write it to a file.
pub fn write_file<P: AsRef<Path>>(path: P, doc: &Document) -> Result<()> {
    let bytes = encode(doc)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Read and decode a container file.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let data = fs::read(path)?;
    decode(&data)
}
