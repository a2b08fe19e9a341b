//! Source file digests.
//!
//! A container identifies the file its OCR came from by the MD5 digest of
//! that file's bytes.

use crate::error::{Error, Result};
use md5::{Digest, Md5};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Compute the MD5 digest of a byte slice.
pub fn md5_bytes(data: &[u8]) -> Vec<u8> {
    Md5::digest(data).to_vec()
}

/// Compute the MD5 digest of a file, streaming its contents.
pub fn md5_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Md5::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(hasher.finalize().to_vec())
}

/// Format bytes as lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Parse a hex string (either case) into bytes.
pub fn from_hex(value: &str) -> Result<Vec<u8>> {
    let value = value.trim();
    hex::decode(value).map_err(|e| Error::InvalidChecksum(format!("'{}': {}", value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_md5_known_value() {
        let digest = md5_bytes(b"abc");
        assert_eq!(to_hex(&digest), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_md5_file_matches_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"source document").unwrap();

        let from_file = md5_file(file.path()).unwrap();
        assert_eq!(from_file, md5_bytes(b"source document"));
    }

    #[test]
    fn test_hex_round_trip() {
        let bytes = from_hex("900150983CD24fb0").unwrap();
        assert_eq!(to_hex(&bytes), "900150983cd24fb0");
    }

    #[test]
    fn test_md5_file_larger_than_buffer() {
        let data = vec![0x5au8; 100_000];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&data).unwrap();

        assert_eq!(md5_file(file.path()).unwrap(), md5_bytes(&data));
    }

    #[test]
    fn test_md5_file_missing() {
        assert!(matches!(md5_file("/no/such/file.pdf"), Err(Error::Io(_))));
    }

    #[test]
    fn test_from_hex_trims_whitespace() {
        assert_eq!(from_hex(" 0aff\n").unwrap(), vec![0x0a, 0xff]);
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert!(matches!(from_hex("abc"), Err(Error::InvalidChecksum(_))));
        assert!(matches!(from_hex("zz"), Err(Error::InvalidChecksum(_))));
    }
}
