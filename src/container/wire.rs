//! Protocol-buffers wire primitives.
//!
//! Only what the eOCR payload needs: varints, length-delimited fields and
//! skipping of unknown fields. Fields follow proto3 conventions, so zero
//! scalars and empty byte strings are omitted on write.

use crate::error::{Error, Result};

/// Wire type of a varint field.
pub const WIRE_VARINT: u8 = 0;
/// Wire type of a fixed 64-bit field.
pub const WIRE_FIXED64: u8 = 1;
/// Wire type of a length-delimited field.
pub const WIRE_LEN: u8 = 2;
/// Wire type of a fixed 32-bit field.
pub const WIRE_FIXED32: u8 = 5;

/// Append-only protobuf writer.
#[derive(Debug, Default)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn put_varint(&mut self, mut value: u64) {
        while value >= 0x80 {
            self.buf.push((value as u8 & 0x7f) | 0x80);
            value >>= 7;
        }
        self.buf.push(value as u8);
    }

    fn put_key(&mut self, field: u32, wire_type: u8) {
        self.put_varint((u64::from(field) << 3) | u64::from(wire_type));
    }

    /// Write an unsigned integer field, omitted when zero.
    pub fn uint(&mut self, field: u32, value: u64) {
        if value != 0 {
            self.put_key(field, WIRE_VARINT);
            self.put_varint(value);
        }
    }

    /// Write a bytes field, omitted when empty.
    pub fn bytes(&mut self, field: u32, value: &[u8]) {
        if !value.is_empty() {
            self.put_key(field, WIRE_LEN);
            self.put_varint(value.len() as u64);
            self.buf.extend_from_slice(value);
        }
    }

    /// Write an embedded message field. Always written, even when empty.
    pub fn message<F>(&mut self, field: u32, encode: F)
    where
        F: FnOnce(&mut WireWriter),
    {
        let mut inner = WireWriter::new();
        encode(&mut inner);
        self.put_key(field, WIRE_LEN);
        self.put_varint(inner.buf.len() as u64);
        self.buf.extend_from_slice(&inner.buf);
    }
}

/// A decoded field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireValue<'a> {
    Varint(u64),
    Bytes(&'a [u8]),
    /// A fixed-width value the payload schema never uses
    Fixed,
}

impl<'a> WireValue<'a> {
    /// Read the value as a `u32` scalar.
    pub fn as_u32(&self, field: u32) -> Result<u32> {
        let value = self.as_u64(field)?;
        u32::try_from(value)
            .map_err(|_| Error::Decode(format!("field {} value {} overflows u32", field, value)))
    }

    /// Read the value as a `u64` scalar.
    pub fn as_u64(&self, field: u32) -> Result<u64> {
        match *self {
            WireValue::Varint(v) => Ok(v),
            _ => Err(Error::Decode(format!("field {} is not a varint", field))),
        }
    }

    /// Read the value as a length-delimited slice.
    pub fn as_bytes(&self, field: u32) -> Result<&'a [u8]> {
        match *self {
            WireValue::Bytes(b) => Ok(b),
            _ => Err(Error::Decode(format!(
                "field {} is not length-delimited",
                field
            ))),
        }
    }
}

/// Sequential protobuf reader over one message.
#[derive(Debug)]
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_varint(&mut self) -> Result<u64> {
        let mut value = 0u64;
        for shift in (0..64).step_by(7) {
            let byte = *self
                .data
                .get(self.pos)
                .ok_or_else(|| Error::Decode("truncated varint".into()))?;
            self.pos += 1;
            value |= u64::from(byte & 0x7f) << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(Error::Decode("varint longer than 10 bytes".into()))
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| Error::Decode("field runs past end of message".into()))?;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Read the next field, or `None` at the end of the message.
    pub fn next_field(&mut self) -> Result<Option<(u32, WireValue<'a>)>> {
        if self.pos >= self.data.len() {
            return Ok(None);
        }

        let key = self.read_varint()?;
        let field = u32::try_from(key >> 3)
            .map_err(|_| Error::Decode(format!("field number {} out of range", key >> 3)))?;
        let value = match (key & 0x7) as u8 {
            WIRE_VARINT => WireValue::Varint(self.read_varint()?),
            WIRE_FIXED64 => {
                self.take(8)?;
                WireValue::Fixed
            }
            WIRE_LEN => {
                let len = usize::try_from(self.read_varint()?)
                    .map_err(|_| Error::Decode("length does not fit in memory".into()))?;
                WireValue::Bytes(self.take(len)?)
            }
            WIRE_FIXED32 => {
                self.take(4)?;
                WireValue::Fixed
            }
            other => return Err(Error::Decode(format!("unsupported wire type {}", other))),
        };

        Ok(Some((field, value)))
    }
}
