//! Document payload schema.
//!
//! ```text
//! Document       { 1: version, 2: md5 (bytes), 3: characters*, 4: pages* }
//! Character      { 1: unicode, 2: bounding_box, 3: error }
//! BoundingBox    { 1: x1, 2: y1, 3: x2, 4: y2 }
//! Page           { 1: range, 2: width, 3: height, 4: dpi_x, 5: dpi_y }
//! CharacterRange { 1: start, 2: end }
//! ```
//!
//! Unknown fields are skipped on decode.

use super::wire::{WireReader, WireWriter};
use crate::error::Result;
use crate::model::{BoundingBox, Character, CharacterRange, Document, Page};

// Rough encoded size of one character, used to presize the buffer.
const CHARACTER_SIZE_HINT: usize = 16;

/// Serialize a document into payload bytes.
pub fn encode_document(doc: &Document) -> Vec<u8> {
    let mut w = WireWriter::with_capacity(doc.characters.len() * CHARACTER_SIZE_HINT);

    w.uint(1, u64::from(doc.version));
    w.bytes(2, &doc.md5);
    for c in &doc.characters {
        w.message(3, |m| encode_character(m, c));
    }
    for page in &doc.pages {
        w.message(4, |m| encode_page(m, page));
    }

    w.into_bytes()
}

fn encode_character(w: &mut WireWriter, c: &Character) {
    w.uint(1, u64::from(c.unicode));
    w.message(2, |m| encode_bbox(m, &c.bounding_box));
    w.uint(3, u64::from(c.error));
}

fn encode_bbox(w: &mut WireWriter, bbox: &BoundingBox) {
    w.uint(1, u64::from(bbox.x1));
    w.uint(2, u64::from(bbox.y1));
    w.uint(3, u64::from(bbox.x2));
    w.uint(4, u64::from(bbox.y2));
}

fn encode_page(w: &mut WireWriter, page: &Page) {
    w.message(1, |m| {
        m.uint(1, page.range.start);
        m.uint(2, page.range.end);
    });
    w.uint(2, u64::from(page.width));
    w.uint(3, u64::from(page.height));
    w.uint(4, u64::from(page.dpi_x));
    w.uint(5, u64::from(page.dpi_y));
}

/// Deserialize payload bytes into a document.
pub fn decode_document(data: &[u8]) -> Result<Document> {
    // Absent fields decode as zero, not as the in-memory defaults.
    let mut doc = Document {
        version: 0,
        md5: Vec::new(),
        characters: Vec::new(),
        pages: Vec::new(),
    };

    let mut r = WireReader::new(data);
    while let Some((field, value)) = r.next_field()? {
        match field {
            1 => doc.version = value.as_u32(field)?,
            2 => doc.md5 = value.as_bytes(field)?.to_vec(),
            3 => doc.characters.push(decode_character(value.as_bytes(field)?)?),
            4 => doc.pages.push(decode_page(value.as_bytes(field)?)?),
            _ => {}
        }
    }

    Ok(doc)
}

fn decode_character(data: &[u8]) -> Result<Character> {
    let mut c = Character {
        unicode: 0,
        bounding_box: BoundingBox::default(),
        error: 0,
    };

    let mut r = WireReader::new(data);
    while let Some((field, value)) = r.next_field()? {
        match field {
            1 => c.unicode = value.as_u32(field)?,
            2 => c.bounding_box = decode_bbox(value.as_bytes(field)?)?,
            3 => c.error = value.as_u32(field)?,
            _ => {}
        }
    }

    Ok(c)
}

fn decode_bbox(data: &[u8]) -> Result<BoundingBox> {
    let mut bbox = BoundingBox::default();

    let mut r = WireReader::new(data);
    while let Some((field, value)) = r.next_field()? {
        match field {
            1 => bbox.x1 = value.as_u32(field)?,
            2 => bbox.y1 = value.as_u32(field)?,
            3 => bbox.x2 = value.as_u32(field)?,
            4 => bbox.y2 = value.as_u32(field)?,
            _ => {}
        }
    }

    Ok(bbox)
}

fn decode_page(data: &[u8]) -> Result<Page> {
    let mut page = Page {
        range: CharacterRange::default(),
        width: 0,
        height: 0,
        dpi_x: 0,
        dpi_y: 0,
    };

    let mut r = WireReader::new(data);
    while let Some((field, value)) = r.next_field()? {
        match field {
            1 => page.range = decode_range(value.as_bytes(field)?)?,
            2 => page.width = value.as_u32(field)?,
            3 => page.height = value.as_u32(field)?,
            4 => page.dpi_x = value.as_u32(field)?,
            5 => page.dpi_y = value.as_u32(field)?,
            _ => {}
        }
    }

    Ok(page)
}

fn decode_range(data: &[u8]) -> Result<CharacterRange> {
    let mut range = CharacterRange::default();

    let mut r = WireReader::new(data);
    while let Some((field, value)) = r.next_field()? {
        match field {
            1 => range.start = value.as_u64(field)?,
            2 => range.end = value.as_u64(field)?,
            _ => {}
        }
    }

    Ok(range)
}
