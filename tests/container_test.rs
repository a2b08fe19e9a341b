//! Integration tests for the eOCR container format.

use hocr2eocr::container::{self, DIGEST_LEN, HEADER_LEN, PAYLOAD_OFFSET};
use hocr2eocr::error::Error;
use hocr2eocr::{
    convert_str, detect_container_from_bytes, detect_container_from_path, is_eocr, BoundingBox,
    Character, CharacterRange, Document, Page,
};

const SAMPLE: &str = r#"<html><body>
<div class="ocr_page" title="bbox 0 0 2550 3300">
 <p class="ocr_par" title="bbox 100 100 900 160">
  <span class="ocr_line" title="bbox 100 100 900 130">
   <span class="ocrx_word" title="bbox 100 100 300 130; x_wconf 91">Größe</span>
   <span class="ocrx_word" title="bbox 320 100 500 130; x_wconf 77">und</span>
   <span class="ocrx_word" title="bbox 520 100 900 130">Gewicht</span>
  </span>
 </p>
</div>
<div class="ocr_page" title="bbox 0 0 3300 2550"></div>
</body></html>"#;

fn sample() -> Document {
    convert_str(SAMPLE, vec![0xab; 16]).unwrap()
}

#[test]
fn test_round_trip_preserves_everything() {
    let doc = sample();
    let bytes = container::encode(&doc).unwrap();
    let back = container::decode(&bytes).unwrap();

    assert_eq!(back, doc);
    assert_eq!(back.version, 3);
    assert_eq!(back.plain_text(), "Größe und Gewicht  ");
    assert_eq!(back.pages[1].range, CharacterRange::new(19, 19));
    assert!(back.pages[1].is_landscape());
}

#[test]
fn test_header_and_digest() {
    let bytes = container::encode(&sample()).unwrap();
    assert_eq!(&bytes[..HEADER_LEN], b"eocr     \n");
    assert_eq!(
        &bytes[HEADER_LEN..HEADER_LEN + DIGEST_LEN],
        &container::digest(&bytes[PAYLOAD_OFFSET..])
    );

    let format = detect_container_from_bytes(&bytes).unwrap();
    assert_eq!(format.payload_len, (bytes.len() - PAYLOAD_OFFSET) as u64);
}

#[test]
fn test_encoding_is_deterministic() {
    let first = container::encode(&sample()).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(1100));
    let second = container::encode(&sample()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_any_flipped_payload_byte_is_detected() {
    let bytes = container::encode(&sample()).unwrap();
    for i in PAYLOAD_OFFSET..bytes.len() {
        let mut corrupted = bytes.clone();
        corrupted[i] ^= 0x40;
        assert!(
            matches!(
                container::decode(&corrupted),
                Err(Error::ContainerCorrupted { .. })
            ),
            "flip at offset {} went unnoticed",
            i
        );
    }
}

#[test]
fn test_flipped_digest_byte_is_detected() {
    let mut bytes = container::encode(&sample()).unwrap();
    bytes[HEADER_LEN + 3] ^= 0xff;
    assert!(matches!(
        container::decode(&bytes),
        Err(Error::ContainerCorrupted { .. })
    ));
}

#[test]
fn test_not_a_container() {
    assert!(matches!(
        container::decode(b"%PDF-1.7 definitely not eocr"),
        Err(Error::UnknownFormat)
    ));
    assert!(matches!(
        container::decode(b"eocr     \n"),
        Err(Error::UnknownFormat)
    ));
}

#[test]
fn test_extreme_values_survive() {
    let mut doc = Document::with_md5(vec![0xff; 16]);
    doc.characters.push(Character::new(
        '\u{10FFFF}',
        BoundingBox::new(u32::MAX, 0, u32::MAX, u32::MAX),
        100,
    ));
    doc.characters.push(Character::space(BoundingBox::default()));
    doc.pages.push(
        Page::new(CharacterRange::new(0, 2), u32::MAX, 1).with_dpi(0, 600),
    );

    let back = container::decode(&container::encode(&doc).unwrap()).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_file_detection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.eocr");
    container::write_file(&path, &sample()).unwrap();

    assert!(is_eocr(&path));
    assert!(detect_container_from_path(&path).is_ok());

    let other = dir.path().join("short.bin");
    std::fs::write(&other, b"eocr").unwrap();
    assert!(!is_eocr(&other));
    assert!(matches!(
        detect_container_from_path(&other),
        Err(Error::UnknownFormat)
    ));
}
