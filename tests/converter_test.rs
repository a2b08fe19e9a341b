//! Integration tests for hOCR conversion runs.

use std::fs;
use std::path::Path;

use hocr2eocr::convert::{ConvertOptions, Converter, SourceOrder};
use hocr2eocr::error::Error;
use hocr2eocr::{convert_dir, convert_str, BoundingBox, CharacterRange, Hocr2Eocr};

const MD5: [u8; 16] = [0x5a; 16];

/// One page, one paragraph, one line: "Hi there".
const HI_THERE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN"
    "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en" lang="en">
 <head>
  <title></title>
  <meta name='ocr-system' content='tesseract 5.3.0' />
 </head>
 <body>
  <div class='ocr_page' id='page_1' title='image "hi.png"; bbox 0 0 100 50; ppageno 0'>
   <div class='ocr_carea' id='block_1_1' title="bbox 0 0 90 12">
    <p class='ocr_par' id='par_1_1' lang='eng' title="bbox 0 0 90 12">
     <span class='ocr_line' id='line_1_1' title="bbox 0 0 80 11; baseline 0 -2; x_size 11">
      <span class='ocrx_word' id='word_1_1' title='bbox 0 0 20 10; x_wconf 95'>Hi</span>
      <span class='ocrx_word' id='word_1_2' title='bbox 25 0 75 10; x_wconf 88'>there</span>
     </span>
    </p>
   </div>
  </div>
 </body>
</html>
"#;

fn page_markup(word: &str, width: u32) -> String {
    format!(
        r#"<html><body>
<div class="ocr_page" title="bbox 0 0 {w} 100">
 <p class="ocr_par" title="bbox 10 10 60 30">
  <span class="ocr_line" title="bbox 10 10 60 30">
   <span class="ocrx_word" title="bbox 10 10 60 30; x_wconf 50">{word}</span>
  </span>
 </p>
</div>
</body></html>"#,
        w = width,
        word = word
    )
}

fn write_source(dir: &Path, name: &str, markup: &str) {
    fs::write(dir.join(name), markup).unwrap();
}

#[test]
fn test_hi_there_layout() {
    let doc = convert_str(HI_THERE, MD5).unwrap();

    assert_eq!(doc.plain_text(), "Hi there  ");
    assert_eq!(doc.character_count(), 10);

    let lefts: Vec<u32> = doc.characters[..2]
        .iter()
        .chain(&doc.characters[3..8])
        .map(|c| c.bounding_box.x1)
        .collect();
    assert_eq!(lefts, vec![0, 10, 25, 35, 45, 55, 65]);
    assert_eq!(doc.characters[1].bounding_box.x2, 20);
    assert_eq!(doc.characters[7].bounding_box.x2, 75);

    // inter-word space spans the visual gap
    assert_eq!(doc.characters[2].bounding_box, BoundingBox::new(20, 0, 25, 10));
    // line and paragraph end markers are zero width at the right edge
    assert_eq!(doc.characters[8].bounding_box, BoundingBox::new(80, 0, 80, 11));
    assert_eq!(doc.characters[9].bounding_box, BoundingBox::new(90, 0, 90, 12));

    assert_eq!(doc.pages.len(), 1);
    assert_eq!(doc.pages[0].range, CharacterRange::new(0, 10));
    assert_eq!(doc.pages[0].dimensions(), (100, 50));
    assert_eq!(doc.md5, MD5.to_vec());
}

#[test]
fn test_confidence_to_error() {
    let doc = convert_str(HI_THERE, MD5).unwrap();
    assert!(doc.characters[..2].iter().all(|c| c.error == 5));
    assert!(doc.characters[3..8].iter().all(|c| c.error == 12));
    assert!(doc.characters.iter().filter(|c| c.is_space()).all(|c| c.error == 0));
}

#[test]
fn test_missing_confidence_is_maximal_error() {
    let markup = HI_THERE.replace("; x_wconf 95", "");
    let doc = convert_str(&markup, MD5).unwrap();
    assert!(doc.characters[..2].iter().all(|c| c.error == 100));
    assert!(doc.characters[3..8].iter().all(|c| c.error == 12));
}

#[test]
fn test_malformed_bbox_degrades() {
    let markup = HI_THERE.replace("bbox 25 0 75 10", "bbox 25 0 seventy-five 10");
    let doc = convert_str(&markup, MD5).unwrap();
    assert_eq!(doc.character_count(), 10);
    assert!(doc.characters[7].bounding_box.is_zero());
}

#[test]
fn test_folder_in_natural_order() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "page_10_of_10.hocr", &page_markup("ten", 1000));
    write_source(dir.path(), "page_2_of_10.hocr", &page_markup("two", 200));
    write_source(dir.path(), "page_1_of_10.hocr", &page_markup("one", 100));
    write_source(dir.path(), "readme.txt", "not hocr");

    let doc = convert_dir(dir.path(), MD5).unwrap();

    assert_eq!(doc.page_count(), 3);
    assert_eq!(doc.plain_text(), "one  two  ten  ");
    let widths: Vec<u32> = doc.pages.iter().map(|p| p.width).collect();
    assert_eq!(widths, vec![100, 200, 1000]);
}

#[test]
fn test_page_ranges_are_contiguous_across_sources() {
    let dir = tempfile::tempdir().unwrap();
    for (i, word) in ["alpha", "be", "gamma", "d"].iter().enumerate() {
        write_source(dir.path(), &format!("p{}.hocr", i + 1), &page_markup(word, 100));
    }

    let doc = convert_dir(dir.path(), MD5).unwrap();
    assert_eq!(doc.pages[0].range.start, 0);
    for pair in doc.pages.windows(2) {
        assert_eq!(pair[0].range.end, pair[1].range.start);
    }
    assert_eq!(
        doc.pages.last().unwrap().range.end,
        doc.character_count() as u64
    );
}

#[test]
fn test_parallel_matches_sequential() {
    let dir = tempfile::tempdir().unwrap();
    for i in 1..=12 {
        write_source(
            dir.path(),
            &format!("scan-{}.hocr", i),
            &page_markup(&"x".repeat(i), 100 + i as u32),
        );
    }

    let sequential = Converter::new(
        ConvertOptions::new()
            .with_md5(MD5)
            .with_source_dir(dir.path())
            .sequential(),
    )
    .run()
    .unwrap();
    let parallel = Converter::new(
        ConvertOptions::new()
            .with_md5(MD5)
            .with_source_dir(dir.path())
            .with_parallel(true),
    )
    .run()
    .unwrap();

    assert_eq!(sequential, parallel);
    assert_eq!(sequential.pages[11].width, 112);
}

#[test]
fn test_explicit_sources_keep_order() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "a1.hocr", &page_markup("first", 100));
    write_source(dir.path(), "b2.hocr", &page_markup("second", 100));

    let options = ConvertOptions::new()
        .with_md5(MD5)
        .with_sources([dir.path().join("b2.hocr"), dir.path().join("a1.hocr")])
        .with_order(SourceOrder::Explicit);
    let doc = Converter::new(options).run().unwrap();

    assert_eq!(doc.plain_text(), "second  first  ");
}

#[test]
fn test_progress_reports_each_source() {
    let dir = tempfile::tempdir().unwrap();
    write_source(dir.path(), "1.hocr", &page_markup("a", 100));
    write_source(dir.path(), "2.hocr", &page_markup("bc", 100));

    let mut reports = Vec::new();
    let options = ConvertOptions::new()
        .with_md5(MD5)
        .with_source_dir(dir.path())
        .sequential();
    Converter::new(options)
        .run_with_progress(|r| reports.push((r.index, r.total, r.page_count, r.character_count)))
        .unwrap();

    assert_eq!(reports, vec![(0, 2, 1, 3), (1, 2, 2, 7)]);
}

#[test]
fn test_empty_folder_gives_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    let doc = convert_dir(dir.path(), MD5).unwrap();
    assert!(doc.is_empty());
    assert_eq!(doc.character_count(), 0);
}

#[test]
fn test_configuration_errors() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        convert_dir(dir.path(), Vec::new()),
        Err(Error::Configuration(_))
    ));
    assert!(matches!(
        Hocr2Eocr::new().with_md5(MD5).convert(),
        Err(Error::Configuration(_))
    ));
}

#[test]
fn test_builder_writes_container() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("scan.pdf");
    fs::write(&source, b"%PDF-1.7 fake").unwrap();
    let hocr_dir = dir.path().join("hocr");
    fs::create_dir(&hocr_dir).unwrap();
    write_source(&hocr_dir, "1.hocr", HI_THERE);

    let output = dir.path().join("scan.eocr");
    let result = Hocr2Eocr::new()
        .with_source_md5_of(&source)
        .unwrap()
        .with_source_dir(&hocr_dir)
        .convert()
        .unwrap();
    result.write(&output).unwrap();

    let back = hocr2eocr::container::read_file(&output).unwrap();
    assert_eq!(back, result.document);
    assert_eq!(back.md5, hocr2eocr::checksum::md5_bytes(b"%PDF-1.7 fake"));
}
