//! Benchmarks for hocr2eocr conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic tesseract-style hOCR.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates synthetic hOCR with the given number of pages.
fn create_test_hocr(page_count: usize) -> String {
    let mut content = String::from("<html><body>\n");

    for p in 0..page_count {
        content.push_str(&format!(
            "<div class='ocr_page' id='page_{}' title='bbox 0 0 2550 3300; ppageno {}'>\n",
            p + 1,
            p
        ));
        for par in 0..8 {
            let top = 100 + par * 380;
            content.push_str(&format!(
                "<p class='ocr_par' title='bbox 100 {} 2400 {}'>\n",
                top,
                top + 360
            ));
            for line in 0..10 {
                let y = top + line * 36;
                content.push_str(&format!(
                    "<span class='ocr_line' title='bbox 100 {} 2400 {}'>",
                    y,
                    y + 30
                ));
                for word in 0..12 {
                    let x = 100 + word * 190;
                    content.push_str(&format!(
                        "<span class='ocrx_word' title='bbox {} {} {} {}; x_wconf {}'>benchmark</span> ",
                        x,
                        y,
                        x + 170,
                        y + 30,
                        60 + (word * 3) % 40
                    ));
                }
                content.push_str("</span>\n");
            }
            content.push_str("</p>\n");
        }
        content.push_str("</div>\n");
    }

    content.push_str("</body></html>\n");
    content
}

/// Benchmark hOCR reading and assembly at various sizes.
fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_str");

    for page_count in [1, 5, 10].iter() {
        let markup = create_test_hocr(*page_count);

        group.bench_function(format!("{}_pages", page_count), |b| {
            b.iter(|| hocr2eocr::convert_str(black_box(&markup), vec![0u8; 16]).unwrap());
        });
    }

    group.finish();
}

/// Benchmark container encoding and decoding.
fn bench_container(c: &mut Criterion) {
    let doc = hocr2eocr::convert_str(&create_test_hocr(10), vec![0u8; 16]).unwrap();
    let bytes = hocr2eocr::container::encode(&doc).unwrap();

    c.bench_function("container_encode", |b| {
        b.iter(|| hocr2eocr::container::encode(black_box(&doc)).unwrap());
    });

    c.bench_function("container_decode", |b| {
        b.iter(|| hocr2eocr::container::decode(black_box(&bytes)).unwrap());
    });
}

/// Benchmark span lookups on a converted document.
fn bench_lookup(c: &mut Criterion) {
    let doc = hocr2eocr::convert_str(&create_test_hocr(10), vec![0u8; 16]).unwrap();
    let last = doc.character_count() as u64 - 1;

    c.bench_function("page_for_position", |b| {
        b.iter(|| doc.page_for_position(black_box(last)).unwrap());
    });
}

criterion_group!(benches, bench_conversion, bench_container, bench_lookup);
criterion_main!(benches);
