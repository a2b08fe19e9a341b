//! Geometry and confidence extraction from hOCR `title` properties.
//!
//! hOCR stores element properties in the `title` attribute as
//! semicolon-separated entries, e.g. `bbox 36 92 618 138; x_wconf 91`.
//! Unreadable values never abort a conversion: a missing or malformed
//! `bbox` becomes the zero box and a missing `x_wconf` becomes zero
//! confidence (maximal error).

use crate::model::BoundingBox;
use regex::Regex;
use std::sync::OnceLock;

/// Highest confidence (and highest error) on the 0-100 scale.
pub const MAX_CONFIDENCE: u32 = 100;

fn bbox_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\bbbox\s+(\d+)\s+(\d+)\s+(\d+)\s+(\d+)").expect("valid bbox regex")
    })
}

fn wconf_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bx_wconf\s+(\d+)").expect("valid x_wconf regex"))
}

/// Extract the `bbox` property, if present and readable.
pub fn try_parse_bbox(title: &str) -> Option<BoundingBox> {
    let caps = bbox_regex().captures(title)?;
    let coord = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();

    Some(BoundingBox::new(coord(1)?, coord(2)?, coord(3)?, coord(4)?))
}

/// Extract the `bbox` property, falling back to the zero box.
pub fn parse_bbox(title: Option<&str>) -> BoundingBox {
    match title.and_then(try_parse_bbox) {
        Some(bbox) => bbox,
        None => {
            log::debug!("unreadable bbox in title {:?}, using zero box", title);
            BoundingBox::default()
        }
    }
}

/// Extract the `x_wconf` property, if present and readable.
pub fn try_parse_confidence(title: &str) -> Option<u32> {
    let caps = wconf_regex().captures(title)?;
    caps.get(1)?
        .as_str()
        .parse::<u32>()
        .ok()
        .map(|conf| conf.min(MAX_CONFIDENCE))
}

/// Extract the `x_wconf` property, falling back to zero confidence.
pub fn parse_confidence(title: Option<&str>) -> u32 {
    match title.and_then(try_parse_confidence) {
        Some(conf) => conf,
        None => {
            log::debug!("unreadable x_wconf in title {:?}, using 0", title);
            0
        }
    }
}

/// Invert a 0-100 confidence into a 0-100 error.
pub fn confidence_to_error(confidence: u32) -> u32 {
    MAX_CONFIDENCE - confidence.min(MAX_CONFIDENCE)
}
