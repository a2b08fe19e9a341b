//! Character and whitespace synthesis.
//!
//! A word's box is split into equal-width character cells from left to
//! right; the last cell absorbs the remainder of the integer division so
//! the cells always tile the word exactly. Spaces between words, at line
//! ends and at paragraph ends are synthesized from the surrounding boxes.

use crate::model::{BoundingBox, Character};

/// Split a word into one character per code point.
///
/// With `gap = (right - left) / n`, each character spans `[left, min(left + gap, right)]`
/// and the next one starts where it ended. The last character always ends
/// at the word's right edge.
pub fn word_characters(text: &str, bbox: BoundingBox, error: u32) -> Vec<Character> {
    let count = text.chars().count();
    if count == 0 {
        return Vec::new();
    }

    let word_right = i64::from(bbox.x2);
    let gap = (word_right - i64::from(bbox.x1)) / count as i64;
    let mut left = i64::from(bbox.x1);

    text.chars()
        .enumerate()
        .map(|(i, c)| {
            let right = if i == count - 1 {
                word_right
            } else {
                (left + gap).min(word_right)
            };
            let cell = BoundingBox::new(to_coord(left), bbox.y1, to_coord(right), bbox.y2);
            left = right;
            Character::new(c, cell, error)
        })
        .collect()
}

fn to_coord(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Space between two consecutive words on the same line.
pub fn word_space(current: BoundingBox, next: BoundingBox) -> Character {
    Character::space(BoundingBox::new(current.x2, current.y1, next.x1, current.y2))
}

/// Zero-width space marking the right edge of a line.
pub fn line_space(line: BoundingBox) -> Character {
    Character::space(BoundingBox::new(line.x2, line.y1, line.x2, line.y2))
}

/// Zero-width space marking the right edge of a paragraph.
pub fn paragraph_space(paragraph: BoundingBox) -> Character {
    line_space(paragraph)
}
