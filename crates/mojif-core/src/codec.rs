// this_file: crates/mojif-core/src/codec.rs

//! UTF-16 code-point decoding.
//!
//! The finder trie is keyed by Unicode scalar values, but callers hand us
//! either Rust strings or raw UTF-16 buffers (the encoding used by host
//! platforms the catalog data was designed for). This module decodes UTF-16
//! code units into scalar values, reporting unpaired surrogates as
//! [`MalformedUtf16`] instead of substituting replacement characters.

use crate::error::MalformedUtf16;

const HIGH_SURROGATE_START: u16 = 0xD800;
const LOW_SURROGATE_START: u16 = 0xDC00;
const SURROGATE_END: u16 = 0xDFFF;
const SURROGATE_OFFSET: u32 = 0x1_0000;

fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_START..LOW_SURROGATE_START).contains(&unit)
}

fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_START..=SURROGATE_END).contains(&unit)
}

/// Number of UTF-16 code units needed to encode `code`.
///
/// 1 for the Basic Multilingual Plane, 2 for everything above it.
pub fn utf16_len(code: u32) -> usize {
    if code < SURROGATE_OFFSET {
        1
    } else {
        2
    }
}

/// Decodes the code point starting at `offset` in a UTF-16 buffer.
///
/// Returns the scalar value and its width in code units. Fails when `offset`
/// points at a low surrogate, or at a high surrogate that is not followed by
/// a low surrogate within bounds.
pub fn decode_at(units: &[u16], offset: usize) -> Result<(u32, usize), MalformedUtf16> {
    let unit = *units.get(offset).ok_or(MalformedUtf16::OutOfBounds {
        offset,
        len: units.len(),
    })?;
    if is_low_surrogate(unit) {
        return Err(MalformedUtf16::LoneLowSurrogate { offset, unit });
    }
    if !is_high_surrogate(unit) {
        return Ok((u32::from(unit), 1));
    }
    match units.get(offset + 1) {
        Some(&low) if is_low_surrogate(low) => {
            let high_bits = u32::from(unit & 0x3FF);
            let low_bits = u32::from(low & 0x3FF);
            Ok((((high_bits << 10) | low_bits) + SURROGATE_OFFSET, 2))
        }
        _ => Err(MalformedUtf16::UnpairedHighSurrogate { offset, unit }),
    }
}

/// One decoded code point: its scalar value, where it started, and how many
/// code units it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedCodePoint {
    pub value: u32,
    pub offset: usize,
    pub width: usize,
}

/// Lazy decoder over a whole UTF-16 buffer.
///
/// Yields `Err` once at the first malformed position, then fuses.
#[derive(Debug, Clone)]
pub struct Utf16CodePoints<'a> {
    units: &'a [u16],
    offset: usize,
    failed: bool,
}

impl Iterator for Utf16CodePoints<'_> {
    type Item = Result<DecodedCodePoint, MalformedUtf16>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.offset >= self.units.len() {
            return None;
        }
        match decode_at(self.units, self.offset) {
            Ok((value, width)) => {
                let decoded = DecodedCodePoint {
                    value,
                    offset: self.offset,
                    width,
                };
                self.offset += width;
                Some(Ok(decoded))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Decodes an entire buffer into an ordered sequence of code points.
pub fn decode_all(units: &[u16]) -> Utf16CodePoints<'_> {
    Utf16CodePoints {
        units,
        offset: 0,
        failed: false,
    }
}

/// The Unicode scalar values of a string, in order.
///
/// A `&str` cannot contain unpaired surrogates, so this never fails.
pub fn code_points(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}
