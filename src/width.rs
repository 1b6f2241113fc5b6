//! Terminal display width of codepoints.

use crate::{
    tables::{
        range_contains,
        width::{DOUBLE_WIDTH_TABLE, ZERO_WIDTH_TABLE},
    },
    utf8,
};

const SOFT_HYPHEN: u32 = 0x00AD;

/// Returns the number of terminal columns `cp` occupies.
///
/// * `-1` for non-printable controls: C0 except NUL, DEL, and C1.
/// * `0` for NUL and zero-width characters (combining marks, format
///   characters, ZWJ, variation selectors).
/// * `2` for wide characters (CJK, fullwidth forms, emoji).
/// * `1` otherwise.
///
/// The soft hyphen is reported as one column so that it stays visible and
/// editable.
pub fn codepoint_width(cp: u32) -> i32 {
    match cp {
        0x00 => 0,
        0x01..=0x1F | 0x7F..=0x9F => -1,
        0x20..=0x7E => 1,
        SOFT_HYPHEN => 1,
        _ if range_contains(cp, ZERO_WIDTH_TABLE) => 0,
        _ if range_contains(cp, DOUBLE_WIDTH_TABLE) => 2,
        _ => 1,
    }
}

/// Display width of the codepoint starting at `offset`, or 0 past the end.
pub fn char_width(text: &[u8], offset: usize) -> i32 {
    match text.get(offset..) {
        Some(rest) if !rest.is_empty() => codepoint_width(utf8::decode(rest).0),
        _ => 0,
    }
}

/// Returns whether `cp` is listed as zero-width.
pub fn is_zero_width(cp: u32) -> bool {
    range_contains(cp, ZERO_WIDTH_TABLE)
}

/// Returns whether `cp` is listed as double-width.
pub fn is_wide(cp: u32) -> bool {
    range_contains(cp, DOUBLE_WIDTH_TABLE)
}
