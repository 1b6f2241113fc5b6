//! Whole-buffer queries built on the codec and the cursor.

use crate::{
    cursor::{next_char, next_grapheme},
    utf8::{self, REPLACEMENT_CHAR_BYTES},
    width::char_width,
    REPLACEMENT_CHAR,
};
use core::fmt;
use smallvec::SmallVec;

/// Codepoints of a single grapheme cluster.
///
/// Eight slots hold nearly every real cluster without allocating; longer
/// ZWJ sequences spill to the heap.
pub type CodepointVec = SmallVec<[u32; 8]>;

/// The first malformed sequence found by [`validate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    valid_up_to: usize,
}

impl ValidationError {
    /// Byte offset of the first malformed sequence; everything before it is
    /// well-formed UTF-8.
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid utf-8 sequence at byte offset {}",
            self.valid_up_to
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

/// Checks that `text` is entirely well-formed UTF-8.
///
/// A decoded `U+FFFD` only counts as an error when the bytes under it are
/// not the literal encoding of `U+FFFD`.
pub fn validate(text: &[u8]) -> Result<(), ValidationError> {
    let mut offset = 0;
    while offset < text.len() {
        let rest = &text[offset..];
        let (cp, consumed) = utf8::decode(rest);
        if cp == REPLACEMENT_CHAR && !rest.starts_with(&REPLACEMENT_CHAR_BYTES) {
            return Err(ValidationError {
                valid_up_to: offset,
            });
        }
        offset += consumed;
    }
    Ok(())
}

/// Returns whether `text` is entirely well-formed UTF-8.
pub fn is_valid(text: &[u8]) -> bool {
    validate(text).is_ok()
}

/// Number of codepoints in `text`; each malformed sequence counts as one.
pub fn codepoint_count(text: &[u8]) -> usize {
    let mut count = 0;
    let mut offset = 0;
    while offset < text.len() {
        offset = next_char(text, offset);
        count += 1;
    }
    count
}

/// Number of grapheme clusters in `text`.
pub fn grapheme_count(text: &[u8]) -> usize {
    let mut count = 0;
    let mut offset = 0;
    while offset < text.len() {
        offset = next_grapheme(text, offset);
        count += 1;
    }
    count
}

/// Total display columns of `text`. Control characters add nothing.
pub fn string_width(text: &[u8]) -> usize {
    let mut width = 0;
    let mut offset = 0;
    while offset < text.len() {
        let cols = char_width(text, offset);
        if cols > 0 {
            width += cols as usize;
        }
        offset = next_char(text, offset);
    }
    width
}

/// Longest prefix of `text` fitting in `max_cols` columns, as a byte offset.
///
/// The result always falls on a codepoint boundary. Zero-width codepoints
/// following the last character that fits are kept. Returns `text.len()`
/// when everything fits.
pub fn truncate(text: &[u8], max_cols: usize) -> usize {
    let mut width = 0;
    let mut offset = 0;
    while offset < text.len() {
        let cols = char_width(text, offset);
        if cols > 0 {
            let cols = cols as usize;
            if width + cols > max_cols {
                return offset;
            }
            width += cols;
        }
        offset = next_char(text, offset);
    }
    text.len()
}

/// Codepoints of the grapheme cluster starting at `offset`.
///
/// Empty when `offset` is at or past the end of `text`.
pub fn grapheme_codepoints(text: &[u8], offset: usize) -> CodepointVec {
    let mut cps = CodepointVec::new();
    let end = next_grapheme(text, offset);
    let mut pos = offset;
    while pos < end {
        let (cp, _) = utf8::decode(&text[pos..end]);
        cps.push(cp);
        pos = next_char(&text[..end], pos);
    }
    cps
}
