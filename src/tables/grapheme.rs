//! Grapheme_Cluster_Break property table (UAX #29).
//!
//! Hangul syllables (U+AC00..=U+D7A3) are not listed here, their LV/LVT
//! category is computed from the syllable index.

use core::cmp::Ordering::{Equal, Greater, Less};

pub use self::GraphemeCat::*;

/// Grapheme_Cluster_Break property values.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphemeCat {
    /// Any codepoint without a more specific category.
    GC_Other,
    /// Carriage return, U+000D.
    GC_CR,
    /// Line feed, U+000A.
    GC_LF,
    /// Control and most format characters.
    GC_Control,
    /// Grapheme extenders: combining marks, variation selectors, emoji modifiers.
    GC_Extend,
    /// Zero width joiner, U+200D.
    GC_ZWJ,
    /// Regional indicator symbols, U+1F1E6..=U+1F1FF.
    GC_Regional_Indicator,
    /// Prepended concatenation marks.
    GC_Prepend,
    /// Spacing combining marks.
    GC_SpacingMark,
    /// Hangul leading consonant jamo.
    GC_L,
    /// Hangul vowel jamo.
    GC_V,
    /// Hangul trailing consonant jamo.
    GC_T,
    /// Hangul LV syllable.
    GC_LV,
    /// Hangul LVT syllable.
    GC_LVT,
}

fn bsearch_range_value_table(
    c: u32,
    r: &'static [(u32, u32, GraphemeCat)],
) -> (u32, u32, GraphemeCat) {
    match r.binary_search_by(|&(lo, hi, _)| {
        if lo <= c && c <= hi {
            Equal
        } else if hi < c {
            Less
        } else {
            Greater
        }
    }) {
        Ok(idx) => r[idx],
        Err(idx) => {
            let lower = if idx > 0 { r[idx - 1].1 + 1 } else { 0 };
            let upper = if idx < r.len() { r[idx].0 - 1 } else { 0x10FFFF };
            (lower, upper, GC_Other)
        }
    }
}

/// Looks up the table entry covering `c`, returning `(lo, hi, category)`.
///
/// When `c` is not listed the returned range is the gap around it and the
/// category is [`GC_Other`].
pub fn grapheme_category(c: u32) -> (u32, u32, GraphemeCat) {
    bsearch_range_value_table(c, GRAPHEME_CAT_TABLE)
}

pub(crate) const GRAPHEME_CAT_TABLE: &[(u32, u32, GraphemeCat)] = &[
    (0x0000, 0x0009, GC_Control),
    (0x000A, 0x000A, GC_LF),
    (0x000B, 0x000C, GC_Control),
    (0x000D, 0x000D, GC_CR),
    (0x000E, 0x001F, GC_Control),
    (0x007F, 0x009F, GC_Control),
    (0x00AD, 0x00AD, GC_Control),
    (0x0300, 0x036F, GC_Extend),
    (0x0483, 0x0489, GC_Extend),
    (0x0591, 0x05BD, GC_Extend),
    (0x05BF, 0x05BF, GC_Extend),
    (0x05C1, 0x05C2, GC_Extend),
    (0x05C4, 0x05C5, GC_Extend),
    (0x05C7, 0x05C7, GC_Extend),
    (0x0600, 0x0605, GC_Prepend),
    (0x0610, 0x061A, GC_Extend),
    (0x061C, 0x061C, GC_Control),
    (0x064B, 0x065F, GC_Extend),
    (0x0670, 0x0670, GC_Extend),
    (0x06D6, 0x06DC, GC_Extend),
    (0x06DD, 0x06DD, GC_Prepend),
    (0x06DF, 0x06E4, GC_Extend),
    (0x06E7, 0x06E8, GC_Extend),
    (0x06EA, 0x06ED, GC_Extend),
    (0x070F, 0x070F, GC_Prepend),
    (0x0711, 0x0711, GC_Extend),
    (0x0730, 0x074A, GC_Extend),
    (0x07A6, 0x07B0, GC_Extend),
    (0x07EB, 0x07F3, GC_Extend),
    (0x07FD, 0x07FD, GC_Extend),
    (0x0816, 0x0819, GC_Extend),
    (0x081B, 0x0823, GC_Extend),
    (0x0825, 0x0827, GC_Extend),
    (0x0829, 0x082D, GC_Extend),
    (0x0859, 0x085B, GC_Extend),
    (0x0890, 0x0891, GC_Prepend),
    (0x0897, 0x089F, GC_Extend),
    (0x08CA, 0x08E1, GC_Extend),
    (0x08E2, 0x08E2, GC_Prepend),
    (0x08E3, 0x0902, GC_Extend),
    (0x0903, 0x0903, GC_SpacingMark),
    (0x093A, 0x093A, GC_Extend),
    (0x093B, 0x093B, GC_SpacingMark),
    (0x093C, 0x093C, GC_Extend),
    (0x093E, 0x0940, GC_SpacingMark),
    (0x0941, 0x0948, GC_Extend),
    (0x0949, 0x094C, GC_SpacingMark),
    (0x094D, 0x094D, GC_Extend),
    (0x094E, 0x094F, GC_SpacingMark),
    (0x0951, 0x0957, GC_Extend),
    (0x0962, 0x0963, GC_Extend),
    (0x0981, 0x0981, GC_Extend),
    (0x0982, 0x0983, GC_SpacingMark),
    (0x09BC, 0x09BC, GC_Extend),
    (0x09BE, 0x09BE, GC_Extend),
    (0x09BF, 0x09C0, GC_SpacingMark),
    (0x09C1, 0x09C4, GC_Extend),
    (0x09C7, 0x09C8, GC_SpacingMark),
    (0x09CB, 0x09CC, GC_SpacingMark),
    (0x09CD, 0x09CD, GC_Extend),
    (0x09D7, 0x09D7, GC_Extend),
    (0x09E2, 0x09E3, GC_Extend),
    (0x09FE, 0x09FE, GC_Extend),
    (0x0A01, 0x0A02, GC_Extend),
    (0x0A03, 0x0A03, GC_SpacingMark),
    (0x0A3C, 0x0A3C, GC_Extend),
    (0x0A3E, 0x0A40, GC_SpacingMark),
    (0x0A41, 0x0A42, GC_Extend),
    (0x0A47, 0x0A48, GC_Extend),
    (0x0A4B, 0x0A4D, GC_Extend),
    (0x0A51, 0x0A51, GC_Extend),
    (0x0A70, 0x0A71, GC_Extend),
    (0x0A75, 0x0A75, GC_Extend),
    (0x0A81, 0x0A82, GC_Extend),
    (0x0A83, 0x0A83, GC_SpacingMark),
    (0x0ABC, 0x0ABC, GC_Extend),
    (0x0ABE, 0x0AC0, GC_SpacingMark),
    (0x0AC1, 0x0AC5, GC_Extend),
    (0x0AC7, 0x0AC8, GC_Extend),
    (0x0AC9, 0x0AC9, GC_SpacingMark),
    (0x0ACB, 0x0ACC, GC_SpacingMark),
    (0x0ACD, 0x0ACD, GC_Extend),
    (0x0AE2, 0x0AE3, GC_Extend),
    (0x0AFA, 0x0AFF, GC_Extend),
    (0x0B01, 0x0B01, GC_Extend),
    (0x0B02, 0x0B03, GC_SpacingMark),
    (0x0B3C, 0x0B3C, GC_Extend),
    (0x0B3E, 0x0B3F, GC_Extend),
    (0x0B40, 0x0B40, GC_SpacingMark),
    (0x0B41, 0x0B44, GC_Extend),
    (0x0B47, 0x0B48, GC_SpacingMark),
    (0x0B4B, 0x0B4C, GC_SpacingMark),
    (0x0B4D, 0x0B4D, GC_Extend),
    (0x0B55, 0x0B57, GC_Extend),
    (0x0B62, 0x0B63, GC_Extend),
    (0x0B82, 0x0B82, GC_Extend),
    (0x0BBE, 0x0BBE, GC_Extend),
    (0x0BBF, 0x0BBF, GC_SpacingMark),
    (0x0BC0, 0x0BC0, GC_Extend),
    (0x0BC1, 0x0BC2, GC_SpacingMark),
    (0x0BC6, 0x0BC8, GC_SpacingMark),
    (0x0BCA, 0x0BCC, GC_SpacingMark),
    (0x0BCD, 0x0BCD, GC_Extend),
    (0x0BD7, 0x0BD7, GC_Extend),
    (0x0C00, 0x0C00, GC_Extend),
    (0x0C01, 0x0C03, GC_SpacingMark),
    (0x0C04, 0x0C04, GC_Extend),
    (0x0C3C, 0x0C3C, GC_Extend),
    (0x0C3E, 0x0C40, GC_Extend),
    (0x0C41, 0x0C44, GC_SpacingMark),
    (0x0C46, 0x0C48, GC_Extend),
    (0x0C4A, 0x0C4D, GC_Extend),
    (0x0C55, 0x0C56, GC_Extend),
    (0x0C62, 0x0C63, GC_Extend),
    (0x0C81, 0x0C81, GC_Extend),
    (0x0C82, 0x0C83, GC_SpacingMark),
    (0x0CBC, 0x0CBC, GC_Extend),
    (0x0CBE, 0x0CBE, GC_SpacingMark),
    (0x0CBF, 0x0CC2, GC_Extend),
    (0x0CC3, 0x0CC4, GC_SpacingMark),
    (0x0CC6, 0x0CCB, GC_Extend),
    (0x0CCC, 0x0CCD, GC_Extend),
    (0x0CD5, 0x0CD6, GC_Extend),
    (0x0CE2, 0x0CE3, GC_Extend),
    (0x0CF3, 0x0CF3, GC_SpacingMark),
    (0x0D00, 0x0D01, GC_Extend),
    (0x0D02, 0x0D03, GC_SpacingMark),
    (0x0D3B, 0x0D3C, GC_Extend),
    (0x0D3E, 0x0D3E, GC_Extend),
    (0x0D3F, 0x0D40, GC_SpacingMark),
    (0x0D41, 0x0D44, GC_Extend),
    (0x0D46, 0x0D48, GC_SpacingMark),
    (0x0D4A, 0x0D4C, GC_SpacingMark),
    (0x0D4D, 0x0D4D, GC_Extend),
    (0x0D4E, 0x0D4E, GC_Prepend),
    (0x0D57, 0x0D57, GC_Extend),
    (0x0D62, 0x0D63, GC_Extend),
    (0x0D81, 0x0D81, GC_Extend),
    (0x0D82, 0x0D83, GC_SpacingMark),
    (0x0DCA, 0x0DCA, GC_Extend),
    (0x0DCF, 0x0DCF, GC_Extend),
    (0x0DD0, 0x0DD1, GC_SpacingMark),
    (0x0DD2, 0x0DD6, GC_Extend),
    (0x0DD8, 0x0DDF, GC_SpacingMark),
    (0x0DF2, 0x0DF3, GC_SpacingMark),
    (0x0E31, 0x0E31, GC_Extend),
    (0x0E33, 0x0E33, GC_SpacingMark),
    (0x0E34, 0x0E3A, GC_Extend),
    (0x0E47, 0x0E4E, GC_Extend),
    (0x0EB1, 0x0EB1, GC_Extend),
    (0x0EB3, 0x0EB3, GC_SpacingMark),
    (0x0EB4, 0x0EBC, GC_Extend),
    (0x0EC8, 0x0ECE, GC_Extend),
    (0x0F18, 0x0F19, GC_Extend),
    (0x0F35, 0x0F35, GC_Extend),
    (0x0F37, 0x0F37, GC_Extend),
    (0x0F39, 0x0F39, GC_Extend),
    (0x0F3E, 0x0F3F, GC_SpacingMark),
    (0x0F71, 0x0F7E, GC_Extend),
    (0x0F7F, 0x0F7F, GC_SpacingMark),
    (0x0F80, 0x0F84, GC_Extend),
    (0x0F86, 0x0F87, GC_Extend),
    (0x0F8D, 0x0F97, GC_Extend),
    (0x0F99, 0x0FBC, GC_Extend),
    (0x0FC6, 0x0FC6, GC_Extend),
    (0x102D, 0x1030, GC_Extend),
    (0x1031, 0x1031, GC_SpacingMark),
    (0x1032, 0x1037, GC_Extend),
    (0x1039, 0x103A, GC_Extend),
    (0x103B, 0x103C, GC_SpacingMark),
    (0x103D, 0x103E, GC_Extend),
    (0x1056, 0x1057, GC_SpacingMark),
    (0x1058, 0x1059, GC_Extend),
    (0x105E, 0x1060, GC_Extend),
    (0x1071, 0x1074, GC_Extend),
    (0x1082, 0x1082, GC_Extend),
    (0x1084, 0x1084, GC_SpacingMark),
    (0x1085, 0x1086, GC_Extend),
    (0x108D, 0x108D, GC_Extend),
    (0x109D, 0x109D, GC_Extend),
    (0x1100, 0x115F, GC_L),
    (0x1160, 0x11A7, GC_V),
    (0x11A8, 0x11FF, GC_T),
    (0x135D, 0x135F, GC_Extend),
    (0x1712, 0x1715, GC_Extend),
    (0x1732, 0x1734, GC_Extend),
    (0x1752, 0x1753, GC_Extend),
    (0x1772, 0x1773, GC_Extend),
    (0x17B4, 0x17B5, GC_Extend),
    (0x17B6, 0x17B6, GC_SpacingMark),
    (0x17B7, 0x17BD, GC_Extend),
    (0x17BE, 0x17C5, GC_SpacingMark),
    (0x17C6, 0x17C6, GC_Extend),
    (0x17C7, 0x17C8, GC_SpacingMark),
    (0x17C9, 0x17D3, GC_Extend),
    (0x17DD, 0x17DD, GC_Extend),
    (0x180B, 0x180D, GC_Extend),
    (0x180E, 0x180E, GC_Control),
    (0x180F, 0x180F, GC_Extend),
    (0x1885, 0x1886, GC_Extend),
    (0x18A9, 0x18A9, GC_Extend),
    (0x1920, 0x1922, GC_Extend),
    (0x1923, 0x1926, GC_SpacingMark),
    (0x1927, 0x1928, GC_Extend),
    (0x1929, 0x192B, GC_SpacingMark),
    (0x1930, 0x1931, GC_SpacingMark),
    (0x1932, 0x1932, GC_Extend),
    (0x1933, 0x1938, GC_SpacingMark),
    (0x1939, 0x193B, GC_Extend),
    (0x1A17, 0x1A18, GC_Extend),
    (0x1A19, 0x1A1A, GC_SpacingMark),
    (0x1A1B, 0x1A1B, GC_Extend),
    (0x1A55, 0x1A55, GC_SpacingMark),
    (0x1A56, 0x1A56, GC_Extend),
    (0x1A57, 0x1A57, GC_SpacingMark),
    (0x1A58, 0x1A60, GC_Extend),
    (0x1A62, 0x1A62, GC_Extend),
    (0x1A65, 0x1A6C, GC_Extend),
    (0x1A6D, 0x1A72, GC_SpacingMark),
    (0x1A73, 0x1A7F, GC_Extend),
    (0x1AB0, 0x1AEB, GC_Extend),
    (0x1B00, 0x1B03, GC_Extend),
    (0x1B04, 0x1B04, GC_SpacingMark),
    (0x1B34, 0x1B3C, GC_Extend),
    (0x1B3D, 0x1B41, GC_SpacingMark),
    (0x1B42, 0x1B44, GC_Extend),
    (0x1B6B, 0x1B73, GC_Extend),
    (0x1B80, 0x1B81, GC_Extend),
    (0x1B82, 0x1B82, GC_SpacingMark),
    (0x1BA1, 0x1BA1, GC_SpacingMark),
    (0x1BA2, 0x1BA5, GC_Extend),
    (0x1BA6, 0x1BA7, GC_SpacingMark),
    (0x1BA8, 0x1BAD, GC_Extend),
    (0x1BE6, 0x1BE6, GC_Extend),
    (0x1BE7, 0x1BE7, GC_SpacingMark),
    (0x1BE8, 0x1BE9, GC_Extend),
    (0x1BEA, 0x1BEC, GC_SpacingMark),
    (0x1BED, 0x1BED, GC_Extend),
    (0x1BEE, 0x1BEE, GC_SpacingMark),
    (0x1BEF, 0x1BF3, GC_Extend),
    (0x1C24, 0x1C2B, GC_SpacingMark),
    (0x1C2C, 0x1C33, GC_Extend),
    (0x1C34, 0x1C35, GC_SpacingMark),
    (0x1C36, 0x1C37, GC_Extend),
    (0x1CD0, 0x1CD2, GC_Extend),
    (0x1CD4, 0x1CE0, GC_Extend),
    (0x1CE1, 0x1CE1, GC_SpacingMark),
    (0x1CE2, 0x1CE8, GC_Extend),
    (0x1CED, 0x1CED, GC_Extend),
    (0x1CF4, 0x1CF4, GC_Extend),
    (0x1CF7, 0x1CF7, GC_SpacingMark),
    (0x1CF8, 0x1CF9, GC_Extend),
    (0x1DC0, 0x1DFF, GC_Extend),
    (0x200B, 0x200B, GC_Control),
    (0x200C, 0x200C, GC_Extend),
    (0x200D, 0x200D, GC_ZWJ),
    (0x200E, 0x200F, GC_Control),
    (0x2028, 0x202E, GC_Control),
    (0x2060, 0x206F, GC_Control),
    (0x20D0, 0x20F0, GC_Extend),
    (0x2CEF, 0x2CF1, GC_Extend),
    (0x2D7F, 0x2D7F, GC_Extend),
    (0x2DE0, 0x2DFF, GC_Extend),
    (0x302A, 0x302F, GC_Extend),
    (0x3099, 0x309A, GC_Extend),
    (0xA66F, 0xA672, GC_Extend),
    (0xA674, 0xA67D, GC_Extend),
    (0xA69E, 0xA69F, GC_Extend),
    (0xA6F0, 0xA6F1, GC_Extend),
    (0xA802, 0xA802, GC_Extend),
    (0xA806, 0xA806, GC_Extend),
    (0xA80B, 0xA80B, GC_Extend),
    (0xA823, 0xA824, GC_SpacingMark),
    (0xA825, 0xA826, GC_Extend),
    (0xA827, 0xA827, GC_SpacingMark),
    (0xA82C, 0xA82C, GC_Extend),
    (0xA880, 0xA881, GC_SpacingMark),
    (0xA8B4, 0xA8C3, GC_SpacingMark),
    (0xA8C4, 0xA8C5, GC_Extend),
    (0xA8E0, 0xA8F1, GC_Extend),
    (0xA8FF, 0xA8FF, GC_Extend),
    (0xA926, 0xA92D, GC_Extend),
    (0xA947, 0xA951, GC_Extend),
    (0xA952, 0xA952, GC_SpacingMark),
    (0xA953, 0xA953, GC_Extend),
    (0xA960, 0xA97C, GC_L),
    (0xA980, 0xA982, GC_Extend),
    (0xA983, 0xA983, GC_SpacingMark),
    (0xA9B3, 0xA9B3, GC_Extend),
    (0xA9B4, 0xA9B5, GC_SpacingMark),
    (0xA9B6, 0xA9B9, GC_Extend),
    (0xA9BA, 0xA9BB, GC_SpacingMark),
    (0xA9BC, 0xA9C0, GC_Extend),
    (0xA9E5, 0xA9E5, GC_Extend),
    (0xAA29, 0xAA2E, GC_Extend),
    (0xAA2F, 0xAA30, GC_SpacingMark),
    (0xAA31, 0xAA32, GC_Extend),
    (0xAA33, 0xAA34, GC_SpacingMark),
    (0xAA35, 0xAA36, GC_Extend),
    (0xAA43, 0xAA43, GC_Extend),
    (0xAA4C, 0xAA4C, GC_Extend),
    (0xAA4D, 0xAA4D, GC_SpacingMark),
    (0xAA7C, 0xAA7C, GC_Extend),
    (0xAAB0, 0xAAB0, GC_Extend),
    (0xAAB2, 0xAAB4, GC_Extend),
    (0xAAB7, 0xAAB8, GC_Extend),
    (0xAABE, 0xAAC1, GC_Extend),
    (0xAAEB, 0xAAEB, GC_SpacingMark),
    (0xAAEC, 0xAAED, GC_Extend),
    (0xAAEE, 0xAAEF, GC_SpacingMark),
    (0xAAF5, 0xAAF5, GC_SpacingMark),
    (0xAAF6, 0xAAF6, GC_Extend),
    (0xABE3, 0xABE4, GC_SpacingMark),
    (0xABE5, 0xABE5, GC_Extend),
    (0xABE6, 0xABE7, GC_SpacingMark),
    (0xABE8, 0xABE8, GC_Extend),
    (0xABE9, 0xABEA, GC_SpacingMark),
    (0xABEC, 0xABEC, GC_SpacingMark),
    (0xABED, 0xABED, GC_Extend),
    (0xD7B0, 0xD7C6, GC_V),
    (0xD7CB, 0xD7FB, GC_T),
    (0xFB1E, 0xFB1E, GC_Extend),
    (0xFE00, 0xFE0F, GC_Extend),
    (0xFE20, 0xFE2F, GC_Extend),
    (0xFEFF, 0xFEFF, GC_Control),
    (0xFF9E, 0xFF9F, GC_Extend),
    (0xFFF0, 0xFFFB, GC_Control),
    (0x101FD, 0x101FD, GC_Extend),
    (0x102E0, 0x102E0, GC_Extend),
    (0x10376, 0x1037A, GC_Extend),
    (0x10A01, 0x10A03, GC_Extend),
    (0x10A05, 0x10A06, GC_Extend),
    (0x10A0C, 0x10A0F, GC_Extend),
    (0x10A38, 0x10A3F, GC_Extend),
    (0x10AE5, 0x10AE6, GC_Extend),
    (0x10D24, 0x10D27, GC_Extend),
    (0x10D69, 0x10D6D, GC_Extend),
    (0x10EAB, 0x10EAC, GC_Extend),
    (0x10EFA, 0x10EFF, GC_Extend),
    (0x10F46, 0x10F50, GC_Extend),
    (0x10F82, 0x10F85, GC_Extend),
    (0x11000, 0x11000, GC_SpacingMark),
    (0x11001, 0x11001, GC_Extend),
    (0x11002, 0x11002, GC_SpacingMark),
    (0x11038, 0x11046, GC_Extend),
    (0x11070, 0x11070, GC_Extend),
    (0x11073, 0x11074, GC_Extend),
    (0x1107F, 0x11081, GC_Extend),
    (0x11082, 0x11082, GC_SpacingMark),
    (0x110B0, 0x110B2, GC_SpacingMark),
    (0x110B3, 0x110B6, GC_Extend),
    (0x110B7, 0x110B8, GC_SpacingMark),
    (0x110B9, 0x110BA, GC_Extend),
    (0x110BD, 0x110BD, GC_Prepend),
    (0x110C2, 0x110C2, GC_Extend),
    (0x110CD, 0x110CD, GC_Prepend),
    (0x11100, 0x11102, GC_Extend),
    (0x11127, 0x1112B, GC_Extend),
    (0x1112C, 0x1112C, GC_SpacingMark),
    (0x1112D, 0x11134, GC_Extend),
    (0x11145, 0x11146, GC_SpacingMark),
    (0x11173, 0x11173, GC_Extend),
    (0x11180, 0x11181, GC_Extend),
    (0x11182, 0x11182, GC_SpacingMark),
    (0x111B3, 0x111B5, GC_SpacingMark),
    (0x111B6, 0x111BF, GC_Extend),
    (0x111C0, 0x111C0, GC_Extend),
    (0x111C2, 0x111C3, GC_Prepend),
    (0x111C9, 0x111CF, GC_Extend),
    (0x1122C, 0x1122E, GC_SpacingMark),
    (0x1122F, 0x11231, GC_Extend),
    (0x11232, 0x11233, GC_SpacingMark),
    (0x11234, 0x11237, GC_Extend),
    (0x1123E, 0x1123E, GC_Extend),
    (0x11241, 0x11241, GC_Extend),
    (0x112DF, 0x112DF, GC_Extend),
    (0x112E0, 0x112E2, GC_SpacingMark),
    (0x112E3, 0x112EA, GC_Extend),
    (0x11300, 0x11301, GC_Extend),
    (0x11302, 0x11303, GC_SpacingMark),
    (0x1133B, 0x1133C, GC_Extend),
    (0x1133E, 0x1133E, GC_Extend),
    (0x1133F, 0x1133F, GC_SpacingMark),
    (0x11340, 0x11340, GC_Extend),
    (0x11341, 0x11344, GC_SpacingMark),
    (0x11347, 0x11348, GC_SpacingMark),
    (0x1134B, 0x1134D, GC_Extend),
    (0x11357, 0x11357, GC_Extend),
    (0x11362, 0x11363, GC_SpacingMark),
    (0x11366, 0x11374, GC_Extend),
    (0x113B8, 0x113B8, GC_Extend),
    (0x113B9, 0x113BA, GC_SpacingMark),
    (0x113BB, 0x113C0, GC_Extend),
    (0x113C2, 0x113C9, GC_Extend),
    (0x113CA, 0x113CD, GC_SpacingMark),
    (0x113CE, 0x113D0, GC_Extend),
    (0x113D1, 0x113D1, GC_Prepend),
    (0x113D2, 0x113D2, GC_Extend),
    (0x113E1, 0x113E2, GC_Extend),
    (0x11435, 0x11437, GC_SpacingMark),
    (0x11438, 0x1143F, GC_Extend),
    (0x11440, 0x11441, GC_SpacingMark),
    (0x11442, 0x11444, GC_Extend),
    (0x11445, 0x11445, GC_SpacingMark),
    (0x11446, 0x11446, GC_Extend),
    (0x1145E, 0x1145E, GC_Extend),
    (0x114B0, 0x114B2, GC_SpacingMark),
    (0x114B3, 0x114B8, GC_Extend),
    (0x114B9, 0x114B9, GC_SpacingMark),
    (0x114BA, 0x114BA, GC_Extend),
    (0x114BB, 0x114BE, GC_SpacingMark),
    (0x114BF, 0x114C0, GC_Extend),
    (0x114C1, 0x114C1, GC_SpacingMark),
    (0x114C2, 0x114C3, GC_Extend),
    (0x115AF, 0x115B1, GC_SpacingMark),
    (0x115B2, 0x115B5, GC_Extend),
    (0x115B8, 0x115BB, GC_SpacingMark),
    (0x115BC, 0x115BD, GC_Extend),
    (0x115BE, 0x115BE, GC_SpacingMark),
    (0x115BF, 0x115C0, GC_Extend),
    (0x115DC, 0x115DD, GC_Extend),
    (0x11630, 0x11632, GC_SpacingMark),
    (0x11633, 0x1163A, GC_Extend),
    (0x1163B, 0x1163C, GC_SpacingMark),
    (0x1163D, 0x1163D, GC_Extend),
    (0x1163E, 0x1163E, GC_SpacingMark),
    (0x1163F, 0x11640, GC_Extend),
    (0x116AB, 0x116AB, GC_Extend),
    (0x116AC, 0x116AC, GC_SpacingMark),
    (0x116AD, 0x116AD, GC_Extend),
    (0x116AE, 0x116AF, GC_SpacingMark),
    (0x116B0, 0x116B7, GC_Extend),
    (0x1171D, 0x1171D, GC_Extend),
    (0x1171E, 0x1171E, GC_SpacingMark),
    (0x1171F, 0x1171F, GC_Extend),
    (0x11722, 0x11725, GC_Extend),
    (0x11726, 0x11726, GC_SpacingMark),
    (0x11727, 0x1172B, GC_Extend),
    (0x1182C, 0x1182E, GC_SpacingMark),
    (0x1182F, 0x11837, GC_Extend),
    (0x11838, 0x11838, GC_SpacingMark),
    (0x11839, 0x1183A, GC_Extend),
    (0x11930, 0x11935, GC_SpacingMark),
    (0x11937, 0x11938, GC_SpacingMark),
    (0x1193B, 0x1193E, GC_Extend),
    (0x1193F, 0x1193F, GC_Prepend),
    (0x11940, 0x11940, GC_SpacingMark),
    (0x11941, 0x11941, GC_Prepend),
    (0x11942, 0x11943, GC_Extend),
    (0x119D1, 0x119D3, GC_SpacingMark),
    (0x119D4, 0x119DB, GC_Extend),
    (0x119DC, 0x119DF, GC_SpacingMark),
    (0x119E0, 0x119E0, GC_Extend),
    (0x119E4, 0x119E4, GC_SpacingMark),
    (0x11A01, 0x11A0A, GC_Extend),
    (0x11A33, 0x11A38, GC_Extend),
    (0x11A39, 0x11A39, GC_SpacingMark),
    (0x11A3B, 0x11A47, GC_Extend),
    (0x11A51, 0x11A56, GC_Extend),
    (0x11A57, 0x11A58, GC_SpacingMark),
    (0x11A59, 0x11A5B, GC_Extend),
    (0x11A84, 0x11A89, GC_Prepend),
    (0x11A8A, 0x11A96, GC_Extend),
    (0x11A97, 0x11A97, GC_SpacingMark),
    (0x11A98, 0x11A99, GC_Extend),
    (0x11B60, 0x11B67, GC_Extend),
    (0x11C2F, 0x11C2F, GC_SpacingMark),
    (0x11C30, 0x11C3D, GC_Extend),
    (0x11C3E, 0x11C3E, GC_SpacingMark),
    (0x11C3F, 0x11C3F, GC_Extend),
    (0x11C92, 0x11CA8, GC_Extend),
    (0x11CA9, 0x11CA9, GC_SpacingMark),
    (0x11CAA, 0x11CB0, GC_Extend),
    (0x11CB1, 0x11CB1, GC_SpacingMark),
    (0x11CB2, 0x11CB3, GC_Extend),
    (0x11CB4, 0x11CB4, GC_SpacingMark),
    (0x11CB5, 0x11CB6, GC_Extend),
    (0x11D31, 0x11D45, GC_Extend),
    (0x11D46, 0x11D46, GC_Prepend),
    (0x11D47, 0x11D47, GC_Extend),
    (0x11D8A, 0x11D8E, GC_SpacingMark),
    (0x11D90, 0x11D92, GC_Extend),
    (0x11D93, 0x11D94, GC_SpacingMark),
    (0x11D95, 0x11D95, GC_Extend),
    (0x11D96, 0x11D96, GC_SpacingMark),
    (0x11D97, 0x11D97, GC_Extend),
    (0x11EF3, 0x11EF4, GC_Extend),
    (0x11EF5, 0x11EF6, GC_SpacingMark),
    (0x11F00, 0x11F01, GC_Extend),
    (0x11F02, 0x11F02, GC_Prepend),
    (0x11F03, 0x11F03, GC_SpacingMark),
    (0x11F34, 0x11F35, GC_SpacingMark),
    (0x11F36, 0x11F3D, GC_Extend),
    (0x11F3E, 0x11F3F, GC_SpacingMark),
    (0x11F40, 0x11F42, GC_Extend),
    (0x11F5A, 0x11F5A, GC_Extend),
    (0x13430, 0x1343F, GC_Control),
    (0x13440, 0x13455, GC_Extend),
    (0x1611E, 0x16129, GC_Extend),
    (0x1612A, 0x1612C, GC_SpacingMark),
    (0x1612D, 0x1612F, GC_Extend),
    (0x16AF0, 0x16AF4, GC_Extend),
    (0x16B30, 0x16B36, GC_Extend),
    (0x16D63, 0x16D63, GC_V),
    (0x16D67, 0x16D6A, GC_V),
    (0x16F4F, 0x16F4F, GC_Extend),
    (0x16F51, 0x16F87, GC_SpacingMark),
    (0x16F8F, 0x16F92, GC_Extend),
    (0x16FE4, 0x16FE4, GC_Extend),
    (0x16FF0, 0x16FF1, GC_Extend),
    (0x1BC9D, 0x1BC9E, GC_Extend),
    (0x1BCA0, 0x1BCA3, GC_Control),
    (0x1CF00, 0x1CF46, GC_Extend),
    (0x1D165, 0x1D172, GC_Extend),
    (0x1D173, 0x1D17A, GC_Control),
    (0x1D17B, 0x1D1AD, GC_Extend),
    (0x1D242, 0x1D244, GC_Extend),
    (0x1DA00, 0x1DA36, GC_Extend),
    (0x1DA3B, 0x1DA6C, GC_Extend),
    (0x1DA75, 0x1DA75, GC_Extend),
    (0x1DA84, 0x1DA84, GC_Extend),
    (0x1DA9B, 0x1DAAF, GC_Extend),
    (0x1E000, 0x1E02A, GC_Extend),
    (0x1E08F, 0x1E08F, GC_Extend),
    (0x1E130, 0x1E136, GC_Extend),
    (0x1E2AE, 0x1E2AE, GC_Extend),
    (0x1E2EC, 0x1E2EF, GC_Extend),
    (0x1E4EC, 0x1E4EF, GC_Extend),
    (0x1E5EE, 0x1E5EF, GC_Extend),
    (0x1E6E3, 0x1E6F5, GC_Extend),
    (0x1E8D0, 0x1E8D6, GC_Extend),
    (0x1E944, 0x1E94A, GC_Extend),
    (0x1F1E6, 0x1F1FF, GC_Regional_Indicator),
    (0x1F3FB, 0x1F3FF, GC_Extend),
    (0xE0000, 0xE001F, GC_Control),
    (0xE0020, 0xE007F, GC_Extend),
    (0xE0080, 0xE00FF, GC_Control),
    (0xE0100, 0xE01EF, GC_Extend),
    (0xE01F0, 0xE0FFF, GC_Control),
];
