//! Codepoint classification for grapheme segmentation.

use crate::tables::{
    grapheme::{grapheme_category, GraphemeCat},
    incb::{INCB_CONSONANT_TABLE, INCB_LINKER_TABLE},
    range_contains,
    width::DOUBLE_WIDTH_TABLE,
};

/// First precomposed Hangul syllable.
const HANGUL_S_BASE: u32 = 0xAC00;
/// Last precomposed Hangul syllable.
const HANGUL_S_LAST: u32 = 0xD7A3;
/// Syllables per LV block: one without a trailing consonant plus 27 with.
const HANGUL_T_BLOCK_SIZE: u32 = 28;

/// Returns the Grapheme_Cluster_Break category of `cp`.
///
/// Hangul syllables are LV when they carry no trailing consonant and LVT
/// otherwise; everything else comes from the property table, defaulting to
/// [`GraphemeCat::GC_Other`].
pub fn gcb_category(cp: u32) -> GraphemeCat {
    if (HANGUL_S_BASE..=HANGUL_S_LAST).contains(&cp) {
        return if (cp - HANGUL_S_BASE).is_multiple_of(HANGUL_T_BLOCK_SIZE) {
            GraphemeCat::GC_LV
        } else {
            GraphemeCat::GC_LVT
        };
    }
    grapheme_category(cp).2
}

/// Approximates the Extended_Pictographic property with the double-width
/// table.
///
/// The two sets differ at the edges: wide CJK ideographs count as
/// pictographic here, and pictographs outside the table do not.
pub fn is_extended_pictographic(cp: u32) -> bool {
    range_contains(cp, DOUBLE_WIDTH_TABLE)
}

/// Returns whether `cp` is an Indic_Conjunct_Break linker (a virama).
pub fn is_incb_linker(cp: u32) -> bool {
    INCB_LINKER_TABLE.binary_search(&cp).is_ok()
}

/// Returns whether `cp` is an Indic_Conjunct_Break consonant.
pub fn is_incb_consonant(cp: u32) -> bool {
    range_contains(cp, INCB_CONSONANT_TABLE)
}
