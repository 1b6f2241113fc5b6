//! Unicode 17.0 property data.
//!
//! Every range table is sorted by start codepoint and free of overlaps, so a
//! single binary search answers membership.

use core::cmp::Ordering::{Equal, Greater, Less};

pub(crate) mod grapheme;

pub(crate) mod incb;

pub(crate) mod width;

/// Returns whether `c` falls inside any `(start, end)` range of `table`.
pub(crate) fn range_contains(c: u32, table: &[(u32, u32)]) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if c < lo {
                Greater
            } else if c > hi {
                Less
            } else {
                Equal
            }
        })
        .is_ok()
}
