#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs, missing_debug_implementations)]
//! UTF-8 decoding, terminal display width and grapheme cluster cursor
//! movement over plain byte buffers.
//!
//! Everything here works on `&[u8]` and byte offsets into it. Input is never
//! required to be valid UTF-8: malformed sequences decode to
//! [`REPLACEMENT_CHAR`] and every cursor operation still makes progress, so
//! an editor or terminal can walk arbitrary bytes without panicking.
//!
//! # Layers
//!
//! * [`decode`] and [`encode`] convert between codepoints and UTF-8.
//! * [`codepoint_width`] reports how many terminal columns a codepoint
//!   occupies: `-1` for controls, `0` for combining and format characters,
//!   `2` for East Asian wide characters and emoji, `1` otherwise.
//! * [`gcb_category`] and [`is_grapheme_break`] implement the extended
//!   grapheme cluster rules of UAX #29, including Indic conjuncts (GB9c),
//!   emoji ZWJ sequences (GB11) and regional indicator pairs (GB12/13).
//! * [`next_char`], [`prev_char`], [`next_grapheme`] and [`prev_grapheme`]
//!   move a byte offset by one codepoint or one user-perceived character.
//! * [`validate`], [`string_width`], [`truncate`] and friends answer
//!   questions about a whole buffer.
//!
//! # Example
//!
//! ```
//! use utf8cursor::{next_grapheme, prev_grapheme, string_width, truncate};
//!
//! let text = "e\u{301}\u{4E2D}!".as_bytes();
//! assert_eq!(3, next_grapheme(text, 0));
//! assert_eq!(3, prev_grapheme(text, 6));
//! assert_eq!(4, string_width(text));
//! assert_eq!(3, truncate(text, 2));
//! ```
//!
//! # Approximations
//!
//! Extended_Pictographic is approximated by the double-width table, so a
//! wide ideograph after a ZWJ that follows an emoji stays in the emoji's
//! cluster, and narrow pictographs do not join ZWJ sequences. Widths follow
//! the usual terminal conventions rather than any single standard.

pub(crate) mod tables;

mod cursor;
mod grapheme;
mod iter;
mod property;
mod text;
mod utf8;
mod width;

pub use cursor::{next_char, next_grapheme, prev_char, prev_grapheme};
pub use grapheme::{is_grapheme_break, IncbState, ScanState};
pub use iter::{codepoints, graphemes, Codepoints, Graphemes};
pub use property::{gcb_category, is_extended_pictographic, is_incb_consonant, is_incb_linker};
pub use tables::grapheme::{grapheme_category, GraphemeCat};
pub use text::{
    codepoint_count, grapheme_codepoints, grapheme_count, is_valid, string_width, truncate,
    validate, CodepointVec, ValidationError,
};
pub use utf8::{decode, encode, encoded_len, is_cont_byte};
pub use width::{char_width, codepoint_width, is_wide, is_zero_width};

/// `U+FFFD`, produced for every malformed or unencodable sequence.
pub const REPLACEMENT_CHAR: u32 = 0xFFFD;

/// Longest UTF-8 encoding of a single codepoint, in bytes.
pub const MAX_BYTES: usize = 4;

/// How many codepoints [`prev_grapheme`] rewinds before rescanning forward.
///
/// Clusters longer than this are split when walked backwards.
pub const GRAPHEME_MAX_BACKTRACK: usize = 128;

/// The version of Unicode the property tables were generated from.
pub const UNICODE_VERSION: (u64, u64, u64) = (17, 0, 0);
