//! UTF-8 codec with full structural and semantic validation.

use crate::{MAX_BYTES, REPLACEMENT_CHAR};

const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO_B: u8 = 0b1100_0000;
const TAG_THREE_B: u8 = 0b1110_0000;
const TAG_FOUR_B: u8 = 0b1111_0000;
const MASK_TWO_B: u8 = 0b1110_0000;
const MASK_THREE_B: u8 = 0b1111_0000;
const MASK_FOUR_B: u8 = 0b1111_1000;
const END_ONE_B: u32 = 0x80;
const END_TWO_B: u32 = 0x800;
const END_THREE_B: u32 = 0x10000;
const END_FOUR_B: u32 = 0x11_0000;

const CONT_PREFIX_MASK: u8 = 0b1100_0000;
const CONT_VALUE_MASK: u8 = 0b0011_1111;

const SURROGATE_FIRST: u32 = 0xD800;
const SURROGATE_LAST: u32 = 0xDFFF;

/// The encoded form of `U+FFFD`.
pub(crate) const REPLACEMENT_CHAR_BYTES: [u8; 3] = [0xEF, 0xBF, 0xBD];

#[inline]
fn is_surrogate(code: u32) -> bool {
    (SURROGATE_FIRST..=SURROGATE_LAST).contains(&code)
}

/// Returns the number of bytes [`encode`] writes for `code`.
///
/// Surrogates and values above `U+10FFFF` have no encoding and yield 0.
pub fn encoded_len(code: u32) -> usize {
    if code < END_ONE_B {
        1
    } else if code < END_TWO_B {
        2
    } else if code < END_THREE_B {
        if is_surrogate(code) {
            0
        } else {
            3
        }
    } else if code < END_FOUR_B {
        4
    } else {
        0
    }
}

/// Sequence length announced by a lead byte, `None` for continuation bytes
/// and for `0xF8..=0xFF`.
pub(crate) fn len_from_first_byte(v: u8) -> Option<usize> {
    if v < 0x80 {
        Some(1)
    } else if v & MASK_TWO_B == TAG_TWO_B {
        Some(2)
    } else if v & MASK_THREE_B == TAG_THREE_B {
        Some(3)
    } else if v & MASK_FOUR_B == TAG_FOUR_B {
        Some(4)
    } else {
        None
    }
}

/// Returns whether `v` has the `10xxxxxx` continuation bit pattern.
#[inline]
pub fn is_cont_byte(v: u8) -> bool {
    (v & CONT_PREFIX_MASK) == TAG_CONT
}

/// Smallest codepoint that legitimately needs `len` bytes.
#[inline]
fn min_code_for_len(len: usize) -> u32 {
    match len {
        2 => END_ONE_B,
        3 => END_TWO_B,
        4 => END_THREE_B,
        _ => 0,
    }
}

#[inline]
fn utf8_first_byte(byte: u8, cont_len: u32) -> u32 {
    (byte & (0x7F >> cont_len)) as u32
}

#[inline]
fn utf8_acc_cont_byte(ch: u32, byte: u8) -> u32 {
    (ch << 6) | (byte & CONT_VALUE_MASK) as u32
}

/// Decodes the codepoint at the start of `bytes`.
///
/// Returns `(codepoint, bytes_consumed)`. The byte count is always in
/// `1..=4`, so a caller looping on it makes progress over any input, and
/// nothing past `bytes.len()` is ever read.
///
/// * Empty input, a stray continuation or invalid lead byte, a sequence cut
///   off by the end of `bytes`, or a bad continuation byte all yield
///   [`REPLACEMENT_CHAR`] and consume one byte, so decoding resumes at the
///   next byte.
/// * A well-formed sequence whose value is overlong, a surrogate, or above
///   `U+10FFFF` yields [`REPLACEMENT_CHAR`] and consumes the whole sequence.
pub fn decode(bytes: &[u8]) -> (u32, usize) {
    let (head, rest) = match bytes {
        [] => return (REPLACEMENT_CHAR, 1),
        [head, rest @ ..] => (*head, rest),
    };
    if head < 0x80 {
        return (head as u32, 1);
    }
    let len = match len_from_first_byte(head) {
        Some(len) => len,
        None => return (REPLACEMENT_CHAR, 1),
    };
    let cont_len = len - 1;
    if rest.len() < cont_len {
        return (REPLACEMENT_CHAR, 1);
    }

    let mut code = utf8_first_byte(head, cont_len as u32);
    for &byte in &rest[..cont_len] {
        if !is_cont_byte(byte) {
            return (REPLACEMENT_CHAR, 1);
        }
        code = utf8_acc_cont_byte(code, byte);
    }

    if code < min_code_for_len(len) || is_surrogate(code) || code >= END_FOUR_B {
        return (REPLACEMENT_CHAR, len);
    }
    (code, len)
}

/// Encodes `code` into `buf`, returning the number of bytes written.
///
/// Returns 0 and leaves `buf` untouched when `code` is a surrogate or lies
/// above `U+10FFFF`.
pub fn encode(code: u32, buf: &mut [u8; MAX_BYTES]) -> usize {
    let len = encoded_len(code);
    match (len, &mut buf[..]) {
        (1, [a, ..]) => {
            *a = code as u8;
        }
        (2, [a, b, ..]) => {
            *a = (code >> 6 & 0x1F) as u8 | TAG_TWO_B;
            *b = (code & 0x3F) as u8 | TAG_CONT;
        }
        (3, [a, b, c, ..]) => {
            *a = (code >> 12 & 0x0F) as u8 | TAG_THREE_B;
            *b = (code >> 6 & 0x3F) as u8 | TAG_CONT;
            *c = (code & 0x3F) as u8 | TAG_CONT;
        }
        (4, [a, b, c, d, ..]) => {
            *a = (code >> 18 & 0x07) as u8 | TAG_FOUR_B;
            *b = (code >> 12 & 0x3F) as u8 | TAG_CONT;
            *c = (code >> 6 & 0x3F) as u8 | TAG_CONT;
            *d = (code & 0x3F) as u8 | TAG_CONT;
        }
        _ => {}
    }
    len
}
