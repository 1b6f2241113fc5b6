//! Byte offset cursor movement by codepoint and by grapheme cluster.
//!
//! Offsets beyond the end of `text` are treated as `text.len()`.

use crate::{
    grapheme::{is_grapheme_break, ScanState},
    property::gcb_category,
    utf8::{self, is_cont_byte},
    GRAPHEME_MAX_BACKTRACK, MAX_BYTES,
};

/// Offset just past the codepoint starting at `offset`.
///
/// Returns `text.len()` when `offset` is already at or past the end.
pub fn next_char(text: &[u8], offset: usize) -> usize {
    let len = text.len();
    if offset >= len {
        return len;
    }
    let (_, consumed) = utf8::decode(&text[offset..]);
    (offset + consumed).min(len)
}

/// Offset of the codepoint that ends at `offset`.
///
/// Walks back over at most [`MAX_BYTES`] bytes of continuation bytes, so a
/// long run of stray continuation bytes cannot make the scan unbounded.
/// Returns 0 at the start of `text`.
pub fn prev_char(text: &[u8], offset: usize) -> usize {
    let offset = offset.min(text.len());
    if offset == 0 {
        return 0;
    }
    let limit = offset.saturating_sub(MAX_BYTES);
    let mut pos = offset - 1;
    while pos > limit && is_cont_byte(text[pos]) {
        pos -= 1;
    }
    pos
}

/// Offset of the next grapheme cluster boundary after `offset`.
///
/// `offset` is assumed to be a cluster boundary. Returns `text.len()` when
/// the cluster runs to the end of `text` or `offset` is already there.
pub fn next_grapheme(text: &[u8], offset: usize) -> usize {
    let len = text.len();
    if offset >= len {
        return len;
    }

    let (first_cp, consumed) = utf8::decode(&text[offset..]);
    let mut next_offset = offset + consumed;
    if next_offset >= len {
        return len;
    }

    let mut prev_cat = gcb_category(first_cp);
    let mut state = ScanState::new(first_cp, prev_cat);

    while next_offset < len {
        let (curr_cp, consumed) = utf8::decode(&text[next_offset..]);
        let curr_cat = gcb_category(curr_cp);

        if is_grapheme_break(prev_cat, curr_cat, curr_cp, &state) {
            return next_offset;
        }

        state.advance(curr_cp, curr_cat);
        prev_cat = curr_cat;
        next_offset += consumed;
    }

    len
}

/// Offset of the grapheme cluster boundary before `offset`.
///
/// Boundaries can only be found scanning forward, so this rewinds up to
/// [`GRAPHEME_MAX_BACKTRACK`] codepoints to an anchor and re-runs
/// [`next_grapheme`] from there, keeping the last boundary before `offset`.
/// The anchor itself counts as a boundary when nothing later is found.
/// Returns 0 at the start of `text`.
pub fn prev_grapheme(text: &[u8], offset: usize) -> usize {
    let offset = offset.min(text.len());
    if offset == 0 {
        return 0;
    }

    let prev_start = prev_char(text, offset);
    if prev_start == 0 {
        return 0;
    }

    let mut scan_start = prev_start;
    let mut remaining = GRAPHEME_MAX_BACKTRACK;
    while remaining > 0 && scan_start > 0 {
        let prev = prev_char(text, scan_start);
        if prev == scan_start {
            break;
        }
        scan_start = prev;
        remaining -= 1;
    }

    let bounded = &text[..offset];
    let mut grapheme_start = scan_start;
    let mut curr = scan_start;
    while curr < offset {
        let next = next_grapheme(bounded, curr);
        if next >= offset {
            break;
        }
        grapheme_start = next;
        curr = next;
    }
    grapheme_start
}

#[cfg(test)]
mod tests {
    use super::{next_char, next_grapheme, prev_char, prev_grapheme};

    const MIXED: &[u8] = "A\u{E9}\u{4E2D}".as_bytes();

    #[test]
    fn test_next_char() {
        assert_eq!(1, next_char(MIXED, 0));
        assert_eq!(3, next_char(MIXED, 1));
        assert_eq!(6, next_char(MIXED, 3));
        assert_eq!(6, next_char(MIXED, 6));
        assert_eq!(6, next_char(MIXED, 42));
        assert_eq!(0, next_char(b"", 0));
    }

    #[test]
    fn test_next_char_malformed() {
        // mid-sequence offsets resync one byte at a time
        assert_eq!(3, next_char(MIXED, 2));
        assert_eq!(5, next_char(MIXED, 4));
        // truncated sequence at the end
        assert_eq!(2, next_char(&[b'A', 0xE4, 0xB8], 1));
        // overlong sequence is skipped as a whole
        assert_eq!(3, next_char(&[b'A', 0xC0, 0x80], 1));
    }

    #[test]
    fn test_prev_char() {
        assert_eq!(3, prev_char(MIXED, 6));
        assert_eq!(1, prev_char(MIXED, 3));
        assert_eq!(0, prev_char(MIXED, 1));
        assert_eq!(0, prev_char(MIXED, 0));
        assert_eq!(3, prev_char(MIXED, 100));
        assert_eq!(0, prev_char(b"", 5));
    }

    #[test]
    fn test_prev_char_four_byte() {
        let text = "a\u{1F600}".as_bytes();
        assert_eq!(1, prev_char(text, 5));
        assert_eq!(0, prev_char(&text[1..], 4));
    }

    #[test]
    fn test_prev_char_bounded_scan() {
        let noise = [0x80u8; 10];
        assert_eq!(6, prev_char(&noise, 10));
        assert_eq!(0, prev_char(&noise, 3));
    }

    #[test]
    fn test_next_grapheme_combining() {
        let text = "e\u{301}x".as_bytes();
        assert_eq!(3, next_grapheme(text, 0));
        assert_eq!(4, next_grapheme(text, 3));
        assert_eq!(4, next_grapheme(text, 4));
    }

    #[test]
    fn test_next_grapheme_crlf() {
        let text = b"a\r\n\n";
        assert_eq!(1, next_grapheme(text, 0));
        assert_eq!(3, next_grapheme(text, 1));
        assert_eq!(4, next_grapheme(text, 3));
    }

    #[test]
    fn test_next_grapheme_flags() {
        // 🇨🇦🇺🇸 then a lone 🇫
        let text = "\u{1F1E8}\u{1F1E6}\u{1F1FA}\u{1F1F8}\u{1F1EB}".as_bytes();
        assert_eq!(8, next_grapheme(text, 0));
        assert_eq!(16, next_grapheme(text, 8));
        assert_eq!(20, next_grapheme(text, 16));
    }

    #[test]
    fn test_next_grapheme_family() {
        let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
        let text = format!("{}!", family);
        assert_eq!(family.len(), next_grapheme(text.as_bytes(), 0));
    }

    #[test]
    fn test_next_grapheme_malformed_progress() {
        let noise = [0xFFu8, 0x80, 0xC3, 0xE4, 0xB8];
        let mut offset = 0;
        let mut steps = 0;
        while offset < noise.len() {
            let next = next_grapheme(&noise, offset);
            assert!(next > offset);
            offset = next;
            steps += 1;
        }
        assert!(steps <= noise.len());
    }

    #[test]
    fn test_prev_grapheme() {
        let text = "ae\u{301}\u{1F1E8}\u{1F1E6}z".as_bytes();
        // a | e + acute | flag | z
        assert_eq!(12, prev_grapheme(text, 13));
        assert_eq!(4, prev_grapheme(text, 12));
        assert_eq!(1, prev_grapheme(text, 4));
        assert_eq!(0, prev_grapheme(text, 1));
        assert_eq!(0, prev_grapheme(text, 0));
        assert_eq!(12, prev_grapheme(text, 99));
    }

    #[test]
    fn test_prev_grapheme_inside_cluster() {
        // offset 2 sits between e and its combining mark
        let text = "ae\u{301}".as_bytes();
        assert_eq!(1, prev_grapheme(text, 2));
        assert_eq!(1, prev_grapheme(text, 4));
    }

    #[test]
    fn test_prev_grapheme_family() {
        let text = "x\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}".as_bytes();
        assert_eq!(1, prev_grapheme(text, text.len()));
    }

    #[test]
    fn test_prev_grapheme_backtrack_limit() {
        // a run of extenders longer than the rewind bound
        let mut text = String::from("ab");
        for _ in 0..200 {
            text.push('\u{301}');
        }
        let text = text.as_bytes();
        let anchor = prev_grapheme(text, text.len());
        assert!(anchor > 1);
        assert_eq!(text.len() - 2 * 129, anchor);
    }
}
