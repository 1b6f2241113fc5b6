use utf8cursor::{
    char_width, codepoint_count, codepoint_width, codepoints, decode, encode, encoded_len,
    gcb_category, grapheme_category, is_valid, next_char, next_grapheme, prev_char, prev_grapheme,
    string_width, truncate, validate, GraphemeCat, MAX_BYTES, REPLACEMENT_CHAR,
};

const ALL_CODEPOINTS: core::ops::RangeInclusive<u32> = 0..=0x10FFFF;

/// Small xorshift generator, deterministic across runs.
struct Noise(u64);

impl Noise {
    fn next_u64(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn bytes(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| self.next_u64() as u8).collect()
    }

    /// Bytes biased towards UTF-8 lead and continuation bytes.
    fn utf8ish_bytes(&mut self, len: usize) -> Vec<u8> {
        const PICKS: &[u8] = &[
            b'a', b' ', b'\r', b'\n', 0x80, 0xBF, 0xC2, 0xC3, 0xCC, 0xE0, 0xE1, 0xED, 0xEF, 0xF0,
            0xF4, 0xF5, 0xFF, 0x9F, 0xA0, 0x81, 0x87, 0x8D, 0xB8,
        ];
        (0..len)
            .map(|_| PICKS[(self.next_u64() % PICKS.len() as u64) as usize])
            .collect()
    }
}

fn noise_buffers() -> Vec<Vec<u8>> {
    let mut noise = Noise(0x9E37_79B9_7F4A_7C15);
    let mut buffers = Vec::new();
    for len in [0, 1, 2, 3, 4, 5, 7, 16, 64, 300] {
        for _ in 0..20 {
            buffers.push(noise.bytes(len));
            buffers.push(noise.utf8ish_bytes(len));
        }
    }
    buffers
}

const SAMPLES: &[&str] = &[
    "",
    "Hello, world!",
    "A\u{E9}\u{4E2D}\u{1F600}",
    "e\u{301}te\u{301}\r\n\u{D55C}\u{AD6D}\u{C5B4}",
    "\u{1F1FA}\u{1F1F8}\u{1F1E8}\u{1F1E6}\u{1F1EB}",
    "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}!",
    "\u{915}\u{94D}\u{937} \u{600}1\t\u{AD}x\u{200B}y",
    "\u{FF21}\u{FF22}\u{3042}\u{FE0F}\u{2764}\u{FE0F}",
];

#[test]
fn test_encode_decode_every_scalar_value() {
    let mut buf = [0u8; MAX_BYTES];
    for code in ALL_CODEPOINTS {
        let ch = match char::from_u32(code) {
            Some(ch) => ch,
            None => continue,
        };
        let len = encode(code, &mut buf);
        assert_eq!(ch.len_utf8(), len, "U+{:04X}", code);
        assert_eq!(len, encoded_len(code));
        let mut expected = [0u8; 4];
        assert_eq!(ch.encode_utf8(&mut expected).as_bytes(), &buf[..len]);
        assert_eq!((code, len), decode(&buf[..len]));
    }
}

#[test]
fn test_encode_rejects_unencodable() {
    let mut buf = [0xAAu8; MAX_BYTES];
    for code in (0xD800..=0xDFFF).chain([0x110000, 0x1F_FFFF, u32::MAX]) {
        assert_eq!(0, encode(code, &mut buf), "U+{:04X}", code);
        assert_eq!(0, encoded_len(code));
        assert_eq!([0xAA; MAX_BYTES], buf);
    }
}

#[test]
fn test_decode_every_three_byte_sequence() {
    for lead in 0xE0u8..=0xEF {
        for b1 in 0u8..=0xFF {
            for b2 in 0u8..=0xFF {
                let bytes = [lead, b1, b2];
                let (cp, consumed) = decode(&bytes);
                match core::str::from_utf8(&bytes) {
                    Ok(s) => {
                        let ch = s.chars().next().unwrap();
                        assert_eq!((ch as u32, 3), (cp, consumed), "{:02X?}", bytes);
                    }
                    Err(_) => {
                        assert_eq!(REPLACEMENT_CHAR, cp, "{:02X?}", bytes);
                        let structural = (b1 & 0xC0) == 0x80 && (b2 & 0xC0) == 0x80;
                        let expected = if structural { 3 } else { 1 };
                        assert_eq!(expected, consumed, "{:02X?}", bytes);
                    }
                }
            }
        }
    }
}

#[test]
fn test_validate_agrees_with_core_str() {
    for buf in noise_buffers() {
        match (core::str::from_utf8(&buf), validate(&buf)) {
            (Ok(_), Ok(())) => {}
            (Err(expected), Err(actual)) => {
                assert_eq!(expected.valid_up_to(), actual.valid_up_to(), "{:02X?}", buf);
            }
            (expected, actual) => panic!("{:02X?}: {:?} vs {:?}", buf, expected, actual),
        }
    }
}

#[test]
fn test_decode_always_consumes() {
    for buf in noise_buffers() {
        for offset in 0..buf.len() {
            let (cp, consumed) = decode(&buf[offset..]);
            assert!((1..=MAX_BYTES).contains(&consumed));
            assert!(offset + consumed <= buf.len());
            assert!(cp <= 0x10FFFF);
            assert!(!(0xD800..=0xDFFF).contains(&cp));
        }
    }
}

#[test]
fn test_cursor_progress_on_noise() {
    for buf in noise_buffers() {
        let len = buf.len();
        for offset in 0..=len + 2 {
            let next = next_char(&buf, offset);
            let prev = prev_char(&buf, offset);
            let next_g = next_grapheme(&buf, offset);
            let prev_g = prev_grapheme(&buf, offset);
            assert!(next <= len && prev <= len && next_g <= len && prev_g <= len);
            if offset < len {
                assert!(next > offset);
                assert!(next_g > offset);
            } else {
                assert_eq!(len, next);
                assert_eq!(len, next_g);
            }
            if offset > 0 {
                assert!(prev < offset.min(len) || len == 0);
                assert!(prev_g < offset.min(len) || len == 0);
                assert!(offset.min(len) - prev <= MAX_BYTES);
            } else {
                assert_eq!(0, prev);
                assert_eq!(0, prev_g);
            }
        }
        assert!(codepoint_count(&buf) <= len);
    }
}

#[test]
fn test_next_char_matches_char_indices() {
    for sample in SAMPLES {
        let text = sample.as_bytes();
        let mut starts = sample.char_indices().map(|(i, _)| i).collect::<Vec<_>>();
        starts.push(text.len());
        for pair in starts.windows(2) {
            assert_eq!(pair[1], next_char(text, pair[0]));
            assert_eq!(pair[0], prev_char(text, pair[1]));
        }
        assert_eq!(sample.chars().count(), codepoint_count(text));
        assert!(is_valid(text));
    }
}

#[test]
fn test_prev_grapheme_inverts_next_grapheme() {
    for sample in SAMPLES {
        let text = sample.as_bytes();
        let mut offset = 0;
        while offset < text.len() {
            let next = next_grapheme(text, offset);
            assert_eq!(offset, prev_grapheme(text, next), "{:?} at {}", sample, next);
            offset = next;
        }
    }
}

#[test]
fn test_grapheme_boundaries_are_char_boundaries() {
    for sample in SAMPLES {
        let text = sample.as_bytes();
        let mut offset = 0;
        while offset < text.len() {
            offset = next_grapheme(text, offset);
            assert!(sample.is_char_boundary(offset));
        }
    }
}

#[test]
fn test_width_range_every_codepoint() {
    for code in ALL_CODEPOINTS {
        let width = codepoint_width(code);
        assert!((-1..=2).contains(&width), "U+{:04X}", code);
    }
    assert_eq!(1, codepoint_width(0x110000));
}

#[test]
fn test_char_width_matches_codepoint_width() {
    for sample in SAMPLES {
        for (offset, ch) in sample.char_indices() {
            assert_eq!(
                codepoint_width(ch as u32),
                char_width(sample.as_bytes(), offset)
            );
        }
    }
}

#[test]
fn test_string_width_is_additive() {
    for a in SAMPLES {
        for b in SAMPLES {
            let joined = format!("{}{}", a, b);
            assert_eq!(
                string_width(a.as_bytes()) + string_width(b.as_bytes()),
                string_width(joined.as_bytes())
            );
        }
    }
}

#[test]
fn test_string_width_sums_codepoint_widths() {
    let samples = SAMPLES.iter().map(|s| s.as_bytes().to_vec());
    for buf in samples.chain(noise_buffers()) {
        let expected = codepoints(&buf)
            .map(|(_, cp)| codepoint_width(cp).max(0) as usize)
            .sum::<usize>();
        assert_eq!(expected, string_width(&buf), "{:02X?}", buf);
    }
}

#[test]
fn test_truncate_boundary() {
    for sample in SAMPLES {
        let text = sample.as_bytes();
        let total = string_width(text);
        for max_cols in 0..=total + 2 {
            let end = truncate(text, max_cols);
            assert!(sample.is_char_boundary(end));
            assert!(string_width(&text[..end]) <= max_cols);
            if end < text.len() {
                // the next codepoint would not have fit
                let next = next_char(text, end);
                assert!(string_width(&text[..next]) > max_cols);
            } else {
                assert!(total <= max_cols);
            }
        }
    }
}

#[test]
fn test_category_lookup_every_codepoint() {
    for code in ALL_CODEPOINTS {
        let (lo, hi, cat) = grapheme_category(code);
        assert!(lo <= code && code <= hi, "U+{:04X}", code);
        if (0xAC00..=0xD7A3).contains(&code) {
            assert_eq!(GraphemeCat::GC_Other, cat);
            assert!(matches!(
                gcb_category(code),
                GraphemeCat::GC_LV | GraphemeCat::GC_LVT
            ));
        } else {
            assert_eq!(cat, gcb_category(code));
        }
    }
}
