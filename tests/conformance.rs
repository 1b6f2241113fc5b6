use unicode_segmentation::UnicodeSegmentation;
use utf8cursor::{graphemes, next_grapheme, prev_grapheme};

/// Lines in the `GraphemeBreakTest.txt` notation: `÷` marks a boundary and
/// `×` marks a position where no boundary is allowed.
const BREAK_TESTS: &[&str] = &[
    // GB999 and GB9
    "÷ 0020 ÷ 0020 ÷",
    "÷ 0020 × 0308 ÷ 0020 ÷",
    "÷ 0061 × 0308 ÷ 0062 ÷",
    // GB3, GB4, GB5
    "÷ 000D × 000A ÷",
    "÷ 000D ÷ 000D ÷",
    "÷ 000A ÷ 000D ÷",
    "÷ 000A ÷ 0308 ÷",
    "÷ 0001 ÷ 0308 ÷",
    "÷ 0020 ÷ 000D ÷",
    "÷ 0020 ÷ 0001 ÷",
    // GB6, GB7, GB8
    "÷ 1100 × 1100 ÷",
    "÷ 1100 × 1160 ÷",
    "÷ 1100 × AC00 ÷",
    "÷ 1100 × AC01 ÷",
    "÷ AC00 × 1160 ÷",
    "÷ AC00 × 11A8 ÷",
    "÷ AC01 × 11A8 ÷",
    "÷ AC01 ÷ 1160 ÷",
    "÷ 1160 × 11A8 ÷",
    "÷ 11A8 × 11A8 ÷",
    "÷ 11A8 ÷ 1100 ÷",
    "÷ AC00 ÷ AC00 ÷",
    // GB9a, GB9b
    "÷ 0020 × 0903 ÷",
    "÷ 0600 × 0020 ÷",
    "÷ 0600 × 0308 ÷",
    "÷ 0600 ÷ 000D ÷",
    "÷ 0020 ÷ 0600 ÷",
    // GB9c
    "÷ 0915 × 094D × 0924 ÷",
    "÷ 0915 × 094D × 094D × 0924 ÷",
    "÷ 0915 × 0308 × 094D × 0924 ÷",
    "÷ 0915 × 094D × 200D × 0924 ÷",
    "÷ 0915 × 094D ÷ 0061 ÷",
    "÷ 0061 × 094D ÷ 0924 ÷",
    "÷ 0915 ÷ 0924 ÷",
    // GB11
    "÷ 1F476 × 1F3FF ÷ 1F476 ÷",
    "÷ 1F6D1 × 200D × 1F6D1 ÷",
    "÷ 0061 × 200D ÷ 1F6D1 ÷",
    "÷ 1F476 × 1F3FF × 0308 × 200D × 1F476 × 1F3FF ÷",
    "÷ 0020 × 200D ÷ 0646 ÷",
    "÷ 0646 × 200D ÷ 0020 ÷",
    // GB12, GB13
    "÷ 1F1E6 × 1F1E7 ÷ 1F1E8 ÷ 0062 ÷",
    "÷ 0061 ÷ 1F1E6 × 1F1E7 ÷ 1F1E8 × 1F1E9 ÷ 0062 ÷",
    "÷ 0061 ÷ 1F1E6 × 1F1E7 × 200D ÷ 1F1E8 ÷ 0062 ÷",
    "÷ 1F1E6 × 0308 ÷ 1F1E6 ÷",
];

struct BreakTest {
    text: String,
    boundaries: Vec<usize>,
}

fn parse_break_test(line: &str) -> BreakTest {
    let mut text = String::new();
    let mut boundaries = Vec::new();
    for token in line.split_whitespace() {
        match token {
            "÷" => {
                if !text.is_empty() {
                    boundaries.push(text.len());
                }
            }
            "×" => {}
            hex => {
                let cp = u32::from_str_radix(hex, 16).unwrap();
                text.push(char::from_u32(cp).unwrap());
            }
        }
    }
    BreakTest { text, boundaries }
}

fn forward_boundaries(text: &[u8]) -> Vec<usize> {
    let mut boundaries = Vec::new();
    let mut offset = 0;
    while offset < text.len() {
        offset = next_grapheme(text, offset);
        boundaries.push(offset);
    }
    boundaries
}

fn backward_boundaries(text: &[u8]) -> Vec<usize> {
    let mut boundaries = vec![text.len()];
    let mut offset = text.len();
    while offset > 0 {
        offset = prev_grapheme(text, offset);
        if offset > 0 {
            boundaries.push(offset);
        }
    }
    boundaries.reverse();
    boundaries
}

#[test]
fn test_break_test_lines() {
    for line in BREAK_TESTS {
        let test = parse_break_test(line);
        let text = test.text.as_bytes();
        assert_eq!(test.boundaries, forward_boundaries(text), "forward: {}", line);
        assert_eq!(test.boundaries, backward_boundaries(text), "backward: {}", line);
    }
}

#[test]
fn test_unicode_break_test_file() {
    let data = include_str!("GraphemeBreakTest.txt");
    let mut cases = 0;
    for raw in data.lines() {
        let line = match raw.find('#') {
            Some(comment) => &raw[..comment],
            None => raw,
        }
        .trim();
        if line.is_empty() {
            continue;
        }
        let test = parse_break_test(line);
        let text = test.text.as_bytes();
        assert_eq!(test.boundaries, forward_boundaries(text), "forward: {}", line);
        assert_eq!(test.boundaries, backward_boundaries(text), "backward: {}", line);
        assert_eq!(test.boundaries.len(), graphemes(text).count(), "{}", line);
        cases += 1;
    }
    assert_eq!(766, cases);
}

#[test]
fn test_break_test_parser() {
    let test = parse_break_test("÷ 0020 × 0308 ÷ 0020 ÷");
    assert_eq!(" \u{308} ", test.text);
    assert_eq!(vec![3, 4], test.boundaries);
    let test = parse_break_test("÷ 000D × 000A ÷");
    assert_eq!("\r\n", test.text);
    assert_eq!(vec![2], test.boundaries);
}

/// Texts whose codepoints have the same properties in both data sets.
const SAMPLES: &[&str] = &[
    "Hello, world!",
    "e\u{301}te\u{301} na\u{308}ive",
    "line one\r\nline two\n\rthree",
    "a\tb\u{7F}c\u{0}d",
    "\u{D55C}\u{AD6D}\u{C5B4} \u{1100}\u{1161}\u{11A8}\u{1100}",
    "\u{1F1FA}\u{1F1F8}\u{1F1E8}\u{1F1E6}\u{1F1EB}",
    "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466} family",
    "\u{1F44B}\u{1F3FD} hi \u{1F3F3}\u{FE0F}\u{200D}\u{1F308}",
    "\u{915}\u{94D}\u{937}\u{924}\u{94D}\u{930}\u{93F}\u{92F}",
    "\u{E01}\u{E33}\u{E01}",
    "\u{645}\u{631}\u{62D}\u{628}\u{627}",
    "\u{600}1 \u{4E2D}\u{6587}\u{5B57}",
];

#[test]
fn test_agrees_with_unicode_segmentation() {
    for sample in SAMPLES {
        let expected = sample
            .grapheme_indices(true)
            .map(|(start, cluster)| start + cluster.len())
            .collect::<Vec<_>>();
        let text = sample.as_bytes();
        assert_eq!(expected, forward_boundaries(text), "forward: {:?}", sample);
        assert_eq!(expected, backward_boundaries(text), "backward: {:?}", sample);

        let clusters = graphemes(text).collect::<Vec<_>>();
        let expected_clusters = sample
            .graphemes(true)
            .map(str::as_bytes)
            .collect::<Vec<_>>();
        assert_eq!(expected_clusters, clusters, "{:?}", sample);
    }
}
