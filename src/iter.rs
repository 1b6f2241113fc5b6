//! Iterators over the codepoints and grapheme clusters of a byte buffer.

use crate::{
    cursor::{next_char, next_grapheme},
    utf8, MAX_BYTES,
};
use core::{fmt, iter::FusedIterator};

/// Returns an iterator over the codepoints of `text` and their byte offsets.
pub fn codepoints(text: &[u8]) -> Codepoints<'_> {
    Codepoints {
        data: text,
        offset: 0,
    }
}

/// Returns an iterator over the grapheme clusters of `text`.
pub fn graphemes(text: &[u8]) -> Graphemes<'_> {
    Graphemes {
        data: text,
        offset: 0,
    }
}

/// An iterator over `(offset, codepoint)` pairs.
///
/// Malformed sequences come out as [`crate::REPLACEMENT_CHAR`].
#[derive(Clone, Copy)]
pub struct Codepoints<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Codepoints<'a> {
    /// Byte offset of the next codepoint to be yielded.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The part of the buffer not yet yielded.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.data[self.offset..]
    }
}

impl<'a> Iterator for Codepoints<'a> {
    type Item = (usize, u32);

    fn next(&mut self) -> Option<Self::Item> {
        match self.data[self.offset..] {
            [] => None,
            ref rest => {
                let start = self.offset;
                let (cp, _) = utf8::decode(rest);
                self.offset = next_char(self.data, start);
                Some((start, cp))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.offset;
        (remaining.div_ceil(MAX_BYTES), Some(remaining))
    }
}

impl FusedIterator for Codepoints<'_> {}

impl fmt::Debug for Codepoints<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codepoints(")?;
        f.debug_list()
            .entries((*self).map(|(_, cp)| DebugCodepoint(cp)))
            .finish()?;
        write!(f, ")")
    }
}

/// An iterator over grapheme clusters, each yielded as a byte slice.
#[derive(Clone, Copy)]
pub struct Graphemes<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Graphemes<'a> {
    /// Byte offset of the next cluster to be yielded.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The part of the buffer not yet yielded.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.data[self.offset..]
    }
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.offset;
        if start >= self.data.len() {
            return None;
        }
        let end = next_grapheme(self.data, start);
        self.offset = end;
        Some(&self.data[start..end])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.offset;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for Graphemes<'_> {}

impl fmt::Debug for Graphemes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graphemes(")?;
        f.debug_list()
            .entries((*self).map(DebugCluster))
            .finish()?;
        write!(f, ")")
    }
}

struct DebugCluster<'a>(&'a [u8]);

impl fmt::Debug for DebugCluster<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(codepoints(self.0).map(|(_, cp)| DebugCodepoint(cp)))
            .finish()
    }
}

struct DebugCodepoint(u32);

impl fmt::Debug for DebugCodepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}
