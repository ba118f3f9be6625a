//! Character spans within a reconstructed document.

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` range of character offsets into the document
/// text.
///
/// Offsets count Unicode scalar values, not bytes; use [`CharSpan::slice`] to
/// get the covered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharSpan {
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl CharSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if either span's start lies within the other, endpoints
    /// included.
    ///
    /// Spans that merely share a boundary (`(0, 4)` and `(4, 8)`) count as
    /// touching.
    pub fn touches(&self, other: &CharSpan) -> bool {
        (other.start <= self.start && self.start <= other.end)
            || (self.start <= other.start && other.start <= self.end)
    }

    /// Returns the covered text, or `None` if the span lies outside `text`.
    pub fn slice<'t>(&self, text: &'t str) -> Option<&'t str> {
        if self.start > self.end {
            return None;
        }
        let start = byte_offset(text, self.start)?;
        let end = byte_offset(text, self.end)?;
        text.get(start..end)
    }
}

impl std::fmt::Display for CharSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

fn byte_offset(text: &str, char_offset: usize) -> Option<usize> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .nth(char_offset)
}

/// An ordered set of spans enveloping one phrase.
///
/// Members are sorted and de-duplicated; they need not be contiguous, so a
/// phrase whose words are interrupted by other words keeps the gap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpanSet {
    spans: Vec<CharSpan>,
}

impl SpanSet {
    pub fn from_spans(spans: impl IntoIterator<Item = CharSpan>) -> Self {
        let mut spans: Vec<CharSpan> = spans.into_iter().collect();
        spans.sort();
        spans.dedup();
        Self { spans }
    }

    pub fn spans(&self) -> &[CharSpan] {
        &self.spans
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Smallest single span covering every member.
    pub fn hull(&self) -> Option<CharSpan> {
        let first = self.spans.first()?;
        let end = self.spans.iter().map(|s| s.end).max().unwrap_or(first.end);
        Some(CharSpan::new(first.start, end))
    }

    pub fn contains(&self, span: &CharSpan) -> bool {
        self.spans.binary_search(span).is_ok()
    }
}
