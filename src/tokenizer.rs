//! Word tokenizers run over the reconstructed document text.
//!
//! The projector compares the word spans a tokenizer finds with the spans
//! the corpus declares, so the tokenizer sits behind a trait and can be
//! swapped for whatever segmenter produced the reference words.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::span::CharSpan;

/// Splits text into word spans, in text order.
pub trait Tokenizer: Send + Sync {
    fn words(&self, text: &str) -> Vec<CharSpan>;
}

/// Words by Unicode word boundaries (UAX #29), skipping whitespace.
///
/// Punctuation becomes its own word; numbers such as `12.03.2010` stay whole.
/// Segments joined by `-`, `'` or `%` without whitespace are merged back into
/// one word, so case forms like `NATO-ga` and amounts like `50%` stay whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

const JOINERS: [char; 3] = ['-', '\'', '%'];

fn is_joiner(segment: &str) -> bool {
    let mut chars = segment.chars();
    matches!((chars.next(), chars.next()), (Some(ch), None) if JOINERS.contains(&ch))
}

fn is_wordlike(segment: &str) -> bool {
    segment.chars().next().map_or(false, char::is_alphanumeric)
}

/// Whether `segment` continues the word that ended with `previous`.
fn joins(previous: &str, segment: &str) -> bool {
    if is_joiner(segment) {
        is_wordlike(previous) || previous == "%"
    } else {
        is_wordlike(segment) && (previous == "-" || previous == "'")
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn words(&self, text: &str) -> Vec<CharSpan> {
        let mut words: Vec<CharSpan> = Vec::new();
        let mut previous: Option<&str> = None;
        let mut offset = 0;
        for segment in text.split_word_bounds() {
            let len = segment.chars().count();
            let span = CharSpan::new(offset, offset + len);
            offset += len;

            if segment.trim().is_empty() {
                previous = None;
                continue;
            }
            let joined = match (words.last_mut(), previous) {
                (Some(last), Some(prev)) if last.end == span.start && joins(prev, segment) => {
                    last.end = span.end;
                    true
                }
                _ => false,
            };
            if !joined {
                words.push(span);
            }
            previous = Some(segment);
        }
        words
    }
}

/// Words are maximal runs of non-whitespace characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn words(&self, text: &str) -> Vec<CharSpan> {
        let mut words = Vec::new();
        let mut start = None;
        let mut offset = 0;
        for ch in text.chars() {
            match (ch.is_whitespace(), start) {
                (true, Some(s)) => {
                    words.push(CharSpan::new(s, offset));
                    start = None;
                }
                (false, None) => start = Some(offset),
                _ => {}
            }
            offset += 1;
        }
        if let Some(s) = start {
            words.push(CharSpan::new(s, offset));
        }
        words
    }
}

/// Tokenizer selection for configuration files and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerKind {
    #[default]
    Unicode,
    Whitespace,
}

impl TokenizerKind {
    pub fn build(self) -> Box<dyn Tokenizer> {
        match self {
            TokenizerKind::Unicode => Box::new(UnicodeWordTokenizer),
            TokenizerKind::Whitespace => Box::new(WhitespaceTokenizer),
        }
    }
}

impl std::str::FromStr for TokenizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unicode" => Ok(TokenizerKind::Unicode),
            "whitespace" => Ok(TokenizerKind::Whitespace),
            other => Err(format!("unknown tokenizer '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str, words: &[CharSpan]) -> Vec<String> {
        words
            .iter()
            .map(|w| w.slice(text).unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn test_unicode_words_split_punctuation() {
        let text = "Ta tuli koju, 12.03.2010 õhtul.";
        let words = UnicodeWordTokenizer.words(text);
        assert_eq!(
            texts(text, &words),
            vec!["Ta", "tuli", "koju", ",", "12.03.2010", "õhtul", "."]
        );
        assert_eq!(words[5], CharSpan::new(25, 30));
    }

    #[test]
    fn test_unicode_words_keep_joined_forms() {
        let text = "Eesti liitus NATO-ga ja USA-s, 50%-l 1990-2000 - koju.";
        let words = UnicodeWordTokenizer.words(text);
        assert_eq!(
            texts(text, &words),
            vec![
                "Eesti", "liitus", "NATO-ga", "ja", "USA-s", ",", "50%-l", "1990-2000", "-",
                "koju", ".",
            ]
        );
        assert_eq!(words[2], CharSpan::new(13, 20));
    }

    #[test]
    fn test_whitespace_words() {
        let text = " Ta  tuli koju, ";
        let words = WhitespaceTokenizer.words(text);
        assert_eq!(texts(text, &words), vec!["Ta", "tuli", "koju,"]);
        assert_eq!(words[0], CharSpan::new(1, 3));
    }

    #[test]
    fn test_empty_text() {
        assert!(UnicodeWordTokenizer.words("").is_empty());
        assert!(WhitespaceTokenizer.words("").is_empty());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("whitespace".parse::<TokenizerKind>(), Ok(TokenizerKind::Whitespace));
        assert!("spacy".parse::<TokenizerKind>().is_err());
    }
}
