//! Rebuilding document text from corpus tokens.

use std::collections::HashMap;

use layered_timeml_corpus::{LocationKey, Token};

use crate::span::CharSpan;

/// Document text joined from corpus tokens, with the span of every token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconstruction {
    pub text: String,
    /// Corpus-declared span of each token, keyed by its location
    pub locations: HashMap<LocationKey, CharSpan>,
}

impl Reconstruction {
    pub fn span_of(&self, location: &LocationKey) -> Option<CharSpan> {
        self.locations.get(location).copied()
    }

    /// Length of the text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Join all tokens with single spaces, within and between sentences.
///
/// Empty sentences contribute nothing, not even a separator.
pub fn reconstruct<S: AsRef<[Token]>>(sentences: &[S]) -> Reconstruction {
    let mut text = String::new();
    let mut locations = HashMap::new();
    let mut offset = 0;
    let mut first = true;

    for token in sentences.iter().flat_map(|s| s.as_ref()) {
        if !first {
            text.push(' ');
            offset += 1;
        }
        first = false;
        let len = token.text.chars().count();
        text.push_str(&token.text);
        let span = CharSpan::new(offset, offset + len);
        if let Some(earlier) = locations.insert(token.location(), span) {
            log::warn!(
                "token {} appears twice, span {} replaced by {}",
                token.location(),
                earlier,
                span
            );
        }
        offset += len;
    }

    Reconstruction { text, locations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn token(sentence_id: usize, word_id: usize, text: &str) -> Token {
        Token {
            sentence_id,
            word_id,
            text: text.to_string(),
            morph_syntax: String::new(),
            syntactic_id: String::new(),
            syntactic_head_id: String::new(),
        }
    }

    fn sentences(words: &[&[&str]]) -> Vec<Vec<Token>> {
        words
            .iter()
            .enumerate()
            .map(|(s, sentence)| {
                sentence
                    .iter()
                    .enumerate()
                    .map(|(w, text)| token(s, w, text))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_join_sentences_with_single_space() {
        let rec = reconstruct(&sentences(&[&["Ta", "tuli", "koju", "."], &["Hea", "!"]]));
        assert_eq!(rec.text, "Ta tuli koju . Hea !");
        assert_eq!(rec.span_of(&LocationKey::new(0, 0)), Some(CharSpan::new(0, 2)));
        assert_eq!(rec.span_of(&LocationKey::new(0, 3)), Some(CharSpan::new(13, 14)));
        assert_eq!(rec.span_of(&LocationKey::new(1, 0)), Some(CharSpan::new(15, 18)));
        assert_eq!(rec.span_of(&LocationKey::new(2, 0)), None);
    }

    #[test]
    fn test_empty_sentences_are_skipped() {
        let rec = reconstruct(&sentences(&[&[], &["Jah"], &[], &["Ei"]]));
        assert_eq!(rec.text, "Jah Ei");
        assert_eq!(rec.span_of(&LocationKey::new(3, 0)), Some(CharSpan::new(4, 6)));
    }

    #[test]
    fn test_empty_document() {
        let rec = reconstruct::<Vec<Token>>(&[]);
        assert_eq!(rec.text, "");
        assert!(rec.locations.is_empty());
    }

    #[test]
    fn test_repeated_location_keeps_later_token() {
        let sents = vec![vec![token(0, 0, "Ta"), token(0, 1, "tuli"), token(0, 1, "koju")]];
        let rec = reconstruct(&sents);
        assert_eq!(rec.text, "Ta tuli koju");
        assert_eq!(rec.locations.len(), 2);
        assert_eq!(rec.span_of(&LocationKey::new(0, 1)), Some(CharSpan::new(8, 12)));
    }

    #[test]
    fn test_offsets_count_characters() {
        let rec = reconstruct(&sentences(&[&["Öösel", "läks"]]));
        let span = rec.span_of(&LocationKey::new(0, 1)).unwrap();
        assert_eq!(span, CharSpan::new(6, 10));
        assert_eq!(span.slice(&rec.text), Some("läks"));
    }

    proptest! {
        #[test]
        fn prop_length_is_tokens_plus_separators(
            words in proptest::collection::vec(
                proptest::collection::vec("[a-zA-Zõäöü0-9.,]{1,8}", 0..6),
                0..5,
            )
        ) {
            let sents: Vec<Vec<Token>> = words
                .iter()
                .enumerate()
                .map(|(s, sentence)| {
                    sentence.iter().enumerate().map(|(w, t)| token(s, w, t)).collect()
                })
                .collect();
            let rec = reconstruct(&sents);

            let count: usize = sents.iter().map(Vec::len).sum();
            let token_chars: usize = sents.iter().flatten().map(|t| t.text.chars().count()).sum();
            prop_assert_eq!(rec.char_len(), token_chars + count.saturating_sub(1));

            for token in sents.iter().flatten() {
                let span = rec.span_of(&token.location()).unwrap();
                prop_assert!(!span.is_empty());
                prop_assert!(span.end <= rec.char_len());
                prop_assert_eq!(span.slice(&rec.text), Some(token.text.as_str()));
            }
        }
    }
}
