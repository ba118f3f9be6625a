//! Typed records for the corpus tables.

use serde::{Deserialize, Serialize};

/// Identifier the corpus uses for the document creation time when a relation
/// record has no explicit second entity.
pub const DCT_ENTITY_ID: &str = "t0";

/// Position of a token in the corpus: sentence index and word index within
/// that sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationKey {
    pub sentence: usize,
    pub word: usize,
}

impl LocationKey {
    pub fn new(sentence: usize, word: usize) -> Self {
        Self { sentence, word }
    }
}

impl std::fmt::Display for LocationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.sentence, self.word)
    }
}

/// One line of the base segmentation file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub sentence_id: usize,
    pub word_id: usize,
    /// Surface form of the word
    pub text: String,
    /// Morphological and syntactic analysis, kept verbatim
    pub morph_syntax: String,
    pub syntactic_id: String,
    pub syntactic_head_id: String,
}

impl Token {
    pub fn location(&self) -> LocationKey {
        LocationKey::new(self.sentence_id, self.word_id)
    }
}

/// A sentence is an ordered list of tokens.
pub type Sentence = Vec<Token>;

/// An event or timex annotation fragment attached to one token location.
///
/// Multiword entities are stored as one fragment per token, all sharing
/// `entity_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub entity_id: String,
    pub expression: String,
    /// Whitespace-delimited annotation fields, kept verbatim
    pub annotation: String,
}

impl AnnotationRecord {
    pub fn new(
        entity_id: impl Into<String>,
        expression: impl Into<String>,
        annotation: impl Into<String>,
    ) -> Self {
        Self {
            entity_id: entity_id.into(),
            expression: expression.into(),
            annotation: annotation.into(),
        }
    }
}

/// A temporal relation (TLINK) record between two entities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationRecord {
    pub entity_a: String,
    pub relation: String,
    pub entity_b: String,
    pub comment: String,
}

impl RelationRecord {
    pub fn new(
        entity_a: impl Into<String>,
        relation: impl Into<String>,
        entity_b: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            entity_a: entity_a.into(),
            relation: relation.into(),
            entity_b: entity_b.into(),
            comment: comment.into(),
        }
    }
}
