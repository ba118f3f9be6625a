//! The annotated document and the conversion pipeline.

use layered_timeml_corpus::{Corpus, CorpusDocument};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::layer::Layer;
use crate::layers::{
    event_dct_links, event_event_links, event_phrases, event_timex_links, timex_phrases,
    word_events, word_events_with_classes, EventPhrase, RelationLayer, TimexPhrase, WordTag,
};
use crate::projector::{project, EventAnnotation, TimexAnnotation};
use crate::reconstruct::reconstruct;
use crate::span::CharSpan;
use crate::tokenizer::Tokenizer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub filename: String,
    /// Document creation time, as written in the corpus
    pub dct: Option<String>,
}

/// One corpus document with every annotation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedDocument {
    pub text: String,
    pub meta: DocumentMeta,
    /// Tokenizer word spans over `text`
    pub words: Vec<CharSpan>,
    pub gold_events: Layer<EventAnnotation>,
    pub gold_timexes: Layer<TimexAnnotation>,
    pub gold_word_events: Layer<WordTag>,
    pub gold_word_events_w_classes: Layer<WordTag>,
    pub gold_event_phrases: Layer<EventPhrase>,
    pub gold_timex_phrases: Layer<TimexPhrase>,
    pub event_timex_tlinks: RelationLayer,
    pub event_dct_tlinks: RelationLayer,
    pub event_event_tlinks: RelationLayer,
}

impl AnnotatedDocument {
    /// Reconstruct, tokenize and annotate one corpus document.
    pub fn build(source: &CorpusDocument<'_>, tokenizer: &dyn Tokenizer) -> Result<Self> {
        let reconstruction = reconstruct(source.sentences);
        let words = tokenizer.words(&reconstruction.text);

        let projection = project(
            source.sentences,
            source.events,
            source.timexes,
            &reconstruction,
            &words,
        )
        .map_err(|source_err| Error::Projection {
            filename: source.filename.to_string(),
            source: source_err,
        })?;

        let gold_word_events = word_events(&words, &projection.events);
        let gold_word_events_w_classes = word_events_with_classes(&words, &projection.events);
        let gold_event_phrases = event_phrases(&projection.events);
        let gold_timex_phrases = timex_phrases(&projection.timexes);

        if source.dct.is_none() {
            log::warn!("{}: no document creation time", source.filename);
        }
        let event_timex_tlinks = event_timex_links(
            source.event_timex_relations,
            &gold_event_phrases,
            &gold_timex_phrases,
        );
        let event_dct_tlinks =
            event_dct_links(source.event_dct_relations, &gold_event_phrases, source.dct);
        let event_event_tlinks =
            event_event_links(source.event_event_relations, &gold_event_phrases);

        Ok(Self {
            text: reconstruction.text,
            meta: DocumentMeta {
                filename: source.filename.to_string(),
                dct: source.dct.map(str::to_string),
            },
            words,
            gold_events: projection.events,
            gold_timexes: projection.timexes,
            gold_word_events,
            gold_word_events_w_classes,
            gold_event_phrases,
            gold_timex_phrases,
            event_timex_tlinks,
            event_dct_tlinks,
            event_event_tlinks,
        })
    }

    pub fn filename(&self) -> &str {
        &self.meta.filename
    }

    /// Text covered by `span`.
    pub fn span_text(&self, span: CharSpan) -> Option<&str> {
        span.slice(&self.text)
    }
}

/// Convert every document of the corpus, in file name order.
///
/// Documents are built lazily, one per call to `next`.
pub fn convert_corpus<'a>(
    corpus: &'a Corpus,
    tokenizer: &'a dyn Tokenizer,
) -> impl Iterator<Item = Result<AnnotatedDocument>> + 'a {
    corpus.documents().map(move |source| {
        let doc = AnnotatedDocument::build(&source, tokenizer)?;
        log::info!(
            "{}: {} events, {} timexes, {} tlinks",
            doc.filename(),
            doc.gold_event_phrases.len(),
            doc.gold_timex_phrases.len(),
            doc.event_timex_tlinks.len() + doc.event_dct_tlinks.len() + doc.event_event_tlinks.len()
        );
        Ok(doc)
    })
}
