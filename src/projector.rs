//! Placing corpus event and timex annotations on the reconstructed text.
//!
//! Every corpus token has two candidate spans: the one its own length gives
//! in the reconstruction, and the tokenizer word found at the same sequential
//! position. The tokenizer word wins whenever the two overlap, so annotation
//! spans line up with the word layer downstream consumers use.

use std::collections::HashMap;

use layered_timeml_corpus::{AnnotationIndex, AnnotationRecord, LocationKey, Sentence, Token};
use serde::{Deserialize, Serialize};

use crate::annotation::{ParsedEvent, ParsedTimex};
use crate::errors::ProjectionError;
use crate::layer::{Layer, Spanned};
use crate::reconstruct::Reconstruction;
use crate::span::CharSpan;
use crate::vocabulary::{EventClass, TimexType};

pub const EVENTS_LAYER: &str = "gold_events";
pub const TIMEXES_LAYER: &str = "gold_timexes";

/// One event fragment, anchored at a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAnnotation {
    pub span: CharSpan,
    pub sentence_id: usize,
    pub word_id: usize,
    pub event_id: String,
    pub expression: String,
    pub raw_annotation: String,
    /// A closed-set class, or the raw second field when none could be found
    pub event_class: String,
}

impl EventAnnotation {
    pub fn class(&self) -> Option<EventClass> {
        EventClass::parse(&self.event_class)
    }
}

impl Spanned for EventAnnotation {
    fn span(&self) -> CharSpan {
        self.span
    }
}

/// One timex fragment, anchored at a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimexAnnotation {
    pub span: CharSpan,
    pub sentence_id: usize,
    pub word_id: usize,
    pub timex_id: String,
    pub expression: String,
    pub raw_annotation: String,
    #[serde(rename = "type")]
    pub timex_type: Option<TimexType>,
    pub value: Option<String>,
}

impl Spanned for TimexAnnotation {
    fn span(&self) -> CharSpan {
        self.span
    }
}

/// The base annotation layers of one document.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub events: Layer<EventAnnotation>,
    pub timexes: Layer<TimexAnnotation>,
}

/// Project event and timex records onto the reconstructed text.
///
/// `words` are the tokenizer's word spans over `reconstruction.text`.
/// Tokens are visited in corpus order and the tokenizer is walked in step,
/// one word per token, staying on the last word once it runs out.
pub fn project(
    sentences: &[Sentence],
    events: Option<&AnnotationIndex>,
    timexes: Option<&AnnotationIndex>,
    reconstruction: &Reconstruction,
    words: &[CharSpan],
) -> Result<Projection, ProjectionError> {
    let mut event_layer = Layer::new(EVENTS_LAYER, false);
    let mut timex_layer = Layer::new(TIMEXES_LAYER, true);
    let mut classes = ClassResolver::default();
    let mut last_timex: (Option<TimexType>, Option<String>) = (None, None);

    let last_word = words.len().saturating_sub(1);
    let mut pointer = 0;

    for token in sentences.iter().flatten() {
        let location = token.location();
        let corpus_span = reconstruction
            .span_of(&location)
            .ok_or(ProjectionError::MissingLocation { location })?;
        let span = reconcile(words.get(pointer).copied(), corpus_span);

        if let Some(record) = records_at(events, &location).first() {
            let parsed = ParsedEvent::parse(&record.annotation);
            let class = parsed.class.known();
            let continuation = parsed.is_continuation();
            let idx = event_layer.push(EventAnnotation {
                span,
                sentence_id: token.sentence_id,
                word_id: token.word_id,
                event_id: record.entity_id.clone(),
                expression: record.expression.clone(),
                raw_annotation: record.annotation.clone(),
                event_class: parsed.raw_class,
            });
            classes.visit(event_layer.as_mut_slice(), idx, class, continuation);
        } else {
            for record in records_at(timexes, &location) {
                let parsed = ParsedTimex::parse(&record.annotation);
                if !parsed.is_continuation() {
                    last_timex = (parsed.kind.known(), parsed.value);
                }
                timex_layer.push(timex_at(token, span, record, &last_timex));
            }
        }

        pointer = (pointer + 1).min(last_word);
    }

    classes.finish();
    Ok(Projection {
        events: event_layer,
        timexes: timex_layer,
    })
}

/// Fill in the class of multiword event fragments from their siblings.
///
/// A fragment without a closed-set class takes the class of the nearest
/// classified fragment of the same event, looking backward first and then
/// forward. Running it on an already propagated layer changes nothing.
pub fn propagate_event_classes(layer: &mut Layer<EventAnnotation>) {
    let mut classes = ClassResolver::default();
    let events = layer.as_mut_slice();
    for idx in 0..events.len() {
        let class = events[idx].class();
        let continuation =
            class.is_none() && ParsedEvent::parse(&events[idx].raw_annotation).multiword;
        classes.visit(events, idx, class, continuation);
    }
    classes.finish();
}

fn records_at<'a>(
    index: Option<&'a AnnotationIndex>,
    location: &LocationKey,
) -> &'a [AnnotationRecord] {
    index
        .and_then(|index| index.get(location))
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn timex_at(
    token: &Token,
    span: CharSpan,
    record: &AnnotationRecord,
    (timex_type, value): &(Option<TimexType>, Option<String>),
) -> TimexAnnotation {
    TimexAnnotation {
        span,
        sentence_id: token.sentence_id,
        word_id: token.word_id,
        timex_id: record.entity_id.clone(),
        expression: record.expression.clone(),
        raw_annotation: record.annotation.clone(),
        timex_type: *timex_type,
        value: value.clone(),
    }
}

/// Choose between the tokenizer word and the corpus span of one token.
pub(crate) fn reconcile(word: Option<CharSpan>, corpus: CharSpan) -> CharSpan {
    match word {
        Some(word) if word.touches(&corpus) => {
            if word != corpus {
                log::debug!("span {} corrected to tokenizer word {}", corpus, word);
            }
            word
        }
        _ => corpus,
    }
}

/// Per-event class bookkeeping for one pass over a layer.
#[derive(Debug, Default)]
struct ClassResolver {
    resolved: HashMap<String, EventClass>,
    /// Fragments still waiting for a class, by event id
    pending: HashMap<String, Vec<usize>>,
}

impl ClassResolver {
    /// `class` is the fragment's own closed-set class; `continuation` marks a
    /// multiword fragment that has none.
    fn visit(
        &mut self,
        events: &mut [EventAnnotation],
        idx: usize,
        class: Option<EventClass>,
        continuation: bool,
    ) {
        let event_id = events[idx].event_id.clone();

        if let Some(class) = class {
            if let Some(waiting) = self.pending.remove(&event_id) {
                for pending in waiting {
                    events[pending].event_class = class.as_str().to_string();
                }
            }
            self.resolved.insert(event_id, class);
        } else if continuation {
            match self.resolved.get(&event_id) {
                Some(class) => events[idx].event_class = class.as_str().to_string(),
                None => self.pending.entry(event_id).or_default().push(idx),
            }
        }
    }

    fn finish(self) {
        for (event_id, fragments) in self.pending {
            log::debug!(
                "event {} has {} fragment(s) without a class",
                event_id,
                fragments.len()
            );
        }
    }
}
