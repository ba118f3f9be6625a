use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::layer::Layer;
use crate::projector::{EventAnnotation, TimexAnnotation};
use crate::span::{CharSpan, SpanSet};
use crate::vocabulary::TimexType;

pub const EVENT_PHRASES_LAYER: &str = "gold_event_phrases";
pub const TIMEX_PHRASES_LAYER: &str = "gold_timex_phrases";

/// A whole entity, gathered from its per-word fragments.
pub trait Phrase {
    fn entity_id(&self) -> &str;
    fn spans(&self) -> &SpanSet;
}

/// All fragments of one event, with the attributes of its first fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPhrase {
    pub spans: SpanSet,
    pub sentence_id: usize,
    pub word_id: usize,
    pub event_id: String,
    pub expression: String,
    pub raw_annotation: String,
    pub event_class: String,
}

impl Phrase for EventPhrase {
    fn entity_id(&self) -> &str {
        &self.event_id
    }

    fn spans(&self) -> &SpanSet {
        &self.spans
    }
}

/// All fragments of one timex, with the attributes of its first fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimexPhrase {
    pub spans: SpanSet,
    pub sentence_id: usize,
    pub word_id: usize,
    pub timex_id: String,
    pub expression: String,
    pub raw_annotation: String,
    #[serde(rename = "type")]
    pub timex_type: Option<TimexType>,
    pub value: Option<String>,
}

impl Phrase for TimexPhrase {
    fn entity_id(&self) -> &str {
        &self.timex_id
    }

    fn spans(&self) -> &SpanSet {
        &self.spans
    }
}

pub fn event_phrases(events: &Layer<EventAnnotation>) -> Layer<EventPhrase> {
    let mut layer = Layer::new(EVENT_PHRASES_LAYER, false);
    for (first, spans) in group_by_entity(events.iter(), |e| (&e.event_id, e.span)) {
        layer.push(EventPhrase {
            spans,
            sentence_id: first.sentence_id,
            word_id: first.word_id,
            event_id: first.event_id.clone(),
            expression: first.expression.clone(),
            raw_annotation: first.raw_annotation.clone(),
            event_class: first.event_class.clone(),
        });
    }
    layer
}

pub fn timex_phrases(timexes: &Layer<TimexAnnotation>) -> Layer<TimexPhrase> {
    let mut layer = Layer::new(TIMEX_PHRASES_LAYER, true);
    for (first, spans) in group_by_entity(timexes.iter(), |t| (&t.timex_id, t.span)) {
        layer.push(TimexPhrase {
            spans,
            sentence_id: first.sentence_id,
            word_id: first.word_id,
            timex_id: first.timex_id.clone(),
            expression: first.expression.clone(),
            raw_annotation: first.raw_annotation.clone(),
            timex_type: first.timex_type,
            value: first.value.clone(),
        });
    }
    layer
}

/// Look up phrases by entity id.
pub fn phrase_index<P: Phrase>(phrases: &Layer<P>) -> HashMap<&str, &P> {
    phrases.iter().map(|p| (p.entity_id(), p)).collect()
}

/// Groups items by entity id in order of first appearance, returning the
/// first item of each group with the envelope of all its spans.
fn group_by_entity<'a, T: 'a>(
    items: impl Iterator<Item = &'a T>,
    key: impl Fn(&'a T) -> (&'a String, CharSpan),
) -> Vec<(&'a T, SpanSet)> {
    let mut order: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&T, Vec<CharSpan>)> = Vec::new();

    for item in items {
        let (id, span) = key(item);
        match order.get(id.as_str()) {
            Some(&idx) => groups[idx].1.push(span),
            None => {
                order.insert(id.as_str(), groups.len());
                groups.push((item, vec![span]));
            }
        }
    }

    groups
        .into_iter()
        .map(|(first, spans)| (first, SpanSet::from_spans(spans)))
        .collect()
}
