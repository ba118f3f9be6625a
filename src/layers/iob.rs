use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::layer::{Layer, Spanned};
use crate::projector::EventAnnotation;
use crate::span::CharSpan;

pub const WORD_EVENTS_LAYER: &str = "gold_word_events";
pub const WORD_EVENTS_W_CLASSES_LAYER: &str = "gold_word_events_w_classes";

pub const BEGIN_EVENT: &str = "B-EVENT";
pub const INSIDE_EVENT: &str = "I-EVENT";
pub const OUTSIDE: &str = "O";

/// An IOB tag on one tokenizer word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTag {
    pub span: CharSpan,
    pub tag: String,
}

impl Spanned for WordTag {
    fn span(&self) -> CharSpan {
        self.span
    }
}

/// Tag every word `B-EVENT`, `I-EVENT` or `O`.
///
/// The first word of each event id is `B-EVENT`; every later word of the same
/// id is `I-EVENT`, even when other words come in between.
pub fn word_events(words: &[CharSpan], events: &Layer<EventAnnotation>) -> Layer<WordTag> {
    let mut layer = Layer::new(WORD_EVENTS_LAYER, false);
    for (span, tagged) in tag_words(words, events) {
        let tag = match tagged {
            Some((begin, _)) => iob_prefix(begin).to_string(),
            None => OUTSIDE.to_string(),
        };
        layer.push(WordTag { span, tag });
    }
    layer
}

/// Like [`word_events`], with the event class appended: `B-EVENT_STATE`.
pub fn word_events_with_classes(
    words: &[CharSpan],
    events: &Layer<EventAnnotation>,
) -> Layer<WordTag> {
    let mut layer = Layer::new(WORD_EVENTS_W_CLASSES_LAYER, false);
    for (span, tagged) in tag_words(words, events) {
        let tag = match tagged {
            Some((begin, event)) => format!("{}_{}", iob_prefix(begin), event.event_class),
            None => OUTSIDE.to_string(),
        };
        layer.push(WordTag { span, tag });
    }
    layer
}

fn iob_prefix(begin: bool) -> &'static str {
    if begin {
        BEGIN_EVENT
    } else {
        INSIDE_EVENT
    }
}

/// Pairs each word with the event anchored exactly at it, if any, and
/// whether that is the first word seen for the event.
fn tag_words<'a>(
    words: &[CharSpan],
    events: &'a Layer<EventAnnotation>,
) -> Vec<(CharSpan, Option<(bool, &'a EventAnnotation)>)> {
    let index = events.span_index();
    let mut seen: HashSet<&str> = HashSet::new();

    words
        .iter()
        .map(|&span| {
            let tagged = index.get(&span).map(|&idx| {
                let event = &events[idx];
                (seen.insert(event.event_id.as_str()), event)
            });
            (span, tagged)
        })
        .collect()
}
