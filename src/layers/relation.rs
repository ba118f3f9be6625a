use std::collections::{BTreeMap, HashMap, HashSet};

use layered_timeml_corpus::{RelationRecord, DCT_ENTITY_ID};
use serde::{Deserialize, Serialize};

use crate::layer::Layer;
use crate::layers::phrase::{phrase_index, EventPhrase, Phrase, TimexPhrase};
use crate::span::SpanSet;
use crate::vocabulary::RelationType;

pub const EVENT_TIMEX_LAYER: &str = "event_timex_tlinks";
pub const EVENT_DCT_LAYER: &str = "event_dct_tlinks";
pub const EVENT_EVENT_LAYER: &str = "event_event_tlinks";

/// Metadata key holding the document creation time.
pub const DCT_META_KEY: &str = "dct";

/// A temporal link whose first argument is always an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalLink {
    pub a_id: String,
    pub rel_type: RelationType,
    pub b_id: String,
    pub comment: String,
    pub a_spans: SpanSet,
    /// `None` when the second argument is the document creation time
    pub b_spans: Option<SpanSet>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationLayer {
    pub name: String,
    pub links: Vec<TemporalLink>,
    #[serde(default)]
    pub meta: BTreeMap<String, String>,
}

impl RelationLayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            links: Vec::new(),
            meta: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn dct(&self) -> Option<&str> {
        self.meta.get(DCT_META_KEY).map(String::as_str)
    }
}

/// Where the non-event argument of a link has to be found.
enum Target<'a> {
    Timexes(HashMap<&'a str, &'a TimexPhrase>),
    Events,
    Dct,
}

/// Links between events and time expressions.
pub fn event_timex_links(
    records: &[RelationRecord],
    events: &Layer<EventPhrase>,
    timexes: &Layer<TimexPhrase>,
) -> RelationLayer {
    build(
        EVENT_TIMEX_LAYER,
        records,
        events,
        Target::Timexes(phrase_index(timexes)),
    )
}

/// Links between events and the document creation time.
pub fn event_dct_links(
    records: &[RelationRecord],
    events: &Layer<EventPhrase>,
    dct: Option<&str>,
) -> RelationLayer {
    let mut layer = build(EVENT_DCT_LAYER, records, events, Target::Dct);
    if let Some(dct) = dct {
        layer.meta.insert(DCT_META_KEY.to_string(), dct.to_string());
    }
    layer
}

/// Links between pairs of events.
pub fn event_event_links(records: &[RelationRecord], events: &Layer<EventPhrase>) -> RelationLayer {
    build(EVENT_EVENT_LAYER, records, events, Target::Events)
}

fn build(
    name: &str,
    records: &[RelationRecord],
    events: &Layer<EventPhrase>,
    target: Target<'_>,
) -> RelationLayer {
    let events = phrase_index(events);
    let mut layer = RelationLayer::new(name);
    let mut seen: HashSet<(&str, &str)> = HashSet::new();

    for record in records {
        let (event, rel_type, b_id) = match orient(record, &events) {
            Some(oriented) => oriented,
            None => {
                log::debug!(
                    "{}: dropping {} {} {}, no event argument",
                    name,
                    record.entity_a,
                    record.relation,
                    record.entity_b
                );
                continue;
            }
        };

        let b_spans = match &target {
            Target::Timexes(timexes) => timexes.get(b_id).map(|t| Some(t.spans().clone())),
            Target::Events => events.get(b_id).map(|e| Some(e.spans().clone())),
            Target::Dct => (b_id == DCT_ENTITY_ID).then_some(None),
        };
        let b_spans = match b_spans {
            Some(b_spans) => b_spans,
            None => {
                log::debug!(
                    "{}: dropping link {} -> {}, unknown argument",
                    name,
                    event.event_id,
                    b_id
                );
                continue;
            }
        };

        if !seen.insert((event.event_id.as_str(), b_id)) {
            log::debug!("{}: duplicate link {} -> {}", name, event.event_id, b_id);
            continue;
        }

        layer.links.push(TemporalLink {
            a_id: event.event_id.clone(),
            rel_type,
            b_id: b_id.to_string(),
            comment: record.comment.clone(),
            a_spans: event.spans().clone(),
            b_spans,
        });
    }
    layer
}

/// Puts the event argument first, inverting the relation when the record has
/// it second.
fn orient<'r, 'e>(
    record: &'r RelationRecord,
    events: &HashMap<&str, &'e EventPhrase>,
) -> Option<(&'e EventPhrase, RelationType, &'r str)> {
    let rel_type = RelationType::parse(&record.relation);
    if let Some(&event) = events.get(record.entity_a.as_str()) {
        Some((event, rel_type, record.entity_b.as_str()))
    } else if let Some(&event) = events.get(record.entity_b.as_str()) {
        Some((event, rel_type.inverse(), record.entity_a.as_str()))
    } else {
        None
    }
}
