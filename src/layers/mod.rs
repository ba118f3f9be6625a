//! Layers derived from the projected event and timex annotations.
//!
//! - [`iob`] tags every tokenizer word with an event IOB label
//! - [`phrase`] merges the fragments of each entity into one phrase
//! - [`relation`] resolves TLINK records against those phrases

pub mod iob;
pub mod phrase;
pub mod relation;

pub use iob::{word_events, word_events_with_classes, WordTag};
pub use phrase::{event_phrases, timex_phrases, EventPhrase, Phrase, TimexPhrase};
pub use relation::{
    event_dct_links, event_event_links, event_timex_links, RelationLayer, TemporalLink,
};
