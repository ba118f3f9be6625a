#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Converts the EstTimeML corpus into layered, span-annotated documents.
//!
//! Each corpus document is rebuilt as plain text from its tokens, split into
//! words by a [`Tokenizer`], and annotated with named layers:
//!
//! - `gold_events` / `gold_timexes` - one annotation per event or timex word
//! - `gold_word_events` / `gold_word_events_w_classes` - IOB tags per word
//! - `gold_event_phrases` / `gold_timex_phrases` - whole entities as [`SpanSet`]s
//! - `event_timex_tlinks`, `event_dct_tlinks`, `event_event_tlinks` -
//!   temporal links, always with an event first
//!
//! ## Example
//!
//! ```
//! use layered_timeml::{AnnotatedDocument, UnicodeWordTokenizer};
//! use layered_timeml_corpus::{parse_base_segmentation, parse_entity_annotations, Corpus};
//!
//! let corpus = Corpus {
//!     segmentation: parse_base_segmentation("base", "doc\t0\t0\tSadas\tsada+s\t1\t0\n").unwrap(),
//!     events: parse_entity_annotations("events", "doc\t0\t0\tSadas\tEVENT OCCURRENCE\te1\n").unwrap(),
//!     ..Corpus::default()
//! };
//! let doc = AnnotatedDocument::build(&corpus.document("doc").unwrap(), &UnicodeWordTokenizer).unwrap();
//! assert_eq!(doc.text, "Sadas");
//! assert_eq!(doc.gold_word_events[0].tag, "B-EVENT");
//! ```

mod annotation;
mod config;
mod display;
mod document;
mod errors;
mod layer;
pub mod layers;
mod persist;
mod projector;
mod reconstruct;
mod span;
mod tokenizer;
mod vocabulary;

pub use annotation::{is_multiword, ParsedEvent, ParsedTimex, Subtype, MULTIWORD_MARKER};
pub use config::ConversionConfig;
pub use display::{DisplayAnnotation, DocumentDisplay};
pub use document::{convert_corpus, AnnotatedDocument, DocumentMeta};
pub use errors::{Error, ProjectionError, Result};
pub use layer::{Layer, Spanned};
pub use layers::{
    EventPhrase, Phrase, RelationLayer, TemporalLink, TimexPhrase, WordTag,
};
pub use persist::{document_path, load_document, save_document};
pub use projector::{
    project, propagate_event_classes, EventAnnotation, Projection, TimexAnnotation,
};
pub use reconstruct::{reconstruct, Reconstruction};
pub use span::{CharSpan, SpanSet};
pub use tokenizer::{Tokenizer, TokenizerKind, UnicodeWordTokenizer, WhitespaceTokenizer};
pub use vocabulary::{EventClass, RelationType, TimexType};
