#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Readers for the tab-separated EstTimeML corpus export.
//!
//! The export is a set of flat files, one record per line, each line starting
//! with the name of the document it belongs to. This crate turns them into
//! typed tables keyed by document file name:
//!
//! - [`Segmentation`] - sentences of [`Token`]s
//! - [`EntityAnnotations`] - event or timex fragments by [`LocationKey`]
//! - [`DctTable`] - document creation times
//! - [`RelationTable`] - TLINK records in corpus order
//!
//! [`Corpus::load`] reads a whole export directory.
//!
//! ## Example
//!
//! ```
//! use layered_timeml_corpus::{parse_base_segmentation, LocationKey};
//!
//! let seg = parse_base_segmentation("inline", "doc\t0\t0\tTere\ttere+0\t1\t0\n").unwrap();
//! assert_eq!(seg["doc"][0][0].location(), LocationKey::new(0, 0));
//! ```

mod corpus;
mod errors;
mod reader;
mod records;

pub use corpus::{Corpus, CorpusDocument, CorpusLayout};
pub use errors::{CorpusError, CorpusResult};
pub use reader::{
    load_article_metadata, load_base_segmentation, load_dct_annotations, load_entity_annotations,
    load_relations, load_relations_to_dct, parse_article_metadata, parse_base_segmentation,
    parse_dct_annotations, parse_entity_annotations, parse_relations, parse_relations_to_dct,
    AnnotationIndex, DctTable, EntityAnnotations, RelationTable, Segmentation,
};
pub use records::{AnnotationRecord, LocationKey, RelationRecord, Sentence, Token, DCT_ENTITY_ID};
