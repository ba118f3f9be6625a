//! The loaded corpus and its per-document views.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::CorpusResult;
use crate::reader::{
    self, AnnotationIndex, DctTable, EntityAnnotations, RelationTable, Segmentation,
};
use crate::records::{RelationRecord, Sentence};

/// File names of the corpus export, relative to the corpus directory.
///
/// Only `base_segmentation` is required. The other files are read when they
/// exist and treated as empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusLayout {
    pub base_segmentation: String,
    pub event_annotation: String,
    pub timex_annotation: String,
    pub timex_annotation_dct: String,
    pub tlink_event_timex: String,
    pub tlink_event_dct: String,
    pub tlink_main_events: String,
    pub tlink_subordinate_events: String,
    pub article_metadata: String,
}

impl Default for CorpusLayout {
    /// The layout of the EstTimeML corpus export.
    fn default() -> Self {
        Self {
            base_segmentation: "base-segmentation-morph-syntax".into(),
            event_annotation: "event-annotation".into(),
            timex_annotation: "timex-annotation".into(),
            timex_annotation_dct: "timex-annotation-dct".into(),
            tlink_event_timex: "tlink-event-timex".into(),
            tlink_event_dct: "tlink-event-dct".into(),
            tlink_main_events: "tlink-main-events".into(),
            tlink_subordinate_events: "tlink-subordinate-events".into(),
            article_metadata: "article-metadata".into(),
        }
    }
}

/// All corpus tables, keyed by document file name.
///
/// The tables are read-only once loaded, so documents can be converted
/// independently of each other.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub segmentation: Segmentation,
    pub events: EntityAnnotations,
    pub timexes: EntityAnnotations,
    pub dcts: DctTable,
    pub event_timex_relations: RelationTable,
    pub event_dct_relations: RelationTable,
    /// Main-event and subordinate-event links, main events first
    pub event_event_relations: RelationTable,
}

/// Borrowed view of everything the corpus knows about one document.
#[derive(Debug, Clone, Copy)]
pub struct CorpusDocument<'a> {
    pub filename: &'a str,
    pub sentences: &'a [Sentence],
    pub events: Option<&'a AnnotationIndex>,
    pub timexes: Option<&'a AnnotationIndex>,
    pub dct: Option<&'a str>,
    pub event_timex_relations: &'a [RelationRecord],
    pub event_dct_relations: &'a [RelationRecord],
    pub event_event_relations: &'a [RelationRecord],
}

impl Corpus {
    /// Load every file of `layout` from `dir`.
    ///
    /// The document creation time comes from the article metadata, falling
    /// back to the `timex-annotation-dct` file for articles the metadata does
    /// not date.
    pub fn load(dir: &Path, layout: &CorpusLayout) -> CorpusResult<Self> {
        let segmentation = reader::load_base_segmentation(&dir.join(&layout.base_segmentation))?;

        let events = optional(dir, &layout.event_annotation, reader::load_entity_annotations)?;
        let timexes = optional(dir, &layout.timex_annotation, reader::load_entity_annotations)?;

        let mut dcts = optional(dir, &layout.article_metadata, reader::load_article_metadata)?;
        for (file, dct) in optional(dir, &layout.timex_annotation_dct, reader::load_dct_annotations)? {
            dcts.entry(file).or_insert(dct);
        }

        let event_timex_relations =
            optional(dir, &layout.tlink_event_timex, reader::load_relations)?;
        let event_dct_relations =
            optional(dir, &layout.tlink_event_dct, reader::load_relations_to_dct)?;

        let mut event_event_relations =
            optional(dir, &layout.tlink_main_events, reader::load_relations)?;
        for (file, records) in optional(dir, &layout.tlink_subordinate_events, reader::load_relations)? {
            event_event_relations.entry(file).or_default().extend(records);
        }

        log::info!(
            "loaded corpus from {}: {} documents",
            dir.display(),
            segmentation.len()
        );

        Ok(Self {
            segmentation,
            events,
            timexes,
            dcts,
            event_timex_relations,
            event_dct_relations,
            event_event_relations,
        })
    }

    /// Document file names in sorted order.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.segmentation.keys().map(String::as_str)
    }

    /// Number of documents with a segmentation.
    pub fn len(&self) -> usize {
        self.segmentation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segmentation.is_empty()
    }

    /// View of one document, or `None` if the segmentation does not list it.
    pub fn document<'a>(&'a self, filename: &str) -> Option<CorpusDocument<'a>> {
        let (filename, sentences) = self.segmentation.get_key_value(filename)?;
        Some(CorpusDocument {
            filename,
            sentences,
            events: self.events.get(filename),
            timexes: self.timexes.get(filename),
            dct: self.dcts.get(filename).map(String::as_str),
            event_timex_relations: relations_of(&self.event_timex_relations, filename),
            event_dct_relations: relations_of(&self.event_dct_relations, filename),
            event_event_relations: relations_of(&self.event_event_relations, filename),
        })
    }

    /// Views of every document in file name order.
    pub fn documents(&self) -> impl Iterator<Item = CorpusDocument<'_>> {
        self.filenames().filter_map(move |name| self.document(name))
    }
}

fn relations_of<'a>(table: &'a RelationTable, filename: &str) -> &'a [RelationRecord] {
    table.get(filename).map(Vec::as_slice).unwrap_or(&[])
}

/// Load `name` from `dir` if it exists, otherwise return an empty table.
fn optional<T: Default>(
    dir: &Path,
    name: &str,
    load: impl FnOnce(&Path) -> CorpusResult<T>,
) -> CorpusResult<T> {
    let path = dir.join(name);
    if path.is_file() {
        load(&path)
    } else {
        log::debug!("optional corpus file {} not found", path.display());
        Ok(T::default())
    }
}
