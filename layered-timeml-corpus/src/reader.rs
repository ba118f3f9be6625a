//! Line-oriented readers for the corpus export files.
//!
//! Every reader takes the file content plus a `source_name` used in error
//! messages, so the same code serves both files on disk and inline test
//! fixtures. The `load_*` functions are thin wrappers that read a path first.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{CorpusError, CorpusResult};
use crate::records::{AnnotationRecord, LocationKey, RelationRecord, Sentence, Token, DCT_ENTITY_ID};

static COMMENT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#.+$").unwrap());
static DCT_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+\.\d+\.\d+)").unwrap());

/// Metadata field that carries the newspaper issue date.
const ISSUE_MARKER: &str = "ajalehenumber";

/// Sentences of every file, keyed by file name.
pub type Segmentation = BTreeMap<String, Vec<Sentence>>;

/// Annotation fragments of one file, keyed by token location.
pub type AnnotationIndex = HashMap<LocationKey, Vec<AnnotationRecord>>;

/// Annotation indexes of every file, keyed by file name.
pub type EntityAnnotations = BTreeMap<String, AnnotationIndex>;

/// Document creation times keyed by file name.
pub type DctTable = BTreeMap<String, String>;

/// Relation records of every file in corpus order, keyed by file name.
pub type RelationTable = BTreeMap<String, Vec<RelationRecord>>;

/// Yields `(line_number, line)` for every line that is neither a comment nor
/// blank. Line numbers are 1-based.
fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !COMMENT_LINE.is_match(line) && !line.trim().is_empty())
}

fn split_fields<'a>(
    source_name: &str,
    line_no: usize,
    line: &'a str,
    expected: usize,
) -> CorpusResult<Vec<&'a str>> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != expected {
        return Err(CorpusError::MalformedLine {
            source_name: source_name.to_string(),
            line: line_no,
            expected,
            found: fields.len(),
            text: line.to_string(),
        });
    }
    Ok(fields)
}

fn parse_index(
    source_name: &str,
    line_no: usize,
    field: &'static str,
    value: &str,
) -> CorpusResult<usize> {
    value.trim().parse().map_err(|_| CorpusError::InvalidNumber {
        source_name: source_name.to_string(),
        line: line_no,
        field,
        value: value.to_string(),
    })
}

fn read_source(path: &Path) -> CorpusResult<String> {
    fs::read_to_string(path).map_err(|source| CorpusError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Parse the base segmentation file.
///
/// `file  sentence_ID  word_ID_in_sentence  token  morph_syntax  syntactic_ID  syntactic_ID_of_head`
///
/// A new sentence starts whenever the sentence id or the file changes.
pub fn parse_base_segmentation(source_name: &str, content: &str) -> CorpusResult<Segmentation> {
    let mut segmentation = Segmentation::new();
    let mut last: Option<(String, usize)> = None;

    for (line_no, line) in data_lines(content) {
        let fields = split_fields(source_name, line_no, line.trim_end(), 7)?;
        let file = fields[0];
        let sentence_id = parse_index(source_name, line_no, "sentence id", fields[1])?;
        let word_id = parse_index(source_name, line_no, "word id", fields[2])?;

        let sentences = segmentation.entry(file.to_string()).or_default();
        let starts_sentence = match &last {
            Some((last_file, last_sentence)) => last_file != file || *last_sentence != sentence_id,
            None => true,
        };
        if starts_sentence {
            sentences.push(Vec::new());
        }
        if let Some(sentence) = sentences.last_mut() {
            sentence.push(Token {
                sentence_id,
                word_id,
                text: fields[3].to_string(),
                morph_syntax: fields[4].to_string(),
                syntactic_id: fields[5].to_string(),
                syntactic_head_id: fields[6].to_string(),
            });
        }
        last = Some((file.to_string(), sentence_id));
    }

    Ok(segmentation)
}

/// Parse an event or timex annotation file.
///
/// `file  sentence_ID  word_ID_in_sentence  expression  annotation  entity_ID`
///
/// Several fragments may share a location; they keep file order.
pub fn parse_entity_annotations(
    source_name: &str,
    content: &str,
) -> CorpusResult<EntityAnnotations> {
    let mut annotations = EntityAnnotations::new();

    for (line_no, line) in data_lines(content) {
        let fields = split_fields(source_name, line_no, line.trim_end(), 6)?;
        let sentence = parse_index(source_name, line_no, "sentence id", fields[1])?;
        let word = parse_index(source_name, line_no, "word id", fields[2])?;

        annotations
            .entry(fields[0].to_string())
            .or_default()
            .entry(LocationKey::new(sentence, word))
            .or_default()
            .push(AnnotationRecord::new(fields[5], fields[3], fields[4]));
    }

    Ok(annotations)
}

/// Parse the `timex-annotation-dct` file (`file  document_creation_time`).
pub fn parse_dct_annotations(source_name: &str, content: &str) -> CorpusResult<DctTable> {
    let mut dcts = DctTable::new();
    for (line_no, line) in data_lines(content) {
        let fields = split_fields(source_name, line_no, line.trim_end(), 2)?;
        dcts.insert(fields[0].to_string(), fields[1].to_string());
    }
    Ok(dcts)
}

/// Parse the article metadata file, extracting the issue date of each article
/// as its document creation time.
///
/// The second field is a ` | `-separated list; the first part mentioning the
/// issue carries a `DD.MM.YYYY` date. Articles without one are left out.
pub fn parse_article_metadata(source_name: &str, content: &str) -> CorpusResult<DctTable> {
    let mut dcts = DctTable::new();
    for (line_no, line) in data_lines(content) {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 2 {
            return Err(CorpusError::MalformedLine {
                source_name: source_name.to_string(),
                line: line_no,
                expected: 2,
                found: fields.len(),
                text: line.to_string(),
            });
        }
        let date = fields[1]
            .split(" | ")
            .find(|part| part.contains(ISSUE_MARKER))
            .and_then(|part| DCT_DATE.captures(part))
            .map(|caps| caps[1].to_string());
        match date {
            Some(date) => {
                dcts.insert(fields[0].to_string(), date);
            }
            None => log::debug!("{}:{}: no issue date for {}", source_name, line_no, fields[0]),
        }
    }
    Ok(dcts)
}

/// Parse a relation file.
///
/// `file  entity_ID_A  relation  entity_ID_B  comment`
pub fn parse_relations(source_name: &str, content: &str) -> CorpusResult<RelationTable> {
    let mut relations = RelationTable::new();
    for (line_no, line) in data_lines(content) {
        let fields = split_fields(source_name, line_no, line, 5)?;
        relations
            .entry(fields[0].to_string())
            .or_default()
            .push(RelationRecord::new(fields[1], fields[2], fields[3], fields[4].trim_end()));
    }
    Ok(relations)
}

/// Parse a relation-to-DCT file.
///
/// `file  entity_ID_A  relation_to_DCT  comment`
///
/// The second entity is always the document creation time, [`DCT_ENTITY_ID`].
pub fn parse_relations_to_dct(source_name: &str, content: &str) -> CorpusResult<RelationTable> {
    let mut relations = RelationTable::new();
    for (line_no, line) in data_lines(content) {
        let fields = split_fields(source_name, line_no, line, 4)?;
        relations
            .entry(fields[0].to_string())
            .or_default()
            .push(RelationRecord::new(fields[1], fields[2], DCT_ENTITY_ID, fields[3].trim_end()));
    }
    Ok(relations)
}

pub fn load_base_segmentation(path: &Path) -> CorpusResult<Segmentation> {
    parse_base_segmentation(&path.display().to_string(), &read_source(path)?)
}

pub fn load_entity_annotations(path: &Path) -> CorpusResult<EntityAnnotations> {
    parse_entity_annotations(&path.display().to_string(), &read_source(path)?)
}

pub fn load_dct_annotations(path: &Path) -> CorpusResult<DctTable> {
    parse_dct_annotations(&path.display().to_string(), &read_source(path)?)
}

pub fn load_article_metadata(path: &Path) -> CorpusResult<DctTable> {
    parse_article_metadata(&path.display().to_string(), &read_source(path)?)
}

pub fn load_relations(path: &Path) -> CorpusResult<RelationTable> {
    parse_relations(&path.display().to_string(), &read_source(path)?)
}

pub fn load_relations_to_dct(path: &Path) -> CorpusResult<RelationTable> {
    parse_relations_to_dct(&path.display().to_string(), &read_source(path)?)
}
