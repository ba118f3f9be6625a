//! Text rendering of a document and selected layers, for tests and debugging.
//!
//! ```text
//! Ta tuli eile koju .
//!         ╰──╯[A] t1 DATE 2010-03-11
//!    ╰──╯      ╰──╯e1
//!      └─IS_INCLUDED─>[A]
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt::Write;

use unicode_width::UnicodeWidthChar;

use crate::document::AnnotatedDocument;
use crate::layer::Layer;
use crate::layers::{EventPhrase, RelationLayer, TimexPhrase, WordTag};
use crate::projector::{EventAnnotation, TimexAnnotation};
use crate::span::CharSpan;

/// An annotation that can be drawn under the document text.
pub trait DisplayAnnotation {
    /// Spans to underline, in text order.
    fn segments(&self) -> Vec<CharSpan>;
    fn label(&self) -> String;
}

impl DisplayAnnotation for EventAnnotation {
    fn segments(&self) -> Vec<CharSpan> {
        vec![self.span]
    }

    fn label(&self) -> String {
        format!("{} {}", self.event_id, self.event_class)
    }
}

impl DisplayAnnotation for TimexAnnotation {
    fn segments(&self) -> Vec<CharSpan> {
        vec![self.span]
    }

    fn label(&self) -> String {
        timex_label(&self.timex_id, self.timex_type, self.value.as_deref())
    }
}

impl DisplayAnnotation for WordTag {
    fn segments(&self) -> Vec<CharSpan> {
        vec![self.span]
    }

    fn label(&self) -> String {
        self.tag.clone()
    }
}

impl DisplayAnnotation for EventPhrase {
    fn segments(&self) -> Vec<CharSpan> {
        self.spans.spans().to_vec()
    }

    fn label(&self) -> String {
        format!("{} {}", self.event_id, self.event_class)
    }
}

impl DisplayAnnotation for TimexPhrase {
    fn segments(&self) -> Vec<CharSpan> {
        self.spans.spans().to_vec()
    }

    fn label(&self) -> String {
        timex_label(&self.timex_id, self.timex_type, self.value.as_deref())
    }
}

fn timex_label(
    id: &str,
    timex_type: Option<crate::vocabulary::TimexType>,
    value: Option<&str>,
) -> String {
    let mut label = id.to_string();
    for part in [timex_type.map(|t| t.as_str()), value].into_iter().flatten() {
        label.push(' ');
        label.push_str(part);
    }
    label
}

/// Zero-based index to a spreadsheet-style label: A..Z, AA..AZ, BA..
fn target_label(mut n: usize) -> String {
    let mut result = String::new();
    loop {
        result.insert(0, (b'A' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    result
}

struct Arrow {
    rel_type: String,
    target_id: String,
    target: Option<Vec<CharSpan>>,
}

struct Row {
    segments: Vec<CharSpan>,
    label: String,
    arrows: Vec<Arrow>,
}

pub struct DocumentDisplay<'a> {
    doc: &'a AnnotatedDocument,
    rows: Vec<Row>,
}

impl<'a> DocumentDisplay<'a> {
    pub fn new(doc: &'a AnnotatedDocument) -> Self {
        Self {
            doc,
            rows: Vec::new(),
        }
    }

    /// Add one row per annotation of `layer`.
    pub fn include<T: DisplayAnnotation>(&mut self, layer: &Layer<T>) {
        for annotation in layer {
            self.rows.push(Row {
                segments: annotation.segments(),
                label: annotation.label(),
                arrows: Vec::new(),
            });
        }
    }

    /// Add one row per link, under its event, with an arrow to the other
    /// argument.
    ///
    /// Arguments that are also drawn as a row are referred to by a label
    /// like `[A]`.
    pub fn include_links(&mut self, layer: &RelationLayer) {
        for link in &layer.links {
            self.rows.push(Row {
                segments: link.a_spans.spans().to_vec(),
                label: link.a_id.clone(),
                arrows: vec![Arrow {
                    rel_type: link.rel_type.to_string(),
                    target_id: link.b_id.clone(),
                    target: link.b_spans.as_ref().map(|s| s.spans().to_vec()),
                }],
            });
        }
    }

    pub fn with<T: DisplayAnnotation>(mut self, layer: &Layer<T>) -> Self {
        self.include(layer);
        self
    }

    pub fn with_links(mut self, layer: &RelationLayer) -> Self {
        self.include_links(layer);
        self
    }

    /// Labels for drawn rows that some arrow points at.
    fn target_labels(&self) -> HashMap<&[CharSpan], String> {
        let drawn: HashSet<&[CharSpan]> =
            self.rows.iter().map(|r| r.segments.as_slice()).collect();
        let mut targets: Vec<&[CharSpan]> = self
            .rows
            .iter()
            .flat_map(|r| &r.arrows)
            .filter_map(|a| a.target.as_deref())
            .filter(|t| drawn.contains(t))
            .collect();
        targets.sort();
        targets.dedup();

        targets
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t, format!("[{}]", target_label(i))))
            .collect()
    }
}

impl<'a> std::fmt::Display for DocumentDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // display column of every char offset, including the end of text
        let mut columns = Vec::with_capacity(self.doc.text.len() + 1);
        let mut width = 0;
        for ch in self.doc.text.chars() {
            columns.push(width);
            width += ch.width().unwrap_or(0);
        }
        columns.push(width);
        let column = |offset: usize| columns.get(offset).copied().unwrap_or(width);

        f.write_str(&self.doc.text)?;

        let labels = self.target_labels();

        for row in &self.rows {
            f.write_char('\n')?;

            let mut at = 0;
            for segment in &row.segments {
                let start = column(segment.start);
                let end = column(segment.end);
                for _ in at..start {
                    f.write_char(' ')?;
                }
                f.write_char('╰')?;
                for _ in (start + 1)..end.saturating_sub(1) {
                    f.write_char('─')?;
                }
                if end.saturating_sub(start) > 1 {
                    f.write_char('╯')?;
                }
                at = end.max(start + 1);
            }

            if let Some(label) = labels.get(row.segments.as_slice()) {
                write!(f, "{} ", label)?;
            }
            f.write_str(&row.label)?;

            let indent = row.segments.first().map_or(0, |s| column(s.start)) + 2;
            for arrow in &row.arrows {
                f.write_char('\n')?;
                for _ in 0..indent {
                    f.write_char(' ')?;
                }
                let target = arrow
                    .target
                    .as_deref()
                    .and_then(|t| labels.get(t))
                    .unwrap_or(&arrow.target_id);
                write!(f, "└─{}─>{}", arrow.rel_type, target)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::UnicodeWordTokenizer;
    use layered_timeml_corpus::{
        parse_base_segmentation, parse_dct_annotations, parse_entity_annotations,
        parse_relations, parse_relations_to_dct, Corpus,
    };

    fn document() -> AnnotatedDocument {
        let base = ["Ta", "tuli", "eile", "koju", "."]
            .iter()
            .enumerate()
            .map(|(w, t)| format!("doc\t0\t{}\t{}\t_\t0\t0\n", w, t))
            .collect::<String>();
        let corpus = Corpus {
            segmentation: parse_base_segmentation("base", &base).unwrap(),
            events: parse_entity_annotations(
                "events",
                "doc\t0\t1\ttuli koju\tEVENT OCCURRENCE multiword=\"true\"\te1\n\
                 doc\t0\t3\ttuli koju\tEVENT pos=\"ADV\" multiword=\"true\"\te1\n",
            )
            .unwrap(),
            timexes: parse_entity_annotations("timexes", "doc\t0\t2\teile\tTIMEX DATE 2010-03-11\tt1\n")
                .unwrap(),
            dcts: parse_dct_annotations("dct", "doc\t12.03.2010\n").unwrap(),
            event_timex_relations: parse_relations("tlinks", "doc\tt1\tINCLUDES\te1\t\n").unwrap(),
            event_dct_relations: parse_relations_to_dct("dct", "doc\te1\tBEFORE\t\n").unwrap(),
            ..Corpus::default()
        };
        let source = corpus.document("doc").unwrap();
        AnnotatedDocument::build(&source, &UnicodeWordTokenizer).unwrap()
    }

    #[test]
    fn test_target_label() {
        assert_eq!(target_label(0), "A");
        assert_eq!(target_label(25), "Z");
        assert_eq!(target_label(26), "AA");
        assert_eq!(target_label(52), "BA");
        assert_eq!(target_label(702), "AAA");
    }

    #[test]
    fn test_base_layers() {
        let doc = document();
        let display = DocumentDisplay::new(&doc)
            .with(&doc.gold_events)
            .with(&doc.gold_timexes);
        insta::assert_snapshot!(display, @r###"
        Ta tuli eile koju .
           ╰──╯e1 OCCURRENCE
                     ╰──╯e1 OCCURRENCE
                ╰──╯t1 DATE 2010-03-11
        "###);
    }

    #[test]
    fn test_word_tags() {
        let doc = document();
        let display = DocumentDisplay::new(&doc).with(&doc.gold_word_events_w_classes);
        insta::assert_snapshot!(display, @r###"
        Ta tuli eile koju .
        ╰╯O
           ╰──╯B-EVENT_OCCURRENCE
                ╰──╯O
                     ╰──╯I-EVENT_OCCURRENCE
                          ╰O
        "###);
    }

    #[test]
    fn test_links() {
        let doc = document();
        let display = DocumentDisplay::new(&doc)
            .with(&doc.gold_timex_phrases)
            .with_links(&doc.event_timex_tlinks)
            .with_links(&doc.event_dct_tlinks);
        insta::assert_snapshot!(display, @r###"
        Ta tuli eile koju .
                ╰──╯[A] t1 DATE 2010-03-11
           ╰──╯      ╰──╯e1
             └─IS_INCLUDED─>[A]
           ╰──╯      ╰──╯e1
             └─BEFORE─>t0
        "###);
    }

    #[test]
    fn test_wide_characters() {
        let mut doc = document();
        doc.text = "日本 tuli".to_string();
        let mut events = Layer::new("events", false);
        events.push(WordTag {
            span: CharSpan::new(3, 7),
            tag: "X".to_string(),
        });
        let display = DocumentDisplay::new(&doc).with(&events);
        insta::assert_snapshot!(display, @r###"
        日本 tuli
             ╰──╯X
        "###);
    }
}
