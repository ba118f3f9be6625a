//! End-to-end conversion of a small corpus export written to disk.

use std::fs;
use std::path::Path;

use crate::{
    convert_corpus, load_document, save_document, AnnotatedDocument, EventClass, RelationType,
    TimexType, UnicodeWordTokenizer,
};
use layered_timeml_corpus::{Corpus, CorpusLayout};
use tempfile::TempDir;

const BASE: &str = "\
# file\tsentence\tword\ttoken\tmorph\tid\thead
a.tasr\t0\t0\tEile\teile+0 //_D_ //\t1\t2
a.tasr\t0\t1\tvõttis\tvõt+is //_V_ s //\t2\t0
a.tasr\t0\t2\tta\tta+0 //_P_ sg n //\t3\t2
a.tasr\t0\t3\tosa\tosa+0 //_D_ //\t4\t2
a.tasr\t0\t4\t.\t. //_Z_ //\t5\t2
a.tasr\t1\t0\tTäna\ttäna+0 //_D_ //\t1\t2
a.tasr\t1\t1\tpuhkab\tpuhka+b //_V_ b //\t2\t0
a.tasr\t1\t2\tta\tta+0 //_P_ sg n //\t3\t2
a.tasr\t1\t3\tkaks\tkaks+0 //_N_ sg n //\t4\t5
a.tasr\t1\t4\tpäeva\tpäev+0 //_S_ sg p //\t5\t2
a.tasr\t1\t5\t.\t. //_Z_ //\t6\t2
b.tasr\t0\t0\tSadas\tsada+s //_V_ s //\t1\t0
b.tasr\t0\t1\tvihma\tvihm+0 //_S_ sg p //\t2\t1
";

const EVENTS: &str = "\
a.tasr\t0\t1\tvõttis osa\tEVENT OCCURRENCE pos=\"VERB\" multiword=\"true\"\te1
a.tasr\t0\t3\tvõttis osa\tEVENT pos=\"VERB\" multiword=\"true\"\te1
a.tasr\t1\t1\tpuhkab\tEVENT STATE pos=\"VERB\"\te2
b.tasr\t0\t0\tSadas\tEVENT OCCURRENCE pos=\"VERB\"\te1
";

const TIMEXES: &str = "\
a.tasr\t0\t0\tEile\tTIMEX DATE 2010-03-11 temporalFunction=\"true\"\tt1
a.tasr\t1\t0\tTäna\tTIMEX DATE 2010-03-12\tt2
a.tasr\t1\t3\tkaks päeva\tTIMEX DURATION P2D\tt3
a.tasr\t1\t4\tkaks päeva\tTIMEX multiword=\"true\"\tt3
";

const TIMEX_DCT: &str = "\
a.tasr\t01.01.1999
b.tasr\t2010-03-13
";

const METADATA: &str = "\
a.tasr\tPostimees | ajalehenumber 12.03.2010 | rubriik: uudised
b.tasr\tÕhtuleht | rubriik: ilm
";

const TLINK_EVENT_TIMEX: &str = "\
a.tasr\te1\tIS_INCLUDED\tt1\t
a.tasr\tt3\tINCLUDES\te2\tkestus
a.tasr\te2\tIS_INCLUDED\tt3\tkordus
a.tasr\te2\tBEFORE\tt9\t
";

const TLINK_EVENT_DCT: &str = "\
a.tasr\te1\tBEFORE\t
a.tasr\te2\tINCLUDES\t
b.tasr\te1\tBEFORE\t
";

const TLINK_MAIN: &str = "a.tasr\te1\tBEFORE\te2\t\n";
const TLINK_SUB: &str = "a.tasr\te2\tAFTER\te1\t\n";

fn write_corpus(dir: &Path) {
    let layout = CorpusLayout::default();
    for (name, content) in [
        (&layout.base_segmentation, BASE),
        (&layout.event_annotation, EVENTS),
        (&layout.timex_annotation, TIMEXES),
        (&layout.timex_annotation_dct, TIMEX_DCT),
        (&layout.article_metadata, METADATA),
        (&layout.tlink_event_timex, TLINK_EVENT_TIMEX),
        (&layout.tlink_event_dct, TLINK_EVENT_DCT),
        (&layout.tlink_main_events, TLINK_MAIN),
        (&layout.tlink_subordinate_events, TLINK_SUB),
    ] {
        fs::write(dir.join(name), content).unwrap();
    }
}

fn convert(dir: &Path) -> Vec<AnnotatedDocument> {
    let corpus = Corpus::load(dir, &CorpusLayout::default()).unwrap();
    convert_corpus(&corpus, &UnicodeWordTokenizer)
        .collect::<crate::Result<_>>()
        .unwrap()
}

#[test]
fn converts_every_document() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());
    let docs = convert(dir.path());

    assert_eq!(docs.len(), 2);
    let a = &docs[0];
    assert_eq!(a.filename(), "a.tasr");
    assert_eq!(a.text, "Eile võttis ta osa . Täna puhkab ta kaks päeva .");

    // metadata wins over the dct file; b.tasr has no issue date in its metadata
    assert_eq!(a.meta.dct.as_deref(), Some("12.03.2010"));
    assert_eq!(docs[1].meta.dct.as_deref(), Some("2010-03-13"));
}

#[test]
fn event_layers() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());
    let docs = convert(dir.path());
    let a = &docs[0];

    assert_eq!(a.gold_events.len(), 3);
    assert!(a
        .gold_events
        .iter()
        .filter(|e| e.event_id == "e1")
        .all(|e| e.class() == Some(EventClass::Occurrence)));

    let tags: Vec<_> = a.gold_word_events.iter().map(|w| w.tag.as_str()).collect();
    assert_eq!(
        tags,
        vec!["O", "B-EVENT", "O", "I-EVENT", "O", "O", "B-EVENT", "O", "O", "O", "O"]
    );
    let tagged: Vec<_> = a
        .gold_word_events_w_classes
        .iter()
        .filter(|w| w.tag != "O")
        .map(|w| w.tag.as_str())
        .collect();
    assert_eq!(
        tagged,
        vec!["B-EVENT_OCCURRENCE", "I-EVENT_OCCURRENCE", "B-EVENT_STATE"]
    );

    let e1 = &a.gold_event_phrases[0];
    let words: Vec<_> = e1.spans.spans().iter().filter_map(|s| a.span_text(*s)).collect();
    assert_eq!(words, vec!["võttis", "osa"]);
}

#[test]
fn timex_layers() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());
    let docs = convert(dir.path());
    let a = &docs[0];

    assert_eq!(a.gold_timexes.len(), 4);
    assert!(a.gold_timexes.ambiguous);
    let last = &a.gold_timexes[3];
    assert_eq!(last.timex_id, "t3");
    assert_eq!(last.timex_type, Some(TimexType::Duration));
    assert_eq!(last.value.as_deref(), Some("P2D"));

    assert_eq!(a.gold_timex_phrases.len(), 3);
    let t3 = &a.gold_timex_phrases[2];
    assert_eq!(
        t3.spans.hull().and_then(|s| a.span_text(s)),
        Some("kaks päeva")
    );
}

#[test]
fn relation_layers() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path());
    let docs = convert(dir.path());
    let a = &docs[0];

    let timex_links: Vec<_> = a
        .event_timex_tlinks
        .links
        .iter()
        .map(|l| (l.a_id.as_str(), l.rel_type.clone(), l.b_id.as_str(), l.comment.as_str()))
        .collect();
    assert_eq!(
        timex_links,
        vec![
            ("e1", RelationType::IsIncluded, "t1", ""),
            ("e2", RelationType::IsIncluded, "t3", "kestus"),
        ]
    );

    assert_eq!(a.event_dct_tlinks.dct(), Some("12.03.2010"));
    assert_eq!(a.event_dct_tlinks.len(), 2);
    assert!(a.event_dct_tlinks.links.iter().all(|l| l.b_spans.is_none()));

    let event_links: Vec<_> = a
        .event_event_tlinks
        .links
        .iter()
        .map(|l| (l.a_id.as_str(), l.rel_type.as_str(), l.b_id.as_str()))
        .collect();
    assert_eq!(event_links, vec![("e1", "BEFORE", "e2"), ("e2", "AFTER", "e1")]);

    // entity ids are per document
    let b = &docs[1];
    assert_eq!(b.event_dct_tlinks.len(), 1);
    assert!(b.event_timex_tlinks.is_empty());
}

#[test]
fn saved_documents_load_back() {
    let corpus_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    write_corpus(corpus_dir.path());

    for doc in convert(corpus_dir.path()) {
        let path = save_document(&doc, out_dir.path()).unwrap();
        assert_eq!(load_document(&path).unwrap(), doc);
    }
    assert!(out_dir.path().join("a.tasr.json").exists());
    assert!(out_dir.path().join("b.tasr.json").exists());
}

#[test]
fn only_segmentation_is_required() {
    let dir = TempDir::new().unwrap();
    let layout = CorpusLayout::default();
    fs::write(dir.path().join(&layout.base_segmentation), BASE).unwrap();

    let docs = convert(dir.path());
    assert_eq!(docs.len(), 2);
    assert!(docs.iter().all(|d| d.gold_events.is_empty() && d.meta.dct.is_none()));
    assert!(docs[0].gold_word_events.iter().all(|w| w.tag == "O"));
}
