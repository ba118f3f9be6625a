//! Convert the EstTimeML corpus to one JSON document per article.
//!
//! Usage:
//!   timeml_to_json --corpus-dir EstTimeMLCorpus/corpus --output-dir EstTimeML_corpus_json
//!   timeml_to_json --config conversion.toml --file aja_ee_2007_08_10.tasr --print

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use layered_timeml::{
    save_document, AnnotatedDocument, ConversionConfig, DocumentDisplay, TokenizerKind,
};
use layered_timeml_corpus::Corpus;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[derive(Parser)]
#[command(name = "timeml_to_json")]
#[command(about = "Convert the EstTimeML corpus to annotated JSON documents")]
struct Args {
    /// TOML config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the corpus export files
    #[arg(long)]
    corpus_dir: Option<PathBuf>,

    /// Directory to write `<file>.json` documents to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Word tokenizer: unicode or whitespace
    #[arg(short, long)]
    tokenizer: Option<TokenizerKind>,

    /// Only convert these documents (repeatable)
    #[arg(short, long = "file")]
    files: Vec<String>,

    /// Print each document with its event and timex layers
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ConversionConfig::load(path)?,
        None => ConversionConfig::default(),
    };
    if let Some(dir) = args.corpus_dir {
        config.corpus_dir = dir;
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    if let Some(kind) = args.tokenizer {
        config.tokenizer = kind;
    }

    let corpus = Corpus::load(&config.corpus_dir, &config.layout)
        .with_context(|| format!("loading corpus from {}", config.corpus_dir.display()))?;

    let filenames: Vec<String> = if args.files.is_empty() {
        corpus.filenames().map(str::to_string).collect()
    } else {
        args.files.clone()
    };

    let tokenizer = config.tokenizer.build();
    let mut written = 0;
    for filename in &filenames {
        let Some(source) = corpus.document(filename) else {
            bail!("document {} is not in the corpus", filename);
        };
        let doc = AnnotatedDocument::build(&source, tokenizer.as_ref())?;
        if args.print {
            let display = DocumentDisplay::new(&doc)
                .with(&doc.gold_events)
                .with(&doc.gold_timexes);
            println!("{}\n{}\n", filename, display);
        }
        let path = save_document(&doc, &config.output_dir)?;
        log::debug!("wrote {}", path.display());
        written += 1;
    }

    log::info!(
        "wrote {} documents to {}",
        written,
        config.output_dir.display()
    );
    Ok(())
}
