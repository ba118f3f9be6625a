//! Conversion configuration.

use std::fs;
use std::path::{Path, PathBuf};

use layered_timeml_corpus::CorpusLayout;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::tokenizer::TokenizerKind;

/// Where to read the corpus from and where to write documents to.
///
/// Every field has a default, so a config file only needs the values it
/// changes:
///
/// ```toml
/// corpus_dir = "data/EstTimeMLCorpus/corpus"
/// tokenizer = "whitespace"
///
/// [layout]
/// article_metadata = "article-metadata.tsv"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    pub corpus_dir: PathBuf,
    pub output_dir: PathBuf,
    pub tokenizer: TokenizerKind,
    pub layout: CorpusLayout,
}

impl ConversionConfig {
    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.display().to_string(),
            source,
        })
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from("EstTimeMLCorpus/corpus"),
            output_dir: PathBuf::from("EstTimeML_corpus_json"),
            tokenizer: TokenizerKind::default(),
            layout: CorpusLayout::default(),
        }
    }
}
