//! Saving and loading annotated documents as JSON.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::AnnotatedDocument;
use crate::errors::{Error, Result};

/// Path a document is saved under inside `dir`.
pub fn document_path(dir: &Path, filename: &str) -> PathBuf {
    dir.join(format!("{}.json", filename))
}

/// Write `doc` to `<dir>/<filename>.json`, creating `dir` if needed.
pub fn save_document(doc: &AnnotatedDocument, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    let path = document_path(dir, doc.filename());
    let json = serde_json::to_string_pretty(doc)?;
    fs::write(&path, json).map_err(|e| Error::io(&path, e))?;
    Ok(path)
}

pub fn load_document(path: &Path) -> Result<AnnotatedDocument> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(serde_json::from_str(&content)?)
}
