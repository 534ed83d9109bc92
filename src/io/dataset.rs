//! Dataset directories
//!
//! A dataset is a directory of `<id>.txt` files. Each file holds one
//! sentence per line; the first empty line ends the document.

use crate::errors::{LexRankError, Result};
use crate::types::{DocId, RawCorpus, RawDocument};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// File extension of dataset documents
pub const DOCUMENT_EXTENSION: &str = "txt";

/// List every `.txt` file directly inside `dir`, sorted by path
pub fn list_documents(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir).map_err(|e| LexRankError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LexRankError::io(dir, e))?;
        let path = entry.path();

        let is_document = path.is_file()
            && path
                .extension()
                .is_some_and(|ext| ext == DOCUMENT_EXTENSION);
        if is_document {
            files.push(path);
        } else {
            tracing::warn!(path = %path.display(), "skipping non-document entry");
        }
    }

    files.sort();
    Ok(files)
}

/// Document id of a dataset file: the file name up to its first `.`,
/// parsed as an unsigned integer (`"00123.txt"` -> 123)
pub fn doc_id_from_path(path: impl AsRef<Path>) -> Result<DocId> {
    let path = path.as_ref();
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .and_then(|stem| stem.parse::<DocId>().ok())
        .ok_or_else(|| LexRankError::InvalidDocumentId {
            path: path.to_path_buf(),
        })
}

/// Parse sentences from `reader` until the first empty line or EOF
pub fn parse_document<R: BufRead>(reader: R) -> std::io::Result<RawDocument> {
    let mut sentences = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.is_empty() {
            break;
        }
        sentences.push(line.to_string());
    }
    Ok(RawDocument::new(sentences))
}

/// Read a single dataset file
pub fn read_document(path: impl AsRef<Path>) -> Result<RawDocument> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LexRankError::io(path, e))?;
    parse_document(BufReader::new(file)).map_err(|e| LexRankError::io(path, e))
}

/// Read every file in `paths`, keyed by document id.
///
/// Two files with the same id are a fatal error.
pub fn read_corpus<P: AsRef<Path>>(paths: &[P]) -> Result<RawCorpus> {
    let mut corpus = RawCorpus::default();
    for path in paths {
        let path = path.as_ref();
        let id = doc_id_from_path(path)?;
        if corpus.contains_key(&id) {
            return Err(LexRankError::DuplicateDocumentId { id });
        }
        corpus.insert(id, read_document(path)?);
    }

    tracing::info!(documents = corpus.len(), "read corpus");
    Ok(corpus)
}
