//! Persisted idf tables
//!
//! One record per line, `<term> <score>`, terms in sorted order. Scores use
//! Rust's shortest round-trip float formatting, so reading a written table
//! gives back exactly the same values.

use crate::errors::{LexRankError, Result};
use crate::vsm::idf::IdfTable;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default file name of the idf table
pub const IDF_FILENAME: &str = "idf.txt";

/// Write `table` to `writer`
pub fn write_idf<W: Write>(mut writer: W, table: &IdfTable) -> std::io::Result<()> {
    for (term, score) in table.sorted() {
        writeln!(writer, "{term} {score}")?;
    }
    writer.flush()
}

/// Parse a table previously produced by [`write_idf`].
///
/// Blank lines are skipped. Any other line that is not exactly a term and a
/// finite, non-negative float fails the whole parse, as does a repeated term.
pub fn parse_idf(text: &str) -> Result<IdfTable> {
    let mut table = IdfTable::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let (term, score) = parse_record(line).ok_or_else(|| LexRankError::MalformedIdfRecord {
            line: line_no,
            content: line.to_string(),
        })?;

        if table.insert(term, score).is_some() {
            return Err(LexRankError::DuplicateIdfTerm {
                line: line_no,
                term: term.to_string(),
            });
        }
    }

    Ok(table)
}

fn parse_record(line: &str) -> Option<(&str, f64)> {
    let mut fields = line.split_whitespace();
    let term = fields.next()?;
    let score = fields
        .next()?
        .parse::<f64>()
        .ok()
        .filter(|score| score.is_finite() && *score >= 0.0)?;
    if fields.next().is_some() {
        return None;
    }
    Some((term, score))
}

/// Write `table` to the file at `path`, replacing it
pub fn save_idf(path: impl AsRef<Path>, table: &IdfTable) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| LexRankError::io(path, e))?;
    write_idf(BufWriter::new(file), table).map_err(|e| LexRankError::io(path, e))?;
    tracing::info!(path = %path.display(), terms = table.len(), "wrote idf table");
    Ok(())
}

/// Load a table from the file at `path`
pub fn load_idf(path: impl AsRef<Path>) -> Result<IdfTable> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| LexRankError::io(path, e))?;
    let table = parse_idf(&text)?;
    tracing::debug!(path = %path.display(), terms = table.len(), "loaded idf table");
    Ok(table)
}
