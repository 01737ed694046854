//! Line-delimited JSON files of documents

use crate::core::error::FeedError;
use anyhow::{Context, Result};
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// How `save` replaces the existing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Truncate and write in place. An interrupted write leaves a partial file.
    #[default]
    Overwrite,
    /// Write a temporary file next to the target, then rename it over the target.
    Atomic,
}

/// Parses one document per non-blank line, keeping file order.
pub fn parse_lines<T: DeserializeOwned>(content: &str) -> Result<Vec<T>, FeedError> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line, text)| {
            serde_json::from_str(text).map_err(|source| FeedError::MalformedLine { line, source })
        })
        .collect()
}

/// Writes every document as one JSON object per line, each line newline-terminated.
pub fn write_lines<T: Serialize, W: Write>(writer: &mut W, docs: &[T]) -> Result<()> {
    for doc in docs {
        serde_json::to_writer(&mut *writer, doc)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn load<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Vec<T>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read documents file: {}", path.display()))?;
    let docs = parse_lines(&content)
        .with_context(|| format!("Failed to parse documents file: {}", path.display()))?;
    debug!(count = docs.len(), path = %path.display(), "Loaded documents");
    Ok(docs)
}

pub fn save<T: Serialize, P: AsRef<Path>>(path: P, docs: &[T], mode: WriteMode) -> Result<()> {
    let path = path.as_ref();
    match mode {
        WriteMode::Overwrite => {
            let file = File::create(path)
                .with_context(|| format!("Failed to open {} for writing", path.display()))?;
            write_lines(&mut BufWriter::new(file), docs)
                .with_context(|| format!("Failed to write documents to {}", path.display()))?;
        }
        WriteMode::Atomic => {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let mut tmp = NamedTempFile::new_in(dir).with_context(|| {
                format!("Failed to create temporary file in {}", dir.display())
            })?;
            write_lines(&mut BufWriter::new(tmp.as_file_mut()), docs)
                .with_context(|| format!("Failed to write documents for {}", path.display()))?;
            tmp.as_file().sync_all()?;
            tmp.persist(path)
                .with_context(|| format!("Failed to replace {}", path.display()))?;
        }
    }
    debug!(count = docs.len(), path = %path.display(), ?mode, "Saved documents");
    Ok(())
}
