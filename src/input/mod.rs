//! Document ingestion
//!
//! Every source is reduced to a single plain-text string before it reaches
//! the reader. Failures are reported as `LoadError` and never produce a
//! partial document.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No readable text in {0}")]
    EmptyDocument(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Epub,
    Pdf,
}

impl DocumentFormat {
    /// Picks a format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("txt" | "text" | "md") => Ok(DocumentFormat::PlainText),
            Some("epub") => Ok(DocumentFormat::Epub),
            Some("pdf") => Ok(DocumentFormat::Pdf),
            Some(other) => Err(LoadError::UnsupportedFormat(format!(".{}", other))),
            None => Err(LoadError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub text: String,
    pub source: String,
}

impl LoadedDocument {
    /// Wraps extracted text, rejecting documents with no words in them.
    pub fn new(text: String, source: String) -> Result<Self, LoadError> {
        if text.split_whitespace().next().is_none() {
            return Err(LoadError::EmptyDocument(source));
        }
        Ok(Self { text, source })
    }
}

/// Loads a document from disk, dispatching on its extension.
pub fn load_path(path: impl AsRef<Path>) -> Result<LoadedDocument, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    match DocumentFormat::from_path(path)? {
        DocumentFormat::PlainText => text::load(path),
        DocumentFormat::Epub => epub::load(path),
        DocumentFormat::Pdf => pdf::load(path),
    }
}

/// Text typed straight into the command deck.
pub fn from_typed(text: &str) -> Result<LoadedDocument, LoadError> {
    LoadedDocument::new(text.trim().to_string(), "typed".to_string())
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;
