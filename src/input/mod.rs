use crate::engine::error::TokenizeError;
use crate::reading::{tokenize_pages, WordSequence};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Largest document accepted by default (50 MB).
pub const MAX_DOCUMENT_BYTES: u64 = 50 * 1024 * 1024;

/// Ingestion failures. All of them end the current load attempt; the user
/// has to pick another file.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Rejected by the size check before any content was read.
    #[error("file is too large ({:.1} MB, limit is {:.1} MB)", megabytes(.size), megabytes(.limit))]
    TooLarge { size: u64, limit: u64 },

    /// The file opened but its structure could not be parsed, or no page of
    /// it yielded text.
    #[error("document is corrupt: {0}")]
    Corrupt(String),

    #[error("cannot read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unsupported format: {0} (expected .pdf, .epub or .txt)")]
    UnsupportedFormat(String),
}

fn megabytes(bytes: &u64) -> f64 {
    *bytes as f64 / (1024.0 * 1024.0)
}

impl DocumentError {
    pub(crate) fn unreadable(path: &Path, source: io::Error) -> Self {
        Self::Unreadable {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Anything that makes a file unusable for playback.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    NoText(#[from] TokenizeError),
}

/// A tokenized document ready to hand to a playback session.
#[derive(Debug)]
pub struct LoadedDocument {
    pub words: WordSequence,
    /// File name shown in the reader header.
    pub name: String,
    pub pages: usize,
}

/// Rejects files over `limit` bytes before any of their content is read.
pub fn check_size(path: &Path, limit: u64) -> Result<u64, DocumentError> {
    let size = fs::metadata(path)
        .map_err(|e| DocumentError::unreadable(path, e))?
        .len();
    if size > limit {
        return Err(DocumentError::TooLarge { size, limit });
    }
    Ok(size)
}

/// Extracts raw page texts, in page order, from a PDF, EPUB or plain text
/// file.
pub fn extract_pages(path: &Path, limit: u64) -> Result<Vec<String>, DocumentError> {
    check_size(path, limit)?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("pdf") => pdf::extract_pages(path),
        Some("epub") => epub::extract_pages(path),
        Some("txt" | "text" | "md") => text::extract_pages(path),
        Some(other) => Err(DocumentError::UnsupportedFormat(format!(".{other}"))),
        None => Err(DocumentError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Extracts and tokenizes a document in one step.
pub fn load<P: AsRef<Path>>(path: P, limit: u64) -> Result<LoadedDocument, LoadError> {
    let path = path.as_ref();
    info!(path = %path.display(), "loading document");

    let pages = extract_pages(path, limit)?;
    let words = tokenize_pages(&pages)?;

    info!(pages = pages.len(), words = words.len(), "document ready");
    Ok(LoadedDocument {
        words,
        name: display_name(path),
        pages: pages.len(),
    })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub mod epub;
pub mod pdf;
pub mod text;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn text_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_text_document() {
        let file = text_file("Hello world. 123\u{c}Second page!");
        let doc = load(file.path(), MAX_DOCUMENT_BYTES).unwrap();
        assert_eq!(doc.words.as_slice(), &["Hello", "world", "Second", "page"]);
        assert_eq!(doc.pages, 2);
        assert!(doc.name.ends_with(".txt"));
    }

    #[test]
    fn test_load_rejects_oversized_file() {
        let file = text_file("far too many bytes for this limit");
        let result = load(file.path(), 8);
        assert!(matches!(
            result,
            Err(LoadError::Document(DocumentError::TooLarge { limit: 8, .. }))
        ));
    }

    #[test]
    fn test_load_numbers_only_has_no_text() {
        let file = text_file("123 456 789");
        let result = load(file.path(), MAX_DOCUMENT_BYTES);
        assert!(matches!(
            result,
            Err(LoadError::NoText(TokenizeError::NoExtractableText))
        ));
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let result = extract_pages(Path::new("/nonexistent/path/book.pdf"), MAX_DOCUMENT_BYTES);
        assert!(matches!(result, Err(DocumentError::Unreadable { .. })));
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        let mut file = tempfile::Builder::new().suffix(".docx").tempfile().unwrap();
        file.write_all(b"whatever").unwrap();
        let result = extract_pages(file.path(), MAX_DOCUMENT_BYTES);
        assert!(matches!(result, Err(DocumentError::UnsupportedFormat(ext)) if ext == ".docx"));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let mut file = tempfile::Builder::new().suffix(".TXT").tempfile().unwrap();
        file.write_all(b"Upper case extension").unwrap();
        let pages = extract_pages(file.path(), MAX_DOCUMENT_BYTES).unwrap();
        assert_eq!(pages, vec!["Upper case extension".to_string()]);
    }

    #[test]
    fn test_too_large_message_in_megabytes() {
        let err = DocumentError::TooLarge {
            size: 60 * 1024 * 1024,
            limit: MAX_DOCUMENT_BYTES,
        };
        assert_eq!(
            err.to_string(),
            "file is too large (60.0 MB, limit is 50.0 MB)"
        );
    }
}
