use super::DocumentError;
use std::fs;
use std::path::Path;

/// Plain text files are split into pages on form feeds. Invalid UTF-8 is
/// replaced rather than rejected; the tokenizer discards the noise.
pub fn extract_pages(path: &Path) -> Result<Vec<String>, DocumentError> {
    let bytes = fs::read(path).map_err(|e| DocumentError::unreadable(path, e))?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(content.split('\u{c}').map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_form_feed_splits_pages() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"page one\x0cpage two").unwrap();
        let pages = extract_pages(file.path()).unwrap();
        assert_eq!(pages, vec!["page one", "page two"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"valid \xff\xfe text").unwrap();
        let pages = extract_pages(file.path()).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].starts_with("valid "));
        assert!(pages[0].ends_with(" text"));
    }
}
