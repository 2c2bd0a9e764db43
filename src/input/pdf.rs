use super::DocumentError;
use pdf_extract::{output_doc_page, Document, PlainTextOutput};
use std::fmt::Display;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Extract the text of every PDF page, in page order, using pdf-extract.
///
/// Each page is extracted on its own. A page that fails is logged and
/// skipped; the document is [`DocumentError::Corrupt`] only when it cannot
/// be parsed at all or when every page fails. Pages without any text (scans,
/// blank separators) are kept as empty strings and dropped later by the
/// tokenizer.
pub fn extract_pages(path: &Path) -> Result<Vec<String>, DocumentError> {
    let buffer = fs::read(path).map_err(|e| DocumentError::unreadable(path, e))?;

    let mut doc = Document::load_mem(&buffer).map_err(|e| {
        warn!(path = %path.display(), error = %e, "pdf parsing failed");
        DocumentError::Corrupt(e.to_string())
    })?;
    if doc.is_encrypted() {
        // Many PDFs are encrypted with an empty user password.
        doc.decrypt("")
            .map_err(|e| DocumentError::Corrupt(format!("encrypted PDF: {e}")))?;
    }

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    collect_pages(
        page_numbers
            .into_iter()
            .map(|page| (page, extract_page(&doc, page))),
    )
}

fn extract_page(doc: &Document, page: u32) -> Result<String, pdf_extract::OutputError> {
    let mut text = String::new();
    {
        let mut output = PlainTextOutput::new(&mut text);
        output_doc_page(doc, &mut output, page)?;
    }
    Ok(text)
}

/// Keeps the pages that extracted, in order. Fails only if none did.
fn collect_pages<I, E>(results: I) -> Result<Vec<String>, DocumentError>
where
    I: IntoIterator<Item = (u32, Result<String, E>)>,
    E: Display,
{
    let mut pages = Vec::new();
    let mut failed = 0usize;
    let mut last_error = None;

    for (page, result) in results {
        match result {
            Ok(text) => pages.push(text),
            Err(e) => {
                warn!(page, error = %e, "skipping unreadable pdf page");
                failed += 1;
                last_error = Some(e.to_string());
            }
        }
    }

    if pages.is_empty() {
        return Err(DocumentError::Corrupt(
            last_error.unwrap_or_else(|| "PDF has no pages".to_string()),
        ));
    }

    let blank = pages.iter().filter(|page| page.trim().is_empty()).count();
    debug!(pages = pages.len(), blank, failed, "extracted pdf text");
    Ok(pages)
}
