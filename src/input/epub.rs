use super::DocumentError;
use std::path::Path;
use tracing::debug;

/// Extract one page of plain text per EPUB chapter, in spine order.
pub fn extract_pages(path: &Path) -> Result<Vec<String>, DocumentError> {
    let mut doc =
        epub::doc::EpubDoc::new(path).map_err(|e| DocumentError::Corrupt(e.to_string()))?;

    let num_chapters = doc.get_num_chapters();
    if num_chapters == 0 {
        return Err(DocumentError::Corrupt("no chapters found in EPUB".to_string()));
    }

    let mut pages = Vec::with_capacity(num_chapters);
    for chapter_idx in 0..num_chapters {
        if !doc.set_current_chapter(chapter_idx) {
            continue;
        }
        if let Some((chapter_content, _mime)) = doc.get_current_str() {
            pages.push(extract_plain_text(&chapter_content));
        }
    }

    if pages.iter().all(|page| page.is_empty()) {
        return Err(DocumentError::Corrupt(
            "no extractable text content found in EPUB".to_string(),
        ));
    }

    debug!(chapters = num_chapters, pages = pages.len(), "extracted epub text");
    Ok(pages)
}

/// Strip markup from XHTML chapter content.
///
/// Tags become spaces so adjacent block elements do not fuse words, and the
/// bodies of `<head>`, `<script>` and `<style>` are dropped entirely.
fn extract_plain_text(html: &str) -> String {
    let mut result = String::new();
    let mut tag = String::new();
    let mut in_tag = false;
    let mut skip_depth = 0usize;

    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                let name = tag
                    .trim_start_matches('/')
                    .split(|c: char| c.is_whitespace() || c == '/')
                    .next()
                    .unwrap_or_default()
                    .to_ascii_lowercase();
                if matches!(name.as_str(), "head" | "script" | "style") {
                    if tag.starts_with('/') {
                        skip_depth = skip_depth.saturating_sub(1);
                    } else if !tag.ends_with('/') {
                        skip_depth += 1;
                    }
                }
                result.push(' ');
            }
            _ if in_tag => tag.push(c),
            _ if skip_depth > 0 => {}
            _ => result.push(c),
        }
    }

    decode_entities(&result)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Longest entity name looked up between `&` and `;`.
const MAX_ENTITY_LEN: usize = 10;

/// Replaces named and numeric (`&#8217;`, `&#x2019;`) character references.
/// Unknown references are left as written.
fn decode_entities(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('&') {
        result.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let decoded = after
            .find(';')
            .filter(|&end| end > 0 && end <= MAX_ENTITY_LEN)
            .and_then(|end| decode_entity(&after[..end]).map(|c| (c, end)));

        match decoded {
            Some((c, end)) => {
                result.push(c);
                rest = &after[end + 1..];
            }
            None => {
                result.push('&');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

fn decode_entity(entity: &str) -> Option<char> {
    let c = match entity {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => ' ',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201C}',
        "rdquo" => '\u{201D}',
        "laquo" => '«',
        "raquo" => '»',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '…',
        "iexcl" => '¡',
        "iquest" => '¿',
        "aacute" => 'á',
        "eacute" => 'é',
        "iacute" => 'í',
        "oacute" => 'ó',
        "uacute" => 'ú',
        "Aacute" => 'Á',
        "Eacute" => 'É',
        "Iacute" => 'Í',
        "Oacute" => 'Ó',
        "Uacute" => 'Ú',
        "agrave" => 'à',
        "egrave" => 'è',
        "igrave" => 'ì',
        "ograve" => 'ò',
        "ugrave" => 'ù',
        "acirc" => 'â',
        "ecirc" => 'ê',
        "icirc" => 'î',
        "ocirc" => 'ô',
        "ucirc" => 'û',
        "auml" => 'ä',
        "euml" => 'ë',
        "iuml" => 'ï',
        "ouml" => 'ö',
        "uuml" => 'ü',
        "Auml" => 'Ä',
        "Ouml" => 'Ö',
        "Uuml" => 'Ü',
        "szlig" => 'ß',
        "ntilde" => 'ñ',
        "Ntilde" => 'Ñ',
        "ccedil" => 'ç',
        "Ccedil" => 'Ç',
        "oslash" => 'ø',
        "aring" => 'å',
        "aelig" => 'æ',
        "oelig" => 'œ',
        _ => return decode_numeric_entity(entity),
    };
    Some(c)
}

fn decode_numeric_entity(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let value = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    match char::from_u32(value)? {
        '\u{A0}' => Some(' '),
        c => Some(c),
    }
}
