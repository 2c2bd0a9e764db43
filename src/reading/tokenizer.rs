use crate::engine::error::TokenizeError;
use crate::reading::token::{WordSequence, MAX_WORDS};
use tracing::debug;

/// Punctuation and bracket characters that separate words, in addition to
/// whitespace. The hyphen is absent so compounds stay whole; en and em
/// dashes still separate.
const DELIMITERS: &[char] = &[
    '.', ',', '!', '?', ';', ':', '«', '»', '„', '"', '“', '”', '(', ')', '[', ']', '{', '}',
    '…', '–', '—',
];

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || DELIMITERS.contains(&c)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || (matches!(c, '\u{00C0}'..='\u{024F}') && c.is_alphabetic())
}

fn is_cyrillic_letter(c: char) -> bool {
    matches!(c, '\u{0400}'..='\u{04FF}') && c.is_alphabetic()
}

/// Removes everything that is neither a word character nor a hyphen, then
/// trims hyphens left dangling at either end.
fn clean_token(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|&c| is_word_char(c) || c == '-')
        .collect();
    kept.trim_matches('-').to_string()
}

/// Whether a cleaned token is worth displaying.
///
/// Rejects single characters, pure digit runs and tokens without a single
/// Latin or Cyrillic letter (extraction garbage, stray symbols).
pub(crate) fn is_displayable_word(word: &str) -> bool {
    if word.chars().nth(1).is_none() {
        return false;
    }
    if word.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    word.chars()
        .any(|c| is_latin_letter(c) || is_cyrillic_letter(c))
}

/// Turns extracted page texts into a bounded word sequence.
///
/// Pages are joined with a single space in their original order. Returns
/// [`TokenizeError::NoExtractableText`] when no word survives cleaning.
pub fn tokenize_pages<S: AsRef<str>>(pages: &[S]) -> Result<WordSequence, TokenizeError> {
    let text = pages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");

    let mut candidates = 0usize;
    let words: Vec<String> = text
        .split(is_delimiter)
        .filter(|candidate| !candidate.is_empty())
        .inspect(|_| candidates += 1)
        .map(clean_token)
        .filter(|word| is_displayable_word(word))
        .take(MAX_WORDS)
        .collect();

    debug!(
        pages = pages.len(),
        candidates,
        kept = words.len(),
        capped = words.len() == MAX_WORDS,
        "tokenized document text"
    );

    WordSequence::from_cleaned(words)
}

/// Single-page convenience wrapper around [`tokenize_pages`].
pub fn tokenize_text(text: &str) -> Result<WordSequence, TokenizeError> {
    tokenize_pages(&[text])
}
