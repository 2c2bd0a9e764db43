use crate::engine::error::TokenizeError;
use crate::reading::tokenizer::is_displayable_word;

/// Hard cap on the number of words kept from a single document.
pub const MAX_WORDS: usize = 10_000;

/// Ordered, non-empty sequence of display words in reading order.
///
/// Only the tokenizer and [`WordSequence::from_words`] can build one, so
/// every word is at least two characters long and carries a Latin or
/// Cyrillic letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSequence {
    words: Vec<String>,
}

impl WordSequence {
    pub(crate) fn from_cleaned(words: Vec<String>) -> Result<Self, TokenizeError> {
        if words.is_empty() {
            return Err(TokenizeError::NoExtractableText);
        }
        Ok(Self { words })
    }

    /// Builds a sequence from already split words, dropping the ones that
    /// would not survive tokenization and keeping at most [`MAX_WORDS`].
    pub fn from_words<I, S>(words: I) -> Result<Self, TokenizeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|word| is_displayable_word(word))
            .take(MAX_WORDS)
            .collect();
        Self::from_cleaned(words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.words.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_filters_noise() {
        let words = WordSequence::from_words(["Hello", "1", "42", "***", "world"]).unwrap();
        assert_eq!(words.as_slice(), &["Hello", "world"]);
    }

    #[test]
    fn test_from_words_rejects_empty() {
        let result = WordSequence::from_words(Vec::<String>::new());
        assert_eq!(result, Err(TokenizeError::NoExtractableText));
    }

    #[test]
    fn test_from_words_caps_length() {
        let words = WordSequence::from_words((0..MAX_WORDS + 50).map(|i| format!("w{i}"))).unwrap();
        assert_eq!(words.len(), MAX_WORDS);
        assert_eq!(words.get(MAX_WORDS - 1), Some("w9999"));
    }

    #[test]
    fn test_last_index_and_get() {
        let words = WordSequence::from_words(["one", "two", "three"]).unwrap();
        assert_eq!(words.last_index(), 2);
        assert_eq!(words.get(1), Some("two"));
        assert_eq!(words.get(3), None);
        assert!(!words.is_empty());
    }
}
