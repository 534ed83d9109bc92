//! Stopword filtering
//!
//! Stopword lists come from the `stop-words` crate or from a caller-supplied
//! whitespace-separated word list. The set is built once, kept sorted, and
//! is read-only afterwards, so a single filter can be shared across threads.

use crate::errors::{LexRankError, Result};
use std::path::Path;
use stop_words::{get, LANGUAGE};

/// A sorted, immutable-by-convention set of lowercase stopwords
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordFilter {
    /// Sorted, deduplicated, lowercase
    stopwords: Vec<String>,
}

impl StopwordFilter {
    /// Create a stopword filter for the given language
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu, tr, pl
    pub fn new(language: &str) -> Self {
        Self::from_words(Self::load_stopwords(language))
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self::from_words(words.iter().map(|w| w.to_string()))
    }

    /// Parse a whitespace/newline separated stopword list
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.split_whitespace().map(str::to_string))
    }

    /// Read a whitespace/newline separated stopword list from `path`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| LexRankError::io(path, e))?;
        let filter = Self::from_text(&text);
        tracing::debug!(path = %path.display(), words = filter.len(), "loaded stopword file");
        Ok(filter)
    }

    fn from_words(words: impl IntoIterator<Item = String>) -> Self {
        let mut stopwords: Vec<String> = words.into_iter().map(|w| w.to_lowercase()).collect();
        stopwords.sort_unstable();
        stopwords.dedup();
        Self { stopwords }
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        self.stopwords
            .extend(words.iter().map(|w| w.as_ref().to_lowercase()));
        self.stopwords.sort_unstable();
        self.stopwords.dedup();
    }

    /// Check if a word is a stopword.
    ///
    /// The lookup is exact; callers pass case-folded words.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .is_ok()
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    /// Load stopwords for a language
    fn load_stopwords(language: &str) -> Vec<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            other => {
                tracing::warn!(language = other, "no stopword list for language, using English");
                LANGUAGE::English
            }
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("is"));
        assert!(filter.is_stopword("a"));
        assert!(!filter.is_stopword("machine"));
        assert!(!filter.is_stopword("learning"));
    }

    #[test]
    fn test_lookup_is_exact() {
        let filter = StopwordFilter::from_list(&["The"]);
        // Stored case-folded; lookups expect case-folded input
        assert!(filter.is_stopword("the"));
        assert!(!filter.is_stopword("The"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra", "aardvark"]);
        assert!(filter.is_stopword("extra"));
        assert!(filter.is_stopword("aardvark"));
        assert_eq!(filter.len(), 4);
    }

    #[test]
    fn test_from_text_splits_on_any_whitespace() {
        let filter = StopwordFilter::from_text("the\na\tof  and\r\nthe\n");

        assert_eq!(filter.len(), 4);
        assert!(filter.is_stopword("of"));
        assert!(filter.is_stopword("and"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stopwords.txt");
        std::fs::write(&path, "The\nof and\n").unwrap();

        let filter = StopwordFilter::from_file(&path).unwrap();
        assert_eq!(filter.len(), 3);
        assert!(filter.is_stopword("the"));

        let err = StopwordFilter::from_file(dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, LexRankError::Io { .. }));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(!filter.is_stopword(""));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_german_stopwords() {
        let filter = StopwordFilter::new("de");

        assert!(filter.is_stopword("der"));
        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("machine"));
    }
}
