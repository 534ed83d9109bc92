//! Token normalization
//!
//! Turns raw sentence text into countable terms:
//! tokenize, strip punctuation, case-fold, drop stopwords, stem.
//!
//! A [`Normalizer`] owns its stopword set and stemmer. It is built once at
//! startup and then only read, which makes it safe to share across the
//! rayon workers used by [`Normalizer::normalize_corpus`].

use super::stopwords::StopwordFilter;
use super::tokenizer::{remove_punctuation, tokenize};
use crate::errors::Result;
use crate::types::{Corpus, LexRankConfig, NormalizedDocument, RawCorpus, RawDocument, TermCounts};
use rayon::prelude::*;
use rust_stemmers::{Algorithm, Stemmer};
use std::fmt;

/// Stateless-after-construction term normalizer
pub struct Normalizer {
    stopwords: StopwordFilter,
    /// `None` for languages without a Snowball stemmer; terms stay unstemmed
    stemmer: Option<Stemmer>,
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("stopwords", &self.stopwords.len())
            .field("stemming", &self.stemmer.is_some())
            .finish()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(StopwordFilter::new("en"))
    }
}

impl Normalizer {
    /// Create a normalizer with the given stopword set and an English stemmer
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self::with_stemmer(stopwords, Some(Algorithm::English))
    }

    /// Create a normalizer with an explicit stemming algorithm, or none
    pub fn with_stemmer(stopwords: StopwordFilter, algorithm: Option<Algorithm>) -> Self {
        Self {
            stopwords,
            stemmer: algorithm.map(Stemmer::create),
        }
    }

    /// Build the normalizer described by `cfg`.
    ///
    /// Stopwords come from `cfg.stopwords_file` when set, otherwise from the
    /// built-in list for `cfg.language`; `cfg.stopwords` is added on top.
    /// The stemmer follows `cfg.language`.
    pub fn from_config(cfg: &LexRankConfig) -> Result<Self> {
        let mut stopwords = match &cfg.stopwords_file {
            Some(path) => StopwordFilter::from_file(path)?,
            None => StopwordFilter::new(&cfg.language),
        };
        stopwords.add_stopwords(cfg.stopwords.as_slice());

        let algorithm = stemmer_algorithm(&cfg.language);
        if algorithm.is_none() {
            tracing::debug!(
                language = cfg.language.as_str(),
                "no stemmer for language, terms stay unstemmed"
            );
        }
        Ok(Self::with_stemmer(stopwords, algorithm))
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Normalize a single token.
    ///
    /// Returns `None` when the token should be dropped: it was pure
    /// punctuation or it is a stopword.
    pub fn normalize(&self, token: &str) -> Option<String> {
        let stripped = remove_punctuation(token);
        if stripped.is_empty() {
            return None;
        }

        let folded = stripped.to_lowercase();
        if self.stopwords.is_stopword(&folded) {
            return None;
        }

        let stem = match &self.stemmer {
            Some(stemmer) => stemmer.stem(&folded).into_owned(),
            None => folded,
        };
        if stem.is_empty() {
            None
        } else {
            Some(stem)
        }
    }

    /// Normalize every token, dropping the ones that vanish. Survivors keep
    /// their relative order.
    pub fn normalize_all<'a, I>(&self, tokens: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .filter_map(|token| self.normalize(token))
            .collect()
    }

    /// Tokenize and normalize one sentence
    pub fn normalize_sentence(&self, sentence: &str) -> Vec<String> {
        self.normalize_all(tokenize(sentence))
    }

    /// Normalize a raw document into per-sentence term counts.
    ///
    /// Sentences left without any term are dropped; the returned document
    /// records which raw sentence each surviving one came from.
    pub fn normalize_document(&self, raw: &RawDocument) -> NormalizedDocument {
        let mut doc = NormalizedDocument::new();

        for (idx, sentence) in raw.sentences.iter().enumerate() {
            let terms = self.normalize_sentence(sentence);
            if terms.is_empty() {
                tracing::debug!(sentence = idx, "sentence has no terms after normalization, dropping");
                continue;
            }

            let mut counts = TermCounts::default();
            for term in terms {
                *counts.entry(term).or_insert(0) += 1;
            }
            doc.push(counts, idx);
        }

        doc
    }

    /// Normalize every document of a corpus in parallel
    pub fn normalize_corpus(&self, raw: &RawCorpus) -> Corpus {
        raw.par_iter()
            .map(|(&id, doc)| (id, self.normalize_document(doc)))
            .collect()
    }
}

/// Snowball algorithm matching a stopword language code. Unknown codes use
/// English, like the stopword lists; Polish has no stemmer.
fn stemmer_algorithm(language: &str) -> Option<Algorithm> {
    let algorithm = match language.to_lowercase().as_str() {
        "de" | "german" => Algorithm::German,
        "fr" | "french" => Algorithm::French,
        "es" | "spanish" => Algorithm::Spanish,
        "it" | "italian" => Algorithm::Italian,
        "pt" | "portuguese" => Algorithm::Portuguese,
        "nl" | "dutch" => Algorithm::Dutch,
        "ru" | "russian" => Algorithm::Russian,
        "sv" | "swedish" => Algorithm::Swedish,
        "no" | "norwegian" => Algorithm::Norwegian,
        "da" | "danish" => Algorithm::Danish,
        "fi" | "finnish" => Algorithm::Finnish,
        "hu" | "hungarian" => Algorithm::Hungarian,
        "tr" | "turkish" => Algorithm::Turkish,
        "pl" | "polish" => return None,
        _ => Algorithm::English,
    };
    Some(algorithm)
}
