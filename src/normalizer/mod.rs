//! Text normalization: lower-casing, tokenization, stop-word removal and
//! part-of-speech informed lemmatization.

pub mod lemmatizer;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

use self::{
    lemmatizer::lemmatize,
    stopwords::is_stop_word,
    tagger::tag,
    tokenizer::{whitespace_tokenize, word_tokenize},
};

/// The two token flavors derived from one document.
///
/// Order is preserved in both sequences; metrics that only care about
/// membership collapse them into sets themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedText {
    /// Whitespace tokens with stop words removed.
    pub filtered: Vec<String>,
    /// Word-boundary tokens with stop words removed, lemmatized.
    pub lemmatized: Vec<String>,
}

impl NormalizedText {
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty() && self.lemmatized.is_empty()
    }
}

/// English normalizer.
/// Stateless; the stop-word set and lemma tables are immutable statics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        TextNormalizer
    }

    /// Produce the filtered and lemmatized token sequences of `text`.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        self.normalize_lowered(&text.to_lowercase())
    }

    /// Same as [`normalize`](Self::normalize) for text that is already lower-cased.
    pub fn normalize_lowered(&self, lowered: &str) -> NormalizedText {
        let filtered = self.filter_tokens(lowered);
        let lemmatized = self.lemmatize_tokens(lowered);
        tracing::trace!(
            filtered = filtered.len(),
            lemmatized = lemmatized.len(),
            "normalized document"
        );
        NormalizedText { filtered, lemmatized }
    }

    /// Whitespace split, then stop-word removal. Expects lower-cased input.
    pub fn filter_tokens(&self, lowered: &str) -> Vec<String> {
        whitespace_tokenize(lowered)
            .into_iter()
            .filter(|token| !is_stop_word(token))
            .collect()
    }

    /// Word-boundary split, stop-word removal, tagging, lemmatization.
    /// Expects lower-cased input.
    pub fn lemmatize_tokens(&self, lowered: &str) -> Vec<String> {
        word_tokenize(lowered)
            .into_iter()
            .filter(|token| !is_stop_word(token))
            .map(|token| lemmatize(&token, tag(&token)))
            .collect()
    }
}

/// Normalize with the default English normalizer.
pub fn normalize(text: &str) -> NormalizedText {
    TextNormalizer::new().normalize(text)
}

/// Number of whitespace-separated words in a raw document.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
