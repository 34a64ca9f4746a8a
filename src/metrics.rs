//! Set and vector similarity metrics over normalized token sequences.

use std::collections::HashSet;

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use crate::{normalizer::NormalizedText, vectorizer::tfidf_cosine};

type TokenSet<'a> = HashSet<&'a str, RandomState>;

fn token_set<T: AsRef<str>>(tokens: &[T]) -> TokenSet<'_> {
    tokens.iter().map(|t| t.as_ref()).collect()
}

/// Sizes of the intersection and union of two token sets.
/// Duplicates collapse before counting.
pub fn overlap<T: AsRef<str>>(a: &[T], b: &[T]) -> (usize, usize) {
    let set_a = token_set(a);
    let set_b = token_set(b);
    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - intersection;
    (intersection, union)
}

/// Jaccard similarity |A ∩ B| / |A ∪ B|.
/// An empty union gives 0.
pub fn jaccard<T: AsRef<str>>(a: &[T], b: &[T]) -> f64 {
    match overlap(a, b) {
        (_, 0) => 0.0,
        (intersection, union) => intersection as f64 / union as f64,
    }
}

/// Number of distinct tokens shared by both sequences.
pub fn similar_word_count<T: AsRef<str>>(a: &[T], b: &[T]) -> usize {
    overlap(a, b).0
}

/// Filtered-token overlap as a percentage in [0, 100].
/// This alone drives the verdict.
pub fn similarity_percentage<T: AsRef<str>>(a: &[T], b: &[T]) -> f64 {
    jaccard(a, b) * 100.0
}

/// All metric outputs for one document pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricSet {
    /// Jaccard over filtered tokens
    pub jaccard_word: f64,
    /// Jaccard over lemmatized tokens
    pub jaccard_lemma: f64,
    /// Cosine over pair-local TF-IDF vectors
    pub cosine_tfidf: f64,
    /// Distinct filtered tokens shared by both documents
    pub similar_word_count: usize,
    /// Union size of the filtered token sets
    pub union_word_count: usize,
}

impl MetricSet {
    pub fn compute(a: &NormalizedText, b: &NormalizedText) -> Self {
        let (similar_word_count, union_word_count) = overlap(&a.filtered, &b.filtered);
        let jaccard_word = if union_word_count == 0 {
            0.0
        } else {
            similar_word_count as f64 / union_word_count as f64
        };
        Self {
            jaccard_word,
            jaccard_lemma: jaccard(&a.lemmatized, &b.lemmatized),
            cosine_tfidf: tfidf_cosine(&a.filtered, &b.filtered),
            similar_word_count,
            union_word_count,
        }
    }

    /// Similarity percentage derived from the filtered overlap.
    pub fn similarity_percentage(&self) -> f64 {
        self.jaccard_word * 100.0
    }
}
