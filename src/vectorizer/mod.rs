pub mod corpus;
pub mod term;
pub mod tfidf;

use std::marker::PhantomData;

use num::Num;

use crate::{
    normalizer::tokenizer::tfidf_terms,
    utils::math::vector::ZeroSpVec,
    vectorizer::{
        corpus::Corpus,
        term::TermFrequency,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    },
};

/// TF-IDF vectors of exactly two documents.
///
/// The corpus is the pair itself: document frequencies, and therefore IDF,
/// only reflect the two documents being compared. The same document scored
/// against a different partner gets different weights.
#[derive(Debug, Clone)]
pub struct PairVectorizer<N = f64, E = DefaultTFIDFEngine>
where
    N: Num + Copy,
    E: TFIDFEngine<N>,
{
    /// Pair corpus
    pub corpus: Corpus,
    /// Term frequencies of document A and B
    pub docs: [TermFrequency; 2],
    /// IDF vector in vocabulary order
    pub idf_vec: Vec<N>,
    _marker: PhantomData<E>,
}

impl<N, E> PairVectorizer<N, E>
where
    N: Num + Copy + Into<f64>,
    E: TFIDFEngine<N>,
{
    /// Build from two raw term sequences.
    pub fn new(doc_a: TermFrequency, doc_b: TermFrequency) -> Self {
        let mut corpus = Corpus::new();
        corpus.add_doc(&doc_a);
        corpus.add_doc(&doc_b);
        let idf_vec = E::idf_vec(&corpus, &corpus.vocab());
        Self {
            corpus,
            docs: [doc_a, doc_b],
            idf_vec,
            _marker: PhantomData,
        }
    }

    /// Build from two documents' filtered tokens.
    ///
    /// Tokens are joined with spaces and re-split into TF-IDF terms, so
    /// punctuation is dropped and single-character terms are ignored.
    pub fn from_tokens<T>(tokens_a: &[T], tokens_b: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        Self::new(Self::term_freq(tokens_a), Self::term_freq(tokens_b))
    }

    fn term_freq<T: AsRef<str>>(tokens: &[T]) -> TermFrequency {
        let joined = tokens.iter().map(|t| t.as_ref()).collect::<Vec<&str>>().join(" ");
        tfidf_terms(&joined).into_iter().collect()
    }

    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.corpus.vocab_size()
    }

    /// TF-IDF vectors of document A and B.
    pub fn tfidf_vectors(&self) -> (ZeroSpVec<N>, ZeroSpVec<N>) {
        let vocab = self.corpus.vocab();
        (
            E::tfidf_vec(&self.docs[0], &self.idf_vec, &vocab),
            E::tfidf_vec(&self.docs[1], &self.idf_vec, &vocab),
        )
    }

    /// Cosine similarity of the two TF-IDF vectors, in [0, 1].
    /// Empty vocabulary or an all-zero vector gives 0.
    pub fn cosine_similarity(&self) -> f64 {
        if self.vocab_size() == 0 {
            return 0.0;
        }
        let (a, b) = self.tfidf_vectors();
        a.cosine_similarity(&b).clamp(0.0, 1.0)
    }
}

/// Cosine similarity over pair-local TF-IDF vectors of two filtered token sequences.
pub fn tfidf_cosine<T>(tokens_a: &[T], tokens_b: &[T]) -> f64
where
    T: AsRef<str>,
{
    PairVectorizer::<f64, DefaultTFIDFEngine>::from_tokens(tokens_a, tokens_b).cosine_similarity()
}
