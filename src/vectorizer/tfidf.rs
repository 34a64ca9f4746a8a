use num::Num;

use crate::{
    utils::math::vector::ZeroSpVec,
    vectorizer::{corpus::Corpus, term::TermFrequency},
};

/// TF-IDF calculation engine.
///
/// Implementations decide how term frequency and inverse document
/// frequency are weighted. Vectors are laid out in `vocab` order.
pub trait TFIDFEngine<N>
where
    N: Num + Copy,
{
    /// Generate the IDF vector
    /// # Arguments
    /// * `corpus` - corpus the document frequencies come from
    /// * `vocab` - term dimension order
    fn idf_vec(corpus: &Corpus, vocab: &[&str]) -> Vec<N>;

    /// Generate the TF vector of one document
    /// # Arguments
    /// * `freq` - term frequencies of the document
    /// * `vocab` - term dimension order
    fn tf_vec(freq: &TermFrequency, vocab: &[&str]) -> ZeroSpVec<N>;

    /// Element-wise TF * IDF
    fn tfidf_vec(freq: &TermFrequency, idf: &[N], vocab: &[&str]) -> ZeroSpVec<N> {
        let tf = Self::tf_vec(freq, vocab);
        let mut tfidf = ZeroSpVec::with_capacity(tf.nnz());
        for (dim, weight) in idf.iter().enumerate() {
            let value = tf.get(dim).unwrap_or_else(N::zero);
            tfidf.push(value * *weight);
        }
        tfidf
    }
}

/// Default TF-IDF engine
///
/// * tf: raw occurrence count
/// * idf: smoothed, `ln((1 + n) / (1 + df)) + 1`
///
/// Supports `f32` and `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// Smoothed IDF of a term found in `doc_freq` of `doc_num` documents.
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

macro_rules! impl_default_engine {
    ($($t:ty),*) => {$(
        impl TFIDFEngine<$t> for DefaultTFIDFEngine {
            fn idf_vec(corpus: &Corpus, vocab: &[&str]) -> Vec<$t> {
                let doc_num = corpus.get_doc_num();
                vocab
                    .iter()
                    .map(|term| Self::idf_calc(doc_num, corpus.get_term_count(term)) as $t)
                    .collect()
            }

            fn tf_vec(freq: &TermFrequency, vocab: &[&str]) -> ZeroSpVec<$t> {
                let mut tf_vec = ZeroSpVec::with_capacity(freq.term_num());
                for term in vocab {
                    tf_vec.push(freq.term_count(term) as $t);
                }
                tf_vec
            }
        }
    )*};
}

impl_default_engine!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothed_idf_over_two_documents() {
        // shared term: ln(3/3) + 1 = 1
        assert!((DefaultTFIDFEngine::idf_calc(2, 2) - 1.0).abs() < 1e-12);
        // term unique to one document: ln(3/2) + 1
        let expected = (1.5_f64).ln() + 1.0;
        assert!((DefaultTFIDFEngine::idf_calc(2, 1) - expected).abs() < 1e-12);
    }

    #[test]
    fn tfidf_is_count_times_idf() {
        let mut corpus = Corpus::new();
        let a: TermFrequency = ["cat", "cat", "dog"].into_iter().collect();
        let b: TermFrequency = ["dog"].into_iter().collect();
        corpus.add_doc(&a);
        corpus.add_doc(&b);
        let vocab = corpus.vocab();
        let idf: Vec<f64> = DefaultTFIDFEngine::idf_vec(&corpus, &vocab);
        let vec: ZeroSpVec<f64> = DefaultTFIDFEngine::tfidf_vec(&b, &idf, &vocab);
        assert_eq!(vec.len(), 2);
        assert_eq!(vec.get(0), Some(0.0));
        assert!((vec.get(1).unwrap() - 1.0).abs() < 1e-12);

        let vec: ZeroSpVec<f64> = DefaultTFIDFEngine::tfidf_vec(&a, &idf, &vocab);
        let expected = 2.0 * DefaultTFIDFEngine::idf_calc(2, 1);
        assert!((vec.get(0).unwrap() - expected).abs() < 1e-12);
    }
}
