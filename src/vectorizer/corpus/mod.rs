use ahash::RandomState;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::term::TermFrequency;

/// Document count and per-term document frequency.
///
/// A comparison builds one corpus from exactly the two documents being
/// compared, so IDF values are pair-relative rather than corpus-stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    /// number of documents added
    pub doc_num: u64,
    /// number of documents each term appears in, first-seen order
    pub term_counts: IndexMap<Box<str>, u64, RandomState>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_counts: IndexMap::with_hasher(RandomState::new()),
        }
    }

    /// Add a document's distinct terms to the corpus
    pub fn add_set<T>(&mut self, terms: &[T])
    where
        T: AsRef<str>,
    {
        self.doc_num += 1;
        for term in terms {
            self.term_counts
                .entry(term.as_ref().into())
                .and_modify(|count| *count += 1)
                .or_insert(1);
        }
    }

    /// Add a document from its term frequencies
    pub fn add_doc(&mut self, freq: &TermFrequency) {
        self.add_set(&freq.term_set_ref_str());
    }

    /// Get the number of documents in the corpus
    pub fn get_doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the number of documents containing `term`
    pub fn get_term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_counts.len()
    }

    /// Vocabulary in first-seen order; this is the vector dimension order.
    pub fn vocab(&self) -> Vec<&str> {
        self.term_counts.keys().map(|term| term.as_ref()).collect()
    }
}
