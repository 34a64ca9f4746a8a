/// This crate is a document similarity engine for English text.
pub mod config;
pub mod error;
pub mod evaluate;
pub mod loader;
pub mod metrics;
pub mod normalizer;
pub mod record;
pub mod strategy;
pub mod utils;
pub mod vectorizer;

/// Evaluate
/// Compares two raw documents and returns one `ComparisonRecord`.
///
/// Both texts are normalized (filtered and lemmatized token flavors), scored
/// with word Jaccard, lemma Jaccard and pair-local TF-IDF cosine, then scanned
/// with the selected strategy. The verdict is taken from the filtered token
/// overlap percentage only.
///
/// `evaluate_by_name` accepts a strategy name instead of a `Strategy`; an
/// unrecognized name yields the "No algorithm selected" result rather than
/// an error.
pub use evaluate::{evaluate, evaluate_by_name, Evaluator};

/// Comparison Record
/// Immutable result of one comparison.
/// Fields are read through accessors. The record serializes with serde and
/// round-trips through CBOR (`to_cbor` / `from_cbor`).
pub use record::{ComparisonRecord, Severity, Verdict};

/// Strategy
/// The three selectable comparison strategies:
/// - Round Robin: fixed-size character chunks compared position by position
/// - Shortest Job Next: character walk led by the shorter document
/// - Priority Scheduling: whitespace words compared position by position
///
/// Their match counts are diagnostic and never change the verdict.
pub use strategy::{ScanContext, ScanParams, Strategy, StrategyResult};

/// Text Normalizer
/// Lower-cases, tokenizes, removes English stop words and lemmatizes.
pub use normalizer::{normalize, NormalizedText, TextNormalizer};

/// Metric Set
/// Word Jaccard, lemma Jaccard and TF-IDF cosine for one document pair.
pub use metrics::MetricSet;

pub use config::{ComparisonConfig, ConfigError};
pub use error::{Result, SimilarityError};
pub use loader::{DocumentLoader, LoadError, PlainTextLoader};

/// TF IDF Calculation Engine Trait
/// Defines how IDF and TF vectors are computed for the pair vectorizer.
/// `DefaultTFIDFEngine` implements smoothed IDF with raw term counts for
/// `f32` and `f64`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};
