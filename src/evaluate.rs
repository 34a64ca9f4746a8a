//! Aggregation: normalize, score, scan, classify.

use crate::{
    config::ComparisonConfig,
    error::Result,
    metrics::MetricSet,
    normalizer::{word_count, TextNormalizer},
    record::ComparisonRecord,
    strategy::{run_by_name, ScanContext, ScanParams, Strategy, StrategyResult},
};

/// Runs the whole comparison pipeline for one document pair.
///
/// Holds no per-call state, so one evaluator can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    normalizer: TextNormalizer,
    ctx: ScanContext,
}

impl Evaluator {
    /// No pacing, no cancellation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(ctx: ScanContext) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            ctx,
        }
    }

    /// Pacing taken from the config.
    pub fn with_config(config: &ComparisonConfig) -> Self {
        Self::with_context(config.scan_context())
    }

    /// Compare two documents with the given strategy.
    pub fn evaluate(
        &self,
        a: &str,
        b: &str,
        strategy: Strategy,
        params: &ScanParams,
    ) -> Result<ComparisonRecord> {
        self.evaluate_with(a, b, params, |la, lb| strategy.run(la, lb, params, &self.ctx))
    }

    /// Compare two documents with a strategy chosen by name.
    /// Unknown names produce the fallback strategy result, not an error.
    pub fn evaluate_by_name(
        &self,
        a: &str,
        b: &str,
        strategy: &str,
        params: &ScanParams,
    ) -> Result<ComparisonRecord> {
        self.evaluate_with(a, b, params, |la, lb| run_by_name(strategy, la, lb, params, &self.ctx))
    }

    fn evaluate_with<F>(&self, a: &str, b: &str, params: &ScanParams, scan: F) -> Result<ComparisonRecord>
    where
        F: FnOnce(&str, &str) -> Result<StrategyResult>,
    {
        params.validate()?;

        let lowered_a = a.to_lowercase();
        let lowered_b = b.to_lowercase();
        let (normalized_a, normalized_b) = rayon::join(
            || self.normalizer.normalize_lowered(&lowered_a),
            || self.normalizer.normalize_lowered(&lowered_b),
        );

        let metrics = MetricSet::compute(&normalized_a, &normalized_b);
        let strategy = scan(&lowered_a, &lowered_b)?;
        let record = ComparisonRecord::new(metrics, strategy, (word_count(a), word_count(b)));

        tracing::debug!(
            percentage = record.similarity_percentage(),
            severity = %record.severity(),
            strategy = record.strategy_name(),
            "comparison finished"
        );
        Ok(record)
    }
}

/// Compare two documents with a fresh default evaluator.
pub fn evaluate(a: &str, b: &str, strategy: Strategy, params: &ScanParams) -> Result<ComparisonRecord> {
    Evaluator::new().evaluate(a, b, strategy, params)
}

/// Compare two documents, strategy chosen by name.
pub fn evaluate_by_name(a: &str, b: &str, strategy: &str, params: &ScanParams) -> Result<ComparisonRecord> {
    Evaluator::new().evaluate_by_name(a, b, strategy, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::SimilarityError, record::Severity, strategy::CancelFlag};

    #[test]
    fn identical_documents_are_high() {
        let text = "Memory safety without garbage collection is Rust's main promise.";
        let record = evaluate(text, text, Strategy::PriorityScheduling, &ScanParams::default()).unwrap();
        assert_eq!(record.similarity_percentage(), 100.0);
        assert_eq!(record.severity(), Severity::High);
        assert_eq!(record.strategy_match_count(), 9);
        assert_eq!(record.word_counts(), (9, 9));
    }

    #[test]
    fn strategy_runs_on_lower_cased_text() {
        let record = evaluate("The Cat", "the cat", Strategy::PriorityScheduling, &ScanParams::default()).unwrap();
        assert_eq!(record.strategy_match_count(), 2);
    }

    #[test]
    fn empty_documents_resolve_to_zero() {
        let record = evaluate("", "", Strategy::ShortestJobNext, &ScanParams::default()).unwrap();
        assert_eq!(record.similarity_percentage(), 0.0);
        assert_eq!(record.jaccard_word(), 0.0);
        assert_eq!(record.jaccard_lemma(), 0.0);
        assert_eq!(record.cosine_tfidf(), 0.0);
        assert_eq!(record.severity(), Severity::Low);
    }

    #[test]
    fn zero_chunk_size_fails_before_any_work() {
        let err = evaluate("a", "b", Strategy::RoundRobin, &ScanParams::with_chunk_size(0)).unwrap_err();
        assert!(matches!(err, SimilarityError::InvalidParameter { name: "chunk_size", .. }));
    }

    #[test]
    fn unknown_strategy_name_still_scores() {
        let record = evaluate_by_name("rust code", "rust code", "Bogus", &ScanParams::default()).unwrap();
        assert_eq!(record.strategy_name(), "No algorithm selected");
        assert_eq!(record.strategy_match_count(), 0);
        assert_eq!(record.processing_time_seconds(), 0.0);
        assert_eq!(record.similarity_percentage(), 100.0);
    }

    #[test]
    fn cancellation_propagates() {
        let flag = CancelFlag::new();
        flag.cancel();
        let evaluator = Evaluator::with_context(ScanContext::new().with_cancel_flag(flag));
        let err = evaluator
            .evaluate("a b", "a b", Strategy::PriorityScheduling, &ScanParams::default())
            .unwrap_err();
        assert_eq!(err, SimilarityError::Cancelled);
    }
}
