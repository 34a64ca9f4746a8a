use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{metrics::MetricSet, strategy::StrategyResult};

/// Percentage at or above which similarity is high.
pub const HIGH_THRESHOLD: f64 = 80.0;
/// Percentage at or above which similarity is moderate.
pub const MODERATE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl Severity {
    /// Thresholds are closed on the lower bound: 80.0 is high, 50.0 is moderate.
    pub fn classify(percentage: f64) -> Self {
        if percentage >= HIGH_THRESHOLD {
            Severity::High
        } else if percentage >= MODERATE_THRESHOLD {
            Severity::Moderate
        } else {
            Severity::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Moderate => "moderate",
            Severity::High => "high",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Severity::High => "Identical or very similar content detected",
            Severity::Moderate => "Possible paraphrasing or close rephrasing",
            Severity::Low => "No strong evidence of similarity",
        }
    }

    /// One-line result text for reports.
    pub fn headline(&self) -> &'static str {
        match self {
            Severity::High => "High similarity detected!",
            Severity::Moderate => "Moderate similarity detected!",
            Severity::Low => "Low similarity detected.",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub severity: Severity,
    pub description: String,
}

impl Verdict {
    pub fn from_percentage(percentage: f64) -> Self {
        let severity = Severity::classify(percentage);
        Self {
            severity,
            description: severity.description().to_string(),
        }
    }
}

/// Result of one document comparison.
///
/// Built once by the evaluator and read through accessors only. The
/// similarity percentage and verdict come from the filtered token overlap;
/// the strategy fields are informational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRecord {
    jaccard_word: f64,
    jaccard_lemma: f64,
    cosine_tfidf: f64,
    similar_word_count: usize,
    similarity_percentage: f64,
    strategy_name: String,
    processing_time_seconds: f64,
    strategy_match_count: usize,
    verdict: Verdict,
    word_count_a: usize,
    word_count_b: usize,
}

impl ComparisonRecord {
    pub(crate) fn new(
        metrics: MetricSet,
        strategy: StrategyResult,
        word_counts: (usize, usize),
    ) -> Self {
        let similarity_percentage = metrics.similarity_percentage();
        Self {
            jaccard_word: metrics.jaccard_word,
            jaccard_lemma: metrics.jaccard_lemma,
            cosine_tfidf: metrics.cosine_tfidf,
            similar_word_count: metrics.similar_word_count,
            similarity_percentage,
            strategy_name: strategy.name,
            processing_time_seconds: strategy.elapsed_seconds,
            strategy_match_count: strategy.match_count,
            verdict: Verdict::from_percentage(similarity_percentage),
            word_count_a: word_counts.0,
            word_count_b: word_counts.1,
        }
    }

    pub fn jaccard_word(&self) -> f64 {
        self.jaccard_word
    }

    pub fn jaccard_lemma(&self) -> f64 {
        self.jaccard_lemma
    }

    pub fn cosine_tfidf(&self) -> f64 {
        self.cosine_tfidf
    }

    pub fn similar_word_count(&self) -> usize {
        self.similar_word_count
    }

    pub fn similarity_percentage(&self) -> f64 {
        self.similarity_percentage
    }

    pub fn strategy_name(&self) -> &str {
        &self.strategy_name
    }

    pub fn processing_time_seconds(&self) -> f64 {
        self.processing_time_seconds
    }

    pub fn strategy_match_count(&self) -> usize {
        self.strategy_match_count
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    pub fn severity(&self) -> Severity {
        self.verdict.severity
    }

    /// Whitespace word counts of the raw documents A and B.
    pub fn word_counts(&self) -> (usize, usize) {
        (self.word_count_a, self.word_count_b)
    }

    /// Compact binary form for collaborators that store records.
    pub fn to_cbor(&self) -> serde_cbor::Result<Vec<u8>> {
        serde_cbor::to_vec(self)
    }

    pub fn from_cbor(bytes: &[u8]) -> serde_cbor::Result<Self> {
        serde_cbor::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn thresholds_are_closed_on_the_lower_bound() {
        assert_eq!(Severity::classify(100.0), Severity::High);
        assert_eq!(Severity::classify(80.0), Severity::High);
        assert_eq!(Severity::classify(79.99), Severity::Moderate);
        assert_eq!(Severity::classify(50.0), Severity::Moderate);
        assert_eq!(Severity::classify(49.99), Severity::Low);
        assert_eq!(Severity::classify(0.0), Severity::Low);
    }

    #[test]
    fn verdict_text() {
        let verdict = Verdict::from_percentage(85.0);
        assert_eq!(verdict.description, "Identical or very similar content detected");
        assert_eq!(Severity::Moderate.headline(), "Moderate similarity detected!");
        assert_eq!(Severity::Low.to_string(), "low");
    }

    #[test]
    fn cbor_round_trip() {
        let metrics = MetricSet {
            jaccard_word: 0.5,
            jaccard_lemma: 0.6,
            cosine_tfidf: 0.7,
            similar_word_count: 2,
            union_word_count: 4,
        };
        let strategy = StrategyResult {
            name: "Priority Scheduling".to_string(),
            elapsed_seconds: 0.25,
            match_count: 3,
        };
        let record = ComparisonRecord::new(metrics, strategy, (5, 6));
        assert_eq!(record.similarity_percentage(), 50.0);
        assert_eq!(record.severity(), Severity::Moderate);
        let bytes = record.to_cbor().unwrap();
        assert_eq!(ComparisonRecord::from_cbor(&bytes).unwrap(), record);
    }
}
