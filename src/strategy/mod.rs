//! Comparison strategies: alternative ways of walking the raw text pair and
//! counting literal matches.
//!
//! The names come from CPU scheduling disciplines but the strategies are
//! plain text traversals. Each reports elapsed time and a match count; the
//! count is diagnostic only and never feeds the verdict.

pub mod chunked;
pub mod pacing;
pub mod shortest_first;
pub mod token_aligned;

use std::{fmt, str::FromStr, time::Instant};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimilarityError};

pub use self::{
    chunked::{ChunkedScan, DEFAULT_CHUNK_SIZE},
    pacing::{CancelFlag, NoCost, ScanContext, SleepCost, UnitCost},
    shortest_first::ShortestFirstScan,
    token_aligned::TokenAlignedScan,
};

/// Name reported when a strategy name is not recognized.
pub const NO_STRATEGY_NAME: &str = "No algorithm selected";

/// The selectable comparison strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Fixed-size character chunks, positional pairing
    RoundRobin,
    /// Character walk led by the shorter text
    ShortestJobNext,
    /// Whitespace words, positional pairing
    #[default]
    PriorityScheduling,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::RoundRobin,
        Strategy::ShortestJobNext,
        Strategy::PriorityScheduling,
    ];

    /// Display name, also the name reported in results.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::RoundRobin => "Round Robin",
            Strategy::ShortestJobNext => "Shortest Job Next",
            Strategy::PriorityScheduling => "Priority Scheduling",
        }
    }

    /// Exact display name lookup: `Round Robin`, `Shortest Job Next`,
    /// `Priority Scheduling`. Case and spacing must match.
    pub fn from_name(name: &str) -> Option<Self> {
        Strategy::ALL.into_iter().find(|strategy| strategy.name() == name)
    }

    /// Run the scan and time it.
    pub fn run(
        &self,
        a: &str,
        b: &str,
        params: &ScanParams,
        ctx: &ScanContext,
    ) -> Result<StrategyResult> {
        let started = Instant::now();
        let match_count = match self {
            Strategy::RoundRobin => {
                ChunkedScan::new(params.chunk_size_or_default())?.count_matches(a, b, ctx)?
            }
            Strategy::ShortestJobNext => ShortestFirstScan.count_matches(a, b, ctx)?,
            Strategy::PriorityScheduling => TokenAlignedScan.count_matches(a, b, ctx)?,
        };
        let elapsed_seconds = started.elapsed().as_secs_f64();
        tracing::debug!(strategy = self.name(), match_count, elapsed_seconds, "scan finished");
        Ok(StrategyResult {
            name: self.name().to_string(),
            elapsed_seconds,
            match_count,
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = SimilarityError;

    /// Lenient parsing for command lines and config files: display names and
    /// their kebab/snake forms, case-insensitively (`Round Robin`,
    /// `round-robin`, `ROUND_ROBIN`).
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "roundrobin" => Ok(Strategy::RoundRobin),
            "shortestjobnext" => Ok(Strategy::ShortestJobNext),
            "priorityscheduling" => Ok(Strategy::PriorityScheduling),
            _ => Err(SimilarityError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Strategy parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanParams {
    /// Round Robin chunk length in characters; `None` means the default of 25.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_size: Option<usize>,
}

impl ScanParams {
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self { chunk_size: Some(chunk_size) }
    }

    pub fn chunk_size_or_default(&self) -> usize {
        self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE)
    }

    /// Reject out-of-range values before any work starts.
    pub fn validate(&self) -> Result<()> {
        ChunkedScan::new(self.chunk_size_or_default()).map(|_| ())
    }
}

/// Outcome of one strategy run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyResult {
    pub name: String,
    /// Wall-clock time of the scan in seconds
    pub elapsed_seconds: f64,
    /// Meaning depends on the strategy: equal chunks, characters or words
    pub match_count: usize,
}

impl StrategyResult {
    /// Zero-valued result used for unrecognized strategy names.
    pub fn fallback() -> Self {
        Self {
            name: NO_STRATEGY_NAME.to_string(),
            elapsed_seconds: 0.0,
            match_count: 0,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.name == NO_STRATEGY_NAME
    }
}

/// Run a strategy.
pub fn run(
    strategy: Strategy,
    a: &str,
    b: &str,
    params: &ScanParams,
    ctx: &ScanContext,
) -> Result<StrategyResult> {
    strategy.run(a, b, params, ctx)
}

/// Run a strategy selected by its exact display name.
///
/// Any other name is not an error: the zero-valued fallback result comes
/// back instead.
pub fn run_by_name(
    name: &str,
    a: &str,
    b: &str,
    params: &ScanParams,
    ctx: &ScanContext,
) -> Result<StrategyResult> {
    match Strategy::from_name(name) {
        Some(strategy) => strategy.run(a, b, params, ctx),
        None => {
            tracing::warn!(strategy = %name, "unknown strategy, using fallback result");
            Ok(StrategyResult::fallback())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_and_cli_names() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.name().parse::<Strategy>().unwrap(), strategy);
        }
        assert_eq!("round-robin".parse::<Strategy>().unwrap(), Strategy::RoundRobin);
        assert_eq!("SHORTEST_JOB_NEXT".parse::<Strategy>().unwrap(), Strategy::ShortestJobNext);
        assert!(matches!(
            "Bogus".parse::<Strategy>(),
            Err(SimilarityError::UnknownStrategy(name)) if name == "Bogus"
        ));
    }

    #[test]
    fn names_must_match_exactly() {
        assert_eq!(Strategy::from_name("Round Robin"), Some(Strategy::RoundRobin));
        assert_eq!(Strategy::from_name("round robin"), None);
        assert_eq!(Strategy::from_name("round-robin"), None);
        let ctx = ScanContext::new();
        for name in ["round robin", "PRIORITY SCHEDULING", "shortest-job-next"] {
            let result = run_by_name(name, "aaaa", "aaaa", &ScanParams::default(), &ctx).unwrap();
            assert!(result.is_fallback());
        }
    }

    #[test]
    fn default_is_priority_scheduling() {
        assert_eq!(Strategy::default(), Strategy::PriorityScheduling);
    }

    #[test]
    fn unknown_name_falls_back() {
        let result = run_by_name("Bogus", "a", "b", &ScanParams::default(), &ScanContext::new()).unwrap();
        assert_eq!(result.name, "No algorithm selected");
        assert_eq!(result.elapsed_seconds, 0.0);
        assert_eq!(result.match_count, 0);
        assert!(result.is_fallback());
    }

    #[test]
    fn round_robin_uses_chunk_size() {
        let params = ScanParams::with_chunk_size(4);
        let result = run(Strategy::RoundRobin, "aaaa bbbb", "aaaa cccc", &params, &ScanContext::new()).unwrap();
        assert_eq!(result.name, "Round Robin");
        assert_eq!(result.match_count, 1);
    }

    #[test]
    fn round_robin_rejects_zero_chunk_size() {
        let params = ScanParams::with_chunk_size(0);
        assert!(params.validate().is_err());
        assert!(matches!(
            run(Strategy::RoundRobin, "a", "a", &params, &ScanContext::new()),
            Err(SimilarityError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn named_runs() {
        let ctx = ScanContext::new();
        let params = ScanParams::default();
        let sjn = run_by_name("Shortest Job Next", "cat", "cats", &params, &ctx).unwrap();
        assert_eq!((sjn.name.as_str(), sjn.match_count), ("Shortest Job Next", 3));
        let ps = run_by_name("Priority Scheduling", "the cat sat", "the dog sat", &params, &ctx).unwrap();
        assert_eq!((ps.name.as_str(), ps.match_count), ("Priority Scheduling", 2));
    }

    #[test]
    fn cancelled_scan_fails() {
        let flag = CancelFlag::new();
        flag.cancel();
        let ctx = ScanContext::new().with_cancel_flag(flag);
        assert_eq!(
            run(Strategy::PriorityScheduling, "a b", "a b", &ScanParams::default(), &ctx),
            Err(SimilarityError::Cancelled)
        );
    }
}
