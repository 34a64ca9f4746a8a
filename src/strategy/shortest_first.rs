use crate::{error::Result, strategy::pacing::ScanContext};

/// "Shortest Job Next": character-by-character walk led by the shorter text.
///
/// The shorter text (A on ties) is primary. Characters at the same index are
/// compared over the primary's length. The remaining tail of the longer
/// text is then processed as well; it can never add a match because the
/// primary is already exhausted. That tail pass is kept so timings match
/// the historical behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortestFirstScan;

impl ShortestFirstScan {
    pub fn count_matches(&self, a: &str, b: &str, ctx: &ScanContext) -> Result<usize> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

        let mut matches = 0;
        for (i, c) in short.iter().enumerate() {
            if *c == long[i] {
                matches += 1;
            }
            ctx.step()?;
        }
        // tail of the longer text: processed, never matched
        for _ in short.len()..long.len() {
            ctx.step()?;
        }
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    #[test]
    fn prefix_matches_and_tail_contributes_nothing() {
        let ctx = ScanContext::new();
        assert_eq!(ShortestFirstScan.count_matches("cat", "cats", &ctx).unwrap(), 3);
        assert_eq!(ShortestFirstScan.count_matches("cats", "cat", &ctx).unwrap(), 3);
    }

    #[test]
    fn counts_positional_equality_only() {
        let ctx = ScanContext::new();
        assert_eq!(ShortestFirstScan.count_matches("abcd", "xbcy", &ctx).unwrap(), 2);
        assert_eq!(ShortestFirstScan.count_matches("", "abc", &ctx).unwrap(), 0);
    }

    #[test]
    fn tail_is_still_processed() {
        let steps = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&steps);
        let ctx = ScanContext::new().with_unit_cost(move || {
            seen.fetch_add(1, Ordering::Relaxed);
        });
        ShortestFirstScan.count_matches("cat", "cats!", &ctx).unwrap();
        assert_eq!(steps.load(Ordering::Relaxed), 5);
    }
}
