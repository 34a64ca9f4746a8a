use crate::{error::Result, strategy::pacing::ScanContext};

/// "Priority Scheduling": word-level positional comparison.
///
/// Both texts are split on whitespace and paired up to the shorter word
/// count; exact equality at a position is a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenAlignedScan;

impl TokenAlignedScan {
    pub fn count_matches(&self, a: &str, b: &str, ctx: &ScanContext) -> Result<usize> {
        let mut matches = 0;
        for (word_a, word_b) in a.split_whitespace().zip(b.split_whitespace()) {
            if word_a == word_b {
                matches += 1;
            }
            ctx.step()?;
        }
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligned_words() {
        let ctx = ScanContext::new();
        assert_eq!(
            TokenAlignedScan.count_matches("the cat sat", "the dog sat", &ctx).unwrap(),
            2
        );
    }

    #[test]
    fn stops_at_shorter_sequence() {
        let ctx = ScanContext::new();
        assert_eq!(TokenAlignedScan.count_matches("a b", "a b c d", &ctx).unwrap(), 2);
        assert_eq!(TokenAlignedScan.count_matches("b a", "a b", &ctx).unwrap(), 0);
    }
}
