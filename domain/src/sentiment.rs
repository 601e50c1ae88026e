//! Sentiment score value object

use serde::{Deserialize, Serialize};

/// Polarity scores for one user message (Value Object).
///
/// Mirrors the VADER output shape: `compound` is the normalized overall
/// polarity in `[-1, 1]`; `negative`, `neutral` and `positive` are the
/// proportions of the text in each band, each in `[0, 1]`. Derived once
/// per message and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub compound: f64,
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
}

impl SentimentScore {
    /// Build a score, clamping each component into its documented range.
    pub fn new(compound: f64, negative: f64, neutral: f64, positive: f64) -> Self {
        Self {
            compound: compound.clamp(-1.0, 1.0),
            negative: negative.clamp(0.0, 1.0),
            neutral: neutral.clamp(0.0, 1.0),
            positive: positive.clamp(0.0, 1.0),
        }
    }

    /// Neutral score used when no analyzer is available.
    pub fn neutral() -> Self {
        Self {
            compound: 0.0,
            negative: 0.0,
            neutral: 1.0,
            positive: 0.0,
        }
    }

    /// True when the overall polarity leans negative.
    pub fn is_negative(&self) -> bool {
        self.compound < 0.0
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_out_of_range_values() {
        let score = SentimentScore::new(-3.0, 1.5, -0.2, 0.4);
        assert_eq!(score.compound, -1.0);
        assert_eq!(score.negative, 1.0);
        assert_eq!(score.neutral, 0.0);
        assert_eq!(score.positive, 0.4);
    }

    #[test]
    fn test_neutral_is_not_negative() {
        assert!(!SentimentScore::neutral().is_negative());
        assert!(SentimentScore::new(-0.4, 0.5, 0.5, 0.0).is_negative());
    }
}
