//! Sentiment analyzer port.
//!
//! The scorer itself is an external collaborator (an off-the-shelf
//! analyzer in the infrastructure layer); the application only needs a
//! text-to-score function.

use butler_domain::SentimentScore;

/// Port for scoring the polarity of a user message.
pub trait SentimentAnalyzerPort: Send + Sync {
    fn score(&self, text: &str) -> SentimentScore;
}

/// Null analyzer: every message scores neutral.
///
/// Used in tests and when the real analyzer is unavailable.
pub struct NeutralSentiment;

impl SentimentAnalyzerPort for NeutralSentiment {
    fn score(&self, _text: &str) -> SentimentScore {
        SentimentScore::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_analyzer_always_scores_neutral() {
        let analyzer = NeutralSentiment;
        assert_eq!(analyzer.score("I hate this"), SentimentScore::neutral());
        assert_eq!(analyzer.score(""), SentimentScore::neutral());
    }
}
