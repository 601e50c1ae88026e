//! VADER adapter for the sentiment analyzer port.
//!
//! Wraps the `vader_sentiment` lexicon analyzer. Scoring is pure and
//! lexicon-based, so one analyzer instance is built at startup and
//! shared for the whole session.

use butler_application::SentimentAnalyzerPort;
use butler_domain::SentimentScore;
use vader_sentiment::SentimentIntensityAnalyzer;

pub struct VaderSentimentAnalyzer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderSentimentAnalyzer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderSentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzerPort for VaderSentimentAnalyzer {
    fn score(&self, text: &str) -> SentimentScore {
        let scores = self.analyzer.polarity_scores(text);
        SentimentScore::new(
            scores.get("compound").copied().unwrap_or(0.0),
            scores.get("neg").copied().unwrap_or(0.0),
            scores.get("neu").copied().unwrap_or(0.0),
            scores.get("pos").copied().unwrap_or(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_text_scores_negative() {
        let analyzer = VaderSentimentAnalyzer::new();
        let score = analyzer.score("This is terrible, I hate it");
        assert!(score.is_negative());
    }

    #[test]
    fn positive_text_scores_positive() {
        let analyzer = VaderSentimentAnalyzer::new();
        let score = analyzer.score("This is wonderful, I love it!");
        assert!(score.compound > 0.0);
    }

    #[test]
    fn empty_text_scores_neutral() {
        let analyzer = VaderSentimentAnalyzer::new();
        let score = analyzer.score("");
        assert_eq!(score.compound, 0.0);
    }
}
