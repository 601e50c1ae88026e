//! Sentiment analysis adapter

pub mod vader;

pub use vader::VaderSentimentAnalyzer;
