//! Infrastructure layer for butler
//!
//! This crate contains the external adapters: HTTP gateways for the
//! remote LLM providers, the VADER sentiment analyzer, the TOML/env
//! configuration loader, and the JSONL conversation logger.
//!
//! Everything here implements a port defined in the application layer.

pub mod config;
pub mod credentials;
pub mod logging;
pub mod providers;
pub mod sentiment;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlConversationLogger;
pub use providers::{select_providers, GeminiGateway, OpenAiGateway, ProviderSelection};
pub use sentiment::VaderSentimentAnalyzer;
