//! Application layer for butler
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChatParams;
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway},
    sentiment::{NeutralSentiment, SentimentAnalyzerPort},
};
pub use use_cases::chat_turn::{ChatTurnUseCase, ResponseSource, TurnOutcome};
