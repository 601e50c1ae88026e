//! LLM Gateway port
//!
//! Defines the interface for communicating with remote LLM providers.

use crate::config::ChatParams;
use async_trait::async_trait;
use butler_domain::ProviderKind;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone)]
pub enum GatewayError {
    #[error("Request timed out")]
    Timeout,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Empty response from provider")]
    EmptyResponse,
}

/// Message fragments that mark an otherwise-unclassified error as transient.
const TRANSIENT_INDICATORS: &[&str] = &["timeout", "connection", "network", "rate limit", "quota"];

impl GatewayError {
    /// Whether retrying the same provider can reasonably succeed.
    ///
    /// Timeouts, connection failures and rate limits are transient by
    /// variant; a generic request failure is classified by scanning its
    /// message for the usual transient indicators. Auth and request-shape
    /// errors are terminal for this call.
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayError::Timeout | GatewayError::ConnectionError(_) | GatewayError::RateLimited => {
                true
            }
            GatewayError::RequestFailed(msg) => {
                let msg = msg.to_lowercase();
                TRANSIENT_INDICATORS.iter().any(|kw| msg.contains(kw))
            }
            GatewayError::AuthFailed(_)
            | GatewayError::InvalidRequest(_)
            | GatewayError::EmptyResponse => false,
        }
    }
}

/// Gateway to one remote LLM provider.
///
/// Implementations (adapters) live in the infrastructure layer. Each
/// adapter owns its provider's prompt shape: the fixed roadshow scope
/// context plus the user message, with the generation parameters from
/// [`ChatParams`].
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Which provider this gateway talks to.
    fn kind(&self) -> ProviderKind;

    /// Send the user message and return the provider's raw response text.
    async fn complete(&self, user_message: &str, params: &ChatParams)
    -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_classification() {
        assert!(GatewayError::Timeout.is_transient());
        assert!(GatewayError::ConnectionError("reset by peer".into()).is_transient());
        assert!(GatewayError::RateLimited.is_transient());
        assert!(!GatewayError::AuthFailed("bad key".into()).is_transient());
        assert!(!GatewayError::InvalidRequest("missing field".into()).is_transient());
        assert!(!GatewayError::EmptyResponse.is_transient());
    }

    #[test]
    fn message_classification_for_generic_failures() {
        assert!(GatewayError::RequestFailed("Network unreachable".into()).is_transient());
        assert!(GatewayError::RequestFailed("quota exceeded for project".into()).is_transient());
        assert!(GatewayError::RequestFailed("Rate limit hit".into()).is_transient());
        assert!(!GatewayError::RequestFailed("model not found".into()).is_transient());
    }
}
