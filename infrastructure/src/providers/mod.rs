//! Remote LLM provider adapters
//!
//! Each adapter implements the application's `LlmGateway` port over one
//! provider's HTTP API. Startup selection of the active/standby pair
//! lives in [`selection`].

pub mod gemini;
pub mod openai;
pub mod selection;

pub use gemini::GeminiGateway;
pub use openai::OpenAiGateway;
pub use selection::{ProviderSelection, select_providers};

use butler_application::GatewayError;

/// Map a transport-level `reqwest` failure to a gateway error.
pub(crate) fn map_transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout
    } else if err.is_connect() {
        GatewayError::ConnectionError(err.to_string())
    } else {
        GatewayError::RequestFailed(err.to_string())
    }
}

/// Map a non-success HTTP status (plus response body) to a gateway error.
pub(crate) fn map_status_error(status: reqwest::StatusCode, body: &str) -> GatewayError {
    match status.as_u16() {
        401 | 403 => GatewayError::AuthFailed(format!("HTTP {}: {}", status.as_u16(), body)),
        429 => GatewayError::RateLimited,
        400 | 404 | 422 => {
            GatewayError::InvalidRequest(format!("HTTP {}: {}", status.as_u16(), body))
        }
        _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status.as_u16(), body)),
    }
}
