//! Gemini adapter for the `LlmGateway` port.
//!
//! Talks to the Generative Language API's `generateContent` endpoint.
//! Gemini has no system-message slot in this endpoint, so the roadshow
//! scope context is prepended to the user message as a single prompt.

use super::{map_status_error, map_transport_error};
use async_trait::async_trait;
use butler_application::{ChatParams, GatewayError, LlmGateway};
use butler_domain::{ProviderKind, SCOPE_CONTEXT};
use tracing::debug;

pub struct GeminiGateway {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiGateway {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    fn build_prompt(user_message: &str) -> String {
        format!("{}\n\nUser: {}\nButler:", SCOPE_CONTEXT, user_message)
    }

    /// Pull the first candidate's text out of a `generateContent` response.
    fn extract_text(body: &serde_json::Value) -> Option<String> {
        let text = body
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .get(0)?
            .get("text")?
            .as_str()?;
        Some(text.to_string())
    }
}

#[async_trait]
impl LlmGateway for GeminiGateway {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn complete(
        &self,
        user_message: &str,
        params: &ChatParams,
    ) -> Result<String, GatewayError> {
        let request_body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": Self::build_prompt(user_message) }]
            }],
            "generationConfig": {
                "maxOutputTokens": params.max_tokens,
                "temperature": params.temperature,
            }
        });

        debug!(model = %self.model, "Sending Gemini generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request_body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &body));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::RequestFailed(format!("Invalid response body: {}", e)))?;

        match Self::extract_text(&body) {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(GatewayError::EmptyResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn candidate_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": text }] }
            }]
        })
    }

    #[tokio::test]
    async fn successful_completion_returns_candidate_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(serde_json::json!({
                "generationConfig": { "maxOutputTokens": 300 }
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(candidate_body("At your service.")),
            )
            .mount(&server)
            .await;

        let gateway = GeminiGateway::new("test-key", "gemini-pro", server.uri());
        let result = gateway.complete("hello", &ChatParams::default()).await;

        assert_eq!(result.unwrap(), "At your service.");
    }

    #[tokio::test]
    async fn prompt_includes_scope_context_and_user_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("ok then")))
            .mount(&server)
            .await;

        let gateway = GeminiGateway::new("k", "gemini-pro", server.uri());
        gateway
            .complete("what about decks?", &ChatParams::default())
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("The Butler"));
        assert!(prompt.contains("what about decks?"));
    }

    #[tokio::test]
    async fn unauthorized_maps_to_auth_failed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let gateway = GeminiGateway::new("bad-key", "gemini-pro", server.uri());
        let err = gateway
            .complete("hello", &ChatParams::default())
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::AuthFailed(_)));
        assert!(!err.is_transient());
    }

    #[tokio::test]
    async fn too_many_requests_maps_to_rate_limited() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let gateway = GeminiGateway::new("k", "gemini-pro", server.uri());
        let err = gateway
            .complete("hello", &ChatParams::default())
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::RateLimited));
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn missing_candidates_is_empty_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})),
            )
            .mount(&server)
            .await;

        let gateway = GeminiGateway::new("k", "gemini-pro", server.uri());
        let err = gateway
            .complete("hello", &ChatParams::default())
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::EmptyResponse));
    }
}
