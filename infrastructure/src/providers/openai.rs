//! OpenAI adapter for the `LlmGateway` port.
//!
//! Talks to the Chat Completions endpoint. The roadshow scope context
//! goes in the system message; the user message is sent as-is.

use super::{map_status_error, map_transport_error};
use async_trait::async_trait;
use butler_application::{ChatParams, GatewayError, LlmGateway};
use butler_domain::{ProviderKind, SCOPE_CONTEXT};
use tracing::debug;

pub struct OpenAiGateway {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAiGateway {
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
            "{}/v1/chat/completions",
            self.base_url.trim_end_matches('/')
        )
    }

    fn extract_text(body: &serde_json::Value) -> Option<String> {
        let text = body
            .get("choices")?
            .get(0)?
            .get("message")?
            .get("content")?
            .as_str()?;
        Some(text.to_string())
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn complete(
        &self,
        user_message: &str,
        params: &ChatParams,
    ) -> Result<String, GatewayError> {
        let request_body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SCOPE_CONTEXT },
                { "role": "user", "content": user_message },
            ],
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
        });

        debug!(model = %self.model, "Sending OpenAI chat completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
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
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{
                "message": { "role": "assistant", "content": text }
            }]
        })
    }

    #[tokio::test]
    async fn successful_completion_returns_message_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-3.5-turbo",
                "max_tokens": 300,
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(completion_body("Certainly, sir.")),
            )
            .mount(&server)
            .await;

        let gateway = OpenAiGateway::new("sk-test", "gpt-3.5-turbo", server.uri());
        let result = gateway.complete("hello", &ChatParams::default()).await;

        assert_eq!(result.unwrap(), "Certainly, sir.");
    }

    #[tokio::test]
    async fn system_message_carries_scope_context() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("noted")))
            .mount(&server)
            .await;

        let gateway = OpenAiGateway::new("sk-test", "gpt-3.5-turbo", server.uri());
        gateway
            .complete("hello", &ChatParams::default())
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["messages"][0]["role"], "system");
        assert!(
            body["messages"][0]["content"]
                .as_str()
                .unwrap()
                .contains("Raptor Roadshow")
        );
        assert_eq!(body["messages"][1]["content"], "hello");
    }

    #[tokio::test]
    async fn unauthorized_maps_to_auth_failed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Incorrect API key"))
            .mount(&server)
            .await;

        let gateway = OpenAiGateway::new("sk-bad", "gpt-3.5-turbo", server.uri());
        let err = gateway
            .complete("hello", &ChatParams::default())
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::AuthFailed(_)));
    }

    #[tokio::test]
    async fn null_content_is_empty_response() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "role": "assistant", "content": null } }]
            })))
            .mount(&server)
            .await;

        let gateway = OpenAiGateway::new("sk-test", "gpt-3.5-turbo", server.uri());
        let err = gateway
            .complete("hello", &ChatParams::default())
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::EmptyResponse));
    }
}
