//! Chat Turn use case.
//!
//! Executes one conversational exchange through the layered response
//! pipeline: sentiment scoring, rule dispatch, the remote LLM path with
//! timeout/retry and cross-provider fallback, and finally the
//! deterministic fallback responder. Every turn produces a response —
//! the pipeline has no failure mode visible to the user.
//!
//! The use case owns the session's [`ChatHistory`]; the presentation
//! layer only ever sees completed turns.

use crate::config::ChatParams;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::sentiment::SentimentAnalyzerPort;
use butler_domain::{
    fallback_response, truncate_str, validate_response, ChatHistory, ProviderKind, RuleDispatcher,
    RuleGroup,
};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Which pipeline stage produced the response text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseSource {
    /// A keyword rule group fired.
    Rule(RuleGroup),
    /// A remote provider returned a validated response.
    Remote(ProviderKind),
    /// The deterministic fallback responder.
    Fallback,
}

/// The result of one completed exchange.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    pub text: String,
    pub source: ResponseSource,
}

/// Outcome of a single remote attempt, classified for the retry loop.
enum AttemptOutcome {
    Success(String),
    /// Transient failure with retry budget remaining.
    Retry(GatewayError),
    /// Terminal failure, or budget exhausted — move on.
    GiveUp(GatewayError),
}

/// Result of one provider's turn through the retry loop.
///
/// A rejected response is distinct from a failed call: the provider
/// answered, the text just wasn't usable, and the pipeline degrades
/// straight to the fallback responder without consulting the standby.
enum RemoteCall {
    Validated(String),
    Rejected,
    Failed,
}

/// Use case for running one chat turn.
///
/// Holds the selected providers (active, plus an optional standby for
/// cross-provider fallback), the sentiment analyzer, and the session
/// history. `execute` is the only entry point; it is total — any input
/// yields response text.
pub struct ChatTurnUseCase {
    active: Option<Arc<dyn LlmGateway>>,
    standby: Option<Arc<dyn LlmGateway>>,
    sentiment: Arc<dyn SentimentAnalyzerPort>,
    dispatcher: RuleDispatcher,
    conversation_logger: Arc<dyn ConversationLogger>,
    params: ChatParams,
    history: ChatHistory,
}

impl ChatTurnUseCase {
    pub fn new(
        active: Option<Arc<dyn LlmGateway>>,
        standby: Option<Arc<dyn LlmGateway>>,
        sentiment: Arc<dyn SentimentAnalyzerPort>,
        params: ChatParams,
    ) -> Self {
        Self {
            active,
            standby,
            sentiment,
            dispatcher: RuleDispatcher::new(),
            conversation_logger: Arc::new(NoConversationLogger),
            params,
            history: ChatHistory::new(),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    /// Reset the session history (the REPL `clear` command).
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Execute one exchange: select a response for `user_message` and
    /// record the completed (user, assistant) pair in the history.
    pub async fn execute(&mut self, user_message: &str) -> TurnOutcome {
        debug!("Processing turn: {}", truncate_str(user_message, 100));

        let score = self.sentiment.score(user_message);
        debug!(
            compound = score.compound,
            negative = score.negative,
            "Sentiment scored"
        );

        let outcome = if let Some(rule) = self.dispatcher.dispatch(user_message, &score) {
            info!(group = %rule.group, "Rule group matched");
            self.conversation_logger.log(ConversationEvent::new(
                "rule_response",
                serde_json::json!({
                    "group": rule.group.as_str(),
                    "compound": score.compound,
                    "bytes": rule.response.len(),
                }),
            ));
            TurnOutcome {
                text: rule.response,
                source: ResponseSource::Rule(rule.group),
            }
        } else if let Some((text, provider)) = self.remote_response(user_message).await {
            self.conversation_logger.log(ConversationEvent::new(
                "remote_response",
                serde_json::json!({
                    "provider": provider.as_str(),
                    "bytes": text.len(),
                    "text": text,
                }),
            ));
            TurnOutcome {
                text,
                source: ResponseSource::Remote(provider),
            }
        } else {
            let text = fallback_response(user_message);
            info!("Using fallback response");
            self.conversation_logger.log(ConversationEvent::new(
                "fallback_response",
                serde_json::json!({ "bytes": text.len() }),
            ));
            TurnOutcome {
                text,
                source: ResponseSource::Fallback,
            }
        };

        self.history.push_exchange(user_message, outcome.text.clone());
        outcome
    }

    /// Run the remote path: the active provider with its full retry
    /// budget, then exactly one attempt against the standby provider if
    /// the active one's calls failed. A response the validator rejects
    /// ends the remote path outright — the provider is reachable, its
    /// text just wasn't usable, so the standby is not consulted.
    async fn remote_response(&self, user_message: &str) -> Option<(String, ProviderKind)> {
        let active = self.active.as_ref()?;

        match self
            .call_provider(active, user_message, 1 + self.params.max_retries)
            .await
        {
            RemoteCall::Validated(text) => return Some((text, active.kind())),
            RemoteCall::Rejected => return None,
            RemoteCall::Failed => {}
        }

        let standby = self.standby.as_ref()?;
        info!(provider = %standby.kind(), "Falling back to standby provider");
        match self.call_provider(standby, user_message, 1).await {
            RemoteCall::Validated(text) => Some((text, standby.kind())),
            RemoteCall::Rejected | RemoteCall::Failed => None,
        }
    }

    /// Call one provider with a bounded retry loop.
    ///
    /// Each attempt is wrapped in `tokio::time::timeout` — the single
    /// place the wall-clock bound is enforced, whatever the adapter's
    /// own transport does. A transient failure consumes one attempt of
    /// `max_attempts` (with a pause, except after a timeout which
    /// already spent its time); a terminal failure or an exhausted
    /// budget fails the call. The active provider gets the full budget;
    /// the standby is invoked with `max_attempts = 1`.
    async fn call_provider(
        &self,
        gateway: &Arc<dyn LlmGateway>,
        user_message: &str,
        max_attempts: u32,
    ) -> RemoteCall {
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;
            let result = timeout(
                self.params.timeout,
                gateway.complete(user_message, &self.params),
            )
            .await;

            let outcome = match result {
                Ok(Ok(raw)) => AttemptOutcome::Success(raw),
                Ok(Err(err)) => Self::classify(err, attempt, max_attempts),
                Err(_elapsed) => Self::classify(GatewayError::Timeout, attempt, max_attempts),
            };

            match outcome {
                AttemptOutcome::Success(raw) => {
                    return match validate_response(&raw) {
                        Some(text) => RemoteCall::Validated(text),
                        None => {
                            warn!(
                                provider = %gateway.kind(),
                                "Provider response rejected by validator"
                            );
                            RemoteCall::Rejected
                        }
                    };
                }
                AttemptOutcome::Retry(err) => {
                    warn!(
                        provider = %gateway.kind(),
                        attempt,
                        max_attempts,
                        "Transient gateway error, retrying: {}",
                        err
                    );
                    if !matches!(err, GatewayError::Timeout) && !self.params.retry_delay.is_zero() {
                        tokio::time::sleep(self.params.retry_delay).await;
                    }
                }
                AttemptOutcome::GiveUp(err) => {
                    warn!(
                        provider = %gateway.kind(),
                        attempt,
                        "Giving up on provider: {}",
                        err
                    );
                    return RemoteCall::Failed;
                }
            }
        }
    }

    fn classify(err: GatewayError, attempt: u32, max_attempts: u32) -> AttemptOutcome {
        if err.is_transient() && attempt < max_attempts {
            AttemptOutcome::Retry(err)
        } else {
            AttemptOutcome::GiveUp(err)
        }
    }
}
