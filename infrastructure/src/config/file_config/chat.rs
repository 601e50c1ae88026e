//! Chat parameter configuration from TOML (`[chat]` section)

use butler_application::ChatParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Maximum output tokens per response.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
    /// Retries after the initial attempt, per provider.
    pub max_retries: u32,
    /// Pause before retrying a transient failure, in milliseconds.
    pub retry_delay_ms: u64,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            max_tokens: 300,
            temperature: 0.7,
            timeout_secs: 10,
            max_retries: 2,
            retry_delay_ms: 1000,
        }
    }
}

impl FileChatConfig {
    pub fn to_chat_params(&self) -> ChatParams {
        ChatParams::default()
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_max_retries(self.max_retries)
            .with_retry_delay(Duration::from_millis(self.retry_delay_ms))
    }
}
