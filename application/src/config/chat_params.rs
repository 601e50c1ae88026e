//! Chat parameters — remote call and retry loop control.
//!
//! [`ChatParams`] groups the static parameters that control the remote
//! path in [`ChatTurnUseCase`](crate::use_cases::chat_turn::ChatTurnUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Remote call and retry parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatParams {
    /// Maximum output length requested from the provider.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
    /// Bounded wait for one remote call.
    pub timeout: Duration,
    /// Retries after the initial attempt, per provider.
    pub max_retries: u32,
    /// Pause before retrying a transient (non-timeout) failure.
    pub retry_delay: Duration,
}

impl Default for ChatParams {
    fn default() -> Self {
        Self {
            max_tokens: 300,
            temperature: 0.7,
            timeout: Duration::from_secs(10),
            max_retries: 2,
            retry_delay: Duration::from_secs(1),
        }
    }
}

impl ChatParams {
    // ==================== Builder Methods ====================

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = ChatParams::default();
        assert_eq!(params.max_tokens, 300);
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.timeout, Duration::from_secs(10));
        assert_eq!(params.max_retries, 2);
    }

    #[test]
    fn test_builder() {
        let params = ChatParams::default()
            .with_timeout(Duration::from_millis(50))
            .with_max_retries(0)
            .with_retry_delay(Duration::ZERO);

        assert_eq!(params.timeout, Duration::from_millis(50));
        assert_eq!(params.max_retries, 0);
        assert_eq!(params.retry_delay, Duration::ZERO);
    }
}
