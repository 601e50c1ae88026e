//! Startup provider selection.
//!
//! Credentials are checked once at startup; the result is a fixed
//! active/standby pair for the whole session. Gemini is the primary
//! provider, OpenAI the secondary: with both keys valid, Gemini is
//! active and OpenAI stands by for cross-provider fallback. With only
//! one valid key that provider runs alone. With neither, the session
//! still starts — rules and the deterministic fallback carry it.

use super::{GeminiGateway, OpenAiGateway};
use crate::config::file_config::FileProvidersConfig;
use crate::credentials::resolve_key;
use butler_application::LlmGateway;
use butler_domain::ProviderKind;
use std::sync::Arc;
use tracing::{info, warn};

/// The providers chosen for this session.
pub struct ProviderSelection {
    pub active: Option<Arc<dyn LlmGateway>>,
    pub standby: Option<Arc<dyn LlmGateway>>,
}

impl ProviderSelection {
    /// Kind of the active provider, if any. Used for the startup banner.
    pub fn active_kind(&self) -> Option<ProviderKind> {
        self.active.as_ref().map(|g| g.kind())
    }

    pub fn is_offline(&self) -> bool {
        self.active.is_none()
    }
}

/// Resolve credentials and build the session's provider pair.
pub fn select_providers(config: &FileProvidersConfig) -> ProviderSelection {
    let gemini_key = resolve_key(config.gemini.api_key.as_deref(), &config.gemini.api_key_env);
    let openai_key = resolve_key(config.openai.api_key.as_deref(), &config.openai.api_key_env);

    let gemini = gemini_key.map(|key| {
        Arc::new(GeminiGateway::new(
            key,
            config.gemini.model.clone(),
            config.gemini.base_url.clone(),
        )) as Arc<dyn LlmGateway>
    });
    let openai = openai_key.map(|key| {
        Arc::new(OpenAiGateway::new(
            key,
            config.openai.model.clone(),
            config.openai.base_url.clone(),
        )) as Arc<dyn LlmGateway>
    });

    match (gemini, openai) {
        (Some(gemini), openai) => {
            info!(
                standby = openai.is_some(),
                "Using Gemini as the active provider"
            );
            ProviderSelection {
                active: Some(gemini),
                standby: openai,
            }
        }
        (None, Some(openai)) => {
            warn!("No valid Gemini key; using OpenAI as the active provider");
            ProviderSelection {
                active: Some(openai),
                standby: None,
            }
        }
        (None, None) => {
            warn!(
                "No valid provider credentials found ({} / {}); \
                 remote responses are disabled for this session",
                config.gemini.api_key_env, config.openai.api_key_env
            );
            ProviderSelection {
                active: None,
                standby: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::file_config::{FileGeminiConfig, FileOpenAiConfig};

    /// Config with direct keys and env var names that never exist, so
    /// the ambient environment cannot leak into the tests.
    fn config(gemini_key: Option<&str>, openai_key: Option<&str>) -> FileProvidersConfig {
        FileProvidersConfig {
            gemini: FileGeminiConfig {
                api_key: gemini_key.map(str::to_string),
                api_key_env: "BUTLER_TEST_UNSET_GEMINI".to_string(),
                ..Default::default()
            },
            openai: FileOpenAiConfig {
                api_key: openai_key.map(str::to_string),
                api_key_env: "BUTLER_TEST_UNSET_OPENAI".to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn both_keys_valid_gemini_active_openai_standby() {
        let selection = select_providers(&config(Some("AIza-test"), Some("sk-test")));
        assert_eq!(selection.active_kind(), Some(ProviderKind::Gemini));
        assert_eq!(
            selection.standby.as_ref().map(|g| g.kind()),
            Some(ProviderKind::OpenAi)
        );
    }

    #[test]
    fn only_openai_key_makes_openai_active_without_standby() {
        let selection = select_providers(&config(None, Some("sk-test")));
        assert_eq!(selection.active_kind(), Some(ProviderKind::OpenAi));
        assert!(selection.standby.is_none());
    }

    #[test]
    fn placeholder_keys_leave_the_session_offline() {
        let selection = select_providers(&config(Some("your_gemini_api_key_here"), None));
        assert!(selection.is_offline());
        assert!(selection.standby.is_none());
    }
}
