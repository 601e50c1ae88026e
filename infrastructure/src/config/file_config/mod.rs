//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types
//! at the composition root.

mod chat;
mod log;
mod providers;

pub use chat::FileChatConfig;
pub use log::FileLogConfig;
pub use providers::{FileGeminiConfig, FileOpenAiConfig, FileProvidersConfig};

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Remote provider settings.
    pub providers: FileProvidersConfig,
    /// Chat parameters (tokens, temperature, timeout, retries).
    pub chat: FileChatConfig,
    /// Conversation transcript logging.
    pub log: FileLogConfig,
}
