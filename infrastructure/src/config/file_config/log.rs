//! Conversation log configuration from TOML (`[log]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Write a JSONL transcript of each session.
    pub conversation: bool,
    /// Explicit transcript file path. When unset, a timestamped file is
    /// created under the platform data directory.
    pub conversation_file: Option<String>,
}
