//! Chat session configuration from TOML (`[chat]` section)

use serde::{Deserialize, Serialize};

/// Raw chat configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChatConfig {
    /// Greeting shown when a session starts; built-in text when unset
    pub greeting: Option<String>,
    /// Show the typing spinner while the agent is working
    pub show_progress: bool,
    /// Path to the REPL history file
    pub history_file: Option<String>,
}

impl Default for FileChatConfig {
    fn default() -> Self {
        Self {
            greeting: None,
            show_progress: true,
            history_file: None,
        }
    }
}
