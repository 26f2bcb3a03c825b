//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! at the wiring boundary.

mod agent;
mod catalog;
mod chat;
mod logging;

pub use agent::{DEFAULT_AGENT_KEY_ENV, FileAgentConfig};
pub use catalog::{DEFAULT_CATALOG_TOKEN_ENV, FileCatalogConfig};
pub use chat::FileChatConfig;
pub use logging::FileLoggingConfig;

use barista_application::ChatParams;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A detected issue in the loaded configuration.
///
/// Issues are warnings: each mode decides for itself whether a missing
/// section is fatal (chat needs `agent.url`, `menu` only the catalog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Dotted key path, e.g. `agent.url`
    pub field: &'static str,
    pub message: String,
}

impl ConfigIssue {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Hosted agent endpoint
    pub agent: FileAgentConfig,
    /// Remote product catalog
    pub catalog: FileCatalogConfig,
    /// Chat session behaviour
    pub chat: FileChatConfig,
    /// Diagnostic and conversation logs
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if is_blank(self.agent.url.as_deref()) {
            issues.push(ConfigIssue::new(
                "agent.url",
                "no agent endpoint configured; chat is unavailable",
            ));
        }

        if is_blank(self.catalog.base_url.as_deref()) {
            issues.push(ConfigIssue::new(
                "catalog.base_url",
                "no catalog configured; the menu and cart prices are unavailable",
            ));
        }

        if self.catalog.collection.trim().is_empty() {
            issues.push(ConfigIssue::new(
                "catalog.collection",
                "collection name is empty",
            ));
        }

        if self.agent.timeout_seconds == 0 {
            issues.push(ConfigIssue::new(
                "agent.timeout_seconds",
                "timeout is 0; agent calls will wait indefinitely",
            ));
        }

        issues
    }

    /// Build the chat flow parameters from the `[agent]` and `[chat]` sections.
    pub fn to_chat_params(&self) -> ChatParams {
        let mut params = match self.agent.timeout_seconds {
            0 => ChatParams::default().with_agent_timeout(None),
            seconds => ChatParams::default().with_timeout_seconds(seconds),
        };
        if let Some(greeting) = self.chat.greeting.as_deref().filter(|g| !g.trim().is_empty()) {
            params = params.with_greeting(greeting);
        }
        params
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
