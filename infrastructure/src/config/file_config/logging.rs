//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write tracing output to this file in addition to stderr
    pub file: Option<String>,
    /// JSONL conversation log path
    pub conversation_log: Option<String>,
}
