//! Agent endpoint configuration from TOML (`[agent]` section)

use serde::{Deserialize, Serialize};

/// Default environment variable holding the agent's bearer token
pub const DEFAULT_AGENT_KEY_ENV: &str = "BARISTA_AGENT_KEY";

/// Raw agent configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Endpoint that accepts `{ "input": { "messages": [...] } }`
    pub url: Option<String>,
    /// Name of the environment variable holding the bearer token
    pub api_key_env: String,
    /// Bearer token given directly in the file
    pub api_key: Option<String>,
    /// Per-call timeout; 0 disables the timeout
    pub timeout_seconds: u64,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key_env: DEFAULT_AGENT_KEY_ENV.to_string(),
            api_key: None,
            timeout_seconds: 60,
        }
    }
}

impl FileAgentConfig {
    /// Resolve the bearer token.
    ///
    /// The environment variable wins over the inline key; blank values count
    /// as unset.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .or_else(|| self.api_key.clone())
            .filter(|key| !key.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileAgentConfig::default();
        assert!(config.url.is_none());
        assert_eq!(config.api_key_env, "BARISTA_AGENT_KEY");
        assert_eq!(config.timeout_seconds, 60);
    }

    #[test]
    fn test_resolve_api_key_inline() {
        let config = FileAgentConfig {
            api_key_env: "BARISTA_TEST_UNSET_AGENT_KEY".to_string(),
            api_key: Some("inline-key".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), Some("inline-key".to_string()));
    }

    #[test]
    fn test_resolve_api_key_blank_is_none() {
        let config = FileAgentConfig {
            api_key_env: "BARISTA_TEST_UNSET_AGENT_KEY_2".to_string(),
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }
}
