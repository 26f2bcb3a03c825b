//! Presentation-level configuration
//!
//! Configuration for REPL behavior.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplConfig {
    /// Path to history file
    pub history_file: Option<String>,
}

impl ReplConfig {
    /// Resolve the history file, expanding a leading `~/`.
    ///
    /// Falls back to `<data dir>/barista/history.txt`.
    pub fn history_path(&self) -> Option<PathBuf> {
        match self.history_file.as_deref() {
            Some(path) => match path.strip_prefix("~/") {
                Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
                None => Some(PathBuf::from(path)),
            },
            None => dirs::data_dir().map(|dir| dir.join("barista").join("history.txt")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_history_path() {
        let config = ReplConfig::default();
        if let Some(path) = config.history_path() {
            assert!(path.ends_with("barista/history.txt"));
        }
    }

    #[test]
    fn test_explicit_history_path() {
        let config = ReplConfig {
            history_file: Some("/tmp/barista-history".to_string()),
        };
        assert_eq!(
            config.history_path(),
            Some(PathBuf::from("/tmp/barista-history"))
        );
    }

    #[test]
    fn test_tilde_is_expanded() {
        let config = ReplConfig {
            history_file: Some("~/.barista_history".to_string()),
        };
        if let (Some(path), Some(home)) = (config.history_path(), dirs::home_dir()) {
            assert_eq!(path, home.join(".barista_history"));
        }
    }
}
