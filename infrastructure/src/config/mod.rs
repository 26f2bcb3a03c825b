//! Configuration file loading for barista
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `BARISTA_*` environment variables (`BARISTA_AGENT__URL`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./barista.toml` or `./.barista.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/barista/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, DEFAULT_AGENT_KEY_ENV, DEFAULT_CATALOG_TOKEN_ENV, FileAgentConfig,
    FileCatalogConfig, FileChatConfig, FileConfig, FileLoggingConfig,
};
pub use loader::ConfigLoader;
