//! Infrastructure layer for barista
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the HTTP agent gateway, the HTTP product
//! catalog, configuration file loading and the JSONL conversation log.

pub mod agent;
pub mod catalog;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use agent::{AgentHttpError, HttpAgentGateway};
pub use catalog::{CatalogHttpError, HttpProductCatalog};
pub use config::{
    ConfigIssue, ConfigLoader, FileAgentConfig, FileCatalogConfig, FileChatConfig, FileConfig,
    FileLoggingConfig,
};
pub use logging::JsonlConversationLogger;
