//! Application layer for barista
//!
//! This crate contains use cases, port definitions, the session-owned menu
//! cache, and application configuration. It depends only on the domain layer.

pub mod cache;
pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use cache::menu_cache::MenuCache;
pub use config::{ChatParams, DEFAULT_GREETING};
pub use ports::{
    agent_gateway::{AgentGateway, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    order_notifier::{NoNotifier, OrderNotifier},
    product_catalog::{CatalogError, NoCatalog, ProductCatalog},
    progress::{ChatProgressNotifier, NoProgress},
};
pub use use_cases::chat_flow::{ChatError, ChatFlowController, TurnOutcome, error_reply};
