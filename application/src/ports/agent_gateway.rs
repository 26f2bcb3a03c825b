//! Agent Gateway port
//!
//! Defines the interface for talking to the hosted conversational agent.

use async_trait::async_trait;
use barista_domain::{Message, NormalizedReply};
use thiserror::Error;

/// Errors that can occur during an agent call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Agent returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Network-level failure (unreachable endpoint, non-2xx, timeout)
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            GatewayError::ConnectionError(_) | GatewayError::HttpStatus { .. } | GatewayError::Timeout
        )
    }
}

/// Gateway for agent communication
///
/// Implementations (adapters) live in the infrastructure layer. They send the
/// whole transcript, classify the body and return the normalized reply. An
/// unrecognized body shape is still `Ok`; only transport failures and
/// unparsable bodies are `Err`.
#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// Send the conversation so far and get the agent's next reply
    async fn send(&self, messages: &[Message]) -> Result<NormalizedReply, GatewayError>;
}
