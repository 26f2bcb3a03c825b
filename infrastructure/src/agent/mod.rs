//! Hosted agent adapter (JSON over HTTP)

pub mod error;
pub mod gateway;

pub use error::AgentHttpError;
pub use gateway::HttpAgentGateway;
