//! Error types for the HTTP agent adapter

use barista_application::GatewayError;
use thiserror::Error;

/// Characters of a non-2xx body kept in the error
const MAX_ERROR_BODY: usize = 200;

/// Errors that can occur when talking to the agent endpoint
#[derive(Error, Debug)]
pub enum AgentHttpError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl AgentHttpError {
    pub(crate) fn status(status: u16, body: &str) -> Self {
        AgentHttpError::Status {
            status,
            body: barista_domain::preview(body.trim(), MAX_ERROR_BODY).into_owned(),
        }
    }
}

impl From<AgentHttpError> for GatewayError {
    fn from(err: AgentHttpError) -> Self {
        match err {
            AgentHttpError::Request(e) if e.is_timeout() => GatewayError::Timeout,
            AgentHttpError::Request(e) => GatewayError::ConnectionError(e.to_string()),
            AgentHttpError::Status { status, body } => GatewayError::HttpStatus { status, body },
            AgentHttpError::Decode(e) => GatewayError::MalformedResponse(e.to_string()),
        }
    }
}
