//! HTTP adapter for the hosted ordering agent.
//!
//! Every turn posts the full transcript:
//!
//! ```text
//! POST {url}
//! Authorization: Bearer <key>
//! { "input": { "messages": [ { "role": "user", "content": "..." }, ... ] } }
//! ```
//!
//! The JSON body that comes back is classified and normalized by the domain
//! layer; this adapter only deals with transport and decoding.

use super::error::AgentHttpError;
use async_trait::async_trait;
use barista_application::{AgentGateway, GatewayError};
use barista_domain::{AgentPayload, Message, NormalizedReply};
use serde_json::{Value, json};
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("barista/", env!("CARGO_PKG_VERSION"));

/// Agent gateway over a JSON HTTP endpoint
pub struct HttpAgentGateway {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
}

impl HttpAgentGateway {
    pub fn new(url: impl Into<String>, api_key: Option<String>) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::Other(e.to_string()))?;
        Ok(Self::with_client(client, url, api_key))
    }

    pub fn with_client(
        client: reqwest::Client,
        url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            api_key,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, messages: &[Message]) -> Result<String, AgentHttpError> {
        let mut request = self.client.post(&self.url).json(&request_body(messages));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(AgentHttpError::status(status.as_u16(), &text));
        }
        Ok(text)
    }
}

#[async_trait]
impl AgentGateway for HttpAgentGateway {
    async fn send(&self, messages: &[Message]) -> Result<NormalizedReply, GatewayError> {
        debug!("Posting {} messages to agent", messages.len());
        let text = self.post(messages).await.inspect_err(|e| {
            warn!("Agent request failed: {}", e);
        })?;
        Ok(decode_reply(&text)?)
    }
}

/// Request envelope expected by the agent endpoint.
pub fn request_body(messages: &[Message]) -> Value {
    json!({ "input": { "messages": messages } })
}

/// Parse a 2xx body and normalize whatever shape it has.
pub fn decode_reply(text: &str) -> Result<NormalizedReply, AgentHttpError> {
    let body: Value = serde_json::from_str(text)?;
    let payload = AgentPayload::classify(body);
    debug!("Agent payload shape: {}", payload.shape());
    Ok(payload.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_wraps_transcript() {
        let messages = vec![
            Message::user("Hi"),
            Message::assistant("Hello!"),
            Message::user("One latte please"),
        ];

        let body = request_body(&messages);

        assert_eq!(
            body,
            json!({
                "input": {
                    "messages": [
                        {"role": "user", "content": "Hi"},
                        {"role": "assistant", "content": "Hello!"},
                        {"role": "user", "content": "One latte please"}
                    ]
                }
            })
        );
    }

    #[test]
    fn test_request_body_carries_assistant_memory() {
        let memory = json!({
            "agent": "order_taking_agent",
            "order": [{"item": "Latte", "quantity": 1}]
        });
        let messages = vec![
            Message::user("A latte"),
            Message::assistant("One latte.").with_memory(memory.clone()),
            Message::user("Thanks"),
        ];

        let body = request_body(&messages);
        let sent = &body["input"]["messages"];

        assert_eq!(sent[1]["memory"], memory);
        assert!(sent[0].get("memory").is_none());
    }

    #[test]
    fn test_decode_standard_output() {
        let text = r#"{
            "output": {
                "role": "assistant",
                "content": "Two cappuccinos coming up.",
                "memory": {"order": [{"item": "Cappuccino", "quantity": 2}]}
            }
        }"#;

        let normalized = decode_reply(text).unwrap();

        assert!(normalized.recognized);
        assert_eq!(normalized.reply.content(), "Two cappuccinos coming up.");
        assert_eq!(normalized.reply.order().len(), 1);
    }

    #[test]
    fn test_decode_direct_message() {
        let normalized = decode_reply(r#"{"role": "assistant", "content": "Hi!"}"#).unwrap();
        assert!(normalized.recognized);
        assert_eq!(normalized.reply.content(), "Hi!");
        assert!(normalized.reply.order().is_empty());
    }

    #[test]
    fn test_decode_unknown_shape_is_ok() {
        let normalized = decode_reply(r#"{"status": "IN_QUEUE"}"#).unwrap();
        assert!(!normalized.recognized);
        assert_eq!(
            normalized.reply.content(),
            barista_domain::chat::payload::UNKNOWN_SHAPE_REPLY
        );
    }

    #[test]
    fn test_decode_invalid_json_is_error() {
        let err = decode_reply("<html>gateway error</html>").unwrap_err();
        assert!(matches!(err, AgentHttpError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_connection_error() {
        // Port 9 on localhost (discard) is not served in test environments
        let gateway = HttpAgentGateway::new("http://127.0.0.1:9/runsync", None).unwrap();
        let err = gateway.send(&[Message::user("Hi")]).await.unwrap_err();
        assert!(err.is_network());
    }
}
