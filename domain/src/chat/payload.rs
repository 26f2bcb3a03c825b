//! Agent payload classification and normalization.
//!
//! The agent endpoint has answered with several body shapes over time:
//!
//! ```text
//! { "output": { "role", "content", "memory" } }   → StandardOutput
//! { "role", "content", "memory" }                 → DirectMessage
//! anything else                                   → Unknown
//! ```
//!
//! [`AgentPayload::normalize`] turns every shape into an [`AgentReply`] so the
//! chat flow never inspects raw JSON.

use super::entities::{AgentMemory, AgentReply, Message, Role};
use crate::core::error::DomainError;
use crate::order::snapshot::OrderSnapshot;
use serde_json::{Map, Value};

/// Used when a recognized reply carries no usable text.
pub const EMPTY_CONTENT_REPLY: &str =
    "I apologize, but I don't have a specific response for that at the moment.";

/// Used for a JSON object of unrecognized shape.
pub const UNKNOWN_SHAPE_REPLY: &str = "Sorry, I couldn't process your request properly.";

/// Used when the body is not a JSON object at all.
pub const UNEXPECTED_FORMAT_REPLY: &str = "Sorry, I received an unexpected response format.";

/// Why a payload could not be classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnknownShape {
    /// An object without `output` or `role`
    Object,
    /// Not a JSON object
    NotAnObject,
}

/// Raw agent body, classified by shape
#[derive(Debug, Clone, PartialEq)]
pub enum AgentPayload {
    StandardOutput(Map<String, Value>),
    DirectMessage(Map<String, Value>),
    Unknown(UnknownShape),
}

/// A normalized reply plus everything that had to be coerced to build it
#[derive(Debug, Clone)]
pub struct NormalizedReply {
    pub reply: AgentReply,
    /// `false` for `Unknown` payloads; the reply is then a fixed fallback text
    pub recognized: bool,
    pub issues: Vec<DomainError>,
}

impl AgentPayload {
    /// Classify a raw JSON body.
    pub fn classify(body: Value) -> Self {
        let Value::Object(mut map) = body else {
            return AgentPayload::Unknown(UnknownShape::NotAnObject);
        };

        if let Some(Value::Object(output)) = map.remove("output") {
            return AgentPayload::StandardOutput(output);
        }

        if map.contains_key("role") {
            AgentPayload::DirectMessage(map)
        } else {
            AgentPayload::Unknown(UnknownShape::Object)
        }
    }

    pub fn shape(&self) -> &'static str {
        match self {
            AgentPayload::StandardOutput(_) => "standard_output",
            AgentPayload::DirectMessage(_) => "direct_message",
            AgentPayload::Unknown(UnknownShape::Object) => "unknown_object",
            AgentPayload::Unknown(UnknownShape::NotAnObject) => "not_an_object",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, AgentPayload::Unknown(_))
    }

    /// Normalize into the canonical `{role, content, memory}` record.
    pub fn normalize(self) -> NormalizedReply {
        match self {
            AgentPayload::StandardOutput(fields) | AgentPayload::DirectMessage(fields) => {
                let (reply, issues) = normalize_fields(&fields);
                NormalizedReply {
                    reply,
                    recognized: true,
                    issues,
                }
            }
            AgentPayload::Unknown(shape) => {
                let text = match shape {
                    UnknownShape::Object => UNKNOWN_SHAPE_REPLY,
                    UnknownShape::NotAnObject => UNEXPECTED_FORMAT_REPLY,
                };
                NormalizedReply {
                    reply: AgentReply::fallback(text),
                    recognized: false,
                    issues: Vec::new(),
                }
            }
        }
    }
}

fn normalize_fields(fields: &Map<String, Value>) -> (AgentReply, Vec<DomainError>) {
    let role = fields
        .get("role")
        .and_then(Value::as_str)
        .and_then(Role::parse)
        .unwrap_or(Role::Assistant);

    let content = non_blank(fields.get("content"))
        .or_else(|| non_blank(fields.get("response")))
        .unwrap_or(EMPTY_CONTENT_REPLY)
        .to_string();

    let (memory, raw_memory, issues) = match fields.get("memory") {
        Some(Value::Object(memory)) => {
            let (decoded, issues) = decode_memory(memory);
            (decoded, Some(Value::Object(memory.clone())), issues)
        }
        _ => (AgentMemory::empty(), None, Vec::new()),
    };

    let message = Message {
        role,
        content,
        memory: raw_memory,
    };
    (AgentReply::new(message, memory), issues)
}

fn decode_memory(memory: &Map<String, Value>) -> (AgentMemory, Vec<DomainError>) {
    let mut extra = memory.clone();
    let decoded = extra
        .remove("order")
        .map(|order| OrderSnapshot::decode(&order))
        .unwrap_or_default();

    let memory = AgentMemory {
        order: decoded.snapshot,
        extra,
    };
    (memory, decoded.issues)
}

fn non_blank(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::line::OrderLine;
    use serde_json::json;

    #[test]
    fn test_classify_standard_output() {
        let payload = AgentPayload::classify(json!({
            "output": {"role": "assistant", "content": "Sure!", "memory": {}}
        }));
        assert_eq!(payload.shape(), "standard_output");
    }

    #[test]
    fn test_classify_direct_message() {
        let payload = AgentPayload::classify(json!({"role": "assistant", "content": "Hi"}));
        assert_eq!(payload.shape(), "direct_message");
    }

    #[test]
    fn test_classify_unknown_shapes() {
        assert_eq!(
            AgentPayload::classify(json!({"status": "IN_QUEUE"})),
            AgentPayload::Unknown(UnknownShape::Object)
        );
        assert_eq!(
            AgentPayload::classify(json!("plain text")),
            AgentPayload::Unknown(UnknownShape::NotAnObject)
        );
        // A non-object `output` is not a standard envelope
        assert_eq!(
            AgentPayload::classify(json!({"output": "oops"})),
            AgentPayload::Unknown(UnknownShape::Object)
        );
    }

    #[test]
    fn test_normalize_standard_output_with_order() {
        let normalized = AgentPayload::classify(json!({
            "output": {
                "role": "assistant",
                "content": "One cappuccino coming up.",
                "memory": {
                    "agent": "order_taking_agent",
                    "order": [{"item": "Cappuccino", "quantity": 1}]
                }
            }
        }))
        .normalize();

        assert!(normalized.recognized);
        assert!(normalized.issues.is_empty());
        assert_eq!(normalized.reply.content(), "One cappuccino coming up.");
        assert_eq!(
            normalized.reply.order().lines(),
            &[OrderLine::new("Cappuccino", 1)]
        );
        assert_eq!(
            normalized.reply.memory.extra.get("agent"),
            Some(&json!("order_taking_agent"))
        );
        // The raw memory is kept verbatim for the next request
        assert_eq!(
            normalized.reply.message.memory,
            Some(json!({
                "agent": "order_taking_agent",
                "order": [{"item": "Cappuccino", "quantity": 1}]
            }))
        );
    }

    #[test]
    fn test_normalize_uses_response_when_content_blank() {
        let normalized = AgentPayload::classify(json!({
            "role": "assistant",
            "content": "   ",
            "response": "From the response field"
        }))
        .normalize();
        assert_eq!(normalized.reply.content(), "From the response field");
    }

    #[test]
    fn test_normalize_empty_content_gets_default_text() {
        let normalized = AgentPayload::classify(json!({"role": "assistant"})).normalize();
        assert_eq!(normalized.reply.content(), EMPTY_CONTENT_REPLY);
        assert!(normalized.reply.memory.is_empty());
        assert!(normalized.reply.message.memory.is_none());
    }

    #[test]
    fn test_normalize_unknown_is_fallback() {
        let normalized = AgentPayload::classify(json!(42)).normalize();
        assert!(!normalized.recognized);
        assert_eq!(normalized.reply.content(), UNEXPECTED_FORMAT_REPLY);

        let normalized = AgentPayload::classify(json!({"error": "x"})).normalize();
        assert_eq!(normalized.reply.content(), UNKNOWN_SHAPE_REPLY);
    }

    #[test]
    fn test_normalize_reports_coercions() {
        let normalized = AgentPayload::classify(json!({
            "role": "assistant",
            "content": "ok",
            "memory": {"order": [{"item": "Latte", "quantity": -2}, {"quantity": 1}]}
        }))
        .normalize();

        assert_eq!(normalized.reply.order().lines(), &[OrderLine::new("Latte", 0)]);
        assert_eq!(normalized.issues.len(), 2);
    }
}
