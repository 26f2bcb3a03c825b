//! Chat domain entities

use crate::order::snapshot::OrderSnapshot;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Lenient parse used on agent output; unknown roles yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Some(Role::System),
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message in a conversation (Entity)
///
/// Assistant turns keep the agent's raw `memory` object; it is sent back on
/// the next request because the agent recovers its order state from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<Value>,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            memory: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            memory: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            memory: None,
        }
    }

    pub fn with_memory(mut self, memory: Value) -> Self {
        self.memory = Some(memory);
        self
    }
}

/// Agent-side memory attached to a reply
///
/// Only `order` is interpreted; other keys (guard decisions, agent routing,
/// recommendations) are kept verbatim for logging.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgentMemory {
    pub order: OrderSnapshot,
    pub extra: Map<String, Value>,
}

impl AgentMemory {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_order(order: OrderSnapshot) -> Self {
        Self {
            order,
            extra: Map::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty() && self.extra.is_empty()
    }
}

/// Canonical agent response: `{role, content, memory}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentReply {
    pub message: Message,
    pub memory: AgentMemory,
}

impl AgentReply {
    pub fn new(message: Message, memory: AgentMemory) -> Self {
        Self { message, memory }
    }

    /// An assistant reply with empty memory, used whenever the agent call fails.
    pub fn fallback(content: impl Into<String>) -> Self {
        Self::new(Message::assistant(content), AgentMemory::empty())
    }

    pub fn content(&self) -> &str {
        &self.message.content
    }

    pub fn order(&self) -> &OrderSnapshot {
        &self.memory.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::user("hi")).unwrap();
        assert_eq!(json, r#"{"role":"user","content":"hi"}"#);
    }

    #[test]
    fn test_assistant_memory_round_trips() {
        let memory = serde_json::json!({"step number": 2, "order": [{"item": "Latte", "quantity": 1}]});
        let message = Message::assistant("ok").with_memory(memory.clone());

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["memory"], memory);

        let back: Message = serde_json::from_value(value).unwrap();
        assert_eq!(back, message);
    }

    #[test]
    fn test_role_parse_is_lenient() {
        assert_eq!(Role::parse(" Assistant "), Some(Role::Assistant));
        assert_eq!(Role::parse("bot"), None);
    }

    #[test]
    fn test_fallback_has_empty_memory() {
        let reply = AgentReply::fallback("sorry");
        assert_eq!(reply.message.role, Role::Assistant);
        assert_eq!(reply.content(), "sorry");
        assert!(reply.memory.is_empty());
    }
}
