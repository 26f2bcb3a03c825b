//! Conversation log port
//!
//! Every chat turn emits a handful of [`ConversationEvent`]s. They form a
//! machine-readable transcript that lives beside the `tracing` diagnostics.

use barista_domain::{OrderLine, OrderSnapshot, Role};
use serde::Serialize;
use serde_json::Value;

/// One entry of the conversation log, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationEvent {
    /// The customer's text, as sent to the agent
    UserMessage { turn: usize, content: String },
    /// A recognized agent reply, memory kept raw
    AgentReply {
        turn: usize,
        role: Role,
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        memory: Option<Value>,
    },
    /// The agent's order replaced the cart
    OrderReconciled {
        turn: usize,
        order: OrderSnapshot,
        added: Vec<OrderLine>,
    },
    /// A fallback reply was substituted
    AgentFallback { turn: usize, reason: String },
}

impl ConversationEvent {
    /// The `type` tag written to the log.
    pub fn kind(&self) -> &'static str {
        match self {
            ConversationEvent::UserMessage { .. } => "user_message",
            ConversationEvent::AgentReply { .. } => "agent_reply",
            ConversationEvent::OrderReconciled { .. } => "order_reconciled",
            ConversationEvent::AgentFallback { .. } => "agent_fallback",
        }
    }

    pub fn turn(&self) -> usize {
        match self {
            ConversationEvent::UserMessage { turn, .. }
            | ConversationEvent::AgentReply { turn, .. }
            | ConversationEvent::OrderReconciled { turn, .. }
            | ConversationEvent::AgentFallback { turn, .. } => *turn,
        }
    }
}

/// Sink for conversation events. Implementations swallow their own I/O errors.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Drops every event.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_events_serialize_with_type_tag() {
        let event = ConversationEvent::OrderReconciled {
            turn: 2,
            order: OrderSnapshot::new(vec![OrderLine::new("Latte", 2)]),
            added: vec![OrderLine::new("Latte", 2)],
        };

        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["type"], event.kind());
        assert_eq!(value["turn"], 2);
        assert_eq!(value["order"], json!([{"item": "Latte", "quantity": 2}]));
    }

    #[test]
    fn test_reply_without_memory_omits_field() {
        let event = ConversationEvent::AgentReply {
            turn: 1,
            role: Role::Assistant,
            content: "Hi!".to_string(),
            memory: None,
        };

        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["type"], "agent_reply");
        assert_eq!(value["role"], "assistant");
        assert!(value.get("memory").is_none());
        assert_eq!(event.turn(), 1);
    }
}
