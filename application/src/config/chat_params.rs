//! Chat parameters: chat flow control.
//!
//! [`ChatParams`] groups the static parameters that control
//! [`ChatFlowController`](crate::use_cases::chat_flow::ChatFlowController).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Greeting shown when a chat starts.
pub const DEFAULT_GREETING: &str = "Hello! Welcome to Old Kasturi Coffee. How can I help you today? \
Feel free to ask for recommendations, place an order, or inquire about our menu.\n\n\
For example:\n\
- 'What drinks do you recommend?'\n\
- 'I'd like to order a Cappuccino and a Croissant.'\n\
- 'Tell me about your pastries.'";

/// Chat flow control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatParams {
    /// Maximum time to wait for the agent before falling back.
    pub agent_timeout: Option<Duration>,
    /// First assistant message. Opens the transcript, so the agent sees it too;
    /// a blank greeting is left out.
    pub greeting: String,
}

impl Default for ChatParams {
    fn default() -> Self {
        Self {
            agent_timeout: Some(Duration::from_secs(60)),
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

impl ChatParams {
    pub fn with_agent_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.agent_timeout = timeout;
        self
    }

    pub fn with_timeout_seconds(self, seconds: u64) -> Self {
        self.with_agent_timeout(Some(Duration::from_secs(seconds)))
    }

    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = greeting.into();
        self
    }
}
