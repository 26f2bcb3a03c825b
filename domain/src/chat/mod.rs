//! Chat domain.
//!
//! - [`entities::Message`]: one turn of the conversation
//! - [`entities::AgentReply`]: the canonical, normalized agent response
//! - [`payload::AgentPayload`]: classification of raw agent bodies

pub mod entities;
pub mod payload;
