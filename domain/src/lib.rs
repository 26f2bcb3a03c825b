//! Domain layer for barista
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Snapshots and reconciliation
//!
//! Every agent reply may carry an **order snapshot**: the full list of
//! `{item, quantity}` lines the agent believes the customer wants. The
//! [`reconcile`] function compares it with the previously accepted snapshot
//! and decides whether the cart must be replaced.
//!
//! ## Cart
//!
//! The [`CartStore`] is the authoritative client-side cart. It only changes
//! through its own primitive operations (add, delta, clear, apply).
//!
//! ## Agent payloads
//!
//! Raw agent bodies are classified by [`AgentPayload`] and normalized into an
//! [`AgentReply`] before any decision logic sees them.

pub mod cart;
pub mod chat;
pub mod core;
pub mod menu;
pub mod order;

// Re-export commonly used types
pub use cart::store::{CartStore, CartTotal};
pub use chat::{
    entities::{AgentMemory, AgentReply, Message, Role},
    payload::{AgentPayload, NormalizedReply, UnknownShape},
};
pub use core::error::DomainError;
pub use core::text::preview;
pub use menu::entities::{MenuItems, Product};
pub use order::{
    line::{OrderLine, coerce_quantity},
    reconcile::{Reconciliation, reconcile, snapshots_differ},
    snapshot::{DecodedSnapshot, OrderSnapshot},
};
