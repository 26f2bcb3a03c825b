//! Order domain.
//!
//! - [`line::OrderLine`]: one `{item, quantity}` pair reported by the agent
//! - [`snapshot::OrderSnapshot`]: the full order for a single chat turn
//! - [`reconcile::reconcile`]: decides whether a new snapshot must replace the cart

pub mod line;
pub mod reconcile;
pub mod snapshot;
