//! Menu domain.
//!
//! - [`entities::Product`]: a catalog record as stored in the product database
//! - [`entities::MenuItems`]: product name → price lookup used by the chat flow

pub mod entities;
