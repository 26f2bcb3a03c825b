//! Cart domain.
//!
//! - [`store::CartStore`]: the authoritative client-side cart

pub mod store;
