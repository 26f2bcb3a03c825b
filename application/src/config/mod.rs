//! Application-level configuration.
//!
//! - [`ChatParams`]: chat flow control (agent timeout, greeting)

pub mod chat_params;

pub use chat_params::{ChatParams, DEFAULT_GREETING};
