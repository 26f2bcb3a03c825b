//! Interactive chat module
//!
//! Provides a readline-based interactive chat with the ordering agent.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
