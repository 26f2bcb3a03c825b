//! Console output: formatting and cart notifications

pub mod console;
pub mod notifier;
