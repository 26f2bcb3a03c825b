//! Progress indicators shown while the agent is working

pub mod reporter;
