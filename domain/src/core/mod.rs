//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`text::preview`]: shortened text for logs and error messages

pub mod error;
pub mod text;
