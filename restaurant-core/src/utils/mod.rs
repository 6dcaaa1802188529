//! Utility module
//!
//! - [`error`] - error diagnostics for failure envelopes
//! - [`logger`] - tracing subscriber setup
//! - [`validation`] - input checks run before any store access

pub mod error;
pub mod logger;
pub mod validation;

pub use error::most_specific_message;
