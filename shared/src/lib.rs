//! Shared types for the restaurant core
//!
//! Data models, request/response payloads, the result envelope and the
//! money helpers used by both the persistence layer and its callers.

pub mod models;
pub mod order;
pub mod response;
pub mod util;

// Re-exports
pub use response::ResultEnvelope;
pub use serde::{Deserialize, Serialize};
