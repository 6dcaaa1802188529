//! Data models
//!
//! Entities persisted by the restaurant core plus their request/response
//! payloads. Ids are UUIDs, timestamps are Unix millis (UTC), money is
//! `Decimal` with 2 fractional digits.

pub mod audit;
pub mod category;
pub mod menu_item;
pub mod order;
pub mod order_summary;

// Re-exports
pub use audit::*;
pub use category::*;
pub use menu_item::*;
pub use order::*;
pub use order_summary::*;
