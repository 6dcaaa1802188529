//! Order money handling
//!
//! Tax and line-total arithmetic shared by the order summary model and the
//! persistence layer.

pub mod money;

pub use money::{TAX_RATE, line_total, round_money, tax_for};
