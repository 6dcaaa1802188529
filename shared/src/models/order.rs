//! Order Model
//!
//! An order is one purchased line owned by an [`OrderSummary`](super::OrderSummary).
//! Ownership is an explicit `summary_id` key; a summary's orders are loaded
//! by querying on that key.

use super::AuditFields;
use crate::order::{line_total, round_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order line entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub summary_id: Uuid,
    pub menu_item_id: Uuid,
    /// Item name at the time of ordering
    pub item_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Order {
    pub fn new(summary_id: Uuid, line: &OrderLineCreate, now: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            summary_id,
            menu_item_id: line.menu_item_id,
            item_name: line.item_name.trim().to_string(),
            quantity: line.quantity,
            unit_price: round_money(line.unit_price),
            audit: AuditFields::new(now),
        }
    }

    pub fn line_total(&self) -> Decimal {
        line_total(self.unit_price, self.quantity)
    }
}

/// New order line payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLineCreate {
    pub menu_item_id: Uuid,
    pub item_name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
}
