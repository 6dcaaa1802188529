//! Order Summary Model
//!
//! A summary groups the orders of one table/session and carries the
//! subtotal, tax and total. Tax and total are derived from the subtotal and
//! can only change through [`OrderSummary::calculate_totals`].

use super::{AuditFields, Order, OrderLineCreate};
use crate::order::{round_money, tax_for};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subtotal whose tax or total falls outside the `Decimal` range
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Subtotal {0} is too large to compute tax and total")]
pub struct AmountOverflow(pub Decimal);

/// `(tax, total)` for a subtotal, without panicking on overflow
fn totals_for(sub_total: Decimal) -> Result<(Decimal, Decimal), AmountOverflow> {
    let tax = tax_for(sub_total).ok_or(AmountOverflow(sub_total))?;
    let total = sub_total
        .checked_add(tax)
        .ok_or(AmountOverflow(sub_total))?;
    Ok((tax, total))
}

/// Order summary entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub id: Uuid,
    sub_total_amount: Decimal,
    tax_amount: Decimal,
    total_amount: Decimal,
    pub table_id: Uuid,
    pub table_number: i32,
    pub user_id: Uuid,
    pub user_full_name: String,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl OrderSummary {
    /// Open an empty summary for a table
    pub fn new(
        table_id: Uuid,
        table_number: i32,
        user_id: Uuid,
        user_full_name: impl Into<String>,
        now: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sub_total_amount: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            total_amount: Decimal::ZERO,
            table_id,
            table_number,
            user_id,
            user_full_name: user_full_name.into(),
            audit: AuditFields::new(now),
        }
    }

    /// Rebuild a summary from stored columns; derived amounts are recomputed
    pub fn from_stored(
        id: Uuid,
        sub_total_amount: Decimal,
        table_id: Uuid,
        table_number: i32,
        user_id: Uuid,
        user_full_name: String,
        audit: AuditFields,
    ) -> Result<Self, AmountOverflow> {
        let mut summary = Self {
            id,
            sub_total_amount,
            tax_amount: Decimal::ZERO,
            total_amount: Decimal::ZERO,
            table_id,
            table_number,
            user_id,
            user_full_name,
            audit,
        };
        summary.calculate_totals()?;
        Ok(summary)
    }

    pub fn sub_total_amount(&self) -> Decimal {
        self.sub_total_amount
    }

    pub fn tax_amount(&self) -> Decimal {
        self.tax_amount
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Set the subtotal (rounded to 2 dp) and recompute tax and total.
    ///
    /// On overflow the summary is left unchanged.
    pub fn set_sub_total(&mut self, amount: Decimal) -> Result<(), AmountOverflow> {
        let sub_total = round_money(amount);
        let (tax, total) = totals_for(sub_total)?;
        self.sub_total_amount = sub_total;
        self.tax_amount = tax;
        self.total_amount = total;
        Ok(())
    }

    /// Recompute tax and total from the subtotal.
    ///
    /// `tax = round(sub_total * 7.25%, 2)`, `total = sub_total + tax`.
    pub fn calculate_totals(&mut self) -> Result<(), AmountOverflow> {
        let (tax, total) = totals_for(self.sub_total_amount)?;
        self.tax_amount = tax;
        self.total_amount = total;
        Ok(())
    }
}

/// Finalize a table's orders into a new summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummaryOpen {
    pub table_id: Uuid,
    pub table_number: i32,
    pub user_id: Uuid,
    pub user_full_name: String,
    #[serde(default)]
    pub lines: Vec<OrderLineCreate>,
}

/// Summary together with its orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummaryDetail {
    #[serde(flatten)]
    pub summary: OrderSummary,
    pub orders: Vec<Order>,
}
