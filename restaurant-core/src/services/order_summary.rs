//! Order Summary Service
//!
//! Finalizes a table's orders into a summary and keeps subtotal, tax and
//! total consistent. Any subtotal change and its recomputation are written
//! in the same transaction.

use super::failure;
use crate::db::begin_write;
use crate::db::repository::{RepoError, RepoResult, order, order_summary};
use crate::utils::validation::{
    MAX_NAME_LEN, validate_non_negative, validate_order_line, validate_required_text,
};
use rust_decimal::Decimal;
use shared::ResultEnvelope;
use shared::models::{Order, OrderLineCreate, OrderSummary, OrderSummaryDetail, OrderSummaryOpen};
use shared::util::now_millis;
use sqlx::{SqliteConnection, SqlitePool};
use uuid::Uuid;

pub const ORDER_SUMMARY_NOT_FOUND: &str = "Order summary not found";

/// Order summary lifecycle over the SQLite store
#[derive(Clone)]
pub struct OrderSummaryService {
    pool: SqlitePool,
}

impl OrderSummaryService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a summary for a table from its order lines.
    ///
    /// The subtotal is the sum of the line totals.
    pub async fn open(&self, data: OrderSummaryOpen) -> ResultEnvelope<OrderSummaryDetail> {
        match self.try_open(data).await {
            Ok(detail) => {
                tracing::info!(
                    id = %detail.summary.id,
                    table_number = detail.summary.table_number,
                    orders = detail.orders.len(),
                    total = %detail.summary.total_amount(),
                    "Order summary created"
                );
                ResultEnvelope::success("Order summary created successfully", detail)
            }
            Err(e) => failure("creating the order summary", e),
        }
    }

    async fn try_open(&self, data: OrderSummaryOpen) -> RepoResult<OrderSummaryDetail> {
        validate_required_text(&data.user_full_name, "User full name", MAX_NAME_LEN)?;
        for line in &data.lines {
            validate_order_line(line)?;
        }

        let now = now_millis();
        let mut summary = OrderSummary::new(
            data.table_id,
            data.table_number,
            data.user_id,
            data.user_full_name.trim(),
            now,
        );
        let orders: Vec<Order> = data
            .lines
            .iter()
            .map(|line| Order::new(summary.id, line, now))
            .collect();
        summary.set_sub_total(sum_line_totals(&orders))?;

        let mut tx = begin_write(&self.pool).await?;
        order_summary::insert(&mut *tx, &summary).await?;
        for o in &orders {
            order::insert(&mut *tx, o).await?;
        }
        tx.commit().await?;

        Ok(OrderSummaryDetail { summary, orders })
    }

    /// Append one order to a summary and recompute its subtotal
    pub async fn add_order(
        &self,
        summary_id: Uuid,
        line: OrderLineCreate,
    ) -> ResultEnvelope<OrderSummaryDetail> {
        match self.try_add_order(summary_id, &line).await {
            Ok(detail) => {
                tracing::info!(id = %summary_id, sub_total = %detail.summary.sub_total_amount(), "Order added to summary");
                ResultEnvelope::success("Order added successfully", detail)
            }
            Err(e) => failure("adding the order", e),
        }
    }

    async fn try_add_order(
        &self,
        summary_id: Uuid,
        line: &OrderLineCreate,
    ) -> RepoResult<OrderSummaryDetail> {
        validate_order_line(line)?;

        let mut tx = begin_write(&self.pool).await?;
        let summary = load_summary(&mut tx, summary_id).await?;
        let now = now_millis();
        order::insert(&mut *tx, &Order::new(summary_id, line, now)).await?;

        let orders = order::find_by_summary(&mut *tx, summary_id).await?;
        let mut next = summary;
        next.audit = next.audit.touched(now);
        next.set_sub_total(sum_line_totals(&orders))?;
        order_summary::update_amounts(&mut *tx, &next).await?;
        tx.commit().await?;

        Ok(OrderSummaryDetail {
            summary: next,
            orders,
        })
    }

    /// Set the subtotal explicitly; tax and total are recomputed with it
    pub async fn set_sub_total(
        &self,
        summary_id: Uuid,
        amount: Decimal,
    ) -> ResultEnvelope<OrderSummary> {
        match self.try_set_sub_total(summary_id, amount).await {
            Ok(summary) => {
                tracing::info!(
                    id = %summary_id,
                    sub_total = %summary.sub_total_amount(),
                    tax = %summary.tax_amount(),
                    total = %summary.total_amount(),
                    "Order summary totals recalculated"
                );
                ResultEnvelope::success("Order summary updated successfully", summary)
            }
            Err(e) => failure("updating the order summary", e),
        }
    }

    async fn try_set_sub_total(&self, summary_id: Uuid, amount: Decimal) -> RepoResult<OrderSummary> {
        validate_non_negative(amount, "Subtotal")?;

        let mut tx = begin_write(&self.pool).await?;
        let mut summary = load_summary(&mut tx, summary_id).await?;
        summary.audit = summary.audit.touched(now_millis());
        summary.set_sub_total(amount)?;
        order_summary::update_amounts(&mut *tx, &summary).await?;
        tx.commit().await?;

        Ok(summary)
    }

    /// Summary with its orders
    pub async fn find(&self, summary_id: Uuid) -> ResultEnvelope<OrderSummaryDetail> {
        match self.try_find(summary_id).await {
            Ok(detail) => ResultEnvelope::success("Order summary fetched successfully", detail),
            Err(e) => failure("fetching the order summary", e),
        }
    }

    async fn try_find(&self, summary_id: Uuid) -> RepoResult<OrderSummaryDetail> {
        let summary = order_summary::find_by_id(&self.pool, summary_id)
            .await?
            .ok_or_else(|| RepoError::NotFound(ORDER_SUMMARY_NOT_FOUND.into()))?;
        let orders = order::find_by_summary(&self.pool, summary_id).await?;
        Ok(OrderSummaryDetail { summary, orders })
    }
}

async fn load_summary(conn: &mut SqliteConnection, id: Uuid) -> RepoResult<OrderSummary> {
    order_summary::find_by_id(conn, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(ORDER_SUMMARY_NOT_FOUND.into()))
}

fn sum_line_totals(orders: &[Order]) -> Decimal {
    orders.iter().map(Order::line_total).sum()
}
