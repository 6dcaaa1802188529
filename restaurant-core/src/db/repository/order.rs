//! Order Repository
//!
//! Orders reference their summary through `summary_id`.

use super::{RepoError, RepoResult, parse_decimal, parse_uuid};
use shared::models::{AuditFields, Order};
use sqlx::{Executor, Sqlite};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: String,
    summary_id: String,
    menu_item_id: String,
    item_name: String,
    quantity: i32,
    unit_price: String,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepoError;

    fn try_from(row: OrderRow) -> RepoResult<Self> {
        Ok(Order {
            id: parse_uuid("order_line.id", &row.id)?,
            summary_id: parse_uuid("order_line.summary_id", &row.summary_id)?,
            menu_item_id: parse_uuid("order_line.menu_item_id", &row.menu_item_id)?,
            item_name: row.item_name,
            quantity: row.quantity,
            unit_price: parse_decimal("order_line.unit_price", &row.unit_price)?,
            audit: AuditFields {
                created_at: row.created_at,
                updated_at: row.updated_at,
                deleted_at: row.deleted_at,
            },
        })
    }
}

/// Orders of one summary in insertion order
pub async fn find_by_summary<'e, E>(executor: E, summary_id: Uuid) -> RepoResult<Vec<Order>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query_as::<_, OrderRow>(
        "SELECT id, summary_id, menu_item_id, item_name, quantity, unit_price, created_at, updated_at, deleted_at \
         FROM order_line WHERE summary_id = ? AND deleted_at IS NULL ORDER BY created_at, rowid",
    )
    .bind(summary_id.to_string())
    .fetch_all(executor)
    .await?;
    rows.into_iter().map(Order::try_from).collect()
}

pub async fn insert<'e, E>(executor: E, order: &Order) -> RepoResult<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        "INSERT INTO order_line (id, summary_id, menu_item_id, item_name, quantity, unit_price, created_at, updated_at, deleted_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(order.id.to_string())
    .bind(order.summary_id.to_string())
    .bind(order.menu_item_id.to_string())
    .bind(&order.item_name)
    .bind(order.quantity)
    .bind(order.unit_price.to_string())
    .bind(order.audit.created_at)
    .bind(order.audit.updated_at)
    .bind(order.audit.deleted_at)
    .execute(executor)
    .await?;
    Ok(())
}
