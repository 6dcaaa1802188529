//! Order Summary Repository
//!
//! Tax and total columns are written for reporting only; on load they are
//! recomputed from the subtotal.

use super::{RepoError, RepoResult, parse_decimal, parse_uuid};
use shared::models::{AuditFields, OrderSummary};
use sqlx::{Executor, Sqlite};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct OrderSummaryRow {
    id: String,
    sub_total_amount: String,
    table_id: String,
    table_number: i32,
    user_id: String,
    user_full_name: String,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl TryFrom<OrderSummaryRow> for OrderSummary {
    type Error = RepoError;

    fn try_from(row: OrderSummaryRow) -> RepoResult<Self> {
        OrderSummary::from_stored(
            parse_uuid("order_summary.id", &row.id)?,
            parse_decimal("order_summary.sub_total_amount", &row.sub_total_amount)?,
            parse_uuid("order_summary.table_id", &row.table_id)?,
            row.table_number,
            parse_uuid("order_summary.user_id", &row.user_id)?,
            row.user_full_name,
            AuditFields {
                created_at: row.created_at,
                updated_at: row.updated_at,
                deleted_at: row.deleted_at,
            },
        )
        .map_err(|e| RepoError::InvalidData(e.to_string()))
    }
}

pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> RepoResult<Option<OrderSummary>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, OrderSummaryRow>(
        "SELECT id, sub_total_amount, table_id, table_number, user_id, user_full_name, created_at, updated_at, deleted_at \
         FROM order_summary WHERE id = ?",
    )
    .bind(id.to_string())
    .fetch_optional(executor)
    .await?;
    row.map(OrderSummary::try_from).transpose()
}

pub async fn insert<'e, E>(executor: E, summary: &OrderSummary) -> RepoResult<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        "INSERT INTO order_summary (id, sub_total_amount, tax_amount, total_amount, table_id, table_number, user_id, user_full_name, created_at, updated_at, deleted_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(summary.id.to_string())
    .bind(summary.sub_total_amount().to_string())
    .bind(summary.tax_amount().to_string())
    .bind(summary.total_amount().to_string())
    .bind(summary.table_id.to_string())
    .bind(summary.table_number)
    .bind(summary.user_id.to_string())
    .bind(&summary.user_full_name)
    .bind(summary.audit.created_at)
    .bind(summary.audit.updated_at)
    .bind(summary.audit.deleted_at)
    .execute(executor)
    .await?;
    Ok(())
}

/// Persist subtotal, tax and total together
pub async fn update_amounts<'e, E>(executor: E, summary: &OrderSummary) -> RepoResult<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query(
        "UPDATE order_summary SET sub_total_amount = ?1, tax_amount = ?2, total_amount = ?3, updated_at = ?4 WHERE id = ?5",
    )
    .bind(summary.sub_total_amount().to_string())
    .bind(summary.tax_amount().to_string())
    .bind(summary.total_amount().to_string())
    .bind(summary.audit.updated_at)
    .bind(summary.id.to_string())
    .execute(executor)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Order summary {} not found",
            summary.id
        )));
    }
    Ok(())
}
