//! Menu Item Repository
//!
//! Listing and lookup queries only ever see available items; `find_by_id`
//! reads the raw record so updates and deletes can reach soft-deleted rows.

use super::{RepoError, RepoResult, parse_decimal, parse_uuid};
use shared::models::{AuditFields, MenuItem, MenuItemResponse, UNKNOWN_CATEGORY};
use shared::util::name_key;
use sqlx::{Executor, Sqlite};
use uuid::Uuid;

const SELECT_ITEM: &str = "SELECT id, name, description, price, category_id, is_available, created_at, updated_at, deleted_at FROM menu_item";

/// Item joined with its category name; a missing category yields NULL
const SELECT_VIEW: &str = "SELECT m.id, m.name, m.description, m.price, m.is_available, c.name AS category_name \
     FROM menu_item m LEFT JOIN category c ON c.id = m.category_id";

const VIEW_ORDER: &str = "ORDER BY m.created_at, m.rowid";

#[derive(sqlx::FromRow)]
struct MenuItemRow {
    id: String,
    name: String,
    description: Option<String>,
    price: String,
    category_id: String,
    is_available: bool,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl TryFrom<MenuItemRow> for MenuItem {
    type Error = RepoError;

    fn try_from(row: MenuItemRow) -> RepoResult<Self> {
        Ok(MenuItem {
            id: parse_uuid("menu_item.id", &row.id)?,
            name: row.name,
            description: row.description,
            price: parse_decimal("menu_item.price", &row.price)?,
            category_id: parse_uuid("menu_item.category_id", &row.category_id)?,
            is_available: row.is_available,
            audit: AuditFields {
                created_at: row.created_at,
                updated_at: row.updated_at,
                deleted_at: row.deleted_at,
            },
        })
    }
}

#[derive(sqlx::FromRow)]
struct MenuItemViewRow {
    id: String,
    name: String,
    description: Option<String>,
    price: String,
    is_available: bool,
    category_name: Option<String>,
}

impl TryFrom<MenuItemViewRow> for MenuItemResponse {
    type Error = RepoError;

    fn try_from(row: MenuItemViewRow) -> RepoResult<Self> {
        Ok(MenuItemResponse {
            id: parse_uuid("menu_item.id", &row.id)?,
            name: row.name,
            description: row.description,
            price: parse_decimal("menu_item.price", &row.price)?,
            category: row
                .category_name
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string()),
            is_available: row.is_available,
        })
    }
}

fn into_views(rows: Vec<MenuItemViewRow>) -> RepoResult<Vec<MenuItemResponse>> {
    rows.into_iter().map(MenuItemResponse::try_from).collect()
}

/// All available items with their category names
pub async fn find_available<'e, E>(executor: E) -> RepoResult<Vec<MenuItemResponse>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query_as::<_, MenuItemViewRow>(&format!(
        "{SELECT_VIEW} WHERE m.is_available = 1 {VIEW_ORDER}"
    ))
    .fetch_all(executor)
    .await?;
    into_views(rows)
}

/// Available items whose category name equals `category`, ignoring case
pub async fn find_available_by_category<'e, E>(
    executor: E,
    category: &str,
) -> RepoResult<Vec<MenuItemResponse>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query_as::<_, MenuItemViewRow>(&format!(
        "{SELECT_VIEW} WHERE m.is_available = 1 AND c.name_key = ? {VIEW_ORDER}"
    ))
    .bind(name_key(category))
    .fetch_all(executor)
    .await?;
    into_views(rows)
}

/// First available item whose name equals `name`, ignoring case
pub async fn find_available_by_name<'e, E>(
    executor: E,
    name: &str,
) -> RepoResult<Option<MenuItemResponse>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, MenuItemViewRow>(&format!(
        "{SELECT_VIEW} WHERE m.is_available = 1 AND m.name_key = ? {VIEW_ORDER} LIMIT 1"
    ))
    .bind(name_key(name))
    .fetch_optional(executor)
    .await?;
    row.map(MenuItemResponse::try_from).transpose()
}

pub async fn find_available_by_id<'e, E>(
    executor: E,
    id: Uuid,
) -> RepoResult<Option<MenuItemResponse>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, MenuItemViewRow>(&format!(
        "{SELECT_VIEW} WHERE m.is_available = 1 AND m.id = ?"
    ))
    .bind(id.to_string())
    .fetch_optional(executor)
    .await?;
    row.map(MenuItemResponse::try_from).transpose()
}

/// Raw record lookup, soft-deleted rows included
pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> RepoResult<Option<MenuItem>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, MenuItemRow>(&format!("{SELECT_ITEM} WHERE id = ?"))
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;
    row.map(MenuItem::try_from).transpose()
}

pub async fn insert<'e, E>(executor: E, item: &MenuItem) -> RepoResult<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        "INSERT INTO menu_item (id, name, name_key, description, price, category_id, is_available, created_at, updated_at, deleted_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(item.id.to_string())
    .bind(&item.name)
    .bind(name_key(&item.name))
    .bind(&item.description)
    .bind(item.price.to_string())
    .bind(item.category_id.to_string())
    .bind(item.is_available)
    .bind(item.audit.created_at)
    .bind(item.audit.updated_at)
    .bind(item.audit.deleted_at)
    .execute(executor)
    .await?;
    Ok(())
}

/// Write every mutable column of `item` back to its row
pub async fn update<'e, E>(executor: E, item: &MenuItem) -> RepoResult<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query(
        "UPDATE menu_item SET name = ?1, name_key = ?2, description = ?3, price = ?4, category_id = ?5, is_available = ?6, updated_at = ?7, deleted_at = ?8 WHERE id = ?9",
    )
    .bind(&item.name)
    .bind(name_key(&item.name))
    .bind(&item.description)
    .bind(item.price.to_string())
    .bind(item.category_id.to_string())
    .bind(item.is_available)
    .bind(item.audit.updated_at)
    .bind(item.audit.deleted_at)
    .bind(item.id.to_string())
    .execute(executor)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {} not found", item.id)));
    }
    Ok(())
}
