//! Category Repository
//!
//! Categories are read-only from the catalog's point of view; `insert` exists
//! for seeding.

use super::{RepoResult, parse_uuid};
use shared::models::{AuditFields, Category};
use shared::util::{is_blank, name_key};
use sqlx::{Executor, Sqlite};

const SELECT_CATEGORY: &str =
    "SELECT id, name, description, created_at, updated_at, deleted_at FROM category";

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: String,
    name: String,
    description: Option<String>,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl TryFrom<CategoryRow> for Category {
    type Error = super::RepoError;

    fn try_from(row: CategoryRow) -> RepoResult<Self> {
        Ok(Category {
            id: parse_uuid("category.id", &row.id)?,
            name: row.name,
            description: row.description,
            audit: AuditFields {
                created_at: row.created_at,
                updated_at: row.updated_at,
                deleted_at: row.deleted_at,
            },
        })
    }
}

/// Resolve a category by name, ignoring case.
///
/// Exact match on the folded key; the input is not trimmed. Blank names never
/// match.
pub async fn resolve<'e, E>(executor: E, name: &str) -> RepoResult<Option<Category>>
where
    E: Executor<'e, Database = Sqlite>,
{
    if is_blank(name) {
        return Ok(None);
    }
    let row = sqlx::query_as::<_, CategoryRow>(&format!(
        "{SELECT_CATEGORY} WHERE name_key = ? LIMIT 1"
    ))
    .bind(name_key(name))
    .fetch_optional(executor)
    .await?;
    row.map(Category::try_from).transpose()
}

pub async fn find_by_id<'e, E>(executor: E, id: uuid::Uuid) -> RepoResult<Option<Category>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, CategoryRow>(&format!("{SELECT_CATEGORY} WHERE id = ?"))
        .bind(id.to_string())
        .fetch_optional(executor)
        .await?;
    row.map(Category::try_from).transpose()
}

/// All categories ordered by name
pub async fn find_all<'e, E>(executor: E) -> RepoResult<Vec<Category>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let rows = sqlx::query_as::<_, CategoryRow>(&format!(
        "{SELECT_CATEGORY} WHERE deleted_at IS NULL ORDER BY name"
    ))
    .fetch_all(executor)
    .await?;
    rows.into_iter().map(Category::try_from).collect()
}

pub async fn insert<'e, E>(executor: E, category: &Category) -> RepoResult<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        "INSERT INTO category (id, name, name_key, description, created_at, updated_at, deleted_at) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(category.id.to_string())
    .bind(&category.name)
    .bind(name_key(&category.name))
    .bind(&category.description)
    .bind(category.audit.created_at)
    .bind(category.audit.updated_at)
    .bind(category.audit.deleted_at)
    .execute(executor)
    .await?;
    Ok(())
}
