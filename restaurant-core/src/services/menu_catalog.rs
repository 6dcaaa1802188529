//! Menu Catalog Service
//!
//! Owns the menu item lifecycle. Reads go straight to the pool; each write
//! resolves, mutates and persists inside a single transaction.

use super::failure;
use crate::db::begin_write;
use crate::db::repository::{RepoError, RepoResult, category, menu_item};
use crate::utils::validation::{MAX_NAME_LEN, validate_menu_item, validate_required_text};
use shared::ResultEnvelope;
use shared::models::{CategoryResponse, MenuItem, MenuItemCreateUpdate, MenuItemResponse};
use shared::util::now_millis;
use sqlx::SqlitePool;
use uuid::Uuid;

pub const CATEGORY_NOT_FOUND: &str = "Category not found";
pub const MENU_ITEM_NOT_FOUND: &str = "Menu item not found";
pub const NO_ITEMS_IN_CATEGORY: &str = "No menu items found for the specified category";

const FETCHED: &str = "Menu items fetched successfully";

/// Menu item lifecycle over the SQLite store
#[derive(Clone)]
pub struct MenuCatalog {
    pool: SqlitePool,
}

impl MenuCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All available items. An empty catalog is a successful empty list.
    pub async fn list_available(&self) -> ResultEnvelope<Vec<MenuItemResponse>> {
        match menu_item::find_available(&self.pool).await {
            Ok(items) => ResultEnvelope::success(FETCHED, items),
            Err(e) => failure("fetching the menu items", e),
        }
    }

    /// Available items of one category. No match is a failure.
    pub async fn list_by_category(&self, category: &str) -> ResultEnvelope<Vec<MenuItemResponse>> {
        if let Err(e) = validate_required_text(category, "Category", MAX_NAME_LEN) {
            return failure("fetching the menu items", e);
        }
        match menu_item::find_available_by_category(&self.pool, category).await {
            Ok(items) if items.is_empty() => ResultEnvelope::error(NO_ITEMS_IN_CATEGORY),
            Ok(items) => ResultEnvelope::success(FETCHED, items),
            Err(e) => failure("fetching the menu items", e),
        }
    }

    /// First available item whose name matches, ignoring case
    pub async fn find_by_name(&self, name: &str) -> ResultEnvelope<MenuItemResponse> {
        if let Err(e) = validate_required_text(name, "Menu item name", MAX_NAME_LEN) {
            return failure("fetching the menu item", e);
        }
        match menu_item::find_available_by_name(&self.pool, name).await {
            Ok(Some(item)) => ResultEnvelope::success("Menu item fetched successfully", item),
            Ok(None) => ResultEnvelope::error(MENU_ITEM_NOT_FOUND),
            Err(e) => failure("fetching the menu item", e),
        }
    }

    /// Available item by id
    pub async fn find_by_id(&self, id: Uuid) -> ResultEnvelope<MenuItemResponse> {
        match menu_item::find_available_by_id(&self.pool, id).await {
            Ok(Some(item)) => ResultEnvelope::success("Menu item fetched successfully", item),
            Ok(None) => ResultEnvelope::error(MENU_ITEM_NOT_FOUND),
            Err(e) => failure("fetching the menu item", e),
        }
    }

    /// All categories ordered by name
    pub async fn list_categories(&self) -> ResultEnvelope<Vec<CategoryResponse>> {
        match category::find_all(&self.pool).await {
            Ok(categories) => ResultEnvelope::success(
                "Categories fetched successfully",
                categories.into_iter().map(CategoryResponse::from).collect(),
            ),
            Err(e) => failure("fetching the categories", e),
        }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Create an item in the named category
    pub async fn add(&self, data: MenuItemCreateUpdate) -> ResultEnvelope<MenuItemResponse> {
        match self.try_add(&data).await {
            Ok(item) => {
                tracing::info!(id = %item.id, name = %item.name, category = %item.category, "Menu item added");
                ResultEnvelope::success("Menu item added successfully", item)
            }
            Err(e) => failure("adding the menu item", e),
        }
    }

    async fn try_add(&self, data: &MenuItemCreateUpdate) -> RepoResult<MenuItemResponse> {
        validate_menu_item(data)?;

        let mut tx = begin_write(&self.pool).await?;
        let category = category::resolve(&mut *tx, &data.category)
            .await?
            .ok_or_else(|| RepoError::NotFound(CATEGORY_NOT_FOUND.into()))?;

        let item = MenuItem::new(data, category.id, now_millis());
        menu_item::insert(&mut *tx, &item).await?;
        tx.commit().await?;

        Ok(item.to_response(category.name))
    }

    /// Replace every editable field of an item.
    ///
    /// Soft-deleted items are still reachable here; setting `is_available`
    /// brings them back.
    pub async fn update(
        &self,
        id: Uuid,
        data: MenuItemCreateUpdate,
    ) -> ResultEnvelope<MenuItemResponse> {
        match self.try_update(id, &data).await {
            Ok(item) => {
                tracing::info!(id = %item.id, is_available = item.is_available, "Menu item updated");
                ResultEnvelope::success("Menu item updated successfully", item)
            }
            Err(e) => failure("updating the menu item", e),
        }
    }

    async fn try_update(&self, id: Uuid, data: &MenuItemCreateUpdate) -> RepoResult<MenuItemResponse> {
        validate_menu_item(data)?;

        let mut tx = begin_write(&self.pool).await?;
        let current = menu_item::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| RepoError::NotFound(MENU_ITEM_NOT_FOUND.into()))?;
        let category = category::resolve(&mut *tx, &data.category)
            .await?
            .ok_or_else(|| RepoError::NotFound(CATEGORY_NOT_FOUND.into()))?;

        let next = current.replaced_with(data, category.id, now_millis());
        menu_item::update(&mut *tx, &next).await?;
        tx.commit().await?;

        Ok(next.to_response(category.name))
    }

    /// Soft delete: mark unavailable and stamp `deleted_at`.
    ///
    /// Deleting an already deleted item succeeds again and re-stamps it.
    pub async fn delete(&self, id: Uuid) -> ResultEnvelope<String> {
        match self.try_delete(id).await {
            Ok(()) => {
                tracing::info!(%id, "Menu item soft-deleted");
                ResultEnvelope::success(
                    "Menu item deleted successfully",
                    "Menu item is marked unavailable.".to_string(),
                )
            }
            Err(e) => failure("deleting the menu item", e),
        }
    }

    async fn try_delete(&self, id: Uuid) -> RepoResult<()> {
        let mut tx = begin_write(&self.pool).await?;
        let current = menu_item::find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| RepoError::NotFound(MENU_ITEM_NOT_FOUND.into()))?;
        if current.is_soft_deleted() {
            tracing::debug!(%id, "Menu item already deleted, re-stamping");
        }
        menu_item::update(&mut *tx, &current.soft_deleted(now_millis())).await?;
        tx.commit().await?;
        Ok(())
    }
}
