//! Menu Item Model

use super::AuditFields;
use crate::order::round_money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category label used when an item's category row cannot be resolved
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Menu item entity
///
/// An item with `is_available = false` and `deleted_at` set is soft-deleted.
/// Items are never physically removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Non-negative, 2 fractional digits
    pub price: Decimal,
    pub category_id: Uuid,
    pub is_available: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl MenuItem {
    /// Build a new item bound to an already resolved category
    pub fn new(data: &MenuItemCreateUpdate, category_id: Uuid, now: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: data.name.trim().to_string(),
            description: data.description.clone(),
            price: round_money(data.price),
            category_id,
            is_available: data.is_available,
            audit: AuditFields::new(now),
        }
    }

    /// Full-field replacement of the editable fields.
    ///
    /// Making an item available again clears its deletion stamp.
    pub fn replaced_with(&self, data: &MenuItemCreateUpdate, category_id: Uuid, now: i64) -> Self {
        let audit = if data.is_available {
            self.audit.restored(now)
        } else {
            self.audit.touched(now)
        };
        Self {
            id: self.id,
            name: data.name.trim().to_string(),
            description: data.description.clone(),
            price: round_money(data.price),
            category_id,
            is_available: data.is_available,
            audit,
        }
    }

    /// Soft-deleted copy; deleting twice re-stamps `deleted_at`
    pub fn soft_deleted(&self, now: i64) -> Self {
        Self {
            is_available: false,
            audit: self.audit.deleted(now),
            ..self.clone()
        }
    }

    pub fn is_soft_deleted(&self) -> bool {
        !self.is_available && self.audit.is_deleted()
    }

    /// Project into the caller-facing shape
    pub fn to_response(&self, category: impl Into<String>) -> MenuItemResponse {
        MenuItemResponse {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: category.into(),
            is_available: self.is_available,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Create/update menu item payload
///
/// `category` is the category name, resolved ignoring case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemCreateUpdate {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: String,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

/// Menu item projection returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    /// Category name, or [`UNKNOWN_CATEGORY`]
    pub category: String,
    pub is_available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn payload(available: bool) -> MenuItemCreateUpdate {
        MenuItemCreateUpdate {
            name: " Burger ".to_string(),
            description: Some("Beef patty".to_string()),
            price: Decimal::from_str("9.99").unwrap(),
            category: "Mains".to_string(),
            is_available: available,
        }
    }

    #[test]
    fn new_item_trims_name_and_is_not_deleted() {
        let item = MenuItem::new(&payload(true), Uuid::new_v4(), 1_000);
        assert_eq!(item.name, "Burger");
        assert_eq!(item.audit.created_at, 1_000);
        assert!(!item.is_soft_deleted());
    }

    #[test]
    fn soft_delete_sets_both_fields_and_restamps() {
        let item = MenuItem::new(&payload(true), Uuid::new_v4(), 1_000);
        let deleted = item.soft_deleted(2_000);
        assert!(deleted.is_soft_deleted());
        assert_eq!(deleted.audit.deleted_at, Some(2_000));

        let again = deleted.soft_deleted(3_000);
        assert!(again.is_soft_deleted());
        assert_eq!(again.audit.deleted_at, Some(3_000));
        assert_eq!(again.audit.created_at, 1_000);
    }

    #[test]
    fn replacing_with_available_restores_deleted_item() {
        let category_id = Uuid::new_v4();
        let deleted = MenuItem::new(&payload(true), category_id, 1_000).soft_deleted(2_000);

        let restored = deleted.replaced_with(&payload(true), category_id, 3_000);
        assert!(restored.is_available);
        assert_eq!(restored.audit.deleted_at, None);
        assert_eq!(restored.id, deleted.id);

        let still_hidden = deleted.replaced_with(&payload(false), category_id, 3_000);
        assert!(still_hidden.is_soft_deleted());
    }

    #[test]
    fn create_payload_defaults_to_available() {
        let data: MenuItemCreateUpdate = serde_json::from_str(
            r#"{"name":"Fries","description":null,"price":"3.50","category":"Sides"}"#,
        )
        .unwrap();
        assert!(data.is_available);
        assert_eq!(data.price, Decimal::from_str("3.50").unwrap());
    }
}
