//! Input validation helpers
//!
//! All checks here run before the store is touched and report through
//! [`RepoError::Validation`].

use crate::db::repository::{RepoError, RepoResult};
use rust_decimal::Decimal;
use shared::models::{MenuItemCreateUpdate, OrderLineCreate};
use shared::util::is_blank;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: menu item, category, customer name
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions
pub const MAX_NOTE_LEN: usize = 500;

// ── Numeric limits ──────────────────────────────────────────────────

/// Maximum allowed menu price or order line unit price
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Maximum allowed quantity per order line
pub const MAX_QUANTITY: i32 = 9999;

/// Validate that a required string is non-blank and within the length limit.
///
/// Blank input yields `"{field} cannot be empty"`.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> RepoResult<()> {
    if is_blank(value) {
        return Err(RepoError::Validation(format!("{field} cannot be empty")));
    }
    if value.chars().count() > max_len {
        return Err(RepoError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: &Option<String>, field: &str, max_len: usize) -> RepoResult<()> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(RepoError::Validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        )));
    }
    Ok(())
}

/// Validate that an amount is not negative
pub fn validate_non_negative(value: Decimal, field: &str) -> RepoResult<()> {
    if value < Decimal::ZERO {
        return Err(RepoError::Validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(())
}

/// Validate a price: non-negative and below [`MAX_AMOUNT`]
pub fn validate_amount(value: Decimal, field: &str) -> RepoResult<()> {
    validate_non_negative(value, field)?;
    if value > MAX_AMOUNT {
        return Err(RepoError::Validation(format!(
            "{field} exceeds maximum allowed ({MAX_AMOUNT}), got {value}"
        )));
    }
    Ok(())
}

/// Validate a create/update payload. The category is checked first.
pub fn validate_menu_item(data: &MenuItemCreateUpdate) -> RepoResult<()> {
    validate_required_text(&data.category, "Category", MAX_NAME_LEN)?;
    validate_required_text(&data.name, "Menu item name", MAX_NAME_LEN)?;
    validate_optional_text(&data.description, "Description", MAX_NOTE_LEN)?;
    validate_amount(data.price, "Price")
}

/// Validate a new order line
pub fn validate_order_line(line: &OrderLineCreate) -> RepoResult<()> {
    validate_required_text(&line.item_name, "Item name", MAX_NAME_LEN)?;
    if line.quantity <= 0 {
        return Err(RepoError::Validation(format!(
            "Quantity must be positive, got {}",
            line.quantity
        )));
    }
    if line.quantity > MAX_QUANTITY {
        return Err(RepoError::Validation(format!(
            "Quantity exceeds maximum allowed ({MAX_QUANTITY}), got {}",
            line.quantity
        )));
    }
    validate_amount(line.unit_price, "Unit price")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use uuid::Uuid;

    fn item(name: &str, category: &str, price: &str) -> MenuItemCreateUpdate {
        MenuItemCreateUpdate {
            name: name.to_string(),
            description: None,
            price: Decimal::from_str(price).unwrap(),
            category: category.to_string(),
            is_available: true,
        }
    }

    fn message(result: RepoResult<()>) -> String {
        match result {
            Err(RepoError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn blank_category_is_reported_first() {
        assert_eq!(
            message(validate_menu_item(&item("   ", "  ", "1.00"))),
            "Category cannot be empty"
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            message(validate_menu_item(&item("\t", "Mains", "1.00"))),
            "Menu item name cannot be empty"
        );
    }

    #[test]
    fn negative_price_is_rejected() {
        let msg = message(validate_menu_item(&item("Burger", "Mains", "-0.01")));
        assert!(msg.starts_with("Price must be non-negative"));
    }

    #[test]
    fn zero_price_is_allowed() {
        assert!(validate_menu_item(&item("Water", "Drinks", "0.00")).is_ok());
    }

    #[test]
    fn order_line_quantity_must_be_positive() {
        let line = OrderLineCreate {
            menu_item_id: Uuid::new_v4(),
            item_name: "Burger".to_string(),
            quantity: 0,
            unit_price: Decimal::from_str("9.99").unwrap(),
        };
        assert!(message(validate_order_line(&line)).starts_with("Quantity must be positive"));
    }

    #[test]
    fn long_description_is_rejected() {
        let mut data = item("Soup", "Starters", "4.50");
        data.description = Some("x".repeat(MAX_NOTE_LEN + 1));
        assert!(message(validate_menu_item(&data)).starts_with("Description is too long"));
    }
}
