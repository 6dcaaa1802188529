//! Repository Module
//!
//! SQL access for the restaurant tables. Functions take any sqlx executor so
//! the same query runs against the pool (reads) or inside a transaction
//! (writes, one transaction per unit of work).

pub mod category;
pub mod menu_item;
pub mod order;
pub mod order_summary;

use rust_decimal::Decimal;
use shared::models::AmountOverflow;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid persisted data: {0}")]
    InvalidData(String),
}

impl From<AmountOverflow> for RepoError {
    fn from(err: AmountOverflow) -> Self {
        Self::Validation(err.to_string())
    }
}

impl RepoError {
    /// Expected business outcome rather than an infrastructure fault
    pub fn is_business(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Validation(_))
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

pub(crate) fn parse_uuid(field: &str, raw: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| RepoError::InvalidData(format!("{field} '{raw}': {e}")))
}

pub(crate) fn parse_decimal(field: &str, raw: &str) -> RepoResult<Decimal> {
    Decimal::from_str(raw).map_err(|e| RepoError::InvalidData(format!("{field} '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_helpers_reject_garbage() {
        assert!(matches!(
            parse_uuid("menu_item.id", "not-a-uuid"),
            Err(RepoError::InvalidData(_))
        ));
        assert!(matches!(
            parse_decimal("menu_item.price", "9,99"),
            Err(RepoError::InvalidData(_))
        ));
        assert_eq!(
            parse_decimal("menu_item.price", "9.99").unwrap(),
            Decimal::new(999, 2)
        );
    }

    #[test]
    fn business_errors_are_flagged() {
        assert!(RepoError::NotFound("Menu item not found".into()).is_business());
        assert!(RepoError::Validation("Category cannot be empty".into()).is_business());
        assert!(!RepoError::InvalidData("x".into()).is_business());
    }
}
