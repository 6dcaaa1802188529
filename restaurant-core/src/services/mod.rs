//! Service layer - envelope-returning core operations
//!
//! # Services
//!
//! - [`MenuCatalog`] - menu item lifecycle (listing, lookup, create, update, soft delete)
//! - [`OrderSummaryService`] - order summaries and their tax/total aggregation
//!
//! Every operation returns a [`ResultEnvelope`]. Validation and not-found
//! conditions become failures carrying their own message; store faults are
//! logged and reported with the most specific diagnostic available.

pub mod menu_catalog;
pub mod order_summary;

pub use menu_catalog::MenuCatalog;
pub use order_summary::OrderSummaryService;

use crate::db::repository::RepoError;
use crate::utils::most_specific_message;
use shared::ResultEnvelope;

/// Convert a repository error into a failure envelope.
///
/// `action` completes the sentence "An error occurred while ...".
pub(crate) fn failure<T>(action: &str, err: RepoError) -> ResultEnvelope<T> {
    if err.is_business() {
        tracing::debug!(action, reason = %err, "Request rejected");
        return ResultEnvelope::error(err.to_string());
    }
    tracing::error!(action, error = %err, "Store operation failed");
    let detail = most_specific_message(&err);
    ResultEnvelope::error(format!("An error occurred while {action}: {detail}"))
}
