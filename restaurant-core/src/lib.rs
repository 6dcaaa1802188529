//! Restaurant core - menu catalog and order summary domain
//!
//! # Modules
//!
//! ```text
//! restaurant-core/src/
//! ├── core/          # configuration, environment setup
//! ├── db/            # SQLite pool, migrations, repositories
//! ├── services/      # MenuCatalog, OrderSummaryService (envelope surface)
//! └── utils/         # logging, validation, error diagnostics
//! ```
//!
//! Callers (HTTP handlers, CLIs) hold a [`MenuCatalog`] or
//! [`OrderSummaryService`] and receive a [`ResultEnvelope`] from every call.

pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, setup_environment};
pub use db::DbService;
pub use db::repository::{RepoError, RepoResult};
pub use services::{MenuCatalog, OrderSummaryService};
pub use shared::ResultEnvelope;

// Re-export logger functions
pub use utils::logger::init_logger_with_file;
