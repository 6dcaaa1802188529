use std::path::Path;

/// Core configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./data | Working directory (database, logs) |
/// | DATABASE_PATH | {WORK_DIR}/restaurant.db | SQLite database file |
/// | LOG_LEVEL | info | Log level when `RUST_LOG` is unset |
/// | LOG_DIR | (unset) | Directory for daily-rolling log files |
/// | ENVIRONMENT | development | development, staging or production |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory
    pub work_dir: String,
    /// SQLite database file path
    pub database_path: String,
    pub log_level: String,
    /// Log file directory; stdout only when `None`
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        Self::with_work_dir(work_dir)
    }

    /// Same as [`Config::from_env`] but rooted at `work_dir`
    ///
    /// `DATABASE_PATH` still overrides the derived database location.
    pub fn with_work_dir(work_dir: impl Into<String>) -> Self {
        let work_dir = work_dir.into();
        let database_path = std::env::var("DATABASE_PATH")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                Path::new(&work_dir)
                    .join("restaurant.db")
                    .to_string_lossy()
                    .into_owned()
            });
        Self {
            database_path,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            work_dir,
        }
    }
}
