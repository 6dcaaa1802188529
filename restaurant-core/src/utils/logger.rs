//! Logging Infrastructure
//!
//! Structured logging via `tracing`. `RUST_LOG` overrides the configured
//! level when set.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional daily-rolling file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && Path::new(dir).is_dir()
    {
        let file_appender = tracing_appender::rolling::daily(dir, "restaurant-core");
        subscriber.with_ansi(false).with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}
