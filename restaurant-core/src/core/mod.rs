//! Core bootstrap: configuration and process environment

pub mod config;

pub use config::Config;

use crate::utils::logger::init_logger_with_file;

/// Load `.env`, build the [`Config`], create the working directory and
/// initialize logging
pub fn setup_environment() -> std::io::Result<Config> {
    // A missing .env file is fine
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)?;
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)?;
    }

    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}
