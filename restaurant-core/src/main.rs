use restaurant_core::{DbService, MenuCatalog, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. dotenv, work dir, logging
    let config = setup_environment()?;
    tracing::info!(environment = %config.environment, "Restaurant core starting...");

    // 2. Open database and apply migrations
    let db = DbService::new(&config.database_path).await?;

    // 3. Report catalog state
    let catalog = MenuCatalog::new(db.pool.clone());
    let categories = catalog.list_categories().await.map(|c| c.len()).into_result();
    let items = catalog.list_available().await.map(|i| i.len()).into_result();
    match (categories, items) {
        (Ok(categories), Ok(available_items)) => {
            tracing::info!(categories, available_items, "Catalog ready")
        }
        (Err(message), _) | (_, Err(message)) => {
            tracing::error!(%message, "Catalog check failed")
        }
    }

    db.close().await;
    Ok(())
}
