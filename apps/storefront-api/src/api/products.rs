//! Products API wiring

use axum::Router;
use domain_products::{handlers, MongoProductRepository, ProductService};
use tracing::info;

use crate::state::AppState;

/// Create the products router
pub fn router(state: &AppState) -> Router {
    let repository = MongoProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);

    handlers::router(service)
}

/// Unique index on name
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    let repository = MongoProductRepository::new(db.clone());
    repository
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create product indexes: {}", e))?;
    info!("Product collection indexes created");
    Ok(())
}
