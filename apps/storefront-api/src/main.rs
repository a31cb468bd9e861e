use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.url());

    // The client is built lazily; only a malformed connection string fails
    // here.
    let mongo_client = database::mongodb::connect_from_config(&config.mongodb).await?;
    let db = mongo_client.database(config.mongodb.database());

    // An unreachable store is logged, never fatal: requests made before
    // the connection succeeds fail individually.
    match database::mongodb::ping_with_retry(&mongo_client, None).await {
        Ok(()) => info!(
            "Successfully connected to MongoDB database: {}",
            config.mongodb.database()
        ),
        Err(e) => warn!("MongoDB is not reachable yet, continuing startup: {e}"),
    }

    // Unique indexes back the email/name duplicate checks
    api::init_indexes(&db).await;

    let state = AppState {
        config,
        mongo_client,
        db,
    };

    // Compose per-domain routers into the application router
    let api_routes = api::routes(&state);

    // Wrap with OpenAPI docs, middleware and the JSON 404 fallback
    let router = create_router::<openapi::ApiDoc>(api_routes);

    // Merge the liveness endpoint
    let app = router.merge(health_router(state.config.app));

    let server_config = state.config.server.clone();
    let cleanup_client = state.mongo_client.clone();

    create_production_app(app, &server_config, Duration::from_secs(30), async move {
        info!("Shutting down: closing MongoDB connections");
        // The client closes its pool on drop
        drop(cleanup_client);
        info!("MongoDB connection closed");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Storefront API shutdown complete");
    Ok(())
}
