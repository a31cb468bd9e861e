//! API routes module
//!
//! Composes the per-domain routers into the application's route table.
//! Each domain exposes an explicit `router()` constructor; registration
//! happens here, once, at startup.

pub mod health;
pub mod orders;
pub mod products;
pub mod registrar;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/users", users::router(state))
        .nest("/products", products::router(state))
        .nest("/orders", orders::router(state))
        .nest("/domain", registrar::router())
        .merge(health::router(state.clone()))
}

/// Create the unique indexes backing the duplicate checks.
///
/// Failures are logged and swallowed: a down store at startup must not
/// crash the process, and the service-level checks still apply.
pub async fn init_indexes(db: &mongodb::Database) {
    if let Err(e) = users::init_indexes(db).await {
        tracing::warn!("Failed to create user indexes: {e}");
    }
    if let Err(e) = products::init_indexes(db).await {
        tracing::warn!("Failed to create product indexes: {e}");
    }
}
