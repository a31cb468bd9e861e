//! Orders API wiring

use axum::Router;
use domain_orders::{handlers, MongoOrderRepository, OrderService};

use crate::state::AppState;

/// Create the orders router (CRUD plus the tracking mock)
pub fn router(state: &AppState) -> Router {
    let repository = MongoOrderRepository::new(state.db.clone());
    let service = OrderService::new(repository);

    handlers::router(service)
}
