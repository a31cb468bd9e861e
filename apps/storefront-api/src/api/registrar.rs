//! Domain-registrar API wiring

use axum::Router;

/// Create the domain mock router; stateless, no repository behind it.
pub fn router() -> Router {
    domain_registrar::handlers::router()
}
