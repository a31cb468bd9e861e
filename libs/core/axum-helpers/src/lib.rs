//! # Axum Helpers
//!
//! Utilities shared by the HTTP surface of this workspace:
//!
//! - **[`errors`]**: structured error responses and the [`AppError`] type
//! - **[`extractors`]**: validated JSON bodies and UUID path parameters
//! - **[`server`]**: router assembly (OpenAPI UIs, middleware, fallback),
//!   health endpoint, graceful shutdown
//!
//! ## Quick start
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let app = create_router::<ApiDoc>(api_routes).merge(health_router(app_info!()));
//! create_app(app, &ServerConfig::default()).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{AppError, ErrorResponse};
pub use extractors::{UuidPath, ValidatedJson};
pub use server::{
    create_app, create_production_app, create_router, health_router, shutdown_signal,
    ShutdownCoordinator,
};
