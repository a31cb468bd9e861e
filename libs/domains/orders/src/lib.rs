//! Orders domain.
//!
//! CRUD over the `orders` collection, plus the stateless shipment-tracking
//! mock under `/track/{trackingNumber}`.
//!
//! Orders deliberately perform no duplicate check and no referential check
//! that the referenced product exists — identical payloads create distinct
//! documents.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{OrderError, OrderResult};
pub use handlers::ApiDoc;
pub use models::{CreateOrder, DeletionMessage, Order, TrackingInfo, UpdateOrder};
pub use mongodb::MongoOrderRepository;
pub use repository::OrderRepository;
pub use service::OrderService;
