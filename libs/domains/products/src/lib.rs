//! Products domain.
//!
//! CRUD over the `products` collection with a name-uniqueness rule.
//! Same layering as the other domains: handlers → service → repository →
//! models, with the repository behind a mockable trait.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, DeletionMessage, Product, UpdateProduct};
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;
