use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Data access seam for products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Option<Product>>;

    async fn list(&self) -> ProductResult<Vec<Product>>;

    async fn update(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product>;

    async fn delete(&self, id: Uuid) -> ProductResult<()>;

    /// Whether a product with this name already exists.
    ///
    /// The duplicate check queries by name; products have no email-like
    /// field.
    async fn exists_by_name(&self, name: &str) -> ProductResult<bool>;
}
