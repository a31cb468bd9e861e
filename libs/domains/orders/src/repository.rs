use async_trait::async_trait;
use uuid::Uuid;

use crate::error::OrderResult;
use crate::models::{CreateOrder, Order, UpdateOrder};

/// Data access seam for orders.
///
/// No `exists_by_*` here: orders have no uniqueness rule, identical
/// payloads produce distinct documents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, input: CreateOrder) -> OrderResult<Order>;

    async fn find_by_id(&self, id: Uuid) -> OrderResult<Option<Order>>;

    async fn list(&self) -> OrderResult<Vec<Order>>;

    async fn update(&self, id: Uuid, input: UpdateOrder) -> OrderResult<Order>;

    async fn delete(&self, id: Uuid) -> OrderResult<()>;
}
