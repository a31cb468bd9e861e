use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::{OrderError, OrderResult};
use crate::models::{CreateOrder, Order, UpdateOrder};
use crate::repository::OrderRepository;

/// Order operations.
///
/// Creation is a plain pass-through: no duplicate check, no verification
/// that the referenced product exists.
pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> OrderResult<Vec<Order>> {
        self.repository.list().await
    }

    #[instrument(skip(self, input), fields(product_id = %input.product_id))]
    pub async fn create_order(&self, input: CreateOrder) -> OrderResult<Order> {
        self.repository.create(input).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_order(&self, id: Uuid, input: UpdateOrder) -> OrderResult<Order> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(OrderError::NotPresent)?;

        self.repository.update(id, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: Uuid) -> OrderResult<()> {
        self.repository.delete(id).await
    }
}

impl<R: OrderRepository> Clone for OrderService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
