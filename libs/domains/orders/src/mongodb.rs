//! MongoDB implementation of [`OrderRepository`].

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Bson},
    Collection, Database,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{OrderError, OrderResult};
use crate::models::{CreateOrder, Order, UpdateOrder};
use crate::repository::OrderRepository;

pub struct MongoOrderRepository {
    collection: Collection<Order>,
}

impl MongoOrderRepository {
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<Order>("orders");
        Self { collection }
    }

    fn id_filter(id: Uuid) -> mongodb::bson::Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[instrument(skip(self, input), fields(product_id = %input.product_id))]
    async fn create(&self, input: CreateOrder) -> OrderResult<Order> {
        let order = Order::new(input);

        self.collection.insert_one(&order).await?;

        tracing::info!(order_id = %order.id, "Order created");
        Ok(order)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> OrderResult<Option<Order>> {
        let order = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(order)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> OrderResult<Vec<Order>> {
        let cursor = self.collection.find(doc! {}).await?;
        let orders: Vec<Order> = cursor.try_collect().await?;
        Ok(orders)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateOrder) -> OrderResult<Order> {
        let filter = Self::id_filter(id);
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(OrderError::NotPresent)?;

        let mut updated = existing;
        updated.apply_update(input);

        self.collection.replace_one(filter, &updated).await?;

        tracing::info!(order_id = %id, "Order updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> OrderResult<()> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        if result.deleted_count == 0 {
            return Err(OrderError::NotPresent);
        }

        tracing::info!(order_id = %id, "Order deleted");
        Ok(())
    }
}
