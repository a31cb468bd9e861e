use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product stored in the `products` collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 5, message = "name should be string of more than 5 characters"))]
    pub name: String,
    #[validate(range(min = 0))]
    pub quantity: i64,
}

/// Omitted fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 5, message = "name should be string of more than 5 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 0))]
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeletionMessage {
    pub message: String,
}

impl DeletionMessage {
    pub fn deleted() -> Self {
        Self {
            message: "deleted successfully".to_string(),
        }
    }
}

impl Product {
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            quantity: input.quantity,
        }
    }

    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
    }
}
