use chrono::{Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Order stored in the `orders` collection.
///
/// `product_name` is a denormalized copy taken from the request;
/// `product_id` is a plain string reference with no integrity check.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub product_id: String,
    pub product_name: String,
    pub ordered_by: String,
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    #[validate(length(min = 5))]
    pub product_id: String,
    #[validate(length(min = 2))]
    pub product_name: String,
    #[validate(length(min = 3))]
    pub ordered_by: String,
    pub quantity: i64,
}

/// Omitted fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrder {
    #[validate(length(min = 5))]
    pub product_id: Option<String>,
    #[validate(length(min = 2))]
    pub product_name: Option<String>,
    #[validate(length(min = 3))]
    pub ordered_by: Option<String>,
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

/// Mock shipment status for a tracking number.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackingInfo {
    pub tracking_number: String,
    pub status: String,
    pub current_location: String,
    /// Date-only (YYYY-MM-DD)
    pub estimated_delivery: NaiveDate,
}

impl TrackingInfo {
    /// Synthesize an in-transit status: delivery is always two days out.
    pub fn in_transit(tracking_number: String) -> Self {
        Self {
            tracking_number,
            status: "In transit".to_string(),
            current_location: "Distribution center".to_string(),
            estimated_delivery: Utc::now().date_naive() + Days::new(2),
        }
    }
}

impl Order {
    pub fn new(input: CreateOrder) -> Self {
        Self {
            id: Uuid::now_v7(),
            product_id: input.product_id,
            product_name: input.product_name,
            ordered_by: input.ordered_by,
            quantity: input.quantity,
        }
    }

    pub fn apply_update(&mut self, update: UpdateOrder) {
        if let Some(product_id) = update.product_id {
            self.product_id = product_id;
        }
        if let Some(product_name) = update.product_name {
            self.product_name = product_name;
        }
        if let Some(ordered_by) = update.ordered_by {
            self.ordered_by = ordered_by;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
    }
}
