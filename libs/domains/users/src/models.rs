use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User account stored in the `users` collection.
///
/// The password is stored as submitted; there is no hashing in this
/// system.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: i64,
}

/// Payload for creating a user.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 5, message = "name should be string of more than 5 characters"))]
    pub name: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    /// Phone number, at least 9 digits
    #[validate(range(min = 100_000_000, message = "phone should be number and at least 9 characters"))]
    pub phone: i64,
}

/// Payload for updating a user; omitted fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 5, message = "name should be string of more than 5 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: Option<String>,
    #[validate(range(min = 100_000_000, message = "phone should be number and at least 9 characters"))]
    pub phone: Option<i64>,
}

/// Confirmation body returned by delete.
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

impl User {
    /// Build a new user with a generated identifier.
    pub fn new(input: CreateUser) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            password: input.password,
            phone: input.phone,
        }
    }

    /// Replace the fields provided in `update`.
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(password) = update.password {
            self.password = password;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
    }
}
