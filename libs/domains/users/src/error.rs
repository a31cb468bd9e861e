use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("user not present")]
    NotPresent,

    #[error("user already present")]
    AlreadyPresent,

    #[error("database error: {0}")]
    Database(String),
}

pub type UserResult<T> = Result<T, UserError>;

/// Business-rule violations render as 400 with the plain message;
/// persistence failures are sanitized to a generic 500.
impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotPresent => AppError::BadRequest("user not present".to_string()),
            UserError::AlreadyPresent => AppError::BadRequest("user already present".to_string()),
            UserError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::Database(err.to_string())
    }
}
