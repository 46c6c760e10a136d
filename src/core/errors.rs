use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Error, Debug, Serialize)]
pub enum CrudError {
    /// Identifier is not a canonical UUID
    #[error("Invalid user id: {0}")]
    InvalidUserId(String),
    #[error("User {0} not found")]
    UserNotFound(String),
    /// Request body could not be decoded
    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),
    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),
    #[error("Internal server error: {0}")]
    InternalServerError(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CrudError {
    pub fn invalid_input(field: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
        CrudError::InvalidInput(field.to_string(), FieldError::new(field, title, description))
    }
}
