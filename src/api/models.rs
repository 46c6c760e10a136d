use axum::{Json, extract::FromRequest, extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::core::errors::CrudError;

/// `Json` extractor whose rejections render as `ErrorResponse`.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Absent fields are left untouched.
#[derive(Deserialize, ToSchema, Default)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

// Error response struct
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for CrudError to implement IntoResponse
pub struct ApiError(pub CrudError);

impl From<CrudError> for ApiError {
    fn from(err: CrudError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(CrudError::InvalidRequestBody(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            CrudError::InvalidUserId(id) => (StatusCode::BAD_REQUEST, format!("Invalid user id: {}", id)),
            CrudError::UserNotFound(id) => (StatusCode::NOT_FOUND, format!("User {} not found", id)),
            CrudError::InvalidRequestBody(msg) => (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", msg)),
            CrudError::InvalidInput(field, detail) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid input for {}: {}", field, detail.description),
            ),
            err @ (CrudError::InternalServerError(_)
            | CrudError::DatabaseError(_)
            | CrudError::InvalidConfig(_)) => {
                error!(error = %err, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
