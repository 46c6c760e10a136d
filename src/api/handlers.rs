use crate::{
    api::{AppState, models::*},
    core::{errors::CrudError, models::user::User},
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};

// Define API routes
pub fn api_routes(service: AppState) -> Router {
    Router::new()
        .route("/users", get(get_all_users).post(create_user))
        .route(
            "/users/{user_id}",
            get(get_user_by_id).put(update_user_by_id).delete(delete_by_id),
        )
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created, Location header points at it"),
        (status = 400, description = "Malformed body or password too long", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn create_user(
    State(service): State<AppState>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = service.create_user(req.username, req.email, req.password).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/users/{}", user_id))]))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_all_users(State(service): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = service.get_users().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "ID of the user to retrieve")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = User),
        (status = 400, description = "Malformed user id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_user_by_id(
    State(service): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = service
        .get_user_by_id(&user_id)
        .await?
        .ok_or_else(|| CrudError::UserNotFound(user_id))?;
    Ok(Json(user))
}

#[utoipa::path(
    put,
    path = "/users/{user_id}",
    request_body = UpdateUserRequest,
    params(
        ("user_id" = String, Path, description = "ID of the user to update")
    ),
    responses(
        (status = 204, description = "User updated, or no user with this id"),
        (status = 400, description = "Malformed user id or invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn update_user_by_id(
    State(service): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(req): ApiJson<UpdateUserRequest>,
) -> Result<StatusCode, ApiError> {
    service
        .update_user_by_id(&user_id, req.username, req.password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    params(
        ("user_id" = String, Path, description = "ID of the user to delete")
    ),
    responses(
        (status = 204, description = "User deleted, or no user with this id"),
        (status = 400, description = "Malformed user id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn delete_by_id(
    State(service): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete_by_id(&user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
