use utoipa::OpenApi;

use crate::{
    api::models::{CreateUserRequest, ErrorResponse, UpdateUserRequest},
    core::models::user::User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::create_user,
        super::handlers::get_all_users,
        super::handlers::get_user_by_id,
        super::handlers::update_user_by_id,
        super::handlers::delete_by_id
    ),
    components(schemas(CreateUserRequest, UpdateUserRequest, ErrorResponse, User)),
    info(
        title = "User CRUD API",
        description = "API for creating, reading, updating and deleting users",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
