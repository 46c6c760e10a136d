pub mod handlers;
pub mod models;
pub mod openapi;

use crate::core::services::UserService;
use crate::infrastructure::storage::UserStorage;
use axum::{Router, http::header, routing::get};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Service type shared by every handler; the store is picked at startup.
pub type AppService = UserService<Arc<dyn UserStorage>>;
pub type AppState = Arc<AppService>;

/// Full application router: health check, user routes, API docs and the
/// middleware stack.
pub fn app(service: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .merge(handlers::api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PUT,
                    http::Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE])
                .expose_headers([header::LOCATION]),
        )
        .layer(TraceLayer::new_for_http())
}
