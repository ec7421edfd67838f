pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod query;
pub mod resolver;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CorsConfig;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Newsroom API",
        version = "1.0.0",
        description = "Mock content API over workspaces, channels, articles and videos"
    ),
    tags(
        (name = "Workspaces", description = "Workspace CRUD operations"),
        (name = "Channels", description = "Channels within a workspace"),
        (name = "Articles", description = "Articles within a channel"),
        (name = "Videos", description = "Videos within a channel"),
        (name = "News", description = "Article and video listings across all channels"),
    ),
)]
struct ApiDoc;

/// Build the CORS layer. An empty origin list allows any origin.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let max_age = Duration::from_secs(config.max_age);
    if config.allow_origins.is_empty() {
        return CorsLayer::permissive().max_age(max_age);
    }

    let origins: Vec<HeaderValue> = config
        .allow_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
        .max_age(max_age)
}

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = build_cors_layer(&state.config.server.cors);
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .nest("/api", routes::api_routes())
        .split_for_parts();

    router
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
        .layer(cors)
}
