//! Route tree. [`crate::build_router`] mounts it under `/api`.

mod v1;

use utoipa_axum::router::OpenApiRouter;

use crate::state::AppState;

/// Versioned resource routes: `/v1/workspaces/...` and `/v1/news/...`.
pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().nest("/v1", v1::routes())
}
