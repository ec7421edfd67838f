//! Flat listings across every workspace and channel.

use axum::Json;
use axum::extract::State;
use tracing::instrument;
use uuid::Uuid;

use super::{article, video};
use crate::error::{AppError, ErrorBody};
use crate::extractors::path::AppPath;
use crate::extractors::query::AppQuery;
use crate::models::article::{ArticleDetail, ArticleView};
use crate::models::shared::{DataResponse, ListData, ListParams};
use crate::models::video::{VideoDetail, VideoView};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/articles",
    tag = "News",
    operation_id = "listAllArticles",
    summary = "List articles across all channels",
    params(ListParams),
    responses(
        (status = 200, description = "Page of articles", body = DataResponse<ListData<ArticleView>>),
        (status = 400, description = "Invalid query parameters (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_all_articles(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<Json<DataResponse<ListData<ArticleView>>>, AppError> {
    let data = article::list(&state, None, &params).await?;
    Ok(Json(DataResponse::new(data)))
}

#[utoipa::path(
    get,
    path = "/articles/{article_id}",
    tag = "News",
    operation_id = "getNewsArticle",
    summary = "Get any article by id",
    params(("article_id" = Uuid, Path, description = "Article ID")),
    responses(
        (status = 200, description = "Article", body = DataResponse<ArticleDetail>),
        (status = 400, description = "Malformed id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Article not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_news_article(
    State(state): State<AppState>,
    AppPath(article_id): AppPath<Uuid>,
) -> Result<Json<DataResponse<ArticleDetail>>, AppError> {
    let detail = article::find_detail(&state, &article_id).await?;
    Ok(Json(DataResponse::new(detail)))
}

#[utoipa::path(
    get,
    path = "/videos",
    tag = "News",
    operation_id = "listAllVideos",
    summary = "List videos across all channels",
    params(ListParams),
    responses(
        (status = 200, description = "Page of videos", body = DataResponse<ListData<VideoView>>),
        (status = 400, description = "Invalid query parameters (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_all_videos(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<Json<DataResponse<ListData<VideoView>>>, AppError> {
    let data = video::list(&state, None, &params).await?;
    Ok(Json(DataResponse::new(data)))
}

#[utoipa::path(
    get,
    path = "/videos/{video_id}",
    tag = "News",
    operation_id = "getNewsVideo",
    summary = "Get any video by id",
    params(("video_id" = Uuid, Path, description = "Video ID")),
    responses(
        (status = 200, description = "Video", body = DataResponse<VideoDetail>),
        (status = 400, description = "Malformed id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Video not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_news_video(
    State(state): State<AppState>,
    AppPath(video_id): AppPath<Uuid>,
) -> Result<Json<DataResponse<VideoDetail>>, AppError> {
    let detail = video::find_detail(&state, &video_id).await?;
    Ok(Json(DataResponse::new(detail)))
}
