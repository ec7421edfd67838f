use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common::records::find_by_id;
use common::{Article, Channel, Video, Workspace};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{remove, replace};
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::extractors::query::AppQuery;
use crate::models::shared::{DataResponse, ListData, ListParams};
use crate::models::video::{VideoDetail, VideoRequest, VideoView};
use crate::query::{self, ListQuery};
use crate::resolver::Resolver;
use crate::state::AppState;

fn not_found(id: &Uuid) -> AppError {
    AppError::NotFound(format!("Video {id} not found"))
}

async fn resolve(state: &AppState, video: &Video) -> VideoDetail {
    let workspaces = state.store.load::<Workspace>().await;
    let channels = state.store.load::<Channel>().await;
    let articles = state.store.load::<Article>().await;
    Resolver::new(&workspaces, &channels, &articles).video(video)
}

/// Look a video up by id alone and resolve its channel and articles.
pub(super) async fn find_detail(state: &AppState, id: &Uuid) -> Result<VideoDetail, AppError> {
    let videos = state.store.load::<Video>().await;
    let video = find_by_id(&videos, &id.to_string()).ok_or_else(|| not_found(id))?;
    Ok(resolve(state, video).await)
}

/// Page through videos, optionally restricted to one channel.
pub(super) async fn list(
    state: &AppState,
    channel_id: Option<&str>,
    params: &ListParams,
) -> Result<ListData<VideoView>, AppError> {
    let page = params.page_request()?;
    let videos = state.store.load::<Video>().await;
    let result = query::run(
        videos,
        &ListQuery {
            scope: channel_id,
            search: params.search.as_deref(),
            page,
        },
    );
    Ok(result.map(VideoView::from).into())
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Videos",
    operation_id = "listVideos",
    summary = "List videos of a channel",
    description = "`search` matches the result video URL, the audio file or any video segment.",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace ID"),
        ("channel_id" = Uuid, Path, description = "Channel ID"),
        ListParams,
    ),
    responses(
        (status = 200, description = "Page of videos", body = DataResponse<ListData<VideoView>>),
        (status = 400, description = "Invalid parameters (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_videos(
    State(state): State<AppState>,
    AppPath((_workspace_id, channel_id)): AppPath<(Uuid, Uuid)>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<Json<DataResponse<ListData<VideoView>>>, AppError> {
    let channel_id = channel_id.to_string();
    let data = list(&state, Some(&channel_id), &params).await?;
    Ok(Json(DataResponse::new(data)))
}

#[utoipa::path(
    get,
    path = "/{video_id}",
    tag = "Videos",
    operation_id = "getVideo",
    summary = "Get a video with its channel and articles",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace ID"),
        ("channel_id" = Uuid, Path, description = "Channel ID"),
        ("video_id" = Uuid, Path, description = "Video ID"),
    ),
    responses(
        (status = 200, description = "Video", body = DataResponse<VideoDetail>),
        (status = 400, description = "Malformed id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Video not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_video(
    State(state): State<AppState>,
    AppPath((_workspace_id, _channel_id, video_id)): AppPath<(Uuid, Uuid, Uuid)>,
) -> Result<Json<DataResponse<VideoDetail>>, AppError> {
    let detail = find_detail(&state, &video_id).await?;
    Ok(Json(DataResponse::new(detail)))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Videos",
    operation_id = "createVideo",
    summary = "Create a video in a channel",
    description = "`article_ids` are stored as given; unknown ids are skipped when the video is resolved.",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace ID"),
        ("channel_id" = Uuid, Path, description = "Channel ID"),
    ),
    request_body = VideoRequest,
    responses(
        (status = 201, description = "Video created", body = DataResponse<VideoDetail>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(status = %payload.status))]
pub async fn create_video(
    State(state): State<AppState>,
    AppPath((_workspace_id, channel_id)): AppPath<(Uuid, Uuid)>,
    AppJson(payload): AppJson<VideoRequest>,
) -> Result<(StatusCode, Json<DataResponse<VideoDetail>>), AppError> {
    payload.validate()?;

    let video = payload.into_record(state.ids.generate(), channel_id.to_string());
    let mut videos = state.store.load::<Video>().await;
    videos.push(video.clone());
    state.store.save(&videos).await?;

    info!(id = %video.id, "Video created");
    let detail = resolve(&state, &video).await;
    Ok((StatusCode::CREATED, Json(DataResponse::new(detail))))
}

#[utoipa::path(
    put,
    path = "/{video_id}",
    tag = "Videos",
    operation_id = "updateVideo",
    summary = "Replace a video",
    description = "Overwrites every field. The channel is forced to the one in the path.",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace ID"),
        ("channel_id" = Uuid, Path, description = "Channel ID"),
        ("video_id" = Uuid, Path, description = "Video ID"),
    ),
    request_body = VideoRequest,
    responses(
        (status = 200, description = "Video replaced", body = DataResponse<VideoDetail>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Video not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_video(
    State(state): State<AppState>,
    AppPath((_workspace_id, channel_id, video_id)): AppPath<(Uuid, Uuid, Uuid)>,
    AppJson(payload): AppJson<VideoRequest>,
) -> Result<Json<DataResponse<VideoDetail>>, AppError> {
    payload.validate()?;

    let video = payload.into_record(video_id.to_string(), channel_id.to_string());
    let mut videos = state.store.load::<Video>().await;
    if !replace(&mut videos, video.clone()) {
        return Err(not_found(&video_id));
    }
    state.store.save(&videos).await?;

    info!(id = %video.id, status = %video.status, "Video updated");
    Ok(Json(DataResponse::new(resolve(&state, &video).await)))
}

#[utoipa::path(
    delete,
    path = "/{video_id}",
    tag = "Videos",
    operation_id = "deleteVideo",
    summary = "Delete a video",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace ID"),
        ("channel_id" = Uuid, Path, description = "Channel ID"),
        ("video_id" = Uuid, Path, description = "Video ID"),
    ),
    responses(
        (status = 204, description = "Video deleted"),
        (status = 400, description = "Malformed id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Video not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_video(
    State(state): State<AppState>,
    AppPath((_workspace_id, _channel_id, video_id)): AppPath<(Uuid, Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    let mut videos = state.store.load::<Video>().await;
    if !remove(&mut videos, &video_id.to_string()) {
        return Err(not_found(&video_id));
    }
    state.store.save(&videos).await?;

    info!(id = %video_id, "Video deleted");
    Ok(StatusCode::NO_CONTENT)
}
