use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common::records::find_by_id;
use common::{Channel, Workspace};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{remove, replace};
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::extractors::query::AppQuery;
use crate::models::channel::{ChannelDetail, ChannelRequest, ChannelView};
use crate::models::shared::{DataResponse, ListData, ListParams};
use crate::query::{self, ListQuery};
use crate::resolver::Resolver;
use crate::state::AppState;

fn not_found(id: &Uuid) -> AppError {
    AppError::NotFound(format!("Channel {id} not found"))
}

async fn resolve(state: &AppState, channel: &Channel) -> ChannelDetail {
    let workspaces = state.store.load::<Workspace>().await;
    Resolver::new(&workspaces, &[], &[]).channel(channel)
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Channels",
    operation_id = "listChannels",
    summary = "List channels of a workspace",
    description = "`search` matches the channel category.",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace ID"),
        ListParams,
    ),
    responses(
        (status = 200, description = "Page of channels", body = DataResponse<ListData<ChannelView>>),
        (status = 400, description = "Invalid parameters (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_channels(
    State(state): State<AppState>,
    AppPath(workspace_id): AppPath<Uuid>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<Json<DataResponse<ListData<ChannelView>>>, AppError> {
    let page = params.page_request()?;
    let workspace_id = workspace_id.to_string();
    let channels = state.store.load::<Channel>().await;
    let result = query::run(
        channels,
        &ListQuery {
            scope: Some(&workspace_id),
            search: params.search.as_deref(),
            page,
        },
    );
    Ok(Json(DataResponse::new(result.map(ChannelView::from).into())))
}

#[utoipa::path(
    get,
    path = "/{channel_id}",
    tag = "Channels",
    operation_id = "getChannel",
    summary = "Get a channel with its workspace",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace ID"),
        ("channel_id" = Uuid, Path, description = "Channel ID"),
    ),
    responses(
        (status = 200, description = "Channel", body = DataResponse<ChannelDetail>),
        (status = 400, description = "Malformed id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Channel not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_channel(
    State(state): State<AppState>,
    AppPath((_workspace_id, channel_id)): AppPath<(Uuid, Uuid)>,
) -> Result<Json<DataResponse<ChannelDetail>>, AppError> {
    let channels = state.store.load::<Channel>().await;
    let channel =
        find_by_id(&channels, &channel_id.to_string()).ok_or_else(|| not_found(&channel_id))?;
    Ok(Json(DataResponse::new(resolve(&state, channel).await)))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Channels",
    operation_id = "createChannel",
    summary = "Create a channel in a workspace",
    description = "The workspace is taken from the path and is not checked for existence.",
    params(("workspace_id" = Uuid, Path, description = "Workspace ID")),
    request_body = ChannelRequest,
    responses(
        (status = 201, description = "Channel created", body = DataResponse<ChannelDetail>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(category = %payload.category))]
pub async fn create_channel(
    State(state): State<AppState>,
    AppPath(workspace_id): AppPath<Uuid>,
    AppJson(payload): AppJson<ChannelRequest>,
) -> Result<(StatusCode, Json<DataResponse<ChannelDetail>>), AppError> {
    payload.validate()?;

    let channel = payload.into_record(state.ids.generate(), workspace_id.to_string());
    let mut channels = state.store.load::<Channel>().await;
    channels.push(channel.clone());
    state.store.save(&channels).await?;

    info!(id = %channel.id, "Channel created");
    let detail = resolve(&state, &channel).await;
    Ok((StatusCode::CREATED, Json(DataResponse::new(detail))))
}

#[utoipa::path(
    put,
    path = "/{channel_id}",
    tag = "Channels",
    operation_id = "updateChannel",
    summary = "Replace a channel",
    description = "Overwrites every field. The workspace is forced to the one in the path.",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace ID"),
        ("channel_id" = Uuid, Path, description = "Channel ID"),
    ),
    request_body = ChannelRequest,
    responses(
        (status = 200, description = "Channel replaced", body = DataResponse<ChannelDetail>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Channel not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_channel(
    State(state): State<AppState>,
    AppPath((workspace_id, channel_id)): AppPath<(Uuid, Uuid)>,
    AppJson(payload): AppJson<ChannelRequest>,
) -> Result<Json<DataResponse<ChannelDetail>>, AppError> {
    payload.validate()?;

    let channel = payload.into_record(channel_id.to_string(), workspace_id.to_string());
    let mut channels = state.store.load::<Channel>().await;
    if !replace(&mut channels, channel.clone()) {
        return Err(not_found(&channel_id));
    }
    state.store.save(&channels).await?;

    info!(id = %channel.id, "Channel updated");
    Ok(Json(DataResponse::new(resolve(&state, &channel).await)))
}

#[utoipa::path(
    delete,
    path = "/{channel_id}",
    tag = "Channels",
    operation_id = "deleteChannel",
    summary = "Delete a channel",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace ID"),
        ("channel_id" = Uuid, Path, description = "Channel ID"),
    ),
    responses(
        (status = 204, description = "Channel deleted"),
        (status = 400, description = "Malformed id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Channel not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_channel(
    State(state): State<AppState>,
    AppPath((_workspace_id, channel_id)): AppPath<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    let mut channels = state.store.load::<Channel>().await;
    if !remove(&mut channels, &channel_id.to_string()) {
        return Err(not_found(&channel_id));
    }
    state.store.save(&channels).await?;

    info!(id = %channel_id, "Channel deleted");
    Ok(StatusCode::NO_CONTENT)
}
