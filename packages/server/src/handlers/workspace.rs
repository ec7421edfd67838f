use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common::Workspace;
use common::records::find_by_id;
use tracing::{info, instrument};
use uuid::Uuid;

use super::{remove, replace};
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::extractors::query::AppQuery;
use crate::models::shared::{DataResponse, ListData, ListParams};
use crate::models::workspace::{WorkspaceRequest, WorkspaceView};
use crate::query::{self, ListQuery};
use crate::state::AppState;

fn not_found(id: &Uuid) -> AppError {
    AppError::NotFound(format!("Workspace {id} not found"))
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Workspaces",
    operation_id = "listWorkspaces",
    summary = "List workspaces",
    description = "Returns a page of workspaces in stored order. `search` matches the workspace name.",
    params(ListParams),
    responses(
        (status = 200, description = "Page of workspaces", body = DataResponse<ListData<WorkspaceView>>),
        (status = 400, description = "Invalid query parameters (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_workspaces(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<Json<DataResponse<ListData<WorkspaceView>>>, AppError> {
    let page = params.page_request()?;
    let workspaces = state.store.load::<Workspace>().await;
    let result = query::run(
        workspaces,
        &ListQuery {
            scope: None,
            search: params.search.as_deref(),
            page,
        },
    );
    Ok(Json(DataResponse::new(result.map(WorkspaceView::from).into())))
}

#[utoipa::path(
    get,
    path = "/{workspace_id}",
    tag = "Workspaces",
    operation_id = "getWorkspace",
    summary = "Get a workspace",
    params(("workspace_id" = Uuid, Path, description = "Workspace ID")),
    responses(
        (status = 200, description = "Workspace", body = DataResponse<WorkspaceView>),
        (status = 400, description = "Malformed id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Workspace not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_workspace(
    State(state): State<AppState>,
    AppPath(workspace_id): AppPath<Uuid>,
) -> Result<Json<DataResponse<WorkspaceView>>, AppError> {
    let workspaces = state.store.load::<Workspace>().await;
    let workspace = find_by_id(&workspaces, &workspace_id.to_string())
        .cloned()
        .ok_or_else(|| not_found(&workspace_id))?;
    Ok(Json(DataResponse::new(workspace.into())))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Workspaces",
    operation_id = "createWorkspace",
    summary = "Create a workspace",
    description = "Assigns a fresh id; any `id` in the body is ignored.",
    request_body = WorkspaceRequest,
    responses(
        (status = 201, description = "Workspace created", body = DataResponse<WorkspaceView>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_workspace(
    State(state): State<AppState>,
    AppJson(payload): AppJson<WorkspaceRequest>,
) -> Result<(StatusCode, Json<DataResponse<WorkspaceView>>), AppError> {
    payload.validate()?;

    let workspace = payload.into_record(state.ids.generate());
    let mut workspaces = state.store.load::<Workspace>().await;
    workspaces.push(workspace.clone());
    state.store.save(&workspaces).await?;

    info!(id = %workspace.id, "Workspace created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(workspace.into()))))
}

#[utoipa::path(
    put,
    path = "/{workspace_id}",
    tag = "Workspaces",
    operation_id = "updateWorkspace",
    summary = "Replace a workspace",
    description = "Overwrites every field. Fields missing from the body become null.",
    params(("workspace_id" = Uuid, Path, description = "Workspace ID")),
    request_body = WorkspaceRequest,
    responses(
        (status = 200, description = "Workspace replaced", body = DataResponse<WorkspaceView>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Workspace not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_workspace(
    State(state): State<AppState>,
    AppPath(workspace_id): AppPath<Uuid>,
    AppJson(payload): AppJson<WorkspaceRequest>,
) -> Result<Json<DataResponse<WorkspaceView>>, AppError> {
    payload.validate()?;

    let workspace = payload.into_record(workspace_id.to_string());
    let mut workspaces = state.store.load::<Workspace>().await;
    if !replace(&mut workspaces, workspace.clone()) {
        return Err(not_found(&workspace_id));
    }
    state.store.save(&workspaces).await?;

    info!(id = %workspace.id, "Workspace updated");
    Ok(Json(DataResponse::new(workspace.into())))
}

#[utoipa::path(
    delete,
    path = "/{workspace_id}",
    tag = "Workspaces",
    operation_id = "deleteWorkspace",
    summary = "Delete a workspace",
    description = "Channels of the workspace are left in place.",
    params(("workspace_id" = Uuid, Path, description = "Workspace ID")),
    responses(
        (status = 204, description = "Workspace deleted"),
        (status = 400, description = "Malformed id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Workspace not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_workspace(
    State(state): State<AppState>,
    AppPath(workspace_id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    let mut workspaces = state.store.load::<Workspace>().await;
    if !remove(&mut workspaces, &workspace_id.to_string()) {
        return Err(not_found(&workspace_id));
    }
    state.store.save(&workspaces).await?;

    info!(id = %workspace_id, "Workspace deleted");
    Ok(StatusCode::NO_CONTENT)
}
