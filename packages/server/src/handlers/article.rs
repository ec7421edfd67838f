use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use common::records::find_by_id;
use common::{Article, Channel, Workspace};
use tracing::{info, instrument};
use uuid::Uuid;

use super::{remove, replace};
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::extractors::query::AppQuery;
use crate::models::article::{ArticleDetail, ArticleRequest, ArticleView};
use crate::models::shared::{DataResponse, ListData, ListParams};
use crate::query::{self, ListQuery};
use crate::resolver::Resolver;
use crate::state::AppState;

fn not_found(id: &Uuid) -> AppError {
    AppError::NotFound(format!("Article {id} not found"))
}

async fn resolve(state: &AppState, article: &Article) -> ArticleDetail {
    let workspaces = state.store.load::<Workspace>().await;
    let channels = state.store.load::<Channel>().await;
    Resolver::new(&workspaces, &channels, &[]).article(article)
}

/// Look an article up by id alone and resolve its channel.
pub(super) async fn find_detail(state: &AppState, id: &Uuid) -> Result<ArticleDetail, AppError> {
    let articles = state.store.load::<Article>().await;
    let article = find_by_id(&articles, &id.to_string()).ok_or_else(|| not_found(id))?;
    Ok(resolve(state, article).await)
}

/// Page through articles, optionally restricted to one channel.
pub(super) async fn list(
    state: &AppState,
    channel_id: Option<&str>,
    params: &ListParams,
) -> Result<ListData<ArticleView>, AppError> {
    let page = params.page_request()?;
    let articles = state.store.load::<Article>().await;
    let result = query::run(
        articles,
        &ListQuery {
            scope: channel_id,
            search: params.search.as_deref(),
            page,
        },
    );
    Ok(result.map(ArticleView::from).into())
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Articles",
    operation_id = "listArticles",
    summary = "List articles of a channel",
    description = "`search` matches the original URL or the content.",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace ID"),
        ("channel_id" = Uuid, Path, description = "Channel ID"),
        ListParams,
    ),
    responses(
        (status = 200, description = "Page of articles", body = DataResponse<ListData<ArticleView>>),
        (status = 400, description = "Invalid parameters (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn list_articles(
    State(state): State<AppState>,
    AppPath((_workspace_id, channel_id)): AppPath<(Uuid, Uuid)>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<Json<DataResponse<ListData<ArticleView>>>, AppError> {
    let channel_id = channel_id.to_string();
    let data = list(&state, Some(&channel_id), &params).await?;
    Ok(Json(DataResponse::new(data)))
}

#[utoipa::path(
    get,
    path = "/{article_id}",
    tag = "Articles",
    operation_id = "getArticle",
    summary = "Get an article with its channel",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace ID"),
        ("channel_id" = Uuid, Path, description = "Channel ID"),
        ("article_id" = Uuid, Path, description = "Article ID"),
    ),
    responses(
        (status = 200, description = "Article", body = DataResponse<ArticleDetail>),
        (status = 400, description = "Malformed id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Article not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_article(
    State(state): State<AppState>,
    AppPath((_workspace_id, _channel_id, article_id)): AppPath<(Uuid, Uuid, Uuid)>,
) -> Result<Json<DataResponse<ArticleDetail>>, AppError> {
    let detail = find_detail(&state, &article_id).await?;
    Ok(Json(DataResponse::new(detail)))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Articles",
    operation_id = "createArticle",
    summary = "Create an article in a channel",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace ID"),
        ("channel_id" = Uuid, Path, description = "Channel ID"),
    ),
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Article created", body = DataResponse<ArticleDetail>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(title = %payload.title))]
pub async fn create_article(
    State(state): State<AppState>,
    AppPath((_workspace_id, channel_id)): AppPath<(Uuid, Uuid)>,
    AppJson(payload): AppJson<ArticleRequest>,
) -> Result<(StatusCode, Json<DataResponse<ArticleDetail>>), AppError> {
    payload.validate()?;

    let article = payload.into_record(state.ids.generate(), channel_id.to_string());
    let mut articles = state.store.load::<Article>().await;
    articles.push(article.clone());
    state.store.save(&articles).await?;

    info!(id = %article.id, "Article created");
    let detail = resolve(&state, &article).await;
    Ok((StatusCode::CREATED, Json(DataResponse::new(detail))))
}

#[utoipa::path(
    put,
    path = "/{article_id}",
    tag = "Articles",
    operation_id = "updateArticle",
    summary = "Replace an article",
    description = "Overwrites every field. The channel is forced to the one in the path.",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace ID"),
        ("channel_id" = Uuid, Path, description = "Channel ID"),
        ("article_id" = Uuid, Path, description = "Article ID"),
    ),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article replaced", body = DataResponse<ArticleDetail>),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Article not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload))]
pub async fn update_article(
    State(state): State<AppState>,
    AppPath((_workspace_id, channel_id, article_id)): AppPath<(Uuid, Uuid, Uuid)>,
    AppJson(payload): AppJson<ArticleRequest>,
) -> Result<Json<DataResponse<ArticleDetail>>, AppError> {
    payload.validate()?;

    let article = payload.into_record(article_id.to_string(), channel_id.to_string());
    let mut articles = state.store.load::<Article>().await;
    if !replace(&mut articles, article.clone()) {
        return Err(not_found(&article_id));
    }
    state.store.save(&articles).await?;

    info!(id = %article.id, "Article updated");
    Ok(Json(DataResponse::new(resolve(&state, &article).await)))
}

#[utoipa::path(
    delete,
    path = "/{article_id}",
    tag = "Articles",
    operation_id = "deleteArticle",
    summary = "Delete an article",
    description = "Videos referencing the article keep the id; it is skipped when they are resolved.",
    params(
        ("workspace_id" = Uuid, Path, description = "Workspace ID"),
        ("channel_id" = Uuid, Path, description = "Channel ID"),
        ("article_id" = Uuid, Path, description = "Article ID"),
    ),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 400, description = "Malformed id (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Article not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn delete_article(
    State(state): State<AppState>,
    AppPath((_workspace_id, _channel_id, article_id)): AppPath<(Uuid, Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    let mut articles = state.store.load::<Article>().await;
    if !remove(&mut articles, &article_id.to_string()) {
        return Err(not_found(&article_id));
    }
    state.store.save(&articles).await?;

    info!(id = %article_id, "Article deleted");
    Ok(StatusCode::NO_CONTENT)
}
