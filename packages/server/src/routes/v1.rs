use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::{article, channel, news, video, workspace};
use crate::state::AppState;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/workspaces", workspace_routes())
        .nest("/news", news_routes())
}

fn workspace_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            workspace::list_workspaces,
            workspace::create_workspace
        ))
        .routes(routes!(
            workspace::get_workspace,
            workspace::update_workspace,
            workspace::delete_workspace
        ))
        .nest("/{workspace_id}/channels", channel_routes())
}

fn channel_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(channel::list_channels, channel::create_channel))
        .routes(routes!(
            channel::get_channel,
            channel::update_channel,
            channel::delete_channel
        ))
        .nest("/{channel_id}/articles", article_routes())
        .nest("/{channel_id}/videos", video_routes())
}

fn article_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(article::list_articles, article::create_article))
        .routes(routes!(
            article::get_article,
            article::update_article,
            article::delete_article
        ))
}

fn video_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(video::list_videos, video::create_video))
        .routes(routes!(
            video::get_video,
            video::update_video,
            video::delete_video
        ))
}

fn news_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(news::list_all_articles))
        .routes(routes!(news::get_news_article))
        .routes(routes!(news::list_all_videos))
        .routes(routes!(news::get_news_video))
}
