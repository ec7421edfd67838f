//! Builds the embedded ("rich") views of channels, articles and videos.
//!
//! Every lookup is a linear scan of the parent collection. Nothing is cached:
//! two articles in the same channel each resolve that channel on their own.
//! A foreign key with no matching record resolves to `None` rather than an
//! error.

use common::records::find_by_id;
use common::{Article, Channel, Video, Workspace};

use crate::models::article::ArticleDetail;
use crate::models::channel::ChannelDetail;
use crate::models::video::VideoDetail;
use crate::models::workspace::WorkspaceSummary;

/// Borrowed parent collections to resolve foreign keys against.
///
/// Collections a given view never touches may be left empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver<'a> {
    workspaces: &'a [Workspace],
    channels: &'a [Channel],
    articles: &'a [Article],
}

impl<'a> Resolver<'a> {
    pub fn new(
        workspaces: &'a [Workspace],
        channels: &'a [Channel],
        articles: &'a [Article],
    ) -> Self {
        Self {
            workspaces,
            channels,
            articles,
        }
    }

    pub fn workspace(&self, id: &str) -> Option<WorkspaceSummary> {
        find_by_id(self.workspaces, id).map(WorkspaceSummary::from)
    }

    pub fn channel(&self, channel: &Channel) -> ChannelDetail {
        ChannelDetail {
            id: channel.id.clone(),
            category: channel.category.clone(),
            workspace: self.workspace(&channel.workspace_id),
            created_at: channel.created_at,
            updated_at: channel.updated_at,
        }
    }

    pub fn channel_by_id(&self, id: &str) -> Option<ChannelDetail> {
        find_by_id(self.channels, id).map(|c| self.channel(c))
    }

    pub fn article(&self, article: &Article) -> ArticleDetail {
        ArticleDetail {
            id: article.id.clone(),
            channel: self.channel_by_id(&article.channel_id),
            title: article.title.clone(),
            content: article.content.clone(),
            original_url: article.original_url.clone(),
            related_urls: article.related_urls.clone(),
            images: article.images.clone(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }

    pub fn video(&self, video: &Video) -> VideoDetail {
        let channel = self.channel_by_id(&video.channel_id);
        let articles = video
            .article_ids
            .iter()
            .filter_map(|id| find_by_id(self.articles, id))
            .map(|a| self.article(a))
            .collect();

        VideoDetail {
            id: video.id.clone(),
            channel,
            articles,
            title: video.title.clone(),
            description: video.description.clone(),
            status: video.status,
            result_video_url: video.result_video_url.clone(),
            audio_file: video.audio_file.clone(),
            video_segments: video.video_segments.clone(),
            created_at: video.created_at,
            updated_at: video.updated_at,
        }
    }
}
