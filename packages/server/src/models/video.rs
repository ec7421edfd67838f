use chrono::NaiveDateTime;
use common::records::timestamp;
use common::{Video, VideoStatus};
use serde::{Deserialize, Serialize};

use super::article::ArticleDetail;
use super::channel::ChannelDetail;
use crate::error::AppError;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct VideoRequest {
    /// Ids of the articles this video is built from, in display order.
    #[serde(default)]
    pub article_ids: Vec<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub status: VideoStatus,
    pub result_video_url: Option<String>,
    pub audio_file: Option<String>,
    #[serde(default)]
    pub video_segments: Vec<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<NaiveDateTime>,
}

impl VideoRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(title) = &self.title
            && title.chars().count() > 256
        {
            return Err(AppError::Validation(
                "title must be at most 256 characters".into(),
            ));
        }
        Ok(())
    }

    pub fn into_record(self, id: String, channel_id: String) -> Video {
        Video {
            id,
            channel_id,
            article_ids: self.article_ids,
            title: self.title,
            description: self.description,
            status: self.status,
            result_video_url: self.result_video_url,
            audio_file: self.audio_file,
            video_segments: self.video_segments,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct VideoView {
    pub id: String,
    pub channel_id: String,
    pub article_ids: Vec<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: VideoStatus,
    pub result_video_url: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<Video> for VideoView {
    fn from(v: Video) -> Self {
        Self {
            id: v.id,
            channel_id: v.channel_id,
            article_ids: v.article_ids,
            title: v.title,
            description: v.description,
            status: v.status,
            result_video_url: v.result_video_url,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

/// Video with its channel and every resolvable article embedded.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct VideoDetail {
    pub id: String,
    pub channel: Option<ChannelDetail>,
    /// Articles in `article_ids` order; ids with no matching article are left out.
    pub articles: Vec<ArticleDetail>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: VideoStatus,
    pub result_video_url: Option<String>,
    pub audio_file: Option<String>,
    pub video_segments: Vec<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
