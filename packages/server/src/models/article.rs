use chrono::NaiveDateTime;
use common::Article;
use common::records::timestamp;
use serde::{Deserialize, Serialize};

use super::channel::ChannelDetail;
use super::shared::validate_text;
use crate::error::AppError;

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ArticleRequest {
    #[schema(example = "Rust 2024 edition released")]
    pub title: String,
    pub content: String,
    #[schema(example = "https://news.example.com/rust-2024")]
    pub original_url: String,
    #[serde(default)]
    pub related_urls: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<NaiveDateTime>,
}

impl ArticleRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_text("title", &self.title)?;
        if self.original_url.trim().is_empty() {
            return Err(AppError::Validation("original_url must not be empty".into()));
        }
        Ok(())
    }

    pub fn into_record(self, id: String, channel_id: String) -> Article {
        Article {
            id,
            channel_id,
            title: self.title,
            content: self.content,
            original_url: self.original_url,
            related_urls: self.related_urls,
            images: self.images,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ArticleView {
    pub id: String,
    pub channel_id: String,
    pub title: String,
    pub content: String,
    pub original_url: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<Article> for ArticleView {
    fn from(a: Article) -> Self {
        Self {
            id: a.id,
            channel_id: a.channel_id,
            title: a.title,
            content: a.content,
            original_url: a.original_url,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct ArticleDetail {
    pub id: String,
    pub channel: Option<ChannelDetail>,
    pub title: String,
    pub content: String,
    pub original_url: String,
    pub related_urls: Vec<String>,
    pub images: Vec<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
