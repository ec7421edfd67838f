//! Plain records as persisted in the collection files.
//!
//! Foreign keys are opaque id strings and are not checked against their
//! parent collection. Fields absent from a stored document deserialize to
//! `None` or an empty list rather than a generated value.

mod video_status;

pub mod timestamp;

pub use video_status::{ParseVideoStatusError, VideoStatus};

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::store::Collection;

/// A document that lives in one named collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: Collection;

    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub workspace_id: String,
    pub category: String,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub channel_id: String,
    pub title: String,
    pub content: String,
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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub channel_id: String,
    #[serde(default)]
    pub article_ids: Vec<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: VideoStatus,
    #[serde(default)]
    pub result_video_url: Option<String>,
    #[serde(default)]
    pub audio_file: Option<String>,
    #[serde(default)]
    pub video_segments: Vec<String>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<NaiveDateTime>,
}

impl Record for Workspace {
    const COLLECTION: Collection = Collection::Workspaces;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Channel {
    const COLLECTION: Collection = Collection::Channels;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Article {
    const COLLECTION: Collection = Collection::Articles;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Video {
    const COLLECTION: Collection = Collection::Videos;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Linear scan for the record with the given id.
pub fn find_by_id<'a, T: Record>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|r| r.id() == id)
}
