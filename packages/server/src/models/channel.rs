use chrono::NaiveDateTime;
use common::Channel;
use common::records::timestamp;
use serde::{Deserialize, Serialize};

use super::shared::validate_text;
use super::workspace::WorkspaceSummary;
use crate::error::AppError;

/// Body of `POST` and `PUT` on a channel. The owning workspace comes from the path.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ChannelRequest {
    #[schema(example = "Technology")]
    pub category: String,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<NaiveDateTime>,
}

impl ChannelRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_text("category", &self.category)
    }

    pub fn into_record(self, id: String, workspace_id: String) -> Channel {
        Channel {
            id,
            workspace_id,
            category: self.category,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ChannelView {
    pub id: String,
    pub workspace_id: String,
    #[schema(example = "Technology")]
    pub category: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<Channel> for ChannelView {
    fn from(c: Channel) -> Self {
        Self {
            id: c.id,
            workspace_id: c.workspace_id,
            category: c.category,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Channel with its workspace embedded. `workspace` is null when the
/// referenced workspace no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct ChannelDetail {
    pub id: String,
    pub category: String,
    pub workspace: Option<WorkspaceSummary>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
