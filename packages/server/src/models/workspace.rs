use chrono::NaiveDateTime;
use common::Workspace;
use common::records::timestamp;
use serde::{Deserialize, Serialize};

use super::shared::validate_text;
use crate::error::AppError;

/// Body of `POST` and `PUT` on a workspace. A `PUT` replaces every field.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct WorkspaceRequest {
    #[schema(example = "Acme Media")]
    pub name: String,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub updated_at: Option<NaiveDateTime>,
}

impl WorkspaceRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        validate_text("name", &self.name)
    }

    pub fn into_record(self, id: String) -> Workspace {
        Workspace {
            id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct WorkspaceView {
    #[schema(example = "5f0c6d6e-8a47-4f0e-9a53-0f3c2b3a1d11")]
    pub id: String,
    #[schema(example = "Acme Media")]
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl From<Workspace> for WorkspaceView {
    fn from(w: Workspace) -> Self {
        Self {
            id: w.id,
            name: w.name,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

/// Workspace as embedded inside a channel.
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct WorkspaceSummary {
    pub id: String,
    pub name: String,
}

impl From<&Workspace> for WorkspaceSummary {
    fn from(w: &Workspace) -> Self {
        Self {
            id: w.id.clone(),
            name: w.name.clone(),
        }
    }
}
