use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rendering state of a generated video.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoStatus {
    /// Created but not yet queued.
    #[default]
    Draft,
    /// Queued for rendering.
    Pending,
    /// Currently rendering.
    Processing,
    /// Rendered; `result_video_url` is usable.
    Completed,
    /// Rendering failed.
    Failed,
}

impl VideoStatus {
    /// All possible status values.
    pub const ALL: &'static [VideoStatus] = &[
        Self::Draft,
        Self::Pending,
        Self::Processing,
        Self::Completed,
        Self::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Pending => "PENDING",
            Self::Processing => "PROCESSING",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
        }
    }
}

impl fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when parsing an invalid status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseVideoStatusError {
    invalid: String,
}

impl fmt::Display for ParseVideoStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid video status '{}'. Valid values: {}",
            self.invalid,
            VideoStatus::ALL
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for ParseVideoStatusError {}

impl FromStr for VideoStatus {
    type Err = ParseVideoStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VideoStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseVideoStatusError {
                invalid: s.to_string(),
            })
    }
}
