use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::query::{DEFAULT_PAGE, DEFAULT_SIZE, Page, PageRequest};

/// Envelope wrapping every successful response body.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// One page of a list endpoint.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ListData<T> {
    pub items: Vec<T>,
    /// Number of records matching the scope and search filters across all pages.
    #[schema(example = 47)]
    pub total: usize,
}

impl<T> From<Page<T>> for ListData<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            items: page.items,
            total: page.total,
        }
    }
}

/// Query parameters shared by every list endpoint.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Page number (1-indexed, default 1).
    #[param(example = 1, minimum = 1)]
    pub page: Option<usize>,
    /// Items per page (default 10).
    #[param(example = 10, minimum = 1)]
    pub size: Option<usize>,
    /// Case-insensitive substring to search for.
    #[param(example = "react")]
    pub search: Option<String>,
}

impl ListParams {
    pub fn page_request(&self) -> Result<PageRequest, AppError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        let size = self.size.unwrap_or(DEFAULT_SIZE);
        PageRequest::new(page, size)
            .ok_or_else(|| AppError::Validation("page and size must be at least 1".into()))
    }
}

/// Validate a trimmed text field (1-256 Unicode characters).
pub fn validate_text(field: &str, value: &str) -> Result<(), AppError> {
    let value = value.trim();
    if value.is_empty() || value.chars().count() > 256 {
        return Err(AppError::Validation(format!(
            "{field} must be 1-256 characters"
        )));
    }
    Ok(())
}
