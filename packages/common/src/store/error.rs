use thiserror::Error;

/// Errors surfaced by document store writes.
///
/// Reads never fail from the caller's point of view: a missing or malformed
/// collection degrades to an empty one.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode collection: {0}")]
    Encode(#[from] serde_json::Error),
}
