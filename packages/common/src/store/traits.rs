use async_trait::async_trait;

use super::Collection;
use super::error::StoreError;

/// Byte-level access to named collections.
///
/// Typed loading and saving lives on `dyn DocumentStore` so every backend
/// shares the same encoding and degradation rules.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read the raw contents of a collection.
    ///
    /// Returns `Ok(None)` if the collection has never been written.
    async fn read(&self, collection: Collection) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace the full contents of a collection.
    async fn write(&self, collection: Collection, contents: Vec<u8>) -> Result<(), StoreError>;

    /// Human-readable location of a collection, used in diagnostics.
    fn location(&self, collection: Collection) -> String;
}
