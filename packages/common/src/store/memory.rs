use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::Collection;
use super::error::StoreError;
use super::traits::DocumentStore;

/// Process-local store holding each collection's encoded bytes.
///
/// Nothing survives the process. This is the backend for unit tests and for
/// embedders that want a throwaway dataset; the server uses
/// [`FilesystemDocumentStore`](super::FilesystemDocumentStore).
#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<u8>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn read(&self, collection: Collection) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.collections.read().await.get(&collection).cloned())
    }

    async fn write(&self, collection: Collection, contents: Vec<u8>) -> Result<(), StoreError> {
        self.collections.write().await.insert(collection, contents);
        Ok(())
    }

    fn location(&self, collection: Collection) -> String {
        format!("memory://{collection}")
    }
}
