use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::Collection;
use super::error::StoreError;
use super::traits::DocumentStore;

/// One pretty-printed JSON array per collection: `{base_path}/{collection}.json`.
///
/// Writes go to a temporary sibling file which is then renamed over the
/// target, so readers never observe a half-written collection. There is no
/// locking: concurrent writers to the same collection race and the last
/// rename wins.
pub struct FilesystemDocumentStore {
    base_path: PathBuf,
}

impl FilesystemDocumentStore {
    /// Create a new filesystem store, creating `base_path` if needed.
    pub async fn new(base_path: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&base_path).await?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn collection_path(&self, collection: Collection) -> PathBuf {
        self.base_path.join(collection.file_name())
    }

    fn temp_path(&self, collection: Collection) -> PathBuf {
        self.base_path.join(format!(
            ".{}.{}.tmp",
            collection.file_name(),
            uuid::Uuid::new_v4()
        ))
    }
}

#[async_trait]
impl DocumentStore for FilesystemDocumentStore {
    async fn read(&self, collection: Collection) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.collection_path(collection)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, collection: Collection, contents: Vec<u8>) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path).await?;

        let temp_path = self.temp_path(collection);
        if let Err(e) = fs::write(&temp_path, contents).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&temp_path, self.collection_path(collection)).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(())
    }

    fn location(&self, collection: Collection) -> String {
        self.collection_path(collection).display().to_string()
    }
}
