mod error;
mod traits;

pub mod filesystem;
pub mod memory;

pub use error::StoreError;
pub use filesystem::FilesystemDocumentStore;
pub use memory::MemoryDocumentStore;
pub use traits::DocumentStore;

use std::fmt;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, warn};

use crate::records::Record;

/// The four persisted collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Workspaces,
    Channels,
    Articles,
    Videos,
}

impl Collection {
    pub const ALL: &'static [Collection] = &[
        Self::Workspaces,
        Self::Channels,
        Self::Articles,
        Self::Videos,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workspaces => "workspaces",
            Self::Channels => "channels",
            Self::Articles => "articles",
            Self::Videos => "videos",
        }
    }

    /// Backing file name, e.g. `workspaces.json`.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'a> dyn DocumentStore + 'a {
    /// Load every record of `T`'s collection in stored order.
    ///
    /// A missing, unreadable or non-array collection is logged and treated
    /// as empty. Individual records that fail to decode are logged and skipped.
    pub async fn load<T: Record>(&self) -> Vec<T> {
        let collection = T::COLLECTION;
        let bytes = match self.read(collection).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                warn!(
                    location = %self.location(collection),
                    "Collection not found, run the seed command first; treating as empty"
                );
                return Vec::new();
            }
            Err(e) => {
                warn!(
                    location = %self.location(collection),
                    error = %e,
                    "Failed to read collection; treating as empty"
                );
                return Vec::new();
            }
        };

        let raw = match serde_json::from_slice::<Vec<serde_json::Value>>(&bytes) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    location = %self.location(collection),
                    error = %e,
                    "Collection is not a valid JSON array; treating as empty"
                );
                return Vec::new();
            }
        };

        let total = raw.len();
        let records: Vec<T> = raw
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match serde_json::from_value(value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(
                        %collection,
                        index,
                        error = %e,
                        "Skipping record that does not match its schema"
                    );
                    None
                }
            })
            .collect();
        debug!(
            %collection,
            count = records.len(),
            skipped = total - records.len(),
            "Loaded collection"
        );
        records
    }

    /// Overwrite `T`'s collection with `records`, pretty-printed.
    pub async fn save<T: Record>(&self, records: &[T]) -> Result<(), StoreError> {
        let collection = T::COLLECTION;
        let contents = encode(records)?;
        self.write(collection, contents).await?;
        debug!(%collection, count = records.len(), "Saved collection");
        Ok(())
    }
}

/// JSON with four-space indentation; non-ASCII text is written verbatim.
fn encode<T: Serialize>(records: &[T]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut ser)?;
    Ok(buf)
}
