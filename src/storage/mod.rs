pub mod local;
pub mod remote;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use local::LocalStorage;
pub use remote::RemoteStorage;

/// Version of the persisted document layout. Documents written by older
/// releases (or without an envelope at all) are discarded on load instead of
/// being migrated; they only ever contained throwaway seed-era data.
pub const SCHEMA_VERSION: u32 = 2;

/// Logical collection names, shared by both backends.
pub mod collections {
    pub const POOLS: &str = "pools";
    pub const PREDICTIONS: &str = "predictions";
    pub const MATCH_RESULTS: &str = "match_results";
    pub const SCHEDULE: &str = "schedule";
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("redis operation failed: {0}")]
    Redis(#[from] redis::RedisError),
}

/// Envelope around every persisted collection document.
#[derive(Debug, Serialize, Deserialize)]
struct Document<T> {
    schema_version: u32,
    data: T,
}

/// Serialize a collection snapshot into its persisted form.
pub fn encode_document<T: Serialize>(data: &T) -> Result<String, StorageError> {
    let document = Document {
        schema_version: SCHEMA_VERSION,
        data,
    };
    Ok(serde_json::to_string(&document)?)
}

/// Parse a persisted document. Corrupt payloads and outdated schema versions
/// both decode to `None`: the caller falls back to seed/empty state, never
/// crashes on bad data.
pub fn decode_document<T: DeserializeOwned>(collection: &str, payload: &str) -> Option<T> {
    let document: Document<T> = match serde_json::from_str(payload) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(
                "Discarding corrupt '{}' document: {}",
                collection,
                e
            );
            return None;
        }
    };
    if document.schema_version != SCHEMA_VERSION {
        tracing::warn!(
            "Discarding '{}' document with schema version {} (current is {})",
            collection,
            document.schema_version,
            SCHEMA_VERSION
        );
        return None;
    }
    Some(document.data)
}

/// Persistence backend, selected once at startup and never changed
/// mid-session.
#[derive(Clone)]
pub enum Backend {
    Local(LocalStorage),
    Remote(RemoteStorage),
}

impl Backend {
    pub fn local(data_dir: impl Into<std::path::PathBuf>) -> Self {
        Backend::Local(LocalStorage::new(data_dir))
    }

    pub fn remote(client: std::sync::Arc<redis::Client>) -> Self {
        Backend::Remote(RemoteStorage::new(client))
    }

    pub async fn load(&self, collection: &str) -> Result<Option<String>, StorageError> {
        match self {
            Backend::Local(storage) => storage.load(collection).await,
            Backend::Remote(storage) => storage.load(collection).await,
        }
    }

    pub async fn save(&self, collection: &str, payload: &str) -> Result<(), StorageError> {
        match self {
            Backend::Local(storage) => storage.save(collection, payload).await,
            Backend::Remote(storage) => storage.save(collection, payload).await,
        }
    }

    /// Advisory "something changed, please resync" hint for sibling
    /// instances. Local mode needs none: all workers share one in-memory
    /// store. Failures are logged, never propagated — the 15s resync poll
    /// covers a lost hint.
    pub async fn notify_change(&self, collection: &str) {
        if let Backend::Remote(storage) = self {
            if let Err(e) = storage.publish_change(collection).await {
                tracing::warn!(
                    "Failed to publish change hint for '{}': {}",
                    collection,
                    e
                );
            }
        }
    }
}

/// Load and decode one collection in a single step.
pub async fn load_collection<T: DeserializeOwned>(
    backend: &Backend,
    collection: &str,
) -> Result<Option<T>, StorageError> {
    let Some(payload) = backend.load(collection).await? else {
        return Ok(None);
    };
    Ok(decode_document(collection, &payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outdated_schema_versions_are_discarded() {
        let old = r#"{"schema_version":1,"data":[1,2,3]}"#;
        assert_eq!(decode_document::<Vec<u32>>("pools", old), None);

        let current = encode_document(&vec![1u32, 2, 3]).unwrap();
        assert_eq!(
            decode_document::<Vec<u32>>("pools", &current),
            Some(vec![1, 2, 3])
        );
    }

    #[test]
    fn corrupt_payloads_decode_to_none() {
        assert_eq!(decode_document::<Vec<u32>>("pools", "{not json"), None);
        assert_eq!(decode_document::<Vec<u32>>("pools", r#"{"data":[]}"#), None);
    }
}
