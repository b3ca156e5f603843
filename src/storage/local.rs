use std::path::PathBuf;

use tokio::fs;

use crate::storage::StorageError;

/// Filesystem backend: one JSON file per collection inside a data directory.
/// The single-machine, no-network deployment mode.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    data_dir: PathBuf,
}

impl LocalStorage {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", collection))
    }

    pub async fn load(&self, collection: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(collection)).await {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write via a temp file and rename, so a crash mid-write never leaves a
    /// truncated document behind.
    pub async fn save(&self, collection: &str, payload: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir).await?;
        let target = self.path_for(collection);
        let temp = self.data_dir.join(format!("{}.json.tmp", collection));
        fs::write(&temp, payload).await?;
        fs::rename(&temp, &target).await?;
        Ok(())
    }
}
