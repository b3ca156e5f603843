use std::sync::Arc;

use redis::AsyncCommands;

use crate::storage::StorageError;

/// Channel carrying "collection changed" hints between instances. The
/// payload names the collection but receivers reload everything regardless;
/// it is a hint, not a data channel.
pub const SYNC_CHANNEL: &str = "bolao:sync";

const KEY_PREFIX: &str = "bolao";

/// Redis backend: one string document per collection plus a pub/sub channel
/// for change hints. The shared, multi-instance deployment mode.
#[derive(Debug, Clone)]
pub struct RemoteStorage {
    client: Arc<redis::Client>,
}

impl RemoteStorage {
    pub fn new(client: Arc<redis::Client>) -> Self {
        Self { client }
    }

    fn key_for(collection: &str) -> String {
        format!("{}:{}", KEY_PREFIX, collection)
    }

    pub async fn load(&self, collection: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let payload: Option<String> = conn.get(Self::key_for(collection)).await?;
        Ok(payload)
    }

    pub async fn save(&self, collection: &str, payload: &str) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(Self::key_for(collection), payload)
            .await?;
        Ok(())
    }

    pub async fn publish_change(&self, collection: &str) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.publish::<_, _, ()>(SYNC_CHANNEL, collection).await?;
        Ok(())
    }
}
