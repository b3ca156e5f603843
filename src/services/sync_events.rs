use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use redis::Client as RedisClient;

use crate::storage::remote::SYNC_CHANNEL;
use crate::store::AppStore;

/// Listen for change hints published by other instances and reload the
/// in-memory state whenever one arrives. Runs for the lifetime of the
/// process; a dropped connection is retried after a short pause.
pub async fn run_change_listener(redis_client: Arc<RedisClient>, store: AppStore) {
    loop {
        match redis_client.get_async_connection().await {
            Ok(conn) => {
                let mut pubsub = conn.into_pubsub();
                if let Err(e) = pubsub.subscribe(SYNC_CHANNEL).await {
                    tracing::error!("Failed to subscribe to {}: {}", SYNC_CHANNEL, e);
                } else {
                    tracing::info!("Subscribed to {}", SYNC_CHANNEL);
                    let mut stream = pubsub.on_message();
                    while let Some(msg) = stream.next().await {
                        let collection = msg.get_payload::<String>().unwrap_or_default();
                        tracing::info!("Change hint received for '{}', reloading", collection);
                        if let Err(e) = store.reload_all().await {
                            tracing::error!("Reload after change hint failed: {}", e);
                        }
                    }
                    tracing::warn!("Sync subscription stream ended, reconnecting");
                }
            }
            Err(e) => {
                tracing::error!("Failed to connect to Redis for sync events: {}", e);
            }
        }
        tokio::time::sleep(Duration::from_secs(5)).await;
    }
}
