use std::net::TcpListener;
use std::sync::Arc;

use secrecy::ExposeSecret;

use bolao_backend::config::settings::{get_config, StorageMode};
use bolao_backend::feed::FeedClient;
use bolao_backend::pool::scoring::ScoringRules;
use bolao_backend::run;
use bolao_backend::services::{run_change_listener, SchedulerService};
use bolao_backend::storage::Backend;
use bolao_backend::store::AppStore;
use bolao_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "bolao-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let rules = ScoringRules::from(config.scoring);
    let remote = matches!(config.storage.mode, StorageMode::Remote);

    // A Redis client is only needed in remote mode; local mode persists to
    // JSON files under the configured data directory.
    let (backend, redis_client) = match config.storage.mode {
        StorageMode::Local => {
            tracing::info!("Storage mode: local ({})", config.storage.data_dir);
            (Backend::local(config.storage.data_dir.clone()), None)
        }
        StorageMode::Remote => {
            let client = match redis::Client::open(config.redis.connection_url().expose_secret()) {
                Ok(client) => Arc::new(client),
                Err(e) => {
                    tracing::error!("Failed to create Redis client: {}", e);
                    eprintln!("Redis is required for remote storage mode: {}", e);
                    std::process::exit(1);
                }
            };
            tracing::info!("Storage mode: remote (Redis)");
            (Backend::remote(client.clone()), Some(client))
        }
    };

    let store = match AppStore::init(backend, rules).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to initialize store: {}", e);
            std::process::exit(1);
        }
    };

    // Other instances announce writes over pub/sub; pick those up.
    if let Some(client) = redis_client {
        let listener_store = store.clone();
        tokio::spawn(run_change_listener(client, listener_store));
    }

    let feed_client = FeedClient::new(config.feed);

    let scheduler = match SchedulerService::new(store.clone(), feed_client.clone()).await {
        Ok(scheduler) => scheduler,
        Err(e) => {
            tracing::error!("Failed to create scheduler service: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = scheduler.start(remote).await {
        tracing::error!("Failed to start scheduler: {}", e);
        std::process::exit(1);
    }

    // One early feed sync so results do not wait for the first cron tick.
    {
        let store = store.clone();
        let feed = feed_client.clone();
        tokio::spawn(async move {
            if let Err(e) = store.sync_results_from_feed(&feed).await {
                tracing::warn!("Initial feed sync failed: {}", e);
            }
        });
    }

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);

    run(listener, store, feed_client)?.await
}
