use std::error::Error;
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::feed::FeedClient;
use crate::store::AppStore;

/// Cron-driven background work: periodic feed result sync, and in remote
/// mode a polling resync as a safety net under the pub/sub change hints.
pub struct SchedulerService {
    scheduler: Arc<Mutex<JobScheduler>>,
    store: AppStore,
    feed: Arc<FeedClient>,
}

impl SchedulerService {
    pub async fn new(store: AppStore, feed: FeedClient) -> Result<Self, Box<dyn Error>> {
        let scheduler = JobScheduler::new().await?;
        Ok(Self {
            scheduler: Arc::new(Mutex::new(scheduler)),
            store,
            feed: Arc::new(feed),
        })
    }

    /// Register the jobs and start the scheduler. `remote` enables the
    /// cross-instance resync poll that only makes sense with a shared
    /// backend.
    pub async fn start(&self, remote: bool) -> Result<(), Box<dyn Error>> {
        let scheduler = self.scheduler.lock().await;

        let store = self.store.clone();
        let feed = self.feed.clone();
        // Every 10 minutes: pull finished results from the feed.
        let results_job = Job::new_async("0 */10 * * * *", move |_uuid, _l| {
            let store = store.clone();
            let feed = feed.clone();
            Box::pin(async move {
                match store.sync_results_from_feed(&feed).await {
                    Ok(changed) => {
                        if changed > 0 {
                            tracing::info!("Scheduled result sync: {} update(s)", changed);
                        }
                    }
                    Err(e) => {
                        tracing::error!("Scheduled result sync failed: {}", e);
                    }
                }
            })
        })?;
        scheduler.add(results_job).await?;

        if remote {
            let store = self.store.clone();
            // Every 15 seconds: reload from the shared backend in case a
            // change hint was missed.
            let resync_job = Job::new_async("*/15 * * * * *", move |_uuid, _l| {
                let store = store.clone();
                Box::pin(async move {
                    if let Err(e) = store.reload_all().await {
                        tracing::error!("Scheduled state resync failed: {}", e);
                    }
                })
            })?;
            scheduler.add(resync_job).await?;
        }

        scheduler.start().await?;
        tracing::info!("Scheduler service started (remote resync: {})", remote);
        Ok(())
    }

    pub async fn stop(&self) -> Result<(), Box<dyn Error>> {
        let mut scheduler = self.scheduler.lock().await;
        scheduler.shutdown().await?;
        tracing::info!("Scheduler service stopped");
        Ok(())
    }
}
