use std::time::Duration;

use serde::Deserialize;

use crate::config::settings::FeedSettings;
use crate::feed::events::FeedEvent;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("feed request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("feed returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Read-only client for the external schedule/results feed (TheSportsDB).
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    settings: FeedSettings,
}

impl FeedClient {
    pub fn new(settings: FeedSettings) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_default();
        Self { http, settings }
    }

    /// All season events, schedule and results alike. The caller decides what
    /// to do with events that are not finished or cannot be matched.
    pub async fn fetch_season_events(&self) -> Result<Vec<FeedEvent>, FeedError> {
        let url = format!(
            "{}/{}/eventsseason.php?id={}&s={}",
            self.settings.base_url,
            self.settings.api_key,
            self.settings.league_id,
            self.settings.season
        );
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FeedError::Status(response.status()));
        }
        let body: SeasonEventsResponse = response.json().await?;
        Ok(body.events.unwrap_or_default())
    }
}

/// The endpoint returns `{"events": null}` for seasons without data.
#[derive(Debug, Deserialize)]
struct SeasonEventsResponse {
    events: Option<Vec<FeedEvent>>,
}
