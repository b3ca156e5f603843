use crate::feed::client::FeedClient;
use crate::feed::events;
use crate::models::matches::Score;
use crate::store::{effective_result_in, recompute, AppStore, StoreError};

impl AppStore {
    /// Record a final score for a match. Overrides any score the feed put on
    /// the match itself. The match does not have to exist in the schedule,
    /// so a result can land before a schedule refresh does.
    #[tracing::instrument(name = "Set match result", skip(self))]
    pub async fn set_result(&self, match_id: &str, score: Score) -> Result<(), StoreError> {
        {
            let mut state = self.state().write().await;
            state.results.insert(match_id.to_string(), score);
            recompute(&mut state, self.rules());
        }
        self.persist_results().await?;
        Ok(())
    }

    /// The explicit override for a match, if one was recorded.
    pub async fn get_result(&self, match_id: &str) -> Option<Score> {
        let state = self.state().read().await;
        state.results.get(match_id).copied()
    }

    /// The score a prediction is judged against: override first, then the
    /// score embedded on the match.
    pub async fn effective_result(&self, match_id: &str) -> Option<Score> {
        let state = self.state().read().await;
        effective_result_in(&state.results, &state.matches, match_id)
    }

    /// Merge a batch of (match id, score) pairs into the results map and
    /// return how many entries actually changed. Unchanged entries trigger
    /// neither a recompute nor a write, which keeps repeated feed syncs
    /// idempotent.
    pub async fn apply_result_updates(
        &self,
        updates: Vec<(String, Score)>,
    ) -> Result<usize, StoreError> {
        let changed = {
            let mut state = self.state().write().await;
            let mut changed = 0;
            for (match_id, score) in updates {
                if state.results.get(&match_id) == Some(&score) {
                    continue;
                }
                state.results.insert(match_id, score);
                changed += 1;
            }
            if changed > 0 {
                recompute(&mut state, self.rules());
            }
            changed
        };
        if changed > 0 {
            self.persist_results().await?;
        }
        Ok(changed)
    }

    /// Pull finished events from the feed, map them onto known matches and
    /// merge their scores. Returns the number of results that changed.
    #[tracing::instrument(name = "Sync results from feed", skip(self, feed))]
    pub async fn sync_results_from_feed(&self, feed: &FeedClient) -> Result<usize, StoreError> {
        let events = feed.fetch_season_events().await?;
        let updates = {
            let state = self.state().read().await;
            events::reconcile_results(&events, &state.matches)
        };
        let changed = self.apply_result_updates(updates).await?;
        tracing::info!("Feed sync applied {} result update(s)", changed);
        Ok(changed)
    }
}
